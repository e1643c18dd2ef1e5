//! Running the extractor over a whole book.
//!
//! Two strategies, both writing one JSON line per record in input order:
//! - Sequential (supports an early stop after N records)
//! - Batch-parallel (scoped std threads over fixed-size batches)

use indicatif::ProgressBar;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::Result;
use crate::extractor::DaijirinExtractor;
use crate::record::Record;
use crate::source::Entry;

/// Shape of each output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Record` object per line
    #[default]
    Records,
    /// One term-bank row array per line
    TermBank,
}

/// Output and tuning settings shared by both runners
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Worker threads per batch
    pub threads: usize,
    /// Entries per batch
    pub batch_size: usize,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        let cpus = thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4);
        Self {
            threads: cpus,
            batch_size: 1000,
            format: OutputFormat::Records,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub entries_processed: usize,
    /// Entries that produced no records
    pub entries_skipped: usize,
    pub records_written: usize,
    pub elapsed: Duration,
}

impl Stats {
    fn record_entry(&mut self, produced: usize) {
        self.entries_processed += 1;
        if produced == 0 {
            self.entries_skipped += 1;
        }
    }
}

fn write_record<W: Write>(writer: &mut W, record: &Record, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Records => serde_json::to_writer(&mut *writer, record)?,
        OutputFormat::TermBank => serde_json::to_writer(&mut *writer, &record.to_term_bank_row())?,
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Extract entries one at a time, stopping once `limit` records are written.
pub fn run_sequential<W: Write>(
    entries: &[Entry],
    extractor: &DaijirinExtractor,
    writer: &mut W,
    config: &RunConfig,
    limit: Option<usize>,
    progress: &ProgressBar,
) -> Result<Stats> {
    let start_time = Instant::now();
    let mut stats = Stats::default();

    'entries: for entry in entries {
        let records = extractor.extract(&entry.heading, &entry.text);
        stats.record_entry(records.len());

        for record in &records {
            write_record(writer, record, config.format)?;
            stats.records_written += 1;

            if limit.is_some_and(|l| stats.records_written >= l) {
                info!(records = stats.records_written, "record limit reached");
                break 'entries;
            }
        }

        if stats.entries_processed % 1000 == 0 {
            progress.set_message(progress_message(&stats));
        }
    }

    writer.flush()?;
    stats.elapsed = start_time.elapsed();
    Ok(stats)
}

/// Extract entries in batches spread over scoped worker threads.
pub fn run_batch_parallel<W: Write>(
    entries: &[Entry],
    extractor: &DaijirinExtractor,
    writer: &mut W,
    config: &RunConfig,
    progress: &ProgressBar,
) -> Result<Stats> {
    let start_time = Instant::now();
    let mut stats = Stats::default();

    for batch in entries.chunks(config.batch_size.max(1)) {
        let results = extract_batch_threaded(batch, extractor, config.threads);
        debug!(entries = batch.len(), "batch extracted");

        for records in results {
            stats.record_entry(records.len());
            for record in &records {
                write_record(writer, record, config.format)?;
                stats.records_written += 1;
            }
        }

        progress.set_message(progress_message(&stats));
    }

    writer.flush()?;
    stats.elapsed = start_time.elapsed();
    Ok(stats)
}

/// Extract one batch, keeping per-entry results in input order
fn extract_batch_threaded(
    batch: &[Entry],
    extractor: &DaijirinExtractor,
    threads: usize,
) -> Vec<Vec<Record>> {
    if batch.is_empty() {
        return vec![];
    }

    let threads = threads.min(batch.len()).max(1);
    let chunk_size = batch.len().div_ceil(threads);

    thread::scope(|scope| {
        let handles: Vec<_> = batch
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|entry| extractor.extract(&entry.heading, &entry.text))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut results = Vec::with_capacity(batch.len());
        for handle in handles {
            // extraction cannot panic on string input; a worker panic is a bug
            match handle.join() {
                Ok(chunk_results) => results.extend(chunk_results),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        results
    })
}

fn progress_message(stats: &Stats) -> String {
    format!(
        "Entries: {} | Records: {} | Skipped: {}",
        stats.entries_processed, stats.records_written, stats.entries_skipped
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(heading: &str, text: &str) -> Entry {
        Entry {
            heading: heading.to_string(),
            text: text.to_string(),
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("たべる【食べ(る)】", "（動バ下一）"),
            entry("【", "no heading"),
            entry("これ", "（代）"),
            entry("えー【Ａ・Ｂ】", "（名）"),
        ]
    }

    fn lines(buf: &[u8]) -> Vec<Record> {
        std::str::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn sequential_writes_every_record() {
        let mut out = Vec::new();
        let stats = run_sequential(
            &sample(),
            &DaijirinExtractor::new(),
            &mut out,
            &RunConfig::default(),
            None,
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(stats.entries_processed, 4);
        assert_eq!(stats.entries_skipped, 1);
        assert_eq!(stats.records_written, 5);
        let expressions: Vec<_> = lines(&out).into_iter().map(|r| r.expression).collect();
        assert_eq!(expressions, vec!["食べる", "食べ", "これ", "Ａ", "Ｂ"]);
    }

    #[test]
    fn sequential_stops_at_limit() {
        let mut out = Vec::new();
        let stats = run_sequential(
            &sample(),
            &DaijirinExtractor::new(),
            &mut out,
            &RunConfig::default(),
            Some(3),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(stats.records_written, 3);
        assert_eq!(lines(&out).len(), 3);
    }

    #[test]
    fn parallel_matches_sequential_order() {
        let entries = sample();
        let extractor = DaijirinExtractor::new();

        let mut seq = Vec::new();
        let config = RunConfig {
            threads: 3,
            batch_size: 3,
            format: OutputFormat::Records,
        };
        run_sequential(&entries, &extractor, &mut seq, &config, None, &ProgressBar::hidden())
            .unwrap();

        let mut par = Vec::new();
        let stats =
            run_batch_parallel(&entries, &extractor, &mut par, &config, &ProgressBar::hidden())
                .unwrap();

        assert_eq!(stats.records_written, 5);
        assert_eq!(stats.entries_skipped, 1);
        assert_eq!(lines(&par), lines(&seq));
    }

    #[test]
    fn term_bank_format_writes_rows() {
        let config = RunConfig {
            threads: 2,
            batch_size: 2,
            format: OutputFormat::TermBank,
        };
        let mut out = Vec::new();
        run_batch_parallel(
            &sample()[..1],
            &DaijirinExtractor::new(),
            &mut out,
            &config,
            &ProgressBar::hidden(),
        )
        .unwrap();

        let rows: Vec<serde_json::Value> = std::str::from_utf8(&out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            rows,
            vec![
                serde_json::json!(["食べる", "たべる", "v1 動バ下一", "v1", 0, ["（動バ下一）"], 0, ""]),
                serde_json::json!(["食べ", "たべる", "v1 動バ下一", "v1", 0, ["（動バ下一）"], 0, ""]),
            ]
        );
    }

    #[test]
    fn empty_input() {
        let mut out = Vec::new();
        let stats = run_batch_parallel(
            &[],
            &DaijirinExtractor::new(),
            &mut out,
            &RunConfig::default(),
            &ProgressBar::hidden(),
        )
        .unwrap();
        assert_eq!(stats.entries_processed, 0);
        assert!(out.is_empty());
    }
}
