use anyhow::{bail, Context};
use bzip2::read::BzDecoder;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use daijirin_extract::parallel::{
    run_batch_parallel, run_sequential, OutputFormat, RunConfig, Stats,
};
use daijirin_extract::{Book, DaijirinExtractor};

#[derive(Parser)]
#[command(name = "daijirin-extract")]
#[command(about = "Extract term records from a decoded Daijirin EPWING dump")]
struct Args {
    /// Input book JSON (.json or .json.bz2)
    #[arg(required_unless_present = "revision")]
    input: Option<PathBuf>,

    /// Output JSONL file
    #[arg(required_unless_present = "revision")]
    output: Option<PathBuf>,

    /// Stop after this many records (requires --threads 1)
    #[arg(long)]
    limit: Option<usize>,

    /// Worker threads (0 = auto-detect, 1 = sequential)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Entries per batch for parallel extraction
    #[arg(long, default_value_t = 1000)]
    batch_size: usize,

    /// Write term-bank rows instead of record objects
    #[arg(long)]
    term_bank: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,

    /// Print the extractor revision and exit
    #[arg(long)]
    revision: bool,
}

fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader: Box<dyn Read> = if path.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };
    Ok(reader)
}

fn print_stats(stats: &Stats, missing_glyphs: usize) {
    println!();
    println!("============================================================");
    println!("Entries processed: {}", stats.entries_processed);
    println!("Entries skipped: {}", stats.entries_skipped);
    println!("Records written: {}", stats.records_written);
    println!(
        "Avg records/entry: {:.2}",
        stats.records_written as f64 / stats.entries_processed.max(1) as f64
    );
    println!("Missing glyphs: {}", missing_glyphs);
    println!("Time: {}m {}s", stats.elapsed.as_secs() / 60, stats.elapsed.as_secs() % 60);
    println!("============================================================");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let extractor = DaijirinExtractor::new();

    if args.revision {
        println!("{}", extractor.revision());
        return Ok(());
    }

    let (Some(input), Some(output)) = (args.input, args.output) else {
        bail!("input and output paths are required");
    };

    let mut config = RunConfig::default();
    if args.threads > 0 {
        config.threads = args.threads;
    }
    config.batch_size = args.batch_size;
    if args.term_bank {
        config.format = OutputFormat::TermBank;
    }

    let sequential = config.threads == 1;
    if args.limit.is_some() && !sequential {
        bail!("--limit requires --threads 1 so extraction can stop early");
    }

    if !args.quiet {
        println!("Parsing: {}", input.display());
        println!("Output: {}", output.display());
        println!("Revision: {}", extractor.revision());
        if !sequential {
            println!("Threads: {}", config.threads);
        }
        if let Some(limit) = args.limit {
            println!("Limit: {} records", limit);
        }
        println!();
    }

    let book = Book::from_reader(open_input(&input)?)
        .with_context(|| format!("failed to read book {}", input.display()))?;
    let decoded = book.decode();
    info!(
        entries = decoded.entries.len(),
        missing_glyphs = decoded.missing_glyphs,
        "book decoded"
    );

    let file = File::create(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        pb
    };

    let stats = if sequential {
        run_sequential(&decoded.entries, &extractor, &mut writer, &config, args.limit, &pb)?
    } else {
        run_batch_parallel(&decoded.entries, &extractor, &mut writer, &config, &pb)?
    };

    pb.finish_and_clear();
    info!(records = stats.records_written, "extraction finished");

    if !args.quiet {
        print_stats(&stats, decoded.missing_glyphs);
    }

    Ok(())
}
