use clap::Parser;
use log::info;
use std::path::PathBuf;

use photo_sorter_core::metadata::ExifDateExtractor;
use photo_sorter_core::{Config, Partition, PhotoSorter};

#[derive(Parser)]
#[command(name = "photo-sorter")]
#[command(about = "Organise JPEG photos into a date-keyed directory tree")]
#[command(version)]
struct Cli {
    /// Root directory to receive organised photos (created if absent)
    #[arg(long)]
    destination: PathBuf,

    /// Directory to search recursively for JPEG files (repeatable)
    #[arg(long = "source", required = true)]
    source: Vec<PathBuf>,

    /// Report what would be done without touching the filesystem
    #[arg(long)]
    dryrun: bool,

    /// Number of threads for metadata extraction (0 = auto)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn print_report(config: &Config, partition: &Partition) {
    println!(
        "destination: {} sources: {:?} dryrun: {}",
        config.destination.display(),
        config.sources,
        config.dry_run
    );
    println!("Move:");
    for record in &partition.to_move {
        println!("{}", record);
    }
    println!("Duplicates:");
    for record in &partition.duplicates {
        println!("{}", record);
    }
}

fn main() -> Result<(), anyhow::Error> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    let config = Config {
        destination: cli.destination,
        sources: cli.source,
        dry_run: cli.dryrun,
        threads: cli.threads,
        ..Config::default()
    };

    let sorter = PhotoSorter::new(config)?;

    let extractor = ExifDateExtractor::new().with_timeout(sorter.config().extraction_timeout);

    // Plan first: the report is printed before any filesystem mutation
    let partition = sorter.plan(&extractor)?;
    print_report(sorter.config(), &partition);

    if sorter.config().dry_run {
        info!("Dry run complete, no files were changed");
        return Ok(());
    }

    let copied = sorter.execute(&partition)?;
    info!("Copied {} files", copied);

    Ok(())
}
