//! Core functionality for organising JPEG photos by capture date.
//!
//! This library provides the foundational components of the pipeline:
//! - Candidate discovery across source directories
//! - Capture-timestamp extraction from EXIF metadata
//! - Deterministic sorting and deduplication on the (name, date) key
//! - Date-bucketed placement in the destination tree

// -- External Dependencies --

use log::info;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod dedup;
pub mod discovery;
pub mod metadata;
pub mod placement;
pub mod types;

use metadata::MetadataExtractor;

/// Main entry point for the photo-sorting process
pub struct PhotoSorter {
    config: Config,
}

impl PhotoSorter {
    /// Create a new PhotoSorter with the provided configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if config.threads > 0 {
            // Ignored if a global pool already exists (tests, repeat runs)
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build_global();
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the planning stages: collect, build records, sort, dedup.
    ///
    /// Touches nothing on disk beyond reading, so it is safe in dry-run
    /// mode. The returned partition is deterministic for a given input
    /// multiset regardless of traversal or extraction completion order.
    pub fn plan(&self, extractor: &dyn MetadataExtractor) -> Result<Partition> {
        info!("Collecting candidates...");
        let candidates = discovery::collect_candidates(&self.config.sources)?;
        info!("Found {} JPEG candidates", candidates.len());

        info!("Extracting capture metadata...");
        let mut records = metadata::build_records(candidates, extractor);

        dedup::sort_records(&mut records);
        let partition = dedup::partition_duplicates(records);
        info!(
            "Planned {} files to move, {} duplicates",
            partition.to_move.len(),
            partition.duplicates.len()
        );

        Ok(partition)
    }

    /// Copy every to-move record into its destination bucket
    pub fn execute(&self, partition: &Partition) -> Result<usize> {
        let copied = placement::place_records(&self.config.destination, &partition.to_move)?;
        info!("Copied {} files", copied);
        Ok(copied)
    }

    /// Run the full pipeline, skipping the copy step in dry-run mode
    pub fn run(&self, extractor: &dyn MetadataExtractor) -> Result<RunSummary> {
        let partition = self.plan(extractor)?;

        let copied = if self.config.dry_run {
            info!("Dry run: skipping file placement");
            0
        } else {
            self.execute(&partition)?
        };

        Ok(RunSummary { partition, copied })
    }
}
