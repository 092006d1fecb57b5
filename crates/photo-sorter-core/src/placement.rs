use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};
use log::info;

use crate::error::{Error, Result};
use crate::types::PhotoRecord;

/// Destination subdirectory for a capture timestamp:
/// `{destination}/{YYYY}/{MM}` when dated, `{destination}/Undated` otherwise
pub fn bucket_for(destination: &Path, date_taken: Option<NaiveDateTime>) -> PathBuf {
    match date_taken {
        Some(date) => destination
            .join(format!("{:04}", date.year()))
            .join(format!("{:02}", date.month())),
        None => destination.join("Undated"),
    }
}

/// Ensure the destination root exists and is a directory
pub fn ensure_destination_root(destination: &Path) -> Result<()> {
    if destination.exists() && !destination.is_dir() {
        return Err(Error::DestinationNotCreatable(destination.to_path_buf()));
    }
    fs::create_dir_all(destination)
        .map_err(|_| Error::DestinationNotCreatable(destination.to_path_buf()))?;
    Ok(())
}

/// Copy each record into its bucket, in order.
///
/// Bucket directories are created on demand. An occupied destination path is
/// fatal for the whole run; files copied earlier in the loop stay copied, no
/// rollback. Returns the number of files copied.
pub fn place_records(destination: &Path, to_move: &[PhotoRecord]) -> Result<usize> {
    ensure_destination_root(destination)?;

    let mut copied = 0;
    for record in to_move {
        let bucket = bucket_for(destination, record.date_taken);
        fs::create_dir_all(&bucket)?;

        let destination_path = bucket.join(&record.name);
        if destination_path.exists() {
            return Err(Error::DestinationCollision {
                source: record.full_path.clone(),
                destination: destination_path,
            });
        }

        fs::copy(&record.full_path, &destination_path).map_err(|cause| Error::CopyFailure {
            source: record.full_path.clone(),
            destination: destination_path.clone(),
            cause,
        })?;
        info!(
            "Copied {} -> {}",
            record.full_path.display(),
            destination_path.display()
        );
        copied += 1;
    }

    Ok(copied)
}

// -- Tests --
