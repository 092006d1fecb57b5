use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A JPEG candidate found during discovery, before metadata extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Base file name, later used as the destination file name
    pub name: String,

    /// Absolute path to the source file
    pub full_path: PathBuf,
}

/// Representation of a discovered photo with its capture metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Base file name; part of the identity key
    pub name: String,

    /// Absolute source path, used only for reading and copying
    pub full_path: PathBuf,

    /// Capture timestamp from the file's metadata, if one was found
    pub date_taken: Option<NaiveDateTime>,
}

impl PhotoRecord {
    /// Identity key used for sorting and deduplication.
    ///
    /// Two records are the same photo iff this pair is equal; the source
    /// path deliberately plays no part.
    pub fn identity(&self) -> (&str, Option<NaiveDateTime>) {
        (&self.name, self.date_taken)
    }
}

impl fmt::Display for PhotoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date_taken {
            Some(date) => write!(f, "{} taken {}", self.name, date.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{} taken none", self.name),
        }
    }
}

/// Stable partition of the sorted record list into originals and duplicates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partition {
    /// First occurrence of each identity key, in input order
    pub to_move: Vec<PhotoRecord>,

    /// Later occurrences of already-seen keys, in input order
    pub duplicates: Vec<PhotoRecord>,
}

/// Outcome of a full run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// The planned partition, as reported to the user
    pub partition: Partition,

    /// Number of files actually copied (always 0 for a dry run)
    pub copied: usize,
}
