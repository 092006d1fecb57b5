use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::NaiveDateTime;
use exif::{In, Tag, Value};
use log::{debug, warn};
use rayon::prelude::*;

use crate::types::{Candidate, PhotoRecord};

/// Source of capture timestamps for photo files.
///
/// Failure to extract is never fatal: implementations answer "no date
/// available" and the record degrades to an undated one. The trait seam
/// keeps the extraction backend swappable, including fixed-date fakes in
/// tests.
pub trait MetadataExtractor: Sync {
    /// Return the capture timestamp embedded in the file, if any
    fn date_taken(&self, path: &Path) -> Option<NaiveDateTime>;
}

/// Extractor reading the EXIF `DateTimeOriginal` tag (falling back to
/// `DateTime`) from JPEG files
pub struct ExifDateExtractor {
    timeout: Duration,
}

impl ExifDateExtractor {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }

    /// Bound each extraction call by the given timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ExifDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor for ExifDateExtractor {
    fn date_taken(&self, path: &Path) -> Option<NaiveDateTime> {
        let owned: PathBuf = path.to_path_buf();
        match run_with_timeout(self.timeout, move || read_exif_date(&owned)) {
            Some(date) => date,
            None => {
                warn!(
                    "Metadata extraction timed out after {:?} for {}",
                    self.timeout,
                    path.display()
                );
                None
            }
        }
    }
}

/// Run `task` on a worker thread, giving up after `timeout`.
///
/// On timeout the worker is left to finish in the background; its result is
/// discarded. Returns `None` only on timeout.
fn run_with_timeout<T, F>(timeout: Duration, task: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let _ = tx.send(task());
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            let _ = handle.join();
            Some(result)
        }
        Err(_) => None,
    }
}

/// Read the capture timestamp from a file's EXIF data
fn read_exif_date(path: &Path) -> Option<NaiveDateTime> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Could not open {} for EXIF reading: {}", path.display(), e);
            return None;
        }
    };
    let mut reader = BufReader::new(file);

    // No EXIF container at all is the common case for scans and screenshots
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    for tag in [Tag::DateTimeOriginal, Tag::DateTime] {
        if let Some(field) = exif.get_field(tag, In::PRIMARY) {
            if let Some(text) = field_to_string(&field.value) {
                if let Some(date) = parse_exif_datetime(text.trim()) {
                    return Some(date);
                }
            }
        }
    }

    None
}

/// Convert an EXIF field value to a string
fn field_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(vec) => vec.first().map(|ascii_val| {
            String::from_utf8_lossy(ascii_val)
                .trim_end_matches('\0')
                .to_string()
        }),
        Value::Undefined(data, _) => Some(
            String::from_utf8_lossy(data)
                .trim_end_matches('\0')
                .to_string(),
        ),
        _ => None,
    }
}

/// Parse an EXIF datetime string ("YYYY:MM:DD HH:MM:SS")
fn parse_exif_datetime(datetime_str: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y:%m:%d %H:%M:%S") {
        return Some(dt);
    }
    // Some writers emit the tag with dashes already
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    warn!("Failed to parse EXIF datetime: {}", datetime_str);
    None
}

/// Build a photo record for every candidate by extracting its capture
/// timestamp.
///
/// Extraction is I/O-bound and embarrassingly parallel, so candidates fan
/// out across the rayon pool. The indexed collect keeps output order equal
/// to input order; downstream determinism comes from the sort step either
/// way.
pub fn build_records(
    candidates: Vec<Candidate>,
    extractor: &dyn MetadataExtractor,
) -> Vec<PhotoRecord> {
    candidates
        .into_par_iter()
        .map(|candidate| {
            let date_taken = extractor.date_taken(&candidate.full_path);
            if date_taken.is_none() {
                debug!("No capture date for {}", candidate.full_path.display());
            }
            PhotoRecord {
                name: candidate.name,
                full_path: candidate.full_path,
                date_taken,
            }
        })
        .collect()
}

// -- Tests --
