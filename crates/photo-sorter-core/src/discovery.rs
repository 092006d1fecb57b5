use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::Candidate;

/// Collect JPEG candidates from the provided source directories.
///
/// Each source is walked recursively; entries whose extension is a
/// case-insensitive `jpg` become candidates. Traversal order is whatever
/// walkdir yields and must never be relied on — ordering is imposed later
/// by the sort step.
pub fn collect_candidates<P: AsRef<Path>>(sources: &[P]) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for source in sources {
        candidates.extend(collect_in_directory(source.as_ref())?);
    }

    Ok(candidates)
}

/// Collect JPEG candidates from a single directory
fn collect_in_directory(directory: &Path) -> Result<Vec<Candidate>> {
    if !directory.is_dir() {
        return Err(Error::SourceNotFound(directory.to_path_buf()));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();

        if !is_jpeg_path(path) {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue, // non-UTF-8 name, nothing sensible to report
        };

        // The record carries an absolute path; the file exists here, so
        // canonicalisation only fails if it vanished mid-walk.
        let full_path = match path.canonicalize() {
            Ok(full_path) => full_path,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        candidates.push(Candidate { name, full_path });
    }

    Ok(candidates)
}

/// Returns if the given path has a JPEG extension (case-insensitive `.jpg`)
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg"))
        .unwrap_or(false)
}

// -- Tests --

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let file_path = dir.join(name);
        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"DUMMY IMAGE DATA").unwrap();
        file_path
    }

    fn setup_test_directory() -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempdir().unwrap();

        let subdir_path = dir.path().join("subdir");
        fs::create_dir(&subdir_path).unwrap();

        let jpegs = vec![
            create_file(dir.path(), "image1.jpg"),
            create_file(dir.path(), "IMAGE2.JPG"),
            create_file(&subdir_path, "subdir_image.jpg"),
        ];

        // Files the collector must ignore
        create_file(dir.path(), "document.txt");
        create_file(dir.path(), "image3.png");
        create_file(dir.path(), "noextension");

        (dir, jpegs)
    }

    #[test]
    fn test_is_jpeg_path() {
        assert!(is_jpeg_path(Path::new("test.jpg")));
        assert!(is_jpeg_path(Path::new("test.JPG")));
        assert!(is_jpeg_path(Path::new("test.Jpg")));
        assert!(!is_jpeg_path(Path::new("test.jpeg")));
        assert!(!is_jpeg_path(Path::new("test.png")));
        assert!(!is_jpeg_path(Path::new("test")));
    }

    #[test]
    fn test_collect_in_directory() {
        let (dir, jpegs) = setup_test_directory();

        let candidates = collect_in_directory(dir.path()).unwrap();

        assert_eq!(candidates.len(), 3);

        let collected: Vec<PathBuf> = candidates.iter().map(|c| c.full_path.clone()).collect();
        for jpeg in &jpegs {
            assert!(collected.contains(&jpeg.canonicalize().unwrap()));
        }
    }

    #[test]
    fn test_candidate_names_are_base_names() {
        let (dir, _) = setup_test_directory();

        let candidates = collect_in_directory(dir.path()).unwrap();
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();

        assert!(names.contains(&"image1.jpg"));
        assert!(names.contains(&"IMAGE2.JPG"));
        assert!(names.contains(&"subdir_image.jpg"));
    }

    #[test]
    fn test_collect_nonexistent_directory() {
        let result = collect_in_directory(Path::new("/path/that/does/not/exist"));
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_collect_multiple_sources() {
        let (dir1, jpegs1) = setup_test_directory();
        let (dir2, jpegs2) = setup_test_directory();

        let sources = vec![dir1.path(), dir2.path()];
        let candidates = collect_candidates(&sources).unwrap();

        assert_eq!(candidates.len(), jpegs1.len() + jpegs2.len());
    }

    #[test]
    fn test_missing_source_aborts_collection() {
        let (dir, _) = setup_test_directory();
        let missing = PathBuf::from("/path/that/does/not/exist");

        let sources = vec![dir.path().to_path_buf(), missing];
        assert!(matches!(
            collect_candidates(&sources),
            Err(Error::SourceNotFound(_))
        ));
    }
}
