use std::fmt;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the photo-sorter library
#[derive(Debug)]
pub enum Error {
    /// I/O operation error
    Io(std::io::Error),

    /// A source directory passed on the command line does not exist
    SourceNotFound(PathBuf),

    /// The destination root exists but is not a directory, or cannot be created
    DestinationNotCreatable(PathBuf),

    /// A computed destination file path is already occupied
    DestinationCollision {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Copying a file into its bucket failed
    CopyFailure {
        source: PathBuf,
        destination: PathBuf,
        cause: std::io::Error,
    },

    /// Invalid configuration error
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::SourceNotFound(path) => {
                write!(f, "Source directory not found: {}", path.display())
            }
            Error::DestinationNotCreatable(path) => {
                write!(
                    f,
                    "Destination {} could not be created as a directory",
                    path.display()
                )
            }
            Error::DestinationCollision {
                source,
                destination,
            } => {
                write!(
                    f,
                    "Could not copy {} to {}: destination file already exists",
                    source.display(),
                    destination.display()
                )
            }
            Error::CopyFailure {
                source,
                destination,
                ..
            } => {
                write!(
                    f,
                    "Failed to copy {} to {}",
                    source.display(),
                    destination.display()
                )
            }
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::CopyFailure { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
