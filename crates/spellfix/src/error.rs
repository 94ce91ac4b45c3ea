// Error type for model and mapping loading

use std::io;
use std::path::PathBuf;

/// Errors raised while loading a dictionary or a mapping file.
///
/// Correction itself never fails; only construction does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dictionary source could not be read.
    #[error("failed to read dictionary {}: {source}", path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manual mapping file could not be read.
    #[error("failed to read manual mappings {}: {source}", path.display())]
    MappingRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a caller-supplied reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
