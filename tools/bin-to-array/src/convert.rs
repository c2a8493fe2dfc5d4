//! Opening the input described by a [`Config`] and emitting its declaration.

use std::{
    error, fmt,
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use byte_array::{Declaration, emit};
use tracing::{debug, info};

use crate::cli::Config;

/// Opens the input named by `config` and writes its array declaration to `writer`.
///
/// The input is opened and checked before anything is written, so a failure to open it leaves
/// `writer` untouched.
///
/// Returns the number of bytes emitted.
///
/// # Errors
///
/// - [`ConvertError::FileNotFound`]: Returned if the input does not exist.
/// - [`ConvertError::NotAFile`]: Returned if the input is a directory.
/// - [`ConvertError::Open`]: Returned if the input exists but could not be opened.
/// - [`ConvertError::Io`]: Returned if reading the input or writing the output failed.
pub fn convert<W: Write>(config: &Config, writer: W) -> Result<u64, ConvertError> {
    let file = open_input(&config.input_path)?;
    debug!(path = %config.input_path.display(), "opened input");

    let declaration =
        Declaration::new(config.array_name.as_str()).with_wrap_style(config.wrap_style);
    let count = emit(file, writer, &declaration)?;

    info!(
        name = declaration.name(),
        wrap_style = declaration.wrap_style().as_str(),
        "emitted {count} bytes"
    );
    Ok(count)
}

/// Opens `path` for reading, classifying failures.
fn open_input(path: &Path) -> Result<File, ConvertError> {
    let file = File::open(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => ConvertError::FileNotFound(path.to_path_buf()),
        _ => ConvertError::Open {
            path: path.to_path_buf(),
            error,
        },
    })?;

    let metadata = file.metadata().map_err(|error| ConvertError::Open {
        path: path.to_path_buf(),
        error,
    })?;
    if metadata.is_dir() {
        return Err(ConvertError::NotAFile(path.to_path_buf()));
    }

    Ok(file)
}

/// Various errors that can occur while converting a file.
#[derive(Debug)]
pub enum ConvertError {
    /// The input does not exist.
    FileNotFound(PathBuf),
    /// The input is a directory.
    NotAFile(PathBuf),
    /// The input exists but could not be opened.
    Open {
        /// The path of the input.
        path: PathBuf,
        /// The error that occurred while opening the input.
        error: io::Error,
    },
    /// An error occurred while reading the input or writing the output.
    Io(io::Error),
}

impl From<io::Error> for ConvertError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "file '{}' not found", path.display()),
            Self::NotAFile(path) => write!(f, "'{}' is not a file", path.display()),
            Self::Open { path, error } => {
                write!(f, "error opening '{}': {error}", path.display())
            }
            Self::Io(error) => write!(f, "i/o error: {error}"),
        }
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Open { error, .. } | Self::Io(error) => Some(error),
            Self::FileNotFound(_) | Self::NotAFile(_) => None,
        }
    }
}
