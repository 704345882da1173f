//! Reading source files for the lexer
//!
//! A file is accepted when it is a regular file no larger than the
//! build-time `MAX_FILE_SIZE` and its bytes decode as UTF-8. Every failure
//! is logged once under the code of its [`LoadError`] variant.

use crate::config::compile_time::file_processing::MAX_FILE_SIZE;
use crate::config::runtime::LoaderPreferences;
use crate::logging::{codes, Code};
use crate::{log_error, log_info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("file is empty")]
    Empty,

    #[error("invalid UTF-8 after byte {valid_up_to}")]
    NotUtf8 { valid_up_to: usize },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn code(&self) -> Code {
        match self {
            LoadError::NotFound { .. } => codes::load::NOT_FOUND,
            LoadError::NotAFile { .. } => codes::load::NOT_A_FILE,
            LoadError::TooLarge { .. } => codes::load::TOO_LARGE,
            LoadError::Empty => codes::load::EMPTY,
            LoadError::NotUtf8 { .. } => codes::load::NOT_UTF8,
            LoadError::Io { .. } => codes::load::READ_FAILED,
        }
    }
}

/// Source text read from disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    /// Size on disk in bytes
    pub size: u64,
    pub load_time: Duration,
}

impl SourceFile {
    /// Length in chars, which is the offset of the final EOF token
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    preferences: LoaderPreferences,
}

impl SourceLoader {
    pub fn new(preferences: LoaderPreferences) -> Self {
        Self { preferences }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<SourceFile, LoadError> {
        let path = path.as_ref();
        let started = Instant::now();

        let (text, size) = self.read(path).map_err(|error| {
            log_error!(error.code(), "Cannot load source file",
                "path" => path.display(),
                "reason" => &error);
            error
        })?;

        let file = SourceFile {
            path: path.to_path_buf(),
            text,
            size,
            load_time: started.elapsed(),
        };

        if self.preferences.log_timing {
            log_info!(codes::load::LOADED, "Loaded source file",
                "path" => path.display(),
                "bytes" => file.size,
                "chars" => file.char_count(),
                "micros" => file.load_time.as_micros());
        }

        Ok(file)
    }

    fn read(&self, path: &Path) -> Result<(String, u64), LoadError> {
        let io_error = |source: io::Error| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => io_error(source),
        })?;

        if !metadata.is_file() {
            return Err(LoadError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            return Err(LoadError::TooLarge {
                size,
                limit: MAX_FILE_SIZE,
            });
        }
        if size == 0 && !self.preferences.allow_empty_files {
            return Err(LoadError::Empty);
        }

        let bytes = fs::read(path).map_err(io_error)?;
        let text = String::from_utf8(bytes).map_err(|e| LoadError::NotUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;

        Ok((text, size))
    }
}
