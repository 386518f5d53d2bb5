//! Error types for figure generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a figure run.
#[derive(Debug, Error)]
pub enum FigureError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed while producing a figure.
    #[error("failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}

impl FigureError {
    pub fn create_dir(path: &Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn render(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Path of the file or directory that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. } | Self::Render { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_names_the_file() {
        let err = FigureError::render(Path::new("/tmp/out/fig.png"), "backend exploded");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/fig.png"), "missing path: {msg}");
        assert!(msg.contains("backend exploded"), "missing cause: {msg}");
        assert_eq!(err.path(), Path::new("/tmp/out/fig.png"));
    }

    #[test]
    fn create_dir_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FigureError::create_dir(Path::new("/ro/plots"), io);
        assert!(err.to_string().contains("/ro/plots"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
