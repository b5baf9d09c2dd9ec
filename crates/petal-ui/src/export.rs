//! Static HTML export of the showcase page.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::render_document;

/// Errors raised while writing the exported document
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating the parent directory or writing the file failed
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the rendered document to `path`, creating parent directories.
///
/// Returns the path that was written.
pub fn export_document(path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let document = render_document();
    fs::write(path, &document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = document.len(), "Exported showcase page");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_names_path() {
        let err = ExportError::Io {
            path: PathBuf::from("/nowhere/page.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "IO error at /nowhere/page.html: denied");
    }
}
