//! Filesystem mutation helpers. Unlike the probe-backed queries these fail
//! loudly: every error names the operation and target path and keeps the
//! underlying `io::Error` as its source.

use std::{fs, io};

#[derive(Debug, thiserror::Error)]
#[error("{op} failed for `{path}`")]
pub struct MutationError {
    pub op: &'static str,
    pub path: String,
    #[source]
    pub source: io::Error,
}

impl MutationError {
    fn new(op: &'static str, path: &str, source: io::Error) -> MutationError {
        MutationError {
            op,
            path: path.to_string(),
            source,
        }
    }
}

/// Creates (or truncates) an empty file.
pub fn create_file(path: &str) -> Result<(), MutationError> {
    fs::File::create(path)
        .map(|_| ())
        .map_err(|e| MutationError::new("create", path, e))
}

pub fn make_dir(path: &str) -> Result<(), MutationError> {
    fs::create_dir(path).map_err(|e| MutationError::new("mkdir", path, e))
}

/// Creates the directory and every missing ancestor.
pub fn make_dirs(path: &str) -> Result<(), MutationError> {
    fs::create_dir_all(path).map_err(|e| MutationError::new("makedirs", path, e))
}

/// Removes a file, symlink or directory tree.
pub fn remove(path: &str) -> Result<(), MutationError> {
    let meta = fs::symlink_metadata(path).map_err(|e| MutationError::new("remove", path, e))?;
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| MutationError::new("remove", path, e))
}

/// Copies a regular file; returns the number of bytes copied.
pub fn copy_file(src: &str, dst: &str) -> Result<u64, MutationError> {
    fs::copy(src, dst).map_err(|e| MutationError::new("copy", dst, e))
}

pub fn rename(src: &str, dst: &str) -> Result<(), MutationError> {
    fs::rename(src, dst).map_err(|e| MutationError::new("rename", dst, e))
}

pub fn hard_link(src: &str, dst: &str) -> Result<(), MutationError> {
    fs::hard_link(src, dst).map_err(|e| MutationError::new("link", dst, e))
}

/// Creates a symbolic link at `link` pointing to `original`.
pub fn symlink(original: &str, link: &str) -> Result<(), MutationError> {
    #[cfg(unix)]
    return std::os::unix::fs::symlink(original, link)
        .map_err(|e| MutationError::new("symlink", link, e));
    #[cfg(windows)]
    return std::os::windows::fs::symlink_file(original, link)
        .map_err(|e| MutationError::new("symlink", link, e));
    #[cfg(not(any(unix, windows)))]
    {
        let _ = original;
        Err(MutationError::new(
            "symlink",
            link,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "symbolic links are not supported on this platform",
            ),
        ))
    }
}
