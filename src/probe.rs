//! Filesystem-metadata capability and the non-throwing query helpers built
//! on it. A failed probe means "does not exist"; the underlying OS error is
//! never surfaced here.

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

/// A snapshot of one directory entry's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatInfo {
    pub is_file: bool,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    /// Seconds since the Unix epoch; `None` when the platform cannot say.
    pub mtime: Option<f64>,
    pub atime: Option<f64>,
    pub ctime: Option<f64>,
    pub inode: Option<u64>,
    pub device: Option<u64>,
    pub nlink: Option<u64>,
}

impl StatInfo {
    fn from_metadata(meta: &fs::Metadata) -> StatInfo {
        let mut info = StatInfo {
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            is_symlink: meta.file_type().is_symlink(),
            size: meta.len(),
            mtime: epoch_seconds(meta.modified()),
            atime: epoch_seconds(meta.accessed()),
            ctime: epoch_seconds(meta.created()),
            ..StatInfo::default()
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            info.inode = Some(meta.ino());
            info.device = Some(meta.dev());
            info.nlink = Some(meta.nlink());
            info.ctime = Some(meta.ctime() as f64);
        }
        info
    }
}

fn epoch_seconds(time: std::io::Result<SystemTime>) -> Option<f64> {
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs_f64())
}

/// Metadata lookups the resolving operations depend on. Implementations
/// must never panic; any failure is reported as `None`/`false`.
pub trait FilesystemProbe {
    /// Metadata with symlinks followed.
    fn metadata(&self, path: &str) -> Option<StatInfo>;
    /// Metadata of the entry itself, symlinks not followed.
    fn symlink_metadata(&self, path: &str) -> Option<StatInfo>;
    fn read_link(&self, path: &str) -> Option<String>;
    fn is_symlink(&self, path: &str) -> bool {
        self.symlink_metadata(path).is_some_and(|s| s.is_symlink)
    }
}

/// [`FilesystemProbe`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl FilesystemProbe for SystemProbe {
    fn metadata(&self, path: &str) -> Option<StatInfo> {
        fs::metadata(path).ok().map(|m| StatInfo::from_metadata(&m))
    }

    fn symlink_metadata(&self, path: &str) -> Option<StatInfo> {
        fs::symlink_metadata(path)
            .ok()
            .map(|m| StatInfo::from_metadata(&m))
    }

    fn read_link(&self, path: &str) -> Option<String> {
        fs::read_link(path)
            .ok()
            .and_then(|p| p.into_os_string().into_string().ok())
    }
}

pub fn exists(probe: &dyn FilesystemProbe, path: &str) -> bool {
    probe.metadata(path).is_some()
}

/// Like [`exists`] but true for a broken symlink too.
pub fn lexists(probe: &dyn FilesystemProbe, path: &str) -> bool {
    probe.symlink_metadata(path).is_some()
}

pub fn is_file(probe: &dyn FilesystemProbe, path: &str) -> bool {
    probe.metadata(path).is_some_and(|s| s.is_file)
}

pub fn is_dir(probe: &dyn FilesystemProbe, path: &str) -> bool {
    probe.metadata(path).is_some_and(|s| s.is_dir)
}

pub fn is_symlink(probe: &dyn FilesystemProbe, path: &str) -> bool {
    probe.is_symlink(path)
}

pub fn size(probe: &dyn FilesystemProbe, path: &str) -> Option<u64> {
    probe.metadata(path).map(|s| s.size)
}

pub fn modified(probe: &dyn FilesystemProbe, path: &str) -> Option<f64> {
    probe.metadata(path).and_then(|s| s.mtime)
}

pub fn accessed(probe: &dyn FilesystemProbe, path: &str) -> Option<f64> {
    probe.metadata(path).and_then(|s| s.atime)
}

pub fn created(probe: &dyn FilesystemProbe, path: &str) -> Option<f64> {
    probe.metadata(path).and_then(|s| s.ctime)
}

/// Two stats describe the same file iff inode and device are both known and
/// both match.
pub fn same_stat(a: &StatInfo, b: &StatInfo) -> bool {
    match (a.inode, b.inode, a.device, b.device) {
        (Some(i1), Some(i2), Some(d1), Some(d2)) => i1 == i2 && d1 == d2,
        _ => false,
    }
}

pub fn same_file(probe: &dyn FilesystemProbe, a: &str, b: &str) -> bool {
    match (probe.metadata(a), probe.metadata(b)) {
        (Some(sa), Some(sb)) => same_stat(&sa, &sb),
        _ => false,
    }
}
