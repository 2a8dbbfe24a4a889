use std::borrow::Cow;

use crate::{posix::PosixFlavor, windows::WindowsFlavor};

/// The current-directory token shared by both flavors.
pub const CURRENT_DIR: &str = ".";
/// The parent-directory token shared by both flavors.
pub const PARENT_DIR: &str = "..";
/// The extension separator shared by both flavors.
pub const EXTENSION_SEP: char = '.';

/// Why no common path could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommonPathError {
    #[error("cannot compute the common path of an empty list")]
    Empty,
    #[error("paths are a mix of absolute and relative")]
    MixedAbsoluteRelative,
    #[error("paths do not share the same drive")]
    DriveMismatch,
}

/// The contract one path dialect implements.
///
/// Every method is a pure function of its string inputs; anything that needs
/// the filesystem or process state lives in [`crate::resolve`] and takes the
/// collaborators explicitly.
pub trait PathFlavor {
    fn separator(&self) -> char;
    fn alt_separator(&self) -> Option<char> {
        None
    }
    fn path_list_separator(&self) -> char;
    fn extension_separator(&self) -> char {
        EXTENSION_SEP
    }
    fn null_device(&self) -> &'static str;
    fn default_search_path(&self) -> &'static str;

    /// Normalizes separator spelling. Case is never folded.
    fn norm_case<'a>(&self, path: &'a str) -> Cow<'a, str>;
    fn is_absolute(&self, path: &str) -> bool;
    fn join(&self, base: &str, parts: &[&str]) -> String;
    /// `(head, tail)` around the last separator; a head that is not entirely
    /// separators loses its trailing separators.
    fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str);
    /// `(drive, rest)` with `drive + rest == path`, character-exact.
    fn split_drive<'a>(&self, path: &'a str) -> (&'a str, &'a str);
    /// `(root, ext)` with `root + ext == path`.
    fn split_extension<'a>(&self, path: &'a str) -> (&'a str, &'a str);
    fn base_name<'a>(&self, path: &'a str) -> &'a str {
        self.split(path).1
    }
    fn dir_name<'a>(&self, path: &'a str) -> &'a str {
        self.split(path).0
    }
    /// Collapses `.`, `..` and redundant separators without touching the
    /// filesystem.
    fn normalize(&self, path: &str) -> String;
    fn common_path(&self, paths: &[&str]) -> Result<String, CommonPathError>;
}

/// Tag selecting one of the two built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flavor {
    Posix,
    Windows,
}

impl Flavor {
    /// The flavor of the platform this code was compiled for.
    pub fn native() -> Flavor {
        if cfg!(windows) {
            Flavor::Windows
        } else {
            Flavor::Posix
        }
    }

    pub fn ops(self) -> &'static dyn PathFlavor {
        match self {
            Flavor::Posix => &PosixFlavor,
            Flavor::Windows => &WindowsFlavor,
        }
    }
}
