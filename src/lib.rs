//! Pure, platform-parameterized path-string manipulation.
//!
//! Paths here are plain strings tagged with a [`Flavor`]: either dialect can
//! be manipulated from any host, so a service running on Linux can normalize
//! and join Windows paths it only ever sees as text. The string operations
//! never touch the filesystem; the ones that must (`absolute`,
//! `canonicalize`, `expand_user`) take their [`Environment`] and
//! [`FilesystemProbe`] collaborators explicitly.
//!
//! ```
//! use flavored_path::PurePath;
//!
//! let p = PurePath::windows(r"C:\Users\me\..\shared\.\notes.txt").normalize();
//! assert_eq!(p.as_str(), r"C:\Users\shared\notes.txt");
//!
//! let (root, ext) = PurePath::posix("/var/log/app.log").split_extension();
//! assert_eq!((root.as_str(), ext.as_str()), ("/var/log/app", ".log"));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

pub mod env;
pub mod flavor;
pub mod lines;
pub mod os;
pub mod posix;
pub mod probe;
pub mod resolve;
#[cfg(feature = "url")]
pub mod url;
mod util;
pub mod windows;

pub use env::{Environment, SystemEnv};
pub use flavor::{
    CommonPathError, Flavor, PathFlavor, CURRENT_DIR, EXTENSION_SEP, PARENT_DIR,
};
pub use lines::{LineReader, LineWriter};
pub use os::MutationError;
pub use posix::PosixFlavor;
pub use probe::{FilesystemProbe, StatInfo, SystemProbe};
#[cfg(feature = "url")]
pub use url::PathToUrlError;
pub use util::common_prefix;
pub use windows::WindowsFlavor;

/// A path string tagged with the dialect it should be interpreted in.
///
/// `PurePath` never touches the filesystem on its own; every method is a
/// string transformation, or delegates to [`resolve`] with explicit
/// collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PurePath {
    text: String,
    flavor: Flavor,
}

impl PurePath {
    pub fn new(flavor: Flavor, text: impl Into<String>) -> PurePath {
        PurePath {
            text: text.into(),
            flavor,
        }
    }

    pub fn posix(text: impl Into<String>) -> PurePath {
        PurePath::new(Flavor::Posix, text)
    }

    pub fn windows(text: impl Into<String>) -> PurePath {
        PurePath::new(Flavor::Windows, text)
    }

    /// A path in the dialect of the compilation target.
    pub fn native(text: impl Into<String>) -> PurePath {
        PurePath::new(Flavor::native(), text)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    fn with(&self, text: impl Into<String>) -> PurePath {
        PurePath::new(self.flavor, text)
    }

    /// Separator spelling normalized for comparison; case is never folded.
    pub fn norm_case(&self) -> PurePath {
        let normed = match self.flavor.ops().norm_case(&self.text) {
            Cow::Borrowed(_) => return self.clone(),
            Cow::Owned(s) => s,
        };
        self.with(normed)
    }

    pub fn is_absolute(&self) -> bool {
        self.flavor.ops().is_absolute(&self.text)
    }

    /// Appends `parts` with this flavor's join rules: an absolute part
    /// discards what came before it, and on Windows the drive is tracked
    /// separately.
    pub fn join<I, S>(&self, parts: I) -> PurePath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = parts.into_iter().collect();
        let refs: Vec<&str> = owned.iter().map(|s| s.as_ref()).collect();
        self.with(self.flavor.ops().join(&self.text, &refs))
    }

    /// `(head, tail)` around the last separator.
    pub fn split(&self) -> (PurePath, PurePath) {
        let (head, tail) = self.flavor.ops().split(&self.text);
        (self.with(head), self.with(tail))
    }

    /// `(drive, rest)`; the drive is empty for POSIX paths.
    pub fn split_drive(&self) -> (PurePath, PurePath) {
        let (drive, rest) = self.flavor.ops().split_drive(&self.text);
        (self.with(drive), self.with(rest))
    }

    /// `(root, extension)`; the extension keeps its leading dot.
    pub fn split_extension(&self) -> (PurePath, String) {
        let (root, ext) = self.flavor.ops().split_extension(&self.text);
        (self.with(root), ext.to_string())
    }

    pub fn base_name(&self) -> String {
        self.flavor.ops().base_name(&self.text).to_string()
    }

    pub fn dir_name(&self) -> PurePath {
        let dir = self.flavor.ops().dir_name(&self.text);
        self.with(dir)
    }

    /// Collapses `.`, `..` and redundant separators, purely textually.
    pub fn normalize(&self) -> PurePath {
        self.with(self.flavor.ops().normalize(&self.text))
    }

    /// Normalized and rebased onto `env`'s current directory when relative.
    pub fn absolute(&self, env: &dyn Environment) -> PurePath {
        self.with(resolve::absolute(self.flavor, &self.text, env))
    }

    /// Absolute form with symlinks resolved through `probe`. Cycles yield a
    /// best-effort partial path rather than an error.
    pub fn canonicalize(&self, env: &dyn Environment, probe: &dyn FilesystemProbe) -> PurePath {
        self.with(resolve::canonicalize(self.flavor, &self.text, env, probe))
    }

    /// Replaces a leading `~` or `~user` with the home directory `env`
    /// reports; unknown homes leave the path untouched.
    pub fn expand_user(&self, env: &dyn Environment) -> PurePath {
        self.with(resolve::expand_user(self.flavor, &self.text, env))
    }

    #[cfg(feature = "url")]
    pub fn to_file_url(&self) -> Result<::url::Url, PathToUrlError> {
        url::to_file_url(self.flavor, &self.text)
    }
}

impl fmt::Display for PurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for PurePath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Ordering is textual, byte-wise on the raw spelling; paths that differ
/// only in flavor order Posix before Windows.
impl Ord for PurePath {
    fn cmp(&self, other: &PurePath) -> Ordering {
        self.text
            .cmp(&other.text)
            .then_with(|| self.flavor.cmp(&other.flavor))
    }
}

impl PartialOrd for PurePath {
    fn partial_cmp(&self, other: &PurePath) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> Add<S> for PurePath {
    type Output = PurePath;

    fn add(self, rhs: S) -> PurePath {
        self.join([rhs.as_ref()])
    }
}

impl<S: AsRef<str>> Add<S> for &PurePath {
    type Output = PurePath;

    fn add(self, rhs: S) -> PurePath {
        self.join([rhs.as_ref()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_distinguishes_paths() {
        let posix = PurePath::posix("a/b");
        let windows = PurePath::windows("a/b");
        assert_ne!(posix, windows);
        assert_eq!(posix, PurePath::posix("a/b"));
    }

    #[test]
    fn test_join_operator() {
        let base = PurePath::posix("/usr");
        assert_eq!((&base + "lib").as_str(), "/usr/lib");
        assert_eq!((base + "/etc").as_str(), "/etc");
        let win = PurePath::windows("C:");
        assert_eq!((win + "dir").as_str(), "C:dir");
    }

    #[test]
    fn test_ordering_is_textual() {
        let mut paths = vec![
            PurePath::posix("/b"),
            PurePath::posix("/a/z"),
            PurePath::posix("/a"),
        ];
        paths.sort();
        let texts: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(texts, ["/a", "/a/z", "/b"]);
    }
}
