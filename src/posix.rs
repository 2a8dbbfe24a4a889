//! The POSIX path dialect: single `/` separator, no drives.

use std::borrow::Cow;

use crate::{
    flavor::{CommonPathError, PathFlavor, CURRENT_DIR, EXTENSION_SEP, PARENT_DIR},
    util,
};

pub const SEP: char = '/';
pub const PATH_LIST_SEP: char = ':';
pub const DEV_NULL: &str = "/dev/null";
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Identity on POSIX; there is no alternate separator to rewrite.
pub fn norm_case(path: &str) -> Cow<'_, str> {
    Cow::Borrowed(path)
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Joins `parts` onto `base`; an absolute part discards everything before it.
pub fn join(base: &str, parts: &[&str]) -> String {
    let mut path = base.to_string();
    for p in parts {
        if is_absolute(p) {
            path = (*p).to_string();
        } else if path.is_empty() || path.ends_with(SEP) {
            path.push_str(p);
        } else {
            path.push(SEP);
            path.push_str(p);
        }
    }
    path
}

/// Splits around the last separator. A head like `usr////` loses its
/// trailing separators, but an all-separator head (`"///"`) is kept as-is.
pub fn split(path: &str) -> (&str, &str) {
    let cut = path.rfind(SEP).map_or(0, |i| i + 1);
    let (head, tail) = path.split_at(cut);
    let head = if head.bytes().all(|b| b == SEP as u8) {
        head
    } else {
        util::rstrip_set(head, &[SEP])
    };
    (head, tail)
}

/// POSIX paths have no drive.
pub fn split_drive(path: &str) -> (&str, &str) {
    ("", path)
}

pub fn split_extension(path: &str) -> (&str, &str) {
    util::split_extension(path, SEP, None, EXTENSION_SEP)
}

pub fn base_name(path: &str) -> &str {
    split(path).1
}

pub fn dir_name(path: &str) -> &str {
    split(path).0
}

/// Collapses `.`/`..` and redundant separators. A path starting with exactly
/// two slashes keeps both (POSIX gives `//` implementation-defined meaning);
/// three or more collapse to one.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }
    let mut slashes = 0usize;
    if path.starts_with(SEP) {
        slashes = 1;
    }
    if slashes == 1 && path.starts_with("//") && !path.starts_with("///") {
        slashes = 2;
    }

    let mut comps: Vec<&str> = Vec::new();
    for comp in path.split(SEP) {
        if comp.is_empty() || comp == CURRENT_DIR {
            continue;
        }
        if comp != PARENT_DIR
            || (slashes == 0 && comps.is_empty())
            || comps.last().is_some_and(|c| *c == PARENT_DIR)
        {
            comps.push(comp);
        } else if !comps.is_empty() {
            comps.pop();
        }
    }

    let mut out = "/".repeat(slashes);
    out.push_str(&comps.join("/"));
    if out.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        out
    }
}

/// The deepest path every input is inside of.
///
/// Unlike [`util::common_prefix`] this works on whole components, so
/// `/usr/lib` and `/usr/lib64` share `/usr`.
pub fn common_path(paths: &[&str]) -> Result<String, CommonPathError> {
    if paths.is_empty() {
        return Err(CommonPathError::Empty);
    }
    let rooted = paths[0].starts_with(SEP);
    if paths.iter().any(|p| p.starts_with(SEP) != rooted) {
        return Err(CommonPathError::MixedAbsoluteRelative);
    }

    let split_paths: Vec<Vec<&str>> = paths
        .iter()
        .map(|p| {
            p.split(SEP)
                .filter(|c| !c.is_empty() && *c != CURRENT_DIR)
                .collect()
        })
        .collect();

    // A common leading run of the min and max sequences is common to all.
    let (Some(s1), Some(s2)) = (split_paths.iter().min(), split_paths.iter().max()) else {
        return Err(CommonPathError::Empty);
    };
    let mut keep = s1.len();
    for (i, (a, b)) in s1.iter().zip(s2.iter()).enumerate() {
        if a != b {
            keep = i;
            break;
        }
    }

    let prefix = if rooted { "/" } else { "" };
    Ok(format!("{}{}", prefix, s1[..keep].join("/")))
}

/// The POSIX dialect as a [`PathFlavor`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixFlavor;

impl PathFlavor for PosixFlavor {
    fn separator(&self) -> char {
        SEP
    }

    fn path_list_separator(&self) -> char {
        PATH_LIST_SEP
    }

    fn null_device(&self) -> &'static str {
        DEV_NULL
    }

    fn default_search_path(&self) -> &'static str {
        DEFAULT_SEARCH_PATH
    }

    fn norm_case<'a>(&self, path: &'a str) -> Cow<'a, str> {
        norm_case(path)
    }

    fn is_absolute(&self, path: &str) -> bool {
        is_absolute(path)
    }

    fn join(&self, base: &str, parts: &[&str]) -> String {
        join(base, parts)
    }

    fn split<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        split(path)
    }

    fn split_drive<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        split_drive(path)
    }

    fn split_extension<'a>(&self, path: &'a str) -> (&'a str, &'a str) {
        split_extension(path)
    }

    fn normalize(&self, path: &str) -> String {
        normalize(path)
    }

    fn common_path(&self, paths: &[&str]) -> Result<String, CommonPathError> {
        common_path(paths)
    }
}
