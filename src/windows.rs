//! The Windows/NT path dialect: `\` primary and `/` alternate separators,
//! drive letters and UNC share prefixes.

use std::borrow::Cow;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, anychar},
    error::context,
    sequence::pair,
    IResult,
};

use crate::{
    flavor::{CommonPathError, PathFlavor, CURRENT_DIR, EXTENSION_SEP, PARENT_DIR},
    util,
};

pub const SEP: char = '\\';
pub const ALT_SEP: char = '/';
pub const PATH_LIST_SEP: char = ';';
pub const DEV_NULL: &str = "nul";
pub const DEFAULT_SEARCH_PATH: &str = ".;C:\\bin";

pub fn is_sep(c: char) -> bool {
    c == SEP || c == ALT_SEP
}

/// A drive spelling: any single character followed by `:`. Returns the drive
/// character; the grammar deliberately does not require a letter.
pub(crate) fn parse_drive_exact(input: &str) -> IResult<&str, char> {
    context("drive_exact", pair(anychar, complete::char(':')))(input)
        .map(|(rest, (drive, _))| (rest, drive))
}

/// True for the two device-path spellings `\\.\` and `\\?\` that normalize
/// and drive-splitting must leave alone.
pub(crate) fn is_special_prefixed(path: &str) -> bool {
    let parsed: IResult<&str, &str> = alt((tag(r"\\.\"), tag(r"\\?\")))(path);
    parsed.is_ok()
}

/// Rewrites every `/` to `\`. Case is left alone.
pub fn norm_case(path: &str) -> Cow<'_, str> {
    if path.contains(ALT_SEP) {
        Cow::Owned(path.replace(ALT_SEP, "\\"))
    } else {
        Cow::Borrowed(path)
    }
}

pub fn is_absolute(path: &str) -> bool {
    let p = norm_case(path);
    if p.starts_with(r"\\?\") {
        return true;
    }
    let (_, rest) = split_drive(&p);
    rest.starts_with(is_sep)
}

/// Splits off the drive: a letter drive (`C:`) or a UNC share
/// (`\\host\share`). Always `drive + rest == path`, character-exact.
///
/// UNC detection wants exactly two leading separators. No separator after
/// the host means no drive; a separator after the host but none after the
/// share makes the whole string the drive; an empty share is no drive.
pub fn split_drive(path: &str) -> (&str, &str) {
    let mut chars = path.chars();
    if chars.next().is_none() || chars.next().is_none() {
        return ("", path);
    }
    let normp = norm_case(path);
    let normp = normp.as_ref();

    if normp.starts_with(r"\\") && !normp.starts_with(r"\\\") {
        let after_root = &normp[2..];
        let Some(host_end) = after_root.find(SEP) else {
            return ("", path);
        };
        let share = &after_root[host_end + 1..];
        return match share.find(SEP) {
            Some(0) => ("", path),
            Some(share_end) => {
                let cut = 2 + host_end + 1 + share_end;
                (&path[..cut], &path[cut..])
            }
            None => (path, ""),
        };
    }

    if let Ok((rest, _)) = parse_drive_exact(normp) {
        let cut = normp.len() - rest.len();
        return (&path[..cut], &path[cut..]);
    }
    ("", path)
}

/// Joins `parts` onto `base`, tracking the drive separately so that a rooted
/// part keeps the accumulated drive and a part with a different drive
/// discards everything before it.
pub fn join(base: &str, parts: &[&str]) -> String {
    let (d, p) = split_drive(base);
    let mut drive = d.to_string();
    let mut path = p.to_string();

    for part in parts {
        let (p_drive, p_path) = split_drive(part);
        if p_path.starts_with(is_sep) {
            // rooted: keep the old drive only if the part brings none
            if !p_drive.is_empty() || drive.is_empty() {
                drive = p_drive.to_string();
            }
            path = p_path.to_string();
            continue;
        } else if !p_drive.is_empty() && p_drive != drive {
            if !p_drive.eq_ignore_ascii_case(&drive) {
                // different drive: ignore everything accumulated so far
                drive = p_drive.to_string();
                path = p_path.to_string();
                continue;
            }
            // same drive, different spelling: adopt the latest
            drive = p_drive.to_string();
        }
        if !path.is_empty() && !path.ends_with(is_sep) {
            path.push(SEP);
        }
        path.push_str(p_path);
    }

    // a UNC drive needs a separator before a relative remainder
    if !path.is_empty() && !path.starts_with(is_sep) && !drive.is_empty() && !drive.ends_with(':') {
        let mut out = drive;
        out.push(SEP);
        out.push_str(&path);
        return out;
    }
    drive + &path
}

/// Splits around the last separator of the drive-less remainder; the drive
/// always stays with the head.
pub fn split(path: &str) -> (&str, &str) {
    let (d, p) = split_drive(path);
    let cut = p.rfind(is_sep).map_or(0, |i| i + 1);
    let (head, tail) = p.split_at(cut);
    let head = if head.chars().all(is_sep) {
        head
    } else {
        util::rstrip_set(head, &[SEP, ALT_SEP])
    };
    (&path[..d.len() + head.len()], tail)
}

pub fn split_extension(path: &str) -> (&str, &str) {
    util::split_extension(path, SEP, Some(ALT_SEP), EXTENSION_SEP)
}

pub fn base_name(path: &str) -> &str {
    split(path).1
}

pub fn dir_name(path: &str) -> &str {
    split(path).0
}

/// Collapses `.`/`..` and redundant separators and rewrites `/` to `\`.
/// Device paths (`\\.\`, `\\?\`) come back verbatim.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }
    if is_special_prefixed(path) {
        return path.to_string();
    }

    let normp = norm_case(path);
    let (d, p) = split_drive(&normp);
    let mut drive = d.to_string();
    let mut rest = p;
    if rest.starts_with(SEP) {
        drive.push(SEP);
        rest = util::lstrip_set(rest, &[SEP]);
    }

    let mut comps: Vec<&str> = Vec::new();
    for comp in rest.split(SEP) {
        if comp.is_empty() || comp == CURRENT_DIR {
            continue;
        }
        if comp == PARENT_DIR {
            match comps.last() {
                Some(prev) if *prev != PARENT_DIR => {
                    comps.pop();
                }
                None if drive.ends_with(SEP) => {
                    // `..` at the root goes nowhere
                }
                _ => comps.push(PARENT_DIR),
            }
            continue;
        }
        comps.push(comp);
    }

    if drive.is_empty() && comps.is_empty() {
        return CURRENT_DIR.to_string();
    }
    drive + &comps.join("\\")
}

/// The deepest path every input is inside of. All inputs must agree on being
/// rooted and must carry the same drive (compared ASCII-case-insensitively);
/// the first path's spelling wins in the output.
pub fn common_path(paths: &[&str]) -> Result<String, CommonPathError> {
    if paths.is_empty() {
        return Err(CommonPathError::Empty);
    }

    let lowered: Vec<String> = paths
        .iter()
        .map(|p| norm_case(p).to_lowercase())
        .collect();
    let drive_splits: Vec<(&str, &str)> = lowered.iter().map(|p| split_drive(p)).collect();

    let rooted = drive_splits[0].1.starts_with(SEP);
    if drive_splits.iter().any(|(_, p)| p.starts_with(SEP) != rooted) {
        return Err(CommonPathError::MixedAbsoluteRelative);
    }
    let drive0 = drive_splits[0].0;
    if drive_splits.iter().any(|(d, _)| *d != drive0) {
        return Err(CommonPathError::DriveMismatch);
    }

    let split_paths: Vec<Vec<&str>> = drive_splits
        .iter()
        .map(|(_, p)| {
            p.split(SEP)
                .filter(|c| !c.is_empty() && *c != CURRENT_DIR)
                .collect()
        })
        .collect();

    // output spelling comes from the first path, only separator-normalized
    let first = norm_case(paths[0]);
    let (drive, path) = split_drive(&first);
    let common: Vec<&str> = path
        .split(SEP)
        .filter(|c| !c.is_empty() && *c != CURRENT_DIR)
        .collect();

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

    let mut out = drive.to_string();
    if rooted {
        out.push(SEP);
    }
    out.push_str(&common[..keep].join("\\"));
    Ok(out)
}

/// The Windows dialect as a [`PathFlavor`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFlavor;

impl PathFlavor for WindowsFlavor {
    fn separator(&self) -> char {
        SEP
    }

    fn alt_separator(&self) -> Option<char> {
        Some(ALT_SEP)
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
