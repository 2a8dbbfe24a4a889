//! Small string helpers shared by both flavors.

/// Strips every leading character contained in `set`.
pub(crate) fn lstrip_set<'a>(s: &'a str, set: &[char]) -> &'a str {
    s.trim_start_matches(|c| set.contains(&c))
}

/// Strips every trailing character contained in `set`.
pub(crate) fn rstrip_set<'a>(s: &'a str, set: &[char]) -> &'a str {
    s.trim_end_matches(|c| set.contains(&c))
}

/// Longest common string prefix of `paths`.
///
/// Works character-by-character on the lexicographic minimum and maximum of
/// the set; any prefix shared by those two is shared by every string between
/// them. Purely textual, so `"/usr/lib"` and `"/usr/lib64"` share
/// `"/usr/lib"` even though that is not a common ancestor directory.
pub fn common_prefix<'a>(paths: &[&'a str]) -> &'a str {
    let (Some(min), Some(max)) = (paths.iter().min(), paths.iter().max()) else {
        return "";
    };
    for ((i, a), b) in min.char_indices().zip(max.chars()) {
        if a != b {
            return &min[..i];
        }
    }
    min
}

/// Splits `path` into `(root, ext)` so that `root + ext == path`.
///
/// The extension starts at the last `extsep` inside the final component,
/// except that a run of leading dots never starts an extension (`".bashrc"`
/// has none, `"..bashrc.ext"` has `".ext"`).
pub(crate) fn split_extension<'a>(
    path: &'a str,
    sep: char,
    altsep: Option<char>,
    extsep: char,
) -> (&'a str, &'a str) {
    let mut sep_index = path.rfind(sep);
    if let Some(alt) = altsep {
        sep_index = match (sep_index, path.rfind(alt)) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    if let Some(dot) = path.rfind(extsep) {
        if sep_index.map_or(true, |s| dot > s) {
            // skip the leading dots of the filename
            let filename_start = sep_index.map_or(0, |s| s + 1);
            let bytes = path.as_bytes();
            let mut i = filename_start;
            while i < dot {
                if bytes[i] != extsep as u8 {
                    return (&path[..dot], &path[dot..]);
                }
                i += 1;
            }
        }
    }
    (path, "")
}
