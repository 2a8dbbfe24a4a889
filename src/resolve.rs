//! Operations that need the process environment or the filesystem: abspath,
//! realpath, tilde expansion, mount detection. Collaborators are passed in
//! explicitly; nothing here reads ambient global state.

use std::collections::HashMap;

use crate::{
    env::Environment,
    flavor::{Flavor, CURRENT_DIR, PARENT_DIR},
    probe::FilesystemProbe,
    util,
};

/// `normalize(path)` rebased onto the current directory when relative.
pub fn absolute(flavor: Flavor, path: &str, env: &dyn Environment) -> String {
    let f = flavor.ops();
    if f.is_absolute(path) {
        f.normalize(path)
    } else {
        f.normalize(&f.join(&env.current_dir(), &[path]))
    }
}

/// Symlink-resolved absolute form of `path`.
///
/// Resolution walks component by component; a symlink cycle is not an error
/// and yields a best-effort partial path. Probe failures are treated as
/// "not a symlink", so a nonexistent suffix passes through untouched.
pub fn canonicalize(
    flavor: Flavor,
    path: &str,
    env: &dyn Environment,
    probe: &dyn FilesystemProbe,
) -> String {
    let mut seen: HashMap<String, Option<String>> = HashMap::new();
    let (resolved, _) = join_resolved(flavor, "", path, probe, &mut seen);
    absolute(flavor, &resolved, env)
}

// Joins `rest` onto the already-resolved `path`, resolving symlinks as they
// appear. `seen` maps a symlink to its resolution; `None` marks one that is
// still being resolved, which is how a cycle is recognized. The bool is
// false when resolution gave up on a cycle.
fn join_resolved(
    flavor: Flavor,
    path: &str,
    rest: &str,
    probe: &dyn FilesystemProbe,
    seen: &mut HashMap<String, Option<String>>,
) -> (String, bool) {
    let f = flavor.ops();
    let sep = f.separator();

    let mut newpath = path.to_string();
    let mut r = rest;
    if f.is_absolute(rest) {
        let mut chars = r.chars();
        chars.next();
        r = chars.as_str();
        newpath = sep.to_string();
    }

    while !r.is_empty() {
        let (name, remainder) = match r.find(sep) {
            Some(i) => (&r[..i], &r[i + sep.len_utf8()..]),
            None => (r, ""),
        };
        r = remainder;

        if name.is_empty() || name == CURRENT_DIR {
            continue;
        }
        if name == PARENT_DIR {
            if !newpath.is_empty() {
                let (head, tail) = {
                    let (h, t) = f.split(&newpath);
                    (h.to_string(), t.to_string())
                };
                newpath = if tail == PARENT_DIR {
                    // don't collapse `..` into `..`: defer both upward
                    f.join(&head, &[PARENT_DIR, PARENT_DIR])
                } else {
                    head
                };
            } else {
                newpath = PARENT_DIR.to_string();
            }
            continue;
        }

        let candidate = f.join(&newpath, &[name]);
        if !probe.is_symlink(&candidate) {
            newpath = candidate;
            continue;
        }

        if let Some(entry) = seen.get(&candidate) {
            match entry {
                Some(resolved) => {
                    newpath = resolved.clone();
                    continue;
                }
                // mid-resolution: a cycle. Hand back what we have.
                None => return (f.join(&candidate, &[r]), false),
            }
        }

        seen.insert(candidate.clone(), None);
        let target = probe.read_link(&candidate).unwrap_or_default();
        let (resolved, ok) = join_resolved(flavor, &newpath, &target, probe, seen);
        if !ok {
            return (f.join(&resolved, &[r]), false);
        }
        seen.insert(candidate, Some(resolved.clone()));
        newpath = resolved;
    }
    (newpath, true)
}

/// Replaces a leading `~` or `~user` with the resolved home directory.
/// Leaves the path alone when it has no tilde or the home is unknown.
pub fn expand_user(flavor: Flavor, path: &str, env: &dyn Environment) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }
    let f = flavor.ops();
    let sep = f.separator();
    let end = path.find(sep).unwrap_or(path.len());
    let user = &path[1..end];

    let Some(home) = env.home_dir(user) else {
        return path.to_string();
    };
    let mut expanded = util::rstrip_set(&home, &[sep]).to_string();
    expanded.push_str(&path[end..]);
    if expanded.is_empty() {
        sep.to_string()
    } else {
        expanded
    }
}

/// True when `path` is a mount point: its resolved parent lives on another
/// device, or is the very same directory (the filesystem root).
pub fn is_mount(
    flavor: Flavor,
    path: &str,
    env: &dyn Environment,
    probe: &dyn FilesystemProbe,
) -> bool {
    if probe.is_symlink(path) {
        return false;
    }
    let Some(s1) = probe.metadata(path) else {
        return false;
    };
    let parent = canonicalize(
        flavor,
        &flavor.ops().join(path, &[PARENT_DIR]),
        env,
        probe,
    );
    let Some(s2) = probe.metadata(&parent) else {
        return false;
    };
    let (Some(d1), Some(d2)) = (s1.device, s2.device) else {
        return false;
    };
    if d1 != d2 {
        return true;
    }
    matches!((s1.inode, s2.inode), (Some(i1), Some(i2)) if i1 == i2)
}
