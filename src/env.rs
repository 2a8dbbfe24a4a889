//! Process-environment capability, injected instead of read ambiently so the
//! path algorithms stay testable without process-level fixtures.

/// What the resolving operations need to know about the process environment.
pub trait Environment {
    /// The current working directory as a plain string.
    fn current_dir(&self) -> String;
    /// The home directory of `user`, or of the current user when `user` is
    /// empty. `None` when it cannot be determined.
    fn home_dir(&self, user: &str) -> Option<String>;
    fn var(&self, name: &str) -> Option<String>;
}

/// [`Environment`] backed by `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn current_dir(&self) -> String {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.into_os_string().into_string().ok())
            .unwrap_or_default()
    }

    fn home_dir(&self, user: &str) -> Option<String> {
        let own = self.var("HOME").or_else(|| self.var("USERPROFILE"))?;
        if user.is_empty() {
            return Some(own);
        }
        // Named-user lookup without a system-database dependency: sibling of
        // the current home directory. Callers needing real account lookup
        // supply their own Environment.
        let parent = own.trim_end_matches(['/', '\\']);
        let cut = parent.rfind(['/', '\\'])?;
        Some(format!("{}{}", &parent[..cut + 1], user))
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
