//! User-supplied paths.

use std::path::{Path, PathBuf};

/// Expand a leading `~` (alone, `~/…` or `~\…`) to the home directory.
/// Anything else, or a missing home directory, leaves the path as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(r) if r.starts_with(['/', '\\']) => &r[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// `path` with `~` expanded; a relative result is anchored at `base`.
pub fn resolve_under(base: &Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}
