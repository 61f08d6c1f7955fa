use crate::utils::{GitWrapError, Result};
use std::path::{Path, PathBuf};

/// Resolve the configured git binary to an absolute path.
///
/// Bare names such as `git` are looked up on `PATH`; anything containing a
/// path separator is taken as an explicit location and must exist. Relative
/// locations are resolved against the current directory.
pub fn locate_git_binary(configured: &str) -> Result<PathBuf> {
    let base = std::env::current_dir()?;
    locate_git_binary_from(configured, &base)
}

/// Like [`locate_git_binary`], resolving relative locations against `base`.
///
/// The result never depends on the directory git is later run in.
pub fn locate_git_binary_from(configured: &str, base: &Path) -> Result<PathBuf> {
    if configured.is_empty() {
        return Err(GitWrapError::git_not_found("<empty>"));
    }

    let candidate = Path::new(configured);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return match base.join(candidate).canonicalize() {
            Ok(path) if path.is_file() => Ok(path),
            _ => Err(GitWrapError::git_not_found(configured)),
        };
    }

    which::which(configured).map_err(|_| GitWrapError::git_not_found(configured))
}
