use std::path::{Component, Path, PathBuf};

use crate::{ArchiveError, Result};

/// Resolve an archive entry path against the extraction root.
///
/// Rejects absolute entry paths and anything that would resolve outside
/// `base` after normalization (zip-slip protection).
pub fn sanitize_entry_path(entry: &Path, base: &Path) -> Result<PathBuf> {
    if entry.is_absolute() {
        return Err(ArchiveError::PathEscape {
            entry: entry.to_path_buf(),
            resolved: entry.to_path_buf(),
        });
    }

    let resolved = normalize(&base.join(normalize(entry)));
    if !resolved.starts_with(base) {
        return Err(ArchiveError::PathEscape {
            entry: entry.to_path_buf(),
            resolved,
        });
    }

    Ok(resolved)
}

/// Normalize separators and resolve `.`/`..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push("/"),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }
    result
}
