use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::{RewriteRule, apply_rules};

/// How transformed text goes back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the original.
    #[default]
    Atomic,
    /// Truncating overwrite of the original path.
    InPlace,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "unit".into());
    name.push(".tmp");
    path.with_file_name(name)
}

pub fn write_text(path: &Path, text: &str, mode: WriteMode) -> Result<(), String> {
    match mode {
        WriteMode::InPlace => {
            fs::write(path, text).map_err(|e| format!("{}: {}", path.display(), e))
        }
        WriteMode::Atomic => {
            let tmp = tmp_path(path);
            fs::write(&tmp, text).map_err(|e| format!("{}: {}", tmp.display(), e))?;
            fs::rename(&tmp, path).map_err(|e| format!("{}: {}", path.display(), e))
        }
    }
}

/// Read `path`, apply every rule in order, write the result back.
///
/// The file is rewritten even when no rule matched. Returns whether the
/// text actually changed.
pub fn rewrite_unit_file(
    path: &Path,
    rules: &[RewriteRule],
    mode: WriteMode,
) -> Result<bool, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let replaced = apply_rules(&text, rules);
    let changed = replaced != text;
    write_text(path, &replaced, mode)?;
    Ok(changed)
}
