use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

pub const UNIT_EXT: &str = "ron";

/// Operator settings file kept at the tree root; structurally a `.ron` file
/// but never a unit.
pub const SETTINGS_FILE: &str = "SETTINGS.ron";

fn is_unit_file(p: &Path) -> bool {
    p.is_file() && p.extension().and_then(|s| s.to_str()) == Some(UNIT_EXT)
}

fn list_sorted(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let rd = fs::read_dir(dir).map_err(|e| format!("{}: {}", dir.display(), e))?;
    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.map_err(|e| format!("{}: {}", dir.display(), e))?;
        out.push(entry.path());
    }
    out.sort();
    Ok(out)
}

/// Depth-limited discovery of unit files under `root`.
///
/// The result is seeded with `.ron` files directly in `root`; every
/// directory found is queued and expanded for exactly `depth` rounds, one
/// level per round. Files more than `depth` directory levels down are
/// skipped even if the tree goes deeper. The root-level `SETTINGS.ron` is
/// filtered out of the result when present; a nested one is kept.
pub fn find_unit_files(root: &Path, depth: usize) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    let mut dirs = VecDeque::new();
    for p in list_sorted(root)? {
        if p.is_dir() {
            dirs.push_back(p);
        } else if is_unit_file(&p) {
            files.push(p);
        }
    }
    for _ in 0..depth {
        for _ in 0..dirs.len() {
            let Some(dir) = dirs.pop_front() else { break };
            for p in list_sorted(&dir)? {
                if p.is_dir() {
                    dirs.push_back(p);
                } else if is_unit_file(&p) {
                    files.push(p);
                }
            }
        }
    }
    let settings = root.join(SETTINGS_FILE);
    files.retain(|p| *p != settings);
    Ok(files)
}
