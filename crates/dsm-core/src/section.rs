use std::fs;
use std::path::Path;

use crate::rewrite::{WriteMode, write_text};

/// Which bracket-delimited block of a unit file is currently open. Each
/// section starts at its named sentinel line and ends at the next stripped
/// `],` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Ranged,
    Melee,
    CoreAbilities,
    Composition,
}

/// Restructure one weapon entry: the keyword list is cleared and the entry
/// is wrapped with a model count of 1. Everything after `keywords: ` on the
/// line is discarded.
fn rewrite_weapon_line(line: &str) -> Result<String, String> {
    let (prefix, rest) = line
        .split_once("(name: ")
        .ok_or_else(|| format!("weapon entry without '(name: ': {:?}", line.trim_end()))?;
    let (middle, _old_keywords) = rest
        .split_once("keywords: ")
        .ok_or_else(|| format!("weapon entry without 'keywords: ': {:?}", line.trim_end()))?;
    Ok(format!("{prefix}((name: {middle}keywords: []), 1),\n"))
}

/// One pass of the old-to-new schema migration over a unit file's text.
///
/// Weapon entries in `ranged_weapons`/`melee_weapons` are rewritten,
/// `core_abilities` collapses to an empty list, and `composition` is
/// replaced by an empty `unit_comp` block. Lines outside those sections
/// pass through byte-for-byte.
pub fn transform_unit_text(text: &str) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut section = Section::None;
    for line in text.split_inclusive('\n') {
        match line.trim() {
            "ranged_weapons: [" => {
                section = Section::Ranged;
                out.push_str(line);
                continue;
            }
            "melee_weapons: [" => {
                section = Section::Melee;
                out.push_str(line);
                continue;
            }
            "core_abilities: [" => {
                section = Section::CoreAbilities;
                out.push_str("    core_abilities: [],\n");
                continue;
            }
            "composition: [" => {
                section = Section::Composition;
                out.push_str("    unit_comp: (\n");
                out.push_str("        comp: []\n");
                out.push_str("    ),\n");
                continue;
            }
            "]," if section != Section::None => {
                if matches!(section, Section::Ranged | Section::Melee) {
                    out.push_str(line);
                }
                section = Section::None;
                continue;
            }
            _ => {}
        }
        match section {
            Section::Ranged | Section::Melee => out.push_str(&rewrite_weapon_line(line)?),
            Section::CoreAbilities | Section::Composition => {}
            Section::None => out.push_str(line),
        }
    }
    Ok(out)
}

/// Read `path`, run the section migration, write the result back.
pub fn transform_unit_file(path: &Path, mode: WriteMode) -> Result<(), String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let migrated =
        transform_unit_text(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
    write_text(path, &migrated, mode)
}
