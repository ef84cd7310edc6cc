//! dsm-core: discovery and rewrite logic for Datasheet Creator unit files
//!
//! This crate keeps a small surface:
//! - Depth-limited discovery of unit `.ron` files (walk)
//! - Whole-file substitution rules for the keyword migration (rules, rewrite)
//! - Section-aware line transformer for the schema migration (section)
//! - Timestamped zip backup of a unit tree (backup)
//!
pub mod backup;
pub mod rewrite;
pub mod rules;
pub mod section;
pub mod walk;

pub use rewrite::{WriteMode, rewrite_unit_file, write_text};
pub use rules::{Pattern, RewriteRule, apply_rules, migration_rules};
pub use section::{Section, transform_unit_file, transform_unit_text};
pub use walk::{SETTINGS_FILE, UNIT_EXT, find_unit_files};
