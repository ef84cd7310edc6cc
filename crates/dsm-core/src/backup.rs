use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::FileOptions;

use crate::walk::UNIT_EXT;

// Zip archive of every unit file under `root` (non-destructive)
pub fn backup_unit_files(root: &Path) -> io::Result<PathBuf> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        ));
    }
    let parent = root.parent().unwrap_or(Path::new("."));
    let name = root.file_name().and_then(|s| s.to_str()).unwrap_or("units");
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let dest = parent.join(format!("{}_{}.zip", name, ts));

    let file = fs::File::create(&dest)?;
    let mut zip = zip::ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|s| s.to_str()) != Some(UNIT_EXT)
        {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        let entry_name = rel.to_string_lossy().replace('\\', "/");
        zip.start_file(entry_name, options)?;
        let data = fs::read(path)?;
        zip.write_all(&data)?;
    }
    zip.finish()?;
    Ok(dest)
}
