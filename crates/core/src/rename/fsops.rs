//! Filesystem move primitive shared by the service and the undo manager.

use std::fs;
use std::io;
use std::path::Path;

/// Move a file, creating the destination's parent directories.
///
/// `fs::rename` cannot cross filesystems, so on failure with the source
/// still present we fall back to copy + remove.
pub fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(e) => {
            if !source.is_file() {
                return Err(e);
            }
            fs::copy(source, dest)?;
            fs::remove_file(source)
        }
    }
}
