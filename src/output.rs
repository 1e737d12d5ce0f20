//! Writing rendered output to disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::Builder;

use crate::error::Result;

/// Write `bytes` to `path`, replacing any existing file.
///
/// The data goes to a temporary file in the destination directory first and
/// is renamed into place, so `path` never holds a partial write. With
/// `create_dirs` unset a missing parent directory is an error.
///
/// An existing file keeps its permissions. A new file gets the same mode as
/// one created with [`fs::write`].
pub fn write_atomic(path: &Path, bytes: &[u8], create_dirs: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if create_dirs {
        fs::create_dir_all(dir)?;
    }

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    builder.prefix(".samdoc");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Mode is masked by the process umask on creation
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.persist(path)?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
