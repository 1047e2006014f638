use crate::error::Error;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode for a file that did not exist before; the dashboard runs as its own user.
#[cfg(unix)]
fn fresh_permissions() -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(0o644)
}

/// Replaces `path` with `contents` in one rename, so the dashboard never picks
/// up a half-written file. The temporary file lives next to `path` to keep the
/// rename on one filesystem, and takes over the permissions of the file it
/// replaces.
pub fn replace(path: &Path, contents: &[u8]) -> Result<(), Error> {
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions()).map_err(wrap)?,
        #[cfg(unix)]
        Err(_) => tmp.as_file().set_permissions(fresh_permissions()).map_err(wrap)?,
        #[cfg(not(unix))]
        Err(_) => {}
    }
    tmp.write_all(contents).map_err(wrap)?;
    tmp.as_file().sync_all().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}
