use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

// Returns whether `path` already existed. Only the last component is created.
pub fn ensure_directory(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            fs::create_dir(path)?;
            tracing::info!(path = %path.display(), "created output directory");
            Ok(false)
        }
        Err(error) => Err(error),
    }
}
