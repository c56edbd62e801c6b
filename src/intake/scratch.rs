use std::path::{Component, Path, PathBuf};

use crate::errors::IntakeError;

// Joins the scratch directory with the caller-supplied file name as-is and
// writes the bytes there, replacing any existing file.
//
// The name is not sanitized: "../" segments or an absolute name land outside
// the scratch directory. That case is logged, not refused.
pub async fn save_to_scratch(
    scratch_dir: &Path,
    file_name: &str,
    content: &[u8],
) -> Result<PathBuf, IntakeError> {
    let path = scratch_dir.join(file_name);

    if escapes_dir(file_name) {
        tracing::warn!(path = %path.display(), "file name escapes the scratch directory");
    }

    tokio::fs::write(&path, content)
        .await
        .map_err(|source| IntakeError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "saved document");
    Ok(path)
}

fn escapes_dir(file_name: &str) -> bool {
    let mut depth: usize = 0;
    for component in Path::new(file_name).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => return true,
            Component::ParentDir => {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            }
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
        }
    }
    false
}
