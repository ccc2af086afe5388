use crate::error::GalleryError;
use crate::types::display_name;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Fields of one submitted upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub original_name: String,
    pub custom_name: Option<String>,
    pub event: Option<String>,
    pub bytes: Vec<u8>,
}

/// Reduces `raw` to a single safe path component.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_` and leading dots are
/// dropped, so the result can never name a parent directory or a hidden
/// file.
#[must_use]
pub fn sanitize_component(raw: &str) -> String {
    let mapped: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    mapped.trim_start_matches('.').to_string()
}

fn extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[idx..],
        _ => "",
    }
}

/// Builds the on-disk name `{millis}-{base}` for an upload.
///
/// `base` is the custom name with the original extension appended, unless
/// the custom name is blank, equal to the original filename, or has no
/// ASCII letter or digit left after sanitization; then the original
/// filename is used.
///
/// # Errors
///
/// [`GalleryError::InvalidUpload`] when neither name survives
/// sanitization.
pub fn stored_name(
    original_name: &str,
    custom_name: Option<&str>,
    millis: i64,
) -> Result<String, GalleryError> {
    // Some browsers send the client-side path along with the name.
    let original = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name)
        .trim();

    let custom_base = match custom_name.map(str::trim) {
        Some(custom) if !custom.is_empty() && custom != original => Some(sanitize_component(
            &format!("{custom}{}", extension(original)),
        )),
        _ => None,
    };

    let base = match custom_base {
        Some(base) if display_name(&base).chars().any(|c| c.is_ascii_alphanumeric()) => base,
        Some(base) => {
            log::debug!("Custom name {base:?} unusable, keeping {original:?}");
            sanitize_component(original)
        }
        None => sanitize_component(original),
    };

    if base.is_empty() || base.chars().all(|c| c == '_') {
        return Err(GalleryError::InvalidUpload(format!(
            "unusable file name {original_name:?}"
        )));
    }

    Ok(format!("{millis}-{base}"))
}

/// Writes `bytes` under `dir/name`.
///
/// The data lands in a hidden `.part` file first and is renamed into place,
/// so directory listings never see a half-written image.
///
/// # Errors
///
/// [`GalleryError::StorageUnavailable`] if the write or the rename fails.
pub async fn store(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, GalleryError> {
    let temp = dir.join(format!(".{name}.part"));
    let target = dir.join(name);

    if let Err(source) = fs::write(&temp, bytes).await {
        return Err(GalleryError::StorageUnavailable { path: temp, source });
    }

    if let Err(source) = fs::rename(&temp, &target).await {
        fs::remove_file(&temp).await.ok();
        return Err(GalleryError::StorageUnavailable {
            path: target,
            source,
        });
    }

    Ok(target)
}
