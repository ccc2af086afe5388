use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{HeaderMap, header::HOST},
    response::{Html, Redirect},
};
use chrono::Utc;

use crate::error::GalleryError;
use crate::gallery;
use crate::scanner;
use crate::state::AppState;
use crate::upload::{self, UploadForm};

/// `http://{host}` for absolute image URLs, empty when the client sent no Host.
fn base_url(headers: &HeaderMap) -> String {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_default()
}

pub async fn gallery_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, GalleryError> {
    let snapshot = scanner::snapshot_blocking(state.config.upload_dir.clone()).await?;
    let mut rng = state.render_rng();

    log::info!("Rendering gallery with {} images", snapshot.len());
    let page = gallery::render_gallery_page(&snapshot, &base_url(&headers), &mut rng);

    Ok(Html(page))
}

pub async fn images_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, GalleryError> {
    let snapshot = scanner::snapshot_blocking(state.config.upload_dir.clone()).await?;
    let base = base_url(&headers);

    let urls = snapshot
        .images
        .iter()
        .map(|img| gallery::image_url(&base, &img.file_name))
        .collect();

    Ok(Json(urls))
}

pub async fn viewer_handler(
    State(state): State<Arc<AppState>>,
    Path(image_name): Path<String>,
) -> Result<Html<String>, GalleryError> {
    if !scanner::is_plain_file_name(&image_name) {
        return Err(GalleryError::ImageNotFound);
    }

    let path = state.config.upload_dir.join(&image_name);
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(Html(gallery::render_viewer(&image_name))),
        _ => Err(GalleryError::ImageNotFound),
    }
}

pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Redirect, GalleryError> {
    let mut form = UploadForm::default();
    let mut has_image = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("image") => {
                form.original_name = field.file_name().unwrap_or_default().to_string();
                form.bytes = field.bytes().await?.to_vec();
                has_image = true;
            }
            Some("imageName") => form.custom_name = Some(field.text().await?),
            Some("imageEvent") => form.event = Some(field.text().await?),
            other => log::debug!("Ignoring upload field {other:?}"),
        }
    }

    if !has_image || form.original_name.is_empty() {
        return Err(GalleryError::InvalidUpload(
            "missing image file".to_string(),
        ));
    }

    let stored = upload::stored_name(
        &form.original_name,
        form.custom_name.as_deref(),
        Utc::now().timestamp_millis(),
    )?;
    let path = upload::store(&state.config.upload_dir, &stored, &form.bytes).await?;

    match form.event.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        Some(event) => log::info!(
            "Stored {} ({}) for event {event:?}",
            path.display(),
            human_bytes::human_bytes(form.bytes.len() as f64)
        ),
        None => log::info!(
            "Stored {} ({})",
            path.display(),
            human_bytes::human_bytes(form.bytes.len() as f64)
        ),
    }

    Ok(Redirect::to("/"))
}
