use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Unable to scan images directory {}: {source}", path.display())]
    ListingUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image not found")]
    ImageNotFound,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Malformed upload: {0}")]
    MalformedUpload(#[from] MultipartError),

    #[error("Unable to store {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    error: String,
}

impl GalleryError {
    fn status(&self) -> StatusCode {
        match self {
            GalleryError::ListingUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::ImageNotFound => StatusCode::NOT_FOUND,
            GalleryError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            GalleryError::MalformedUpload(e) => e.status(),
            GalleryError::StorageUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            GalleryError::ListingUnavailable { .. } => "Unable to scan images directory!",
            GalleryError::ImageNotFound => "Image not found",
            GalleryError::InvalidUpload(_) | GalleryError::MalformedUpload(_) => "Invalid upload!",
            GalleryError::StorageUnavailable { .. } => "Unable to rename the uploaded image!",
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("{self}");
        }

        if let GalleryError::ImageNotFound = self {
            return (status, self.public_message()).into_response();
        }

        let body = ErrorBody {
            message: self.public_message(),
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
