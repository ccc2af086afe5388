use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub file_name: String,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl StoredImage {
    /// Filename without its extension, shown as the card caption.
    #[must_use]
    pub fn display_name(&self) -> &str {
        display_name(&self.file_name)
    }
}

#[must_use]
pub fn display_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// Listing of the storage directory, captured once per render.
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    pub images: Vec<StoredImage>,
}

impl ListingSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.images.iter().map(|img| img.size).sum()
    }

    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.images.iter().map(|img| img.file_name.as_str()).collect()
    }
}
