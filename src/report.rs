use crate::types::ListingSnapshot;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

#[must_use]
pub fn listing_table(snapshot: &ListingSnapshot) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Image", "File", "Size", "Modified"]);

    for img in &snapshot.images {
        table.add_row(vec![
            Cell::new(img.display_name()),
            Cell::new(&img.file_name),
            Cell::new(human_bytes::human_bytes(img.size as f64)).fg(if img.size == 0 {
                Color::Yellow
            } else {
                Color::White
            }),
            Cell::new(img.modified.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(snapshot.len()).add_attribute(Attribute::Bold),
        Cell::new(human_bytes::human_bytes(snapshot.total_size() as f64))
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    table
}

pub fn print_listing(dir_label: &str, snapshot: &ListingSnapshot) {
    println!("{}", format!("=== Stored Images in {dir_label} ===").cyan());

    if snapshot.is_empty() {
        println!("{}", "No images uploaded yet.".yellow());
        return;
    }

    println!("{}", listing_table(snapshot));
    println!(
        "Gallery Status: {} across {} images.",
        human_bytes::human_bytes(snapshot.total_size() as f64).green(),
        snapshot.len().to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StoredImage;
    use chrono::Local;

    #[test]
    fn test_listing_table_has_row_per_image_plus_total() {
        let snapshot = ListingSnapshot {
            images: vec![
                StoredImage {
                    file_name: "1-a.png".to_string(),
                    size: 2048,
                    modified: Local::now(),
                },
                StoredImage {
                    file_name: "2-b.jpg".to_string(),
                    size: 0,
                    modified: Local::now(),
                },
            ],
        };

        let table = listing_table(&snapshot);
        assert_eq!(table.row_count(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("1-a.png"));
        assert!(rendered.contains("2-b"));
        assert!(rendered.contains("TOTAL"));
    }
}
