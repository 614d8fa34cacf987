use super::types::{Gallery, Image};

/// Sorts galleries for listing pages: year descending, then sort_order
/// ascending. Ties beyond those two keys keep their incoming order.
pub fn sort_galleries(galleries: &mut [Gallery]) {
    galleries.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.sort_order.cmp(&b.sort_order))
    });
}

/// Sorts a gallery's images by sort_order ascending.
///
/// The DynamoDB backend gets this ordering from the index sort key; the
/// in-memory backend applies it explicitly so both return the same shape.
pub fn sort_images(images: &mut [Image]) {
    images.sort_by(|a, b| a.sort_order.cmp(&b.sort_order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn gallery(id: &str, year: i32, sort_order: i32) -> Gallery {
        Gallery {
            id: id.to_string(),
            title: format!("Gallery {id}"),
            year,
            location: "Somewhere".to_string(),
            cover_image_id: String::new(),
            sort_order,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn image(id: &str, sort_order: i32) -> Image {
        Image {
            id: id.to_string(),
            gallery_id: "g1".to_string(),
            original_url: String::new(),
            optimized_url: String::new(),
            thumbnail_url: String::new(),
            caption: None,
            width: 100,
            height: 100,
            sort_order,
            created_at: ts(),
        }
    }

    #[test]
    fn galleries_sort_year_descending_then_order_ascending() {
        let mut galleries = vec![
            gallery("a", 2022, 1),
            gallery("b", 2024, 2),
            gallery("c", 2024, 0),
            gallery("d", 2023, 5),
        ];

        sort_galleries(&mut galleries);

        let ids: Vec<&str> = galleries.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn galleries_with_same_year_sort_by_order() {
        let mut galleries = vec![
            gallery("a", 2024, 3),
            gallery("b", 2024, 1),
            gallery("c", 2024, 2),
        ];

        sort_galleries(&mut galleries);

        let ids: Vec<&str> = galleries.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn images_sort_by_order_ascending() {
        let mut images = vec![image("x", 2), image("y", 0), image("z", 1)];

        sort_images(&mut images);

        let ids: Vec<&str> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "z", "x"]);
    }
}
