use crate::book::{Book, Rating};

/// Rating change request, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingChange {
    pub isbn: String,
    pub rating: Rating,
}

/// Optimistic star rating state for a single book card.
///
/// Initialized once from the book; later prop changes do not reset it.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    isbn: String,
    rating: Rating,
}

impl StarRating {
    pub fn new(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            rating: book.rating,
        }
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Click star `star` (1-based). Sets the rating to exactly that star and
    /// returns the change to report. Stars outside `1..=5` are ignored.
    pub fn click(&mut self, star: u8) -> Option<RatingChange> {
        let rating = Rating::new(star)?;
        self.rating = rating;
        Some(RatingChange {
            isbn: self.isbn.clone(),
            rating,
        })
    }

    /// Star numbers paired with whether each is filled
    pub fn stars(&self) -> [(u8, bool); 5] {
        std::array::from_fn(|i| {
            let star = i as u8 + 1;
            (star, star <= self.rating.stars())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(rating: u8) -> Book {
        Book {
            id: 1,
            isbn: "9780441013593".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            cover: None,
            rating: Rating::from(rating),
            comment: None,
        }
    }

    #[test]
    fn test_initial_rating_from_book() {
        let stars = StarRating::new(&book(3));
        assert_eq!(stars.rating().stars(), 3);
    }

    #[test]
    fn test_click_sets_exact_rating_and_reports_isbn() {
        for k in 1..=5 {
            let mut stars = StarRating::new(&book(3));
            let change = stars.click(k).unwrap();
            assert_eq!(stars.rating().stars(), k);
            assert_eq!(change.isbn, "9780441013593");
            assert_eq!(change.rating.stars(), k);
        }
    }

    #[test]
    fn test_click_same_star_is_not_a_toggle() {
        let mut stars = StarRating::new(&book(2));
        stars.click(2);
        assert_eq!(stars.rating().stars(), 2);
    }

    #[test]
    fn test_click_out_of_range_ignored() {
        let mut stars = StarRating::new(&book(4));
        assert_eq!(stars.click(0), None);
        assert_eq!(stars.click(6), None);
        assert_eq!(stars.rating().stars(), 4);
    }

    #[test]
    fn test_filled_stars() {
        let stars = StarRating::new(&book(2));
        assert_eq!(
            stars.stars(),
            [(1, true), (2, true), (3, false), (4, false), (5, false)]
        );
    }
}
