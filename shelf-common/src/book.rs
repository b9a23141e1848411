use serde::{Deserialize, Serialize};

/// Book identity within the collection. Distinct from the ISBN, which only
/// keys rating changes.
pub type BookId = u64;

/// Star rating, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `stars` is outside `1..=5`.
    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(Self::MIN)
    }
}

/// Lenient conversion used when reading stored data: an unset (0) rating
/// becomes the default, anything above the scale saturates.
impl From<u8> for Rating {
    fn from(stars: u8) -> Self {
        Rating(stars.clamp(Self::MIN, Self::MAX))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cover image URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cover {
    pub large: String,
}

/// A book as displayed in cards and group tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Book {
    /// Large cover URL, or an empty string when the book has no cover
    pub fn cover_url(&self) -> &str {
        self.cover.as_ref().map(|c| c.large.as_str()).unwrap_or("")
    }

    /// Stored comment, or an empty string when none was saved yet
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// A named, ordered collection of books. The name is the only identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_new_rejects_out_of_range() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::new(3).map(Rating::stars), Some(3));
    }

    #[test]
    fn test_book_defaults_when_fields_missing() {
        let book: Book = serde_json::from_str(r#"{"id": 7, "title": "Dune"}"#).unwrap();
        assert_eq!(book.rating, Rating::default());
        assert_eq!(book.rating.stars(), 1);
        assert_eq!(book.cover_url(), "");
        assert_eq!(book.comment_text(), "");
    }

    #[test]
    fn test_zero_rating_reads_as_one() {
        let book: Book =
            serde_json::from_str(r#"{"id": 1, "title": "Dune", "rating": 0}"#).unwrap();
        assert_eq!(book.rating.stars(), 1);
    }

    #[test]
    fn test_oversized_rating_saturates() {
        let book: Book =
            serde_json::from_str(r#"{"id": 1, "title": "Dune", "rating": 9}"#).unwrap();
        assert_eq!(book.rating.stars(), 5);
    }

    #[test]
    fn test_cover_url() {
        let book: Book = serde_json::from_str(
            r#"{"id": 1, "title": "Dune", "cover": {"large": "https://covers/dune-L.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(book.cover_url(), "https://covers/dune-L.jpg");
    }

    #[test]
    fn test_rating_serializes_as_number() {
        let json = serde_json::to_string(&Rating::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
    }
}
