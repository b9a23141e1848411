//! Demo data
//!
//! Builds the starting collection from fixture books so the UI can run
//! without any backing store.

use serde::Deserialize;
use shelf_common::{Book, Collection};
use tracing::{info, warn};

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/books.json");

#[derive(Debug, Deserialize)]
struct FixtureData {
    groups: Vec<String>,
    books: Vec<FixtureBook>,
}

#[derive(Debug, Deserialize)]
struct FixtureBook {
    group: String,
    #[serde(flatten)]
    book: Book,
}

/// Starting collection: the default group, the fixture groups, and the
/// fixture books placed into their groups.
pub fn collection() -> Collection {
    let fixture: FixtureData =
        serde_json::from_str(FIXTURE_JSON).expect("Failed to parse fixture JSON");
    build_collection(fixture)
}

fn build_collection(fixture: FixtureData) -> Collection {
    let mut collection = Collection::default();

    for name in &fixture.groups {
        if let Err(e) = collection.add_group(name) {
            warn!("Skipping fixture group: {e}");
        }
    }

    for FixtureBook { group, book } in fixture.books {
        if let Err(e) = collection.add_book(&group, book) {
            warn!("Skipping fixture book: {e}");
        }
    }

    info!(
        "Loaded {} books in {} groups",
        collection.books().count(),
        collection.groups().len()
    );
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses_into_groups() {
        let collection = collection();
        let names: Vec<_> = collection.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Reading List", "Fiction", "History"]);
        assert_eq!(collection.books().count(), 4);
    }

    #[test]
    fn test_unknown_group_book_is_skipped() {
        let fixture: FixtureData = serde_json::from_str(
            r#"{"groups": [], "books": [{"group": "Poetry", "id": 9, "title": "Odes"}]}"#,
        )
        .unwrap();
        let collection = build_collection(fixture);
        assert_eq!(collection.books().count(), 0);
    }
}
