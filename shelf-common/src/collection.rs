//! In-memory book collection
//!
//! Owns the groups that the view components render and applies the
//! mutations they request. Always holds at least one group.

use crate::book::{Book, BookId, Group, Rating};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the group created for an empty collection
pub const DEFAULT_GROUP_NAME: &str = "Reading List";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("A collection needs at least one group")]
    NoGroups,
    #[error("Group name cannot be empty")]
    EmptyGroupName,
    #[error("Group already exists: {0}")]
    DuplicateGroup(String),
    #[error("No such group: {0}")]
    UnknownGroup(String),
    #[error("No book {book_id} in {location}")]
    UnknownBook { book_id: BookId, location: String },
    #[error("Book {book_id} is already in group {group}")]
    DuplicateBook { book_id: BookId, group: String },
    #[error("Cannot delete the last group: {0}")]
    LastGroup(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    groups: Vec<Group>,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            groups: vec![Group::new(DEFAULT_GROUP_NAME)],
        }
    }
}

impl Collection {
    pub fn new(groups: Vec<Group>) -> Result<Self, CollectionError> {
        if groups.is_empty() {
            return Err(CollectionError::NoGroups);
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Every book paired with the group holding it
    pub fn books(&self) -> impl Iterator<Item = (&Group, &Book)> {
        self.groups
            .iter()
            .flat_map(|group| group.books.iter().map(move |book| (group, book)))
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut Group, CollectionError> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| CollectionError::UnknownGroup(name.to_string()))
    }

    /// Set the rating of every book with this ISBN. Returns how many changed.
    pub fn rate(&mut self, isbn: &str, rating: Rating) -> usize {
        let mut updated = 0;
        for book in self.groups.iter_mut().flat_map(|g| g.books.iter_mut()) {
            if book.isbn == isbn {
                book.rating = rating;
                updated += 1;
            }
        }
        debug!("Rated {updated} book(s) with isbn {isbn} at {rating}");
        updated
    }

    /// Remove a book from the named group
    pub fn remove_book(&mut self, book_id: BookId, group: &str) -> Result<Book, CollectionError> {
        let group = self.group_mut(group)?;
        let index = group
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| CollectionError::UnknownBook {
                book_id,
                location: format!("group {}", group.name),
            })?;
        info!("Removing book {book_id} from group {}", group.name);
        Ok(group.books.remove(index))
    }

    /// Remove a book from whichever group holds it
    pub fn delete_book(&mut self, book_id: BookId) -> Result<Book, CollectionError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.book(book_id).is_some())
            .map(|g| g.name.clone())
            .ok_or_else(|| CollectionError::UnknownBook {
                book_id,
                location: "the collection".to_string(),
            })?;
        self.remove_book(book_id, &group)
    }

    /// Append a new empty group
    pub fn add_group(&mut self, name: &str) -> Result<(), CollectionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyGroupName);
        }
        if self.groups.iter().any(|g| g.name == name) {
            return Err(CollectionError::DuplicateGroup(name.to_string()));
        }
        info!("Adding group {name}");
        self.groups.push(Group::new(name));
        Ok(())
    }

    /// Delete a group and its books. The last group cannot be deleted.
    pub fn delete_group(&mut self, name: &str) -> Result<Group, CollectionError> {
        let index = self
            .groups
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| CollectionError::UnknownGroup(name.to_string()))?;
        if self.groups.len() == 1 {
            return Err(CollectionError::LastGroup(name.to_string()));
        }
        info!("Deleting group {name}");
        Ok(self.groups.remove(index))
    }

    /// Store a comment on a book within a group
    pub fn save_comment(
        &mut self,
        book_id: BookId,
        group: &str,
        text: &str,
    ) -> Result<(), CollectionError> {
        let group = self.group_mut(group)?;
        let group_name = group.name.clone();
        let book = group
            .book_mut(book_id)
            .ok_or_else(|| CollectionError::UnknownBook {
                book_id,
                location: format!("group {group_name}"),
            })?;
        book.comment = Some(text.to_string());
        debug!("Saved comment on book {book_id} in group {group_name}");
        Ok(())
    }

    /// Add a book to a group. A book may only belong to one group.
    pub fn add_book(&mut self, group: &str, book: Book) -> Result<(), CollectionError> {
        if let Some(owner) = self.groups.iter().find(|g| g.book(book.id).is_some()) {
            return Err(CollectionError::DuplicateBook {
                book_id: book.id,
                group: owner.name.clone(),
            });
        }
        let group = self.group_mut(group)?;
        info!("Adding book {} to group {}", book.id, group.name);
        group.books.push(book);
        Ok(())
    }
}
