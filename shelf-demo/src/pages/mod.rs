mod shelf;

pub use shelf::Shelf;
