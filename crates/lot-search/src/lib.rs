//! Lot Search: reverse lookup from ticket id or plate to spot
pub mod index;

pub use index::SearchIndex;
