/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer, the card store, and the UI layer.

/// Represents a single character fetched from the API
///
/// Immutable once created. `species` drives the favorites summary and
/// `episode_count` drives the episode sort, so both are kept here as
/// first-class fields instead of being re-derived from rendered output.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Unique API id
    pub id: i64,
    /// Display name (e.g., "Rick Sanchez")
    pub name: String,
    /// URL of the portrait image
    pub image_url: String,
    /// Life status ("Alive", "Dead", "unknown")
    pub status: String,
    /// Species label, may be empty in the API payload
    pub species: String,
    /// Number of episodes the character appears in
    pub episode_count: usize,
}

/// The two lists a card can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Collection,
    Favorites,
}

/// A view-bound wrapper over exactly one character
///
/// Which list holds the card is the card's membership, so membership and
/// list placement cannot diverge. `visible` is the outcome of the name
/// filter and only ever applies to collection cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub character: Character,
    pub visible: bool,
}

impl Card {
    /// Create a fresh, visible card for a character
    pub fn new(character: Character) -> Self {
        Self {
            character,
            visible: true,
        }
    }
}
