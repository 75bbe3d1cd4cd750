/// Sort specification and the ordering engine
///
/// A single sort spec applies to both card lists. Moving a card between
/// lists never resets it; the application re-applies the remembered spec
/// to both lists after every structural change.

use std::cmp::Ordering;

use super::data::Card;

/// Which field the primary comparison reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Episodes,
}

/// The process-wide sort choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortSpec {
    /// Names A to Z, the order the catalog opens with
    fn default() -> Self {
        Self {
            field: SortField::Name,
            ascending: true,
        }
    }
}

impl SortSpec {
    pub const NAME_ASC: Self = Self {
        field: SortField::Name,
        ascending: true,
    };
    pub const NAME_DESC: Self = Self {
        field: SortField::Name,
        ascending: false,
    };
    pub const EPISODES_DESC: Self = Self {
        field: SortField::Episodes,
        ascending: false,
    };
    pub const EPISODES_ASC: Self = Self {
        field: SortField::Episodes,
        ascending: true,
    };
}

/// Stably reorder a card list in place according to `spec`
///
/// Episode ties fall back to the name comparison so the resulting order is
/// a deterministic total order; `ascending` flips the primary comparison
/// only, never the tie-break. Re-applying an unchanged spec to an already
/// sorted list leaves it untouched.
pub fn apply(cards: &mut [Card], spec: SortSpec) {
    cards.sort_by(|a, b| compare(a, b, spec));
}

fn compare(a: &Card, b: &Card, spec: SortSpec) -> Ordering {
    let primary = match spec.field {
        SortField::Name => compare_names(a, b),
        SortField::Episodes => a.character.episode_count.cmp(&b.character.episode_count),
    };

    let directed = if spec.ascending {
        primary
    } else {
        primary.reverse()
    };

    match spec.field {
        SortField::Name => directed,
        // Tie-break equal episode counts by name, always ascending
        SortField::Episodes => directed.then_with(|| compare_names(a, b)),
    }
}

/// Case-insensitive name comparison shared by both sort fields
fn compare_names(a: &Card, b: &Card) -> Ordering {
    a.character
        .name
        .to_lowercase()
        .cmp(&b.character.name.to_lowercase())
}
