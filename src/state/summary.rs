/// Species summary over the favorites list
///
/// The summary is recomputed from scratch after every mutation. The
/// favorites list is small, and a full recount cannot drift from the list
/// the way an incrementally maintained tally could.

use super::data::Card;

/// Species bucket used when the API payload carries no species
const UNKNOWN_SPECIES: &str = "Unknown";

/// Per-species counts plus a total, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesSummary {
    counts: Vec<(String, usize)>,
    total: usize,
}

impl SpeciesSummary {
    /// Count one card under its species bucket
    fn record(&mut self, species: &str) {
        let species = if species.is_empty() {
            UNKNOWN_SPECIES
        } else {
            species
        };

        match self.counts.iter_mut().find(|(name, _)| name == species) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((species.to_string(), 1)),
        }
        self.total += 1;
    }

    /// Species and count pairs in the order each species first appeared
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Build the summary for the given favorites list
pub fn summarize(favorites: &[Card]) -> SpeciesSummary {
    let mut summary = SpeciesSummary::default();
    for card in favorites {
        summary.record(&card.character.species);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Card, Character};

    fn card(species: &str) -> Card {
        Card::new(Character {
            id: 1,
            name: "Someone".to_string(),
            image_url: String::new(),
            status: "Alive".to_string(),
            species: species.to_string(),
            episode_count: 1,
        })
    }

    #[test]
    fn test_counts_species_and_total() {
        let favorites = vec![card("Human"), card("Human"), card("Alien")];
        let summary = summarize(&favorites);

        assert_eq!(summary.total(), 3);
        assert_eq!(
            summary.counts(),
            &[("Human".to_string(), 2), ("Alien".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_favorites_is_explicitly_empty() {
        let summary = summarize(&[]);

        assert_eq!(summary.total(), 0);
        assert!(summary.is_empty());
        assert!(summary.counts().is_empty());
    }

    #[test]
    fn test_missing_species_counts_as_unknown() {
        let favorites = vec![card(""), card("Robot")];
        let summary = summarize(&favorites);

        assert_eq!(
            summary.counts(),
            &[("Unknown".to_string(), 1), ("Robot".to_string(), 1)]
        );
    }

    #[test]
    fn test_order_is_first_appearance() {
        let favorites = vec![card("Alien"), card("Human"), card("Alien")];
        let summary = summarize(&favorites);

        assert_eq!(summary.counts()[0].0, "Alien");
        assert_eq!(summary.counts()[1].0, "Human");
    }
}
