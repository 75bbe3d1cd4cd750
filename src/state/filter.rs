/// Live name filter over the collection list
///
/// Filtering is purely a presentation toggle. It flips each card's
/// `visible` flag and touches nothing else, so it composes with the sort
/// order and never disturbs list membership or the favorites ledger.
/// Favorites are never filtered.

use super::data::Card;

#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Store the active search text, lowercased once up front
    pub fn set_needle(&mut self, text: &str) {
        self.needle = text.to_lowercase();
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Apply the needle to the collection list
    ///
    /// A card is visible when its lowercased name contains the needle; the
    /// empty needle matches everything. Returns how many cards stayed
    /// visible so the view can show its "no results" line at zero.
    pub fn apply(&self, cards: &mut [Card]) -> usize {
        let mut visible = 0;
        for card in cards.iter_mut() {
            card.visible = card.character.name.to_lowercase().contains(&self.needle);
            if card.visible {
                visible += 1;
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Character;

    fn card(name: &str) -> Card {
        Card::new(Character {
            id: 1,
            name: name.to_string(),
            image_url: String::new(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            episode_count: 1,
        })
    }

    #[test]
    fn test_needle_matches_substrings_case_insensitively() {
        let mut cards = vec![
            card("Rick Sanchez"),
            card("Morty Smith"),
            card("Summer Smith"),
        ];

        let mut filter = NameFilter::default();
        filter.set_needle("SM");
        let visible = filter.apply(&mut cards);

        assert_eq!(visible, 2);
        assert!(!cards[0].visible);
        assert!(cards[1].visible);
        assert!(cards[2].visible);
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let mut cards = vec![card("Rick Sanchez"), card("Morty Smith")];

        let mut filter = NameFilter::default();
        filter.set_needle("rick");
        filter.apply(&mut cards);
        filter.set_needle("");
        let visible = filter.apply(&mut cards);

        assert_eq!(visible, 2);
        assert!(cards.iter().all(|c| c.visible));
    }

    #[test]
    fn test_no_match_leaves_zero_visible() {
        let mut cards = vec![card("Rick Sanchez")];

        let mut filter = NameFilter::default();
        filter.set_needle("jerry");

        assert_eq!(filter.apply(&mut cards), 0);
    }
}
