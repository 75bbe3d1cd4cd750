/// The card store: every loaded character, partitioned into two lists
///
/// Each character owns exactly one card and each card lives in exactly one
/// of the two lists. Membership is expressed by which list holds the card,
/// so membership and placement cannot drift apart. All mutations funnel
/// through `handle_toggle`, which keeps the ledger, the species summary,
/// and the sort order of both lists consistent in one step.

use super::data::{Card, Character, ListKind};
use super::favorites::FavoritesLedger;
use super::sort::{self, SortSpec};
use super::storage::Storage;
use super::summary::{self, SpeciesSummary};

#[derive(Debug, Default)]
pub struct CardStore {
    collection: Vec<Card>,
    favorites: Vec<Card>,
}

impl CardStore {
    /// Build the store from freshly fetched characters.
    ///
    /// Characters whose id is in the ledger start in Favorites, everyone
    /// else in Collection. Must run before any other operation; a retried
    /// load rebuilds the store from scratch the same way.
    pub fn initialize(characters: Vec<Character>, ledger: &FavoritesLedger) -> Self {
        let mut store = Self::default();

        for character in characters {
            let card = Card::new(character);
            if ledger.contains(card.character.id) {
                store.favorites.push(card);
            } else {
                store.collection.push(card);
            }
        }

        store
    }

    /// Which list currently holds the card for `id`
    pub fn membership(&self, id: i64) -> Option<ListKind> {
        if self.collection.iter().any(|c| c.character.id == id) {
            Some(ListKind::Collection)
        } else if self.favorites.iter().any(|c| c.character.id == id) {
            Some(ListKind::Favorites)
        } else {
            None
        }
    }

    /// Move the card for `id` into `target`.
    ///
    /// Unknown ids and cards already in `target` are no-ops. Returns true
    /// when a card actually moved.
    pub fn move_card(&mut self, id: i64, target: ListKind) -> bool {
        let (source, destination) = match target {
            ListKind::Favorites => (&mut self.collection, &mut self.favorites),
            ListKind::Collection => (&mut self.favorites, &mut self.collection),
        };

        match source.iter().position(|c| c.character.id == id) {
            Some(index) => {
                let card = source.remove(index);
                destination.push(card);
                true
            }
            None => false,
        }
    }

    /// The single mutation entry point behind a card click.
    ///
    /// Flips the card's membership and then, in fixed order: updates and
    /// persists the ledger, recomputes the favorites summary, and re-applies
    /// the sort spec to both lists. Returns the fresh summary, or None for
    /// an unknown id (which must stay harmless).
    pub fn handle_toggle(
        &mut self,
        id: i64,
        ledger: &mut FavoritesLedger,
        storage: &Storage,
        spec: SortSpec,
    ) -> Option<SpeciesSummary> {
        let target = match self.membership(id)? {
            ListKind::Collection => ListKind::Favorites,
            ListKind::Favorites => ListKind::Collection,
        };
        self.move_card(id, target);

        match target {
            ListKind::Favorites => ledger.add(id),
            ListKind::Collection => ledger.remove(id),
        }
        ledger.save(storage);

        let summary = summary::summarize(&self.favorites);

        self.apply_sort(spec);

        Some(summary)
    }

    /// Re-apply the sort spec to both lists.
    ///
    /// A move changes which list a card sits in but the spec is global, so
    /// both sequences are reordered after every structural change.
    pub fn apply_sort(&mut self, spec: SortSpec) {
        sort::apply(&mut self.collection, spec);
        sort::apply(&mut self.favorites, spec);
    }

    pub fn collection(&self) -> &[Card] {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut [Card] {
        &mut self.collection
    }

    pub fn favorites(&self) -> &[Card] {
        &self.favorites
    }

    /// Every card in the store, collection first
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.collection.iter().chain(self.favorites.iter())
    }

    pub fn len(&self) -> usize {
        self.collection.len() + self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty() && self.favorites.is_empty()
    }
}
