use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use std::collections::HashMap;
use std::time::Duration;

// Declare the application modules
mod net;
mod state;
mod ui;

use net::source::{self, CHARACTER_LIMIT, PAGE_URLS};
use state::cards::CardStore;
use state::data::Character;
use state::favorites::FavoritesLedger;
use state::filter::NameFilter;
use state::sort::SortSpec;
use state::storage::{Storage, SEARCH_TERM_KEY};
use state::summary::{summarize, SpeciesSummary};

/// Quiet period between the last keystroke and the filter run
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Where the catalog is in its load cycle
#[derive(Debug, Clone)]
enum LoadState {
    /// The page fan-out is in flight
    Loading,
    /// A page failed; the whole load failed and can be retried
    Failed(String),
    /// Cards are built and on screen
    Ready,
}

/// Main application state
struct Catalog {
    /// Durable key-value storage for favorites and the search term
    storage: Storage,
    /// Persisted set of favorite character ids
    ledger: FavoritesLedger,
    /// Every loaded card, split into collection and favorites
    store: CardStore,
    /// Load cycle state driving which screen is shown
    load: LoadState,
    /// The remembered global sort choice
    sort_spec: SortSpec,
    /// The live name filter over the collection
    filter: NameFilter,
    /// Raw contents of the search box (filter applies after the debounce)
    search_input: String,
    /// Bumped per keystroke; stale debounce windows are dropped
    search_generation: u64,
    /// Collection cards left visible by the filter
    visible_count: usize,
    /// Species summary over the favorites list
    summary: SpeciesSummary,
    /// Downloaded portraits keyed by character id
    portraits: HashMap<i64, image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Every page arrived, or the first failure did
    CharactersLoaded(Result<Vec<Character>, String>),
    /// User clicked Retry on the failure panel
    RetryPressed,
    /// User clicked a card to toggle its membership
    CardClicked(i64),
    /// User picked one of the four sort commands
    SortPressed(SortSpec),
    /// Keystroke in the search box
    SearchInputChanged(String),
    /// A debounce window elapsed for the given generation
    SearchElapsed(u64),
    /// A card portrait finished downloading
    PortraitLoaded(i64, Result<Vec<u8>, String>),
}

impl Catalog {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because nothing can be persisted without it
        let storage = Storage::new()
            .expect("Failed to initialize storage. Check permissions and disk space.");

        let ledger = FavoritesLedger::load(&storage);
        println!("⭐ Restored {} favorites", ledger.len());

        // Restore the previous search so the session picks up where it left off
        let search_input = storage
            .get(SEARCH_TERM_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        let mut filter = NameFilter::default();
        filter.set_needle(&search_input);

        let catalog = Catalog {
            storage,
            ledger,
            store: CardStore::default(),
            load: LoadState::Loading,
            sort_spec: SortSpec::default(),
            filter,
            search_input,
            search_generation: 0,
            visible_count: 0,
            summary: SpeciesSummary::default(),
            portraits: HashMap::new(),
        };

        (catalog, load_characters())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CharactersLoaded(Ok(characters)) => {
                // Rebuild everything from scratch: cards from the ledger,
                // then sort, filter, and summary in that order
                self.store = CardStore::initialize(characters, &self.ledger);
                self.store.apply_sort(self.sort_spec);
                self.visible_count = self.filter.apply(self.store.collection_mut());
                self.summary = summarize(self.store.favorites());
                self.load = LoadState::Ready;

                println!(
                    "✅ Catalog ready: {} in collection, {} favorites",
                    self.store.collection().len(),
                    self.store.favorites().len()
                );

                self.fetch_missing_portraits()
            }
            Message::CharactersLoaded(Err(error)) => {
                eprintln!("❌ Error fetching characters: {error}");
                self.load = LoadState::Failed(error);
                Task::none()
            }
            Message::RetryPressed => {
                self.load = LoadState::Loading;
                load_characters()
            }
            Message::CardClicked(id) => {
                if let Some(summary) =
                    self.store
                        .handle_toggle(id, &mut self.ledger, &self.storage, self.sort_spec)
                {
                    self.summary = summary;
                    // A card returning to the collection must respect the
                    // active needle, and the no-results line must stay honest
                    self.visible_count = self.filter.apply(self.store.collection_mut());
                }
                Task::none()
            }
            Message::SortPressed(spec) => {
                self.sort_spec = spec;
                self.store.apply_sort(spec);
                Task::none()
            }
            Message::SearchInputChanged(value) => {
                self.search_input = value;
                self.search_generation += 1;
                let generation = self.search_generation;

                Task::perform(
                    async move {
                        tokio::time::sleep(SEARCH_DEBOUNCE).await;
                        generation
                    },
                    Message::SearchElapsed,
                )
            }
            Message::SearchElapsed(generation) => {
                // Only the latest pending window runs the filter
                if generation == self.search_generation {
                    if let Err(e) = self.storage.set(SEARCH_TERM_KEY, &self.search_input) {
                        eprintln!("⚠️  Error saving search term: {e}");
                    }
                    self.filter.set_needle(&self.search_input);
                    self.visible_count = self.filter.apply(self.store.collection_mut());
                }
                Task::none()
            }
            Message::PortraitLoaded(id, Ok(bytes)) => {
                self.portraits.insert(id, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::PortraitLoaded(id, Err(error)) => {
                // The card keeps its placeholder; not a load failure
                eprintln!("⚠️  Error loading portrait for character {id}: {error}");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.load {
            LoadState::Loading => container(text("Loading characters…").size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
            LoadState::Failed(error) => {
                let panel = column![
                    text("We couldn't load characters. Check your connection or try again.")
                        .size(18),
                    text(error).size(13),
                    button("Retry").on_press(Message::RetryPressed).padding(10),
                ]
                .spacing(16)
                .align_x(Alignment::Center);

                container(panel)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into()
            }
            LoadState::Ready => self.catalog_view(),
        }
    }

    /// The main two-list screen
    fn catalog_view(&self) -> Element<Message> {
        let toolbar = ui::controls::toolbar(self.sort_spec, &self.search_input);

        let mut collection = column![
            text(format!("Full Collection ({})", self.store.collection().len())).size(24),
            ui::card::card_grid(
                self.store.collection().iter().filter(|c| c.visible),
                &self.portraits
            ),
        ]
        .spacing(12);
        if self.visible_count == 0 {
            collection = collection.push(text("No results. Try a different name.").size(14));
        }

        let favorites = column![
            text(format!("Favorites ({})", self.store.favorites().len())).size(24),
            ui::summary::species_panel(&self.summary),
            ui::card::card_grid(self.store.favorites().iter(), &self.portraits),
        ]
        .spacing(12);

        let body = row![
            collection.width(Length::FillPortion(3)),
            favorites.width(Length::FillPortion(2)),
        ]
        .spacing(24);

        scrollable(column![toolbar, body].spacing(20).padding(24)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Queue a download task for every portrait not cached yet
    fn fetch_missing_portraits(&self) -> Task<Message> {
        let mut tasks = Vec::new();

        for card in self.store.iter() {
            let id = card.character.id;
            if self.portraits.contains_key(&id) {
                continue;
            }
            let url = card.character.image_url.clone();

            tasks.push(Task::perform(
                async move {
                    let bytes = reqwest::get(&url)
                        .await
                        .map_err(|e| e.to_string())?
                        .bytes()
                        .await
                        .map_err(|e| e.to_string())?;
                    Ok(bytes.to_vec())
                },
                move |result| Message::PortraitLoaded(id, result),
            ));
        }

        Task::batch(tasks)
    }
}

/// Kick off the all-or-nothing page fan-out
fn load_characters() -> Task<Message> {
    let urls: Vec<String> = PAGE_URLS.iter().map(|url| url.to_string()).collect();

    Task::perform(
        async move {
            source::fetch_characters(urls, CHARACTER_LIMIT)
                .await
                .map_err(|e| e.to_string())
        },
        Message::CharactersLoaded,
    )
}

fn main() -> iced::Result {
    iced::application(
        "Character Catalog",
        Catalog::update,
        Catalog::view,
    )
    .theme(Catalog::theme)
    .centered()
    .run_with(Catalog::new)
}
