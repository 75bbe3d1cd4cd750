/// Character card widgets
///
/// A card shows the portrait, name, and status/species lines. The whole
/// card is one click target; clicking it asks the card store to toggle the
/// character's membership. Cards are laid out in a wrapping grid.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::data::Card;
use crate::Message;

/// Width of one card in logical pixels
const CARD_WIDTH: f32 = 180.0;
/// Height reserved for the portrait area
const PORTRAIT_HEIGHT: f32 = 160.0;

/// Build a single clickable character card
pub fn character_card<'a>(
    card: &'a Card,
    portrait: Option<&image::Handle>,
) -> Element<'a, Message> {
    let portrait: Element<'a, Message> = match portrait {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PORTRAIT_HEIGHT))
            .into(),
        // Portrait still downloading (or failed); keep the slot stable
        None => container(text("…").size(24))
            .width(Length::Fill)
            .center_y(Length::Fixed(PORTRAIT_HEIGHT))
            .center_x(Length::Fill)
            .into(),
    };

    let details = column![
        portrait,
        text(&card.character.name).size(16),
        text(format!("Status: {}", card.character.status)).size(12),
        text(format!("Species: {}", card.character.species)).size(12),
    ]
    .spacing(4);

    button(details)
        .on_press(Message::CardClicked(card.character.id))
        .style(button::secondary)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(10)
        .into()
}

/// Lay cards out in a wrapping grid
pub fn card_grid<'a>(
    cards: impl Iterator<Item = &'a Card>,
    portraits: &HashMap<i64, image::Handle>,
) -> Element<'a, Message> {
    let elements: Vec<Element<'a, Message>> = cards
        .map(|card| character_card(card, portraits.get(&card.character.id)))
        .collect();

    Wrap::with_elements(elements)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}
