/// Sort commands and the search box
///
/// The four sort buttons share one row with the search input. The button
/// matching the active sort spec is drawn with the primary style so the
/// current choice is always visible; picking another clears it.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::sort::SortSpec;
use crate::Message;

/// Build the toolbar row: four sort commands plus the search input
pub fn toolbar<'a>(active: SortSpec, search_input: &'a str) -> Element<'a, Message> {
    row![
        sort_button("Name A-Z", SortSpec::NAME_ASC, active),
        sort_button("Name Z-A", SortSpec::NAME_DESC, active),
        sort_button("Most episodes", SortSpec::EPISODES_DESC, active),
        sort_button("Fewest episodes", SortSpec::EPISODES_ASC, active),
        text_input("Search by name…", search_input)
            .on_input(Message::SearchInputChanged)
            .padding(8)
            .width(Length::Fixed(240.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn sort_button(label: &str, spec: SortSpec, active: SortSpec) -> Element<'_, Message> {
    let style = if spec == active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .on_press(Message::SortPressed(spec))
        .style(style)
        .padding(8)
        .into()
}
