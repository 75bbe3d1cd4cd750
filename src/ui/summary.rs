/// Favorites species panel
///
/// Renders the per-species counts over the favorites list, or an explicit
/// empty state when nothing is favorited yet.

use iced::widget::{column, text};
use iced::Element;

use crate::state::summary::SpeciesSummary;
use crate::Message;

pub fn species_panel(summary: &SpeciesSummary) -> Element<'_, Message> {
    let mut panel = column![
        text(format!("Total Characters in Favorites: {}", summary.total())).size(18),
    ]
    .spacing(4);

    if summary.is_empty() {
        panel = panel.push(text("No species in favorites.").size(14));
    } else {
        for (species, count) in summary.counts() {
            panel = panel.push(text(format!("{species}: {count}")).size(14));
        }
    }

    panel.into()
}
