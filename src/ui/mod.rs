/// UI widget helpers
///
/// Small builders for the pieces the main view composes:
/// - Character cards and the wrapped card grid (card.rs)
/// - Sort buttons and the search box (controls.rs)
/// - The favorites species panel (summary.rs)

pub mod card;
pub mod controls;
pub mod summary;
