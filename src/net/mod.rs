/// Network module
///
/// This module talks to the character API:
/// - Concurrent page fetches with an all-or-nothing outcome (source.rs)

pub mod source;
