mod actions;
mod deck;
mod settings;

pub use actions::show_actions;
pub use deck::{DeckViewState, show_deck};
pub use settings::show_settings;
