// Serialisable views of the store for presentation.
pub mod game_screen;
pub mod standings_screen;
