//! Turn engine for the card game. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod effects;
pub mod events;
pub mod rng;
pub mod state;

pub use cards::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use rng::*;
pub use state::*;
