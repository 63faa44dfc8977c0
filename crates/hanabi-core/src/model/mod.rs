pub mod card;
pub mod colour;
pub mod deck;
pub mod hand;
pub mod moves;
pub mod player;
pub mod state;
pub mod value;
