// UI Components

pub mod error_banner;
pub mod joke_card;

pub use joke_card::JokeCard;
