pub mod use_joke_widget;

pub use use_joke_widget::use_joke_widget;
