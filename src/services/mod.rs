// Services
// Network and platform access behind small traits

pub mod clipboard;
pub mod joke_api;

pub use clipboard::WebClipboard;
pub use joke_api::IcanhazdadjokeApi;
