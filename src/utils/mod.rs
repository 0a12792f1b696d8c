// Utility functions
// Helper types for state, cancellation, timers and DOM effects

pub mod animation;
pub mod cancel;
pub mod display_state;
pub mod time;
