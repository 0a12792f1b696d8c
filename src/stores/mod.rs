// State management
// The joke widget controller and the async flows that drive it

pub mod joke_widget;
pub mod widget_actions;
