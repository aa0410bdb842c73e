pub mod app;
pub mod clipboard;
pub mod completion;
pub mod components;
pub mod dialog;
pub mod events;
pub mod form;
pub mod theme;
pub mod ui;

pub use app::{App, Screen};
pub use completion::Completion;
