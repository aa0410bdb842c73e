pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::{AppConfig, ViewModePreference};
pub use error::VaultError;
pub use input::InputState;
pub use result::VaultResult;
pub use selection::SelectionState;
