pub mod cards;
pub mod popup;

pub use cards::*;
pub use popup::*;
