pub mod components;
pub mod theme;

pub use components::*;
pub use theme::*;
