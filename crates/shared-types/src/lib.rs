pub mod error;
pub mod feature_flags;

pub mod models;
pub mod school;

pub mod academics;
pub mod finance;
pub mod ideas;

pub mod directory;
pub mod navigation;
pub mod seed;
pub mod session;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use school::*;

pub use academics::*;
pub use finance::*;
pub use ideas::*;

pub use directory::*;
pub use navigation::*;
pub use session::*;
