// Standalone components
pub mod badge;
pub mod bar_chart;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;
pub mod dialog;
pub mod progress;

// Layout
pub mod sidebar;

pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
