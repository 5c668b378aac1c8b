//! Individual UI component renderers.
//!
//! Each component renders one region of the pane from viewmodel data and
//! returns the next free row, so the page renderer can stack them without
//! tracking layout constants itself.

pub mod empty;
pub mod footer;
pub mod header;
pub mod list;
pub mod loading;
pub mod search;

pub use empty::{render_header_message, render_type_to_search};
pub use footer::render_footer;
pub use header::render_header;
pub use list::render_list;
pub use loading::render_loading;
pub use search::render_search;
