//! Terminal UI layer.
//!
//! State is projected into a [`viewmodel::UIViewModel`] and rendered by small
//! component functions that print ANSI sequences directly, as Zellij plugin
//! panes expect.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{FooterInfo, OptionRow, SearchBoxInfo, UIViewModel};
