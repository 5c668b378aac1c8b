//! Header component renderer.
//!
//! Renders the pane title bar: centered bold title with a back hint anchored
//! to the left edge.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::viewmodel::UIViewModel;

/// Renders the header title bar at the specified row.
///
/// The title is centered across the full width; the back hint (`← Esc`)
/// sits at the left margin, mirroring a back button.
///
/// Returns the next available row position.
pub fn render_header(row: usize, vm: &UIViewModel, cols: usize) -> usize {
    let title_len = vm.title.len();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}← Esc{}", helpers::dim(), helpers::reset());

    position_cursor(row, padding.max(7) + 1);
    print!("{}{}{}", helpers::bold(), vm.title, helpers::reset());

    row + 1
}
