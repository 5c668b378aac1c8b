//! Full-screen loading indicator.

use crate::ui::helpers::{self, position_cursor};

/// Renders a centered loading message while personal details are still being
/// fetched from the worker.
pub fn render_loading(text: &str, rows: usize, cols: usize) {
    let row = rows / 2;
    let col = (cols.saturating_sub(text.len())) / 2 + 1;
    position_cursor(row, col);
    print!("{}{}{}", helpers::dim(), text, helpers::reset());
}
