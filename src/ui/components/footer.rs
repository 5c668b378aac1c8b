//! Footer keybinding hints.

use crate::ui::helpers::{self, position_cursor};

/// Renders the keybinding hint line anchored to the bottom of the pane.
pub fn render_footer(keybindings: &str, rows: usize, _cols: usize) {
    position_cursor(rows.saturating_sub(1), 3);
    print!("{}{}{}", helpers::dim(), keybindings, helpers::reset());
}
