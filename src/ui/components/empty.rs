//! Empty-state renderers for the option list region.

use crate::ui::helpers::{self, position_cursor};

/// Renders the no-results message produced when a non-empty query matches
/// nothing in the catalog.
pub fn render_header_message(row: usize, message: &str) -> usize {
    position_cursor(row, 3);
    print!("{}{}{}", helpers::dim(), message, helpers::reset());
    row + 2
}

/// Renders the idle hint shown while the search box is empty and no options
/// are listed.
pub fn render_type_to_search(row: usize) -> usize {
    position_cursor(row, 3);
    print!(
        "{}Start typing to see matching pronouns{}",
        helpers::dim(),
        helpers::reset()
    );
    row + 2
}
