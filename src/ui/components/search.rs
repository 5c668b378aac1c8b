//! Search box renderer.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::viewmodel::SearchBoxInfo;

/// Renders the search input with its field label, followed by either the
/// typed text or the dimmed placeholder when the box is empty.
///
/// Returns the next available row position.
pub fn render_search(row: usize, search: &SearchBoxInfo, _cols: usize) -> usize {
    position_cursor(row, 3);
    print!("{}{}{}", helpers::dim(), search.label, helpers::reset());

    position_cursor(row + 1, 3);
    if search.value.is_empty() {
        print!("> {}{}{}", helpers::dim(), search.placeholder, helpers::reset());
    } else {
        print!("> {}{}{}", helpers::bold(), search.value, helpers::reset());
    }

    row + 3
}
