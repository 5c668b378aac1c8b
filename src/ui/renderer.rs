//! Top-level page renderer.
//!
//! Computes a [`UIViewModel`](crate::ui::viewmodel::UIViewModel) from the
//! current application state and dispatches to the component renderers.

use crate::app::state::AppState;
use crate::ui::components;
use crate::ui::helpers::{self, position_cursor};

/// Renders the pronouns page into a pane of `rows` x `cols` cells.
///
/// While personal details are still loading a full-screen indicator is shown
/// instead of the page layout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel(rows, cols);

    if vm.loading {
        components::render_loading(&vm.loading_text, rows, cols);
        return;
    }

    let mut row = components::render_header(1, &vm, cols);

    position_cursor(row + 1, 3);
    print!("{}{}{}", helpers::dim(), vm.description, helpers::reset());
    row += 3;

    row = components::render_search(row, &vm.search, cols);

    if !vm.header_message.is_empty() {
        components::render_header_message(row, &vm.header_message);
    } else if vm.rows.is_empty() && vm.search.value.trim().is_empty() {
        components::render_type_to_search(row);
    } else {
        components::render_list(row, &vm.rows, cols);
    }

    components::render_footer(&vm.footer.keybindings, rows, cols);
}
