//! Owner tabs, search field and reset button.
//!
//! Nothing here writes `SelectionState`. Clicks and edits become
//! `SelectionAction`s queued with `request_selection` and applied at end of frame.

use catalog_business::{CatalogState, SelectionAction, SelectionState, User, request_selection};
use catalog_states::StateCtx;
use egui::{Response, TextEdit, Ui};

const SEARCH_WIDTH: f32 = 240.0;

/// Displays the filters panel and queues whatever the user asked for.
pub fn filters_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let selection = state_ctx.state::<SelectionState>().clone();
    let users = state_ctx.state::<CatalogState>().users.clone();
    let mut requested = Vec::new();

    let response = ui
        .group(|ui| {
            ui.vertical(|ui| {
                ui.heading("Filters");
                owner_tabs(ui, &users, selection.selected_user_id, &mut requested);
                ui.add_space(4.0);
                search_field(ui, &selection, &mut requested);
                ui.add_space(4.0);
                if ui.button("Reset all filters").clicked() {
                    requested.push(SelectionAction::ResetAll);
                }
            });
        })
        .response;

    for action in requested {
        request_selection(state_ctx, action);
    }
    response
}

/// "All" followed by one tab per user. The selected tab is highlighted.
fn owner_tabs(ui: &mut Ui, users: &[User], selected: u32, requested: &mut Vec<SelectionAction>) {
    ui.horizontal_wrapped(|ui| {
        if ui.selectable_label(selected == 0, "All").clicked() {
            requested.push(SelectionAction::SelectUser(0));
        }
        for user in users {
            if ui
                .selectable_label(selected == user.id, user.name.as_str())
                .clicked()
            {
                requested.push(SelectionAction::SelectUser(user.id));
            }
        }
    });
}

fn search_field(ui: &mut Ui, selection: &SelectionState, requested: &mut Vec<SelectionAction>) {
    ui.horizontal(|ui| {
        let mut text = selection.query.clone();
        let edit = ui.add(
            TextEdit::singleline(&mut text)
                .hint_text("Search")
                .desired_width(SEARCH_WIDTH),
        );
        if edit.changed() {
            requested.push(SelectionAction::SetQuery(text));
        }

        // Only offered while there is something to clear.
        if selection.has_query() && ui.button("×").on_hover_text("Clear search").clicked() {
            requested.push(SelectionAction::ClearQuery);
        }
    });
}
