//! Cell rendering functions for the product table.

use catalog_business::{Sex, User};
use egui::{Color32, RichText, Ui};

use crate::utils::colors::{COLOR_DANGER, COLOR_LINK};

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u32) {
    ui.label(RichText::new(id.to_string()).monospace());
}

#[inline]
pub fn render_product_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// `label` is already formatted as `"{icon} - {title}"`.
#[inline]
pub fn render_category_cell(ui: &mut Ui, label: &str) {
    ui.label(label);
}

/// Owner name, colored by sex.
#[inline]
pub fn render_user_cell(ui: &mut Ui, user: &User) {
    ui.label(RichText::new(user.name.as_str()).color(user_color(user.sex)));
}

#[inline]
fn user_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Male => COLOR_LINK,
        Sex::Female => COLOR_DANGER,
    }
}
