use crate::{pages, state::State};

pub struct CatalogApp {
    pub state: State,
}

impl CatalogApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for CatalogApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.begin_frame();

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::catalog_page(&mut self.state, ui);
        });

        // Selections land after rendering; draw them on the next frame.
        if self.state.end_frame() {
            ctx.request_repaint();
        }
    }
}
