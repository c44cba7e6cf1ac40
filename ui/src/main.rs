#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use catalog_business::CatalogConfig;
use catalog_ui::state::State;

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let config = CatalogConfig::from_env().context("Failed to read catalog configuration")?;
    let state = State::load(&config).context("Failed to load the catalog")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Product Categories",
        native_options,
        Box::new(move |_cc| Ok(Box::new(catalog_ui::CatalogApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
