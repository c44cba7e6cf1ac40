use catalog_business::CatalogConfig;
use catalog_ui::CatalogApp;
use catalog_ui::state::State;
use egui_kittest::Harness;
use kittest::Queryable;

pub struct TestCtx<'a> {
    harness: Harness<'a, CatalogApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, CatalogApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, CatalogApp> {
        &self.harness
    }
}

impl TestCtx<'static> {
    /// App over the bundled catalog.
    pub fn new_app() -> Self {
        Self::new_app_with_config(&CatalogConfig::default())
    }

    pub fn new_app_with_config(config: &CatalogConfig) -> Self {
        let state = State::load(config).expect("catalog should load");
        let app = CatalogApp::new(state);
        let harness = Harness::new_eframe(|_| app);
        Self { harness }
    }
}

/// Visible product names in table order.
#[allow(unused)]
pub fn visible_names(harness: &Harness<'_, CatalogApp>) -> Vec<String> {
    harness
        .state()
        .state
        .ctx
        .cached::<catalog_business::VisibleProductsCompute>()
        .map(|visible| visible.rows().iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

/// One frame to apply queued selections and one to draw the result.
#[allow(unused)]
pub fn settle(harness: &mut Harness<'_, CatalogApp>) {
    harness.step();
    harness.step();
}

/// Focus the search field and type `text` into it, then let the query land.
#[allow(unused)]
pub fn type_query(harness: &mut Harness<'_, CatalogApp>, text: &str) {
    harness.get_by_role(egui::accesskit::Role::TextInput).focus();
    harness.step();
    harness.event(egui::Event::Text(text.to_owned()));
    settle(harness);
}
