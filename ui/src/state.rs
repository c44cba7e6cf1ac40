use catalog_business::{CatalogConfig, CatalogState, SelectionInput, SelectionState, register};
use catalog_states::{StateCtx, TopologyError, TypeKey};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    /// Load the catalog named by `config` and select its initial owner.
    pub fn load(config: &CatalogConfig) -> anyhow::Result<Self> {
        let catalog = CatalogState::load(config)?;
        let selection = SelectionState::with_user(config.initial_user_id);
        Ok(Self::from_catalog(catalog, selection)?)
    }

    pub fn from_catalog(
        catalog: CatalogState,
        selection: SelectionState,
    ) -> Result<Self, TopologyError<TypeKey>> {
        let mut ctx = StateCtx::new();
        register(&mut ctx, catalog, selection);
        Self::from_ctx(ctx)
    }

    /// Wrap a populated context. Fails when its computes cannot be ordered.
    pub fn from_ctx(mut ctx: StateCtx) -> Result<Self, TopologyError<TypeKey>> {
        ctx.verify_deps()?;
        Ok(Self { ctx })
    }

    /// Apply published values and refresh computes before rendering.
    pub fn begin_frame(&mut self) {
        self.ctx.sync_computes();
        self.ctx.run_all_dirty();
    }

    /// Apply everything widgets requested this frame.
    ///
    /// Returns `true` when a selection was applied, so the caller can repaint.
    pub fn end_frame(&mut self) -> bool {
        let pending = !self.ctx.state::<SelectionInput>().is_empty();
        self.ctx.flush_commands();
        self.ctx.run_all_dirty();
        pending
    }
}
