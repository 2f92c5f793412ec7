use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, Visuals},
    },
    std::sync::Arc,
};

use crate::{
    Cli,
    app::{Action, Store, ViewState},
    data::{AssetSource, CoinCapProvider, FetchHandle, spawn_fetch},
    domain::FetchFailure,
    ui::{
        IconSlots, UI_CONFIG, render_asset_table, render_footer, render_header, render_status,
    },
};

/// The asset list view: state store, the one fetch, and rendering.
#[derive(Default)]
pub struct App {
    store: Store,
    fetch: Option<FetchHandle>,
    icons: IconSlots,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self::default();
        let repaint_ctx = cc.egui_ctx.clone();
        app.store.subscribe(move |_| repaint_ctx.request_repaint());

        match CoinCapProvider::new(args.api_config()) {
            Ok(provider) => app.mount(Arc::new(provider), cc.egui_ctx.clone()),
            Err(e) => {
                log::error!("Failed to build HTTP client: {:#}", e);
                app.store.dispatch(Action::FetchStarted);
                app.store
                    .dispatch(Action::FetchFailed(FetchFailure::Network(e.to_string())));
            }
        }
        app
    }

    /// View with its fetch already started against `source`.
    pub fn with_source(source: Arc<dyn AssetSource>, ctx: Context) -> Self {
        let mut app = Self::default();
        app.mount(source, ctx);
        app
    }

    /// Mount hook: the one and only fetch of this view.
    fn mount(&mut self, source: Arc<dyn AssetSource>, ctx: Context) {
        if self.fetch.is_some() || !self.store.dispatch(Action::FetchStarted) {
            log::warn!("Asset view already mounted; not fetching again");
            return;
        }
        self.fetch = Some(spawn_fetch(source, move || ctx.request_repaint()));
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    /// Apply the fetch result if it has arrived. Returns `true` once it has.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(result) = self.fetch.as_ref().and_then(FetchHandle::try_take) else {
            return false;
        };
        self.fetch = None;
        match result {
            Ok(resp) => self.store.dispatch(Action::FetchSucceeded {
                assets: resp.data,
                timestamp: resp.timestamp,
            }),
            Err(failure) => self.store.dispatch(Action::FetchFailed(failure)),
        };
        true
    }

    pub fn reveal_next_page(&mut self) -> bool {
        self.store.dispatch(Action::RevealNextPage)
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let mut load_more = false;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if !render_status(ui, self.store.state()) {
                    load_more = render_asset_table(ui, self.store.state(), &mut self.icons);
                }
            });
        if load_more {
            self.reveal_next_page();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_fetch();
        render_header(ctx);
        render_footer(ctx);
        self.render_central_panel(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
