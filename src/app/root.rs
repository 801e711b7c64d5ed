use {
    chrono::Local,
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{
        phases::PhaseView,
        state::{AppState, LoadingState, RunningState},
    },
    config::{DF, FeedTuning, Tab, UI_CONFIG},
    domain::SortDirective,
    feed::TokenFeed,
    screener::ScreenerState,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) active_tab: Tab,
    pub(crate) persisted_directive: SortDirective, // persists across sessions
    #[serde(skip)]
    pub(crate) screener: ScreenerState,
    #[serde(skip)]
    pub(crate) feed: TokenFeed,
    #[serde(skip)]
    pub(crate) tuning: FeedTuning,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) seed: Option<u64>,
    #[serde(skip)]
    pub(crate) paused: bool,
    #[serde(skip)]
    pub(crate) tick_count: u64,
    #[serde(skip)]
    pub(crate) last_tick: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            persisted_directive: SortDirective::default(),
            screener: ScreenerState::default(),
            feed: TokenFeed::default(),
            tuning: FeedTuning::default(),
            state: AppState::default(),
            seed: None,
            paused: false,
            tick_count: 0,
            last_tick: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, tuning: FeedTuning) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.tuning = tuning;
        app.seed = args.seed;
        app.feed = TokenFeed::from_seed(args.seed, &tuning);
        app.screener = ScreenerState::new(app.persisted_directive);
        app.state = AppState::Loading(LoadingState::default());

        if DF.log_startup {
            log::info!(
                "Feed ready: refresh {}ms | churn {:.2} | seed {}",
                tuning.refresh_interval.as_millis(),
                tuning.perturb_chance,
                app.seed.map_or("entropy".to_string(), |s| s.to_string()),
            );
        }

        app
    }

    /// SKELETON PHASE: render placeholders until the simulated fetch lands.
    pub(crate) fn tick_loading_state(
        &mut self,
        ctx: &Context,
        state: &mut LoadingState,
    ) -> AppState {
        let mut switch = self.render_header_panel(ctx);
        if switch.is_none() {
            switch = self.requested_tab(ctx);
        }
        self.render_status_panel(ctx);
        self.render_skeleton_panel(ctx);

        if let Some(tab) = switch {
            // Restarts the load for the new tab; the old deadline is dropped.
            return self.enter_tab(tab);
        }

        if state.fetch.is_due() {
            let spec = self.active_tab.spec();
            let batch = self.feed.generate(spec.count, spec.chain);
            self.screener.replace(batch);
            if DF.log_timer_lifecycle {
                log::info!(
                    "Initial load complete for '{}', arming refresh at {}ms",
                    spec.label,
                    self.tuning.refresh_interval.as_millis()
                );
            }
            return AppState::Running(RunningState::new(self.tuning.refresh_interval));
        }

        // Keep the skeleton pulse animating.
        ctx.request_repaint();
        AppState::Loading(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(
        &mut self,
        ctx: &Context,
        state: &mut RunningState,
    ) -> AppState {
        self.handle_running_shortcuts(ctx, state);

        // Ticks are serialized by the frame loop: each update is computed
        // against the fully-settled result of the previous one.
        if !self.paused && state.refresh.is_due() {
            state.refresh.restart();
            self.apply_feed_tick();
        }

        let mut switch = self.render_header_panel(ctx);
        if switch.is_none() {
            switch = self.requested_tab(ctx);
        }
        self.render_status_panel(ctx);
        if let Some(field) = self.render_table_panel(ctx) {
            self.screener.request_sort(field);
        }

        if let Some(tab) = switch {
            // Dropping this RunningState releases the refresh deadline, so a
            // stale timer can never mutate the collection we just discarded.
            return self.enter_tab(tab);
        }

        // Wake up in time for the next tick without busy-repainting.
        ctx.request_repaint_after(state.refresh.remaining().min(Duration::from_millis(250)));
        AppState::Running(state.clone())
    }

    pub(crate) fn enter_tab(&mut self, tab: Tab) -> AppState {
        if DF.log_tab_switches {
            let spec = tab.spec();
            log::info!("Tab switch -> '{}' ({} tokens)", spec.label, spec.count);
        }
        self.active_tab = tab;
        self.screener.clear();
        AppState::Loading(LoadingState::default())
    }

    fn apply_feed_tick(&mut self) {
        let next = self.feed.tick(self.screener.records());
        self.screener.replace(next);
        self.tick_count += 1;
        self.last_tick = Some(Local::now().format("%H:%M:%S").to_string());
        if DF.log_feed_ticks {
            log::info!(
                "Feed tick #{} applied to {} records",
                self.tick_count,
                self.screener.len()
            );
        }
    }

    fn handle_running_shortcuts(&mut self, ctx: &Context, state: &mut RunningState) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a text box, don't trigger global hotkeys.
            return;
        }

        let mut force_tick = false;
        ctx.input(|i| {
            if i.key_pressed(Key::Space) {
                self.paused = !self.paused;
            }
            if i.key_pressed(Key::R) {
                force_tick = true;
            }
        });

        if force_tick {
            state.refresh.restart();
            self.apply_feed_tick();
        }
    }

    fn requested_tab(&self, ctx: &Context) -> Option<Tab> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                Some(Tab::NewPairs)
            } else if i.key_pressed(Key::Num2) {
                Some(Tab::FinalStretch)
            } else if i.key_pressed(Key::Num3) {
                Some(Tab::Migrated)
            } else {
                None
            }
        })
        .filter(|tab| *tab != self.active_tab)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persisted_directive = self.screener.directive();
        eframe::set_value(storage, eframe::APP_KEY, self);
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
