//! Countdown widget window implemented with egui/eframe

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use chrono::Local;
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info};

use super::components::{countdown_display, title_date_dialog};
use super::components::title_date_dialog::DialogOutcome;
use super::constants::*;
use crate::config::{CountdownConfig, SettingsStore, StartupConfig};
use crate::constants::countdown::TICK_INTERVAL_SECS;
use crate::countdown::CountdownEngine;
use crate::edit::EditFlow;

const TICK_INTERVAL: Duration = Duration::from_secs(TICK_INTERVAL_SECS);

/// Time left until the next tick is due; zero when it is due now
fn next_tick_in(last_tick: Option<Instant>, now: Instant) -> Duration {
    match last_tick {
        Some(last) => TICK_INTERVAL.saturating_sub(now.saturating_duration_since(last)),
        None => Duration::ZERO,
    }
}

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct CountdownApp {
    engine: CountdownEngine,
    store: SettingsStore,
    edit: EditFlow,
    last_tick: Option<Instant>,
    status_message: Option<StatusMessage>,
}

impl CountdownApp {
    fn new(startup: StartupConfig, store: SettingsStore) -> Self {
        let mut app = Self {
            engine: CountdownEngine::new(startup.config),
            store,
            edit: EditFlow::default(),
            last_tick: None,
            status_message: None,
        };

        if startup.needs_setup {
            info!("Countdown is not fully configured, prompting for title and date");
            app.edit.begin(app.engine.config());
            // Leave the field blank so the placeholder shows on first run
            if !startup.has_title {
                if let Some(draft) = app.edit.draft_mut() {
                    draft.title.clear();
                }
            }
        }

        app.tick_if_due();
        app
    }

    fn configure(cc: &CreationContext<'_>) {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        cc.egui_ctx
            .style_mut(|style| style.interaction.selectable_labels = false);
    }

    /// Recompute from the wall clock at most once per tick interval
    fn tick_if_due(&mut self) {
        let now = Instant::now();
        if !next_tick_in(self.last_tick, now).is_zero() {
            return;
        }
        self.last_tick = Some(now);

        let was_zero = self.engine.remaining().is_zero();
        let remaining = self.engine.tick(Local::now().naive_local());
        if remaining.is_zero() && !was_zero {
            info!(title = %self.engine.title(), "Countdown reached its target");
        }
    }

    /// Install a committed edit, persist it and refresh the display immediately
    fn apply_commit(&mut self, config: CountdownConfig) {
        self.engine.replace(config);

        match self.store.save(self.engine.config()) {
            Ok(()) => self.status_message = None,
            Err(err) => {
                error!(error = ?err, "Failed to save settings");
                self.status_message = Some(StatusMessage {
                    text: format!("Failed to save settings: {err:#}"),
                    color: STATUS_ERROR,
                });
            }
        }

        self.last_tick = None;
        self.tick_if_due();
    }

    fn process_dialog(&mut self, ctx: &egui::Context) {
        let outcome = match self.edit.draft_mut() {
            Some(draft) => title_date_dialog::show(ctx, draft),
            None => return,
        };

        match outcome {
            DialogOutcome::Committed => {
                if let Some(config) = self.edit.commit() {
                    self.apply_commit(config);
                }
            }
            DialogOutcome::Cancelled => self.edit.cancel(),
            DialogOutcome::Open => {}
        }
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_if_due();

        let panel_frame = egui::Frame::new()
            .fill(BACKGROUND)
            .stroke(egui::Stroke::new(PANEL_BORDER_WIDTH, BORDER))
            .corner_radius(egui::CornerRadius::same(PANEL_RADIUS))
            .inner_margin(egui::Margin::same(PANEL_MARGIN));

        let mut open_editor = false;
        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            // Registered first so every widget drawn on top wins its own clicks
            let background = ui.interact(
                ui.max_rect(),
                ui.id().with("window_background"),
                egui::Sense::click_and_drag(),
            );
            if background.double_clicked_by(egui::PointerButton::Primary) {
                info!("Double-click on widget, closing");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else if background.drag_started_by(egui::PointerButton::Primary) {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            open_editor = countdown_display::ui(ui, &self.engine);

            if let Some(message) = &self.status_message {
                ui.colored_label(message.color, &message.text);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                resize_grip(ui, ctx);
            });
        });

        if open_editor {
            self.edit.begin(self.engine.config());
        }
        self.process_dialog(ctx);

        // Input-driven frames must not push the pending tick back
        ctx.request_repaint_after(next_tick_in(self.last_tick, Instant::now()));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Countdown widget exiting");
    }
}

fn resize_grip(ui: &mut egui::Ui, ctx: &egui::Context) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(GRIP_SIZE, GRIP_SIZE), egui::Sense::drag());
    ui.painter().rect_filled(rect, GRIP_RADIUS, GRIP_COLOR);

    let response = response.on_hover_cursor(egui::CursorIcon::ResizeSouthEast);
    if response.drag_started_by(egui::PointerButton::Primary) {
        ctx.send_viewport_cmd(egui::ViewportCommand::BeginResize(
            egui::viewport::ResizeDirection::SouthEast,
        ));
    }
}

pub fn run_gui(store: SettingsStore, startup: StartupConfig) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(true)
            .with_title("Countdown Widget"),
        ..Default::default()
    };

    eframe::run_native(
        "Countdown Widget",
        options,
        Box::new(move |cc| {
            CountdownApp::configure(cc);
            Ok(Box::new(CountdownApp::new(startup, store)))
        }),
    )
    .map_err(|err| anyhow!("Failed to launch countdown widget: {err}"))
}
