//! Contains [run_ui], which opens the main window, and [Controller], which
//! draws the panels and carries out the actions they request.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use eframe::{App, Frame, NativeOptions, Storage};
use egui::{
    CentralPanel, CollapsingHeader, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui,
    Vec2, ViewportBuilder, ViewportCommand, Window,
};
use serde::{Deserialize, Serialize};

use gui::{
    Action, ActionSlot, ActiveLogFile, BugReportPanel, Collision, ContactInfo, ThumbnailPreview,
};
use util::APP_NAME;
use util::debug_log::history;

use crate::args::Args;
use crate::catalog::{IMAGE_EXTENSIONS, ImageCatalog};
use crate::pipeline::{PipelineState, Selection};

pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1100.0, 700.0);
pub const MIN_WINDOW_SIZE: Vec2 = Vec2::new(640.0, 400.0);

const SIDEBAR_WIDTH: f32 = 320.0;
const ZOOM_LIMITS: (f32, f32) = (0.5, 2.0);
const SAVED_UI_DATA_KEY: &str = "saved_ui_data";

const ISSUES_URL: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");
const BUG_REPORT_EMAIL: &str = "bugs@pano-stitcher.dev";

/// The UI state worth keeping between runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedUiData {
    #[serde(default)]
    pub show_debug_log: bool,
    #[serde(default = "SavedUiData::default_zoom_factor")]
    pub zoom_factor: f32,
}

impl SavedUiData {
    #[inline(always)]
    const fn default_zoom_factor() -> f32 {
        1.0
    }
}

impl Default for SavedUiData {
    fn default() -> Self {
        Self {
            show_debug_log: false,
            zoom_factor: Self::default_zoom_factor(),
        }
    }
}

/// Something an action needs from outside the app's state (a dialog or the
/// window).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PickFiles,
    PickDirectory,
    /// Ask where to export the pano at this index.
    PickExportPath(usize),
    Close,
}

/// Everything the panels read and the actions change.
#[derive(Debug)]
pub struct AppState {
    catalog: ImageCatalog,
    pipeline: PipelineState,
    selection: Option<Selection>,
    bug_report: BugReportPanel,
    saved: SavedUiData,
    status: Option<String>,
    sample_data: bool,
}

impl AppState {
    pub fn new(saved: SavedUiData, sample_data: bool) -> Self {
        Self {
            catalog: ImageCatalog::default(),
            pipeline: PipelineState::default(),
            selection: None,
            bug_report: BugReportPanel::new(ContactInfo {
                issues_url: ISSUES_URL.into(),
                email: BUG_REPORT_EMAIL.into(),
            }),
            saved,
            status: None,
            sample_data,
        }
    }

    /// Applies `action` to the state. Anything that has to happen outside of
    /// it is returned.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        util::debug_log_info!("Handling {action:?}.");

        match action {
            Action::OpenFiles => return Some(Effect::PickFiles),
            Action::OpenDirectory => return Some(Effect::PickDirectory),
            Action::Quit => return Some(Effect::Close),

            Action::Export => match self.selection.and_then(Selection::pano_index) {
                Some(index) => return Some(Effect::PickExportPath(index)),
                None => self.status = Some("Select a pano to export first.".into()),
            },

            Action::ToggleDebugLog => self.saved.show_debug_log = !self.saved.show_debug_log,
            Action::ReportBug => self.bug_report.show(),

            Action::ShowMatch(_) | Action::ShowPano(_) => {
                self.selection = Selection::from_action(action);
            }
        }
        None
    }

    /// Records images added by a dialog (or the command line).
    pub fn images_added(&mut self, added: usize) {
        if added == 0 {
            self.status = Some("No new images were found.".into());
            return;
        }

        self.status = Some(format!("Opened {added} image(s)."));
        if self.sample_data {
            self.pipeline = PipelineState::sample(self.catalog.len());
            self.selection = None;
        }
    }

    /// Marks the pano as exported once the user picked where it goes.
    pub fn export_requested(&mut self, index: usize, path: PathBuf) {
        if !self.pipeline.mark_exported(index) {
            util::debug_log_warning!("Pano {index} disappeared before it could be exported.");
            self.status = Some("That pano no longer exists.".into());
            return;
        }

        util::debug_log_info!("Pano {index} queued for export to `{}`.", path.display());
        self.status = Some(format!("Pano {index} queued for export to {}.", path.display()));
    }
}

/// The main window.
pub struct Controller {
    state: AppState,
    is_1st_update: bool,
}

impl Controller {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Zoom is clamped by `util::ui::handle_zoom_shortcuts` instead.
        cc.egui_ctx
            .options_mut(|options| options.zoom_with_keyboard = false);

        let saved = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SAVED_UI_DATA_KEY))
            .unwrap_or_default();

        let mut state = AppState::new(saved, args.sample_data);
        if !args.images.is_empty() {
            let added = state.catalog.add_files(args.images);
            state.images_added(added);
        }

        Self {
            state,
            is_1st_update: true,
        }
    }

    fn sidebar(&self, ui: &mut Ui) -> Option<Action> {
        let state = &self.state;
        let progress = state.pipeline.progress(&state.catalog, ui.ctx());
        gui::progress_bar(ui, &progress);

        if progress.tasks_done < progress.num_tasks {
            ui.ctx().request_repaint_after(Duration::from_millis(100));
        }

        let mut slot = ActionSlot::new(Collision::KeepFirst);
        ScrollArea::vertical().show(ui, |ui| {
            CollapsingHeader::new("Matches")
                .default_open(true)
                .show(ui, |ui| {
                    slot.offer_opt(gui::list_panel(
                        ui,
                        "matches",
                        state.pipeline.matches(),
                        state.selection.and_then(Selection::match_index),
                        &state.catalog,
                    ));
                });

            CollapsingHeader::new("Panos")
                .default_open(true)
                .show(ui, |ui| {
                    slot.offer_opt(gui::list_panel(
                        ui,
                        "panos",
                        state.pipeline.panos(),
                        state.selection.and_then(Selection::pano_index),
                        &state.catalog,
                    ));
                });
        });

        slot.take()
    }

    fn selection_view(&self, ui: &mut Ui) {
        let state = &self.state;

        if state.catalog.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.heading(RichText::new("Open files or a directory to get started.").weak());
            });
            return;
        }

        let (title, ids) = match state.selection {
            Some(Selection::Match(index)) => match state.pipeline.match_at(index) {
                Some(m) => (
                    format!("Match {index}: {} inliers", m.inlier_count),
                    vec![m.id1, m.id2],
                ),
                None => return,
            },
            Some(Selection::Pano(index)) => match state.pipeline.pano_at(index) {
                Some(pano) => (
                    format!(
                        "Pano {index}{}",
                        if pano.exported { " (exported)" } else { "" }
                    ),
                    pano.ids.clone(),
                ),
                None => return,
            },
            None => (
                format!("{} image(s) opened", state.catalog.len()),
                (0..state.catalog.len()).collect(),
            ),
        };

        ui.heading(title);
        ui.separator();
        ScrollArea::both().show(ui, |ui| {
            if let Err(e) = state.catalog.tooltip(ui, &ids) {
                util::debug_log_warning!("Can't show the selected images: {e}");
            }
        });
    }

    fn debug_log_window(&mut self, ctx: &Context) {
        Window::new("Debug info")
            .open(&mut self.state.saved.show_debug_log)
            .default_size((600.0, 300.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        for line in history::recent() {
                            ui.monospace(line);
                        }
                    });
            });
    }

    fn handle_action(&mut self, ctx: &Context, action: Action) {
        let Some(effect) = self.state.apply(action) else {
            return;
        };

        match effect {
            Effect::PickFiles => {
                let Some(files) = rfd::FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_files()
                else {
                    return;
                };
                let added = self.state.catalog.add_files(files);
                self.state.images_added(added);
            }

            Effect::PickDirectory => {
                let Some(dir) = rfd::FileDialog::new().pick_folder() else {
                    return;
                };
                match self.state.catalog.add_directory(&dir) {
                    Ok(added) => self.state.images_added(added),
                    Err(e) => {
                        util::debug_log_error!("Failed to read `{}`: {e}", dir.display());
                        self.state.status = Some("Couldn't read that directory.".into());
                    }
                }
            }

            Effect::PickExportPath(index) => {
                let Some(path) = rfd::FileDialog::new()
                    .set_file_name(format!("pano_{index}.jpg"))
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .save_file()
                else {
                    return;
                };
                self.state.export_requested(index, path);
            }

            Effect::Close => ctx.send_viewport_cmd(ViewportCommand::Close),
        }
    }
}

impl App for Controller {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.is_1st_update {
            ctx.set_zoom_factor(self.state.saved.zoom_factor);
            self.is_1st_update = false;
        }

        let mut actions = Vec::new();

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            actions.extend(gui::menu_bar(ui));
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = self.state.status.as_deref().unwrap_or("Ready.");
            ui.label(RichText::new(status).small().weak());
        });

        SidePanel::left("sidebar")
            .default_width(SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                actions.extend(self.sidebar(ui));
            });

        CentralPanel::default().show(ctx, |ui| self.selection_view(ui));

        if self.state.saved.show_debug_log {
            self.debug_log_window(ctx);
        }
        self.state.bug_report.draw(ctx, &ActiveLogFile, ctx);

        for action in actions {
            self.handle_action(ctx, action);
        }

        util::ui::handle_zoom_shortcuts(ctx, ZOOM_LIMITS.0, ZOOM_LIMITS.1);
        self.state.saved.zoom_factor = ctx.zoom_factor();
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, SAVED_UI_DATA_KEY, &self.state.saved);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        util::debug_log_info!("Closing {APP_NAME}...");
    }
}

/// Opens the main window, returning once it's closed.
///
/// This function can only be run from the main thread.
pub fn run_ui(args: Args) -> ExitCode {
    eframe::run_native(
        APP_NAME,
        NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(APP_NAME)
                .with_inner_size(DEFAULT_WINDOW_SIZE)
                .with_min_inner_size(MIN_WINDOW_SIZE),
            ..Default::default()
        },
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(Controller::new(cc, args)))
        }),
    )
    .map_or_else(
        |e| {
            util::debug_log_error!("UI (run native) failed: {e}");
            ExitCode::FAILURE
        },
        |_| ExitCode::SUCCESS,
    )
}
