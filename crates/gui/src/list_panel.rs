//! Tables listing the pipeline's matches and panos, one row per summary with a
//! "Show" button.

use std::hash::Hash;

use egui::{Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::action::{Action, ActionSlot, Collision};
use crate::thumbnails::ThumbnailPreview;

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 20.0;

/// One kind of row [list_panel] can draw.
pub trait ListRow {
    /// The headers of the three columns. The last one holds the "Show"
    /// button.
    const COLUMNS: [&'static str; 3];

    /// The text of the first two columns.
    fn cells(&self) -> [String; 2];

    /// The images this row refers to, for hover previews.
    fn image_ids(&self) -> Vec<usize>;

    /// What clicking "Show" on the row at `index` requests.
    fn show_action(index: usize) -> Action;
}

/// A pairwise match between two images.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchSummary {
    pub id1: usize,
    pub id2: usize,
    pub inlier_count: usize,
}

impl ListRow for MatchSummary {
    const COLUMNS: [&'static str; 3] = ["Matched", "Inliers", "Action"];

    fn cells(&self) -> [String; 2] {
        [
            format!("{}, {}", self.id1, self.id2),
            self.inlier_count.to_string(),
        ]
    }

    fn image_ids(&self) -> Vec<usize> {
        vec![self.id1, self.id2]
    }

    fn show_action(index: usize) -> Action {
        Action::ShowMatch(index)
    }
}

/// A group of images that make up one panorama.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PanoSummary {
    pub ids: Vec<usize>,
    pub exported: bool,
}

impl ListRow for PanoSummary {
    const COLUMNS: [&'static str; 3] = ["Images", "Done", "Action"];

    fn cells(&self) -> [String; 2] {
        let ids = self
            .ids
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let exported = if self.exported { "x" } else { " " };

        [ids, exported.into()]
    }

    fn image_ids(&self) -> Vec<usize> {
        self.ids.clone()
    }

    fn show_action(index: usize) -> Action {
        Action::ShowPano(index)
    }
}

/// `highlight` if it refers to one of `len` rows, otherwise [None].
pub fn valid_highlight(highlight: Option<usize>, len: usize) -> Option<usize> {
    highlight.filter(|&index| index < len)
}

/// Draws `rows` as a table, returning the action of the first "Show" button
/// clicked this frame.
///
/// The row at `highlight` and the hovered row get a highlighted background.
/// Hovering a row shows a tooltip drawn by `thumbnails`. `id_salt` must be
/// unique among the tables in the same [Ui]. The table doesn't scroll on its
/// own, put it in a [egui::ScrollArea] if it can get long.
pub fn list_panel<R: ListRow>(
    ui: &mut Ui,
    id_salt: impl Hash,
    rows: &[R],
    highlight: Option<usize>,
    thumbnails: &dyn ThumbnailPreview,
) -> Option<Action> {
    let highlight = valid_highlight(highlight, rows.len());
    let mut slot = ActionSlot::new(Collision::KeepFirst);

    ui.push_id(id_salt, |ui| {
        TableBuilder::new(ui)
            .striped(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(60.0))
            .column(Column::auto())
            .column(Column::auto())
            .header(HEADER_HEIGHT, |mut header| {
                for title in R::COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let index = row.index();
                    let summary = &rows[index];

                    row.set_selected(highlight == Some(index));

                    let [first, second] = summary.cells();
                    row.col(|ui| {
                        ui.label(first);
                    });
                    row.col(|ui| {
                        ui.label(second);
                    });
                    row.col(|ui| {
                        if ui.small_button("Show").clicked() {
                            slot.offer(R::show_action(index));
                        }
                    });

                    row.response().on_hover_ui(|ui| {
                        let ids = summary.image_ids();
                        if let Err(e) = thumbnails.tooltip(ui, &ids) {
                            util::debug_log_warning!("No preview for images {ids:?}: {e}");
                            ui.label("Preview unavailable");
                        }
                    });
                });
            });
    });

    slot.take()
}
