//! Turns the pipeline's progress counters into a progress bar.

use egui::{ProgressBar, Response, Ui};

/// A phase of the stitching pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressStage {
    /// Nothing in particular is running, or the pipeline didn't say.
    #[default]
    Idle,
    LoadingImages,
    DetectingKeypoints,
    MatchingImages,
    StitchingPano,
}

impl ProgressStage {
    /// Every stage, in pipeline order.
    pub const ALL: [ProgressStage; 5] = [
        ProgressStage::Idle,
        ProgressStage::LoadingImages,
        ProgressStage::DetectingKeypoints,
        ProgressStage::MatchingImages,
        ProgressStage::StitchingPano,
    ];

    /// The name shown in front of the percentage. [ProgressStage::Idle] has
    /// none.
    pub const fn label(self) -> &'static str {
        match self {
            ProgressStage::Idle => "",
            ProgressStage::LoadingImages => "Loading images",
            ProgressStage::DetectingKeypoints => "Detecting keypoints",
            ProgressStage::MatchingImages => "Matching images",
            ProgressStage::StitchingPano => "Stitching pano",
        }
    }
}

/// How far along the pipeline is, as reported for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProgressReport {
    pub stage: ProgressStage,
    pub tasks_done: usize,
    pub num_tasks: usize,
}

/// What the progress bar shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDisplay {
    pub label: String,
    /// In `0.0..=1.0`.
    pub fraction: f32,
}

impl ProgressReport {
    pub fn new(stage: ProgressStage, tasks_done: usize, num_tasks: usize) -> Self {
        Self {
            stage,
            tasks_done,
            num_tasks,
        }
    }

    /// `tasks_done`, capped at `num_tasks`.
    fn tasks_done_clamped(&self) -> usize {
        self.tasks_done.min(self.num_tasks)
    }

    /// The fraction of tasks done, `0.0` when there are no tasks.
    pub fn fraction(&self) -> f32 {
        if self.num_tasks == 0 {
            return 0.0;
        }
        (self.tasks_done_clamped() as f64 / self.num_tasks as f64) as f32
    }

    /// The percentage of tasks done, rounded down. `0` when there are no tasks.
    pub fn percentage(&self) -> usize {
        if self.num_tasks == 0 {
            return 0;
        }
        // Widened so huge task counts can't overflow.
        (self.tasks_done_clamped() as u128 * 100 / self.num_tasks as u128) as usize
    }

    /// `"100%"` once everything is done, otherwise the stage's label followed
    /// by the percentage (e.g. `"Matching images: 50%"`).
    pub fn label(&self) -> String {
        if self.tasks_done_clamped() == self.num_tasks {
            "100%".into()
        } else {
            format!("{}: {}%", self.stage.label(), self.percentage())
        }
    }

    /// What to draw for this report, or [None] if there are no tasks (in which
    /// case nothing should be drawn at all).
    pub fn display(&self) -> Option<ProgressDisplay> {
        if self.num_tasks == 0 {
            return None;
        }

        if self.tasks_done > self.num_tasks {
            util::debug_log_warning!(
                "Progress reported {} of {} tasks done, showing it as complete.",
                self.tasks_done,
                self.num_tasks
            );
        }

        Some(ProgressDisplay {
            label: self.label(),
            fraction: self.fraction(),
        })
    }
}

/// Draws a progress bar spanning the available width. Nothing is drawn (and
/// [None] is returned) when the report has no tasks.
pub fn progress_bar(ui: &mut Ui, report: &ProgressReport) -> Option<Response> {
    let display = report.display()?;

    Some(
        ui.add(
            ProgressBar::new(display.fraction)
                .desired_width(ui.available_width())
                .text(display.label),
        ),
    )
}

#[cfg(test)]
mod tests {
    use egui::{Context, RawInput};

    use super::*;
    use crate::test_util::run_frame;

    #[test]
    fn halfway_through_matching() {
        let report = ProgressReport::new(ProgressStage::MatchingImages, 30, 60);
        assert_eq!(
            report.display(),
            Some(ProgressDisplay {
                label: "Matching images: 50%".into(),
                fraction: 0.5,
            })
        );
    }

    #[test]
    fn finished_work_is_always_100_percent() {
        for stage in ProgressStage::ALL {
            for n in [1, 7, 1000] {
                assert_eq!(ProgressReport::new(stage, n, n).label(), "100%");
            }
        }
    }

    #[test]
    fn percentage_rounds_down() {
        let cases = [
            (0, 3, 0),
            (1, 3, 33),
            (2, 3, 66),
            (29, 100, 29),
            (99, 100, 99),
        ];
        for (done, total, expected) in cases {
            let report = ProgressReport::new(ProgressStage::LoadingImages, done, total);
            assert_eq!(report.label(), format!("Loading images: {expected}%"));
        }
    }

    #[test]
    fn idle_stage_has_an_empty_label() {
        let report = ProgressReport::new(ProgressStage::Idle, 1, 4);
        assert_eq!(report.label(), ": 25%");
    }

    #[test]
    fn every_stage_has_a_label() {
        let labels: Vec<_> = ProgressStage::ALL.iter().map(|stage| stage.label()).collect();
        assert_eq!(
            labels,
            [
                "",
                "Loading images",
                "Detecting keypoints",
                "Matching images",
                "Stitching pano"
            ]
        );
    }

    #[test]
    fn no_tasks_means_no_display() {
        let report = ProgressReport::new(ProgressStage::StitchingPano, 0, 0);
        assert_eq!(report.display(), None);
        assert_eq!(report.fraction(), 0.0);
    }

    #[test]
    fn overreported_progress_is_clamped() {
        let report = ProgressReport::new(ProgressStage::DetectingKeypoints, 12, 10);
        let display = report.display().expect("There are tasks to show.");
        assert_eq!(display.label, "100%");
        assert_eq!(display.fraction, 1.0);
    }

    #[test]
    fn empty_report_draws_nothing() {
        let ctx = Context::default();
        let report = ProgressReport::new(ProgressStage::LoadingImages, 0, 0);

        run_frame(&ctx, RawInput::default(), |ui| {
            let before = ui.cursor();
            assert!(progress_bar(ui, &report).is_none());
            assert_eq!(ui.cursor(), before);
        });
    }

    #[test]
    fn report_with_tasks_draws_a_bar() {
        let ctx = Context::default();
        let report = ProgressReport::new(ProgressStage::LoadingImages, 1, 2);

        run_frame(&ctx, RawInput::default(), |ui| {
            let before = ui.cursor();
            assert!(progress_bar(ui, &report).is_some());
            assert_ne!(ui.cursor(), before);
        });
    }
}
