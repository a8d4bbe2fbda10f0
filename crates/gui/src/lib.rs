//! The panels of the Pano Stitcher window.
//!
//! Every panel is drawn once per frame and hands the user's request back as an
//! [Action] for the controller to carry out. Nothing in here knows how images
//! are stitched, it only reads the summaries the pipeline provides.

pub mod action;
pub mod bug_report;
pub mod list_panel;
pub mod menu_bar;
pub mod progress;
pub mod thumbnails;

pub use action::{Action, ActionSlot, Collision};
pub use bug_report::{ActiveLogFile, BugReportPanel, ClipboardSink, ContactInfo, LogFileLocator};
pub use list_panel::{ListRow, MatchSummary, PanoSummary, list_panel};
pub use menu_bar::menu_bar;
pub use progress::{ProgressDisplay, ProgressReport, ProgressStage, progress_bar};
pub use thumbnails::{PreviewError, ThumbnailPreview};

#[cfg(test)]
pub(crate) mod test_util {
    use egui::{
        CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, Vec2,
    };

    /// Runs a single headless frame, handing `add_contents` the central
    /// panel's [Ui].
    pub fn run_frame(ctx: &Context, input: RawInput, mut add_contents: impl FnMut(&mut Ui)) {
        _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    /// Seconds between two [Headless] frames. Short enough that a press and
    /// release on consecutive frames is a click.
    const FRAME_TIME: f64 = 0.1;

    /// A context fed with pointer input, one frame at a time, on a screen of
    /// a fixed size.
    pub struct Headless {
        ctx: Context,
        screen: Rect,
        time: f64,
    }

    impl Headless {
        pub fn new(size: Vec2) -> Self {
            Self {
                ctx: Context::default(),
                screen: Rect::from_min_size(Pos2::ZERO, size),
                time: 0.0,
            }
        }

        pub fn ctx(&self) -> &Context {
            &self.ctx
        }

        pub fn frame(&mut self, events: Vec<Event>, run_ui: impl FnMut(&Context)) {
            self.time += FRAME_TIME;
            let input = RawInput {
                screen_rect: Some(self.screen),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            _ = self.ctx.run(input, run_ui);
        }

        /// A few frames without input, so tables and windows are done sizing
        /// themselves.
        pub fn settle(&mut self, mut run_ui: impl FnMut(&Context)) {
            for _ in 0..3 {
                self.frame(Vec::new(), &mut run_ui);
            }
        }

        /// Moves the pointer to `pos` and leaves it there for a couple of
        /// frames. The pointer leaves the window first so no earlier tooltip
        /// is still open.
        pub fn hover(&mut self, pos: Pos2, mut run_ui: impl FnMut(&Context)) {
            self.frame(vec![Event::PointerGone], &mut run_ui);
            self.frame(vec![Event::PointerMoved(pos)], &mut run_ui);
            self.frame(Vec::new(), &mut run_ui);
            self.frame(Vec::new(), &mut run_ui);
        }

        /// Moves the pointer to `pos`, then presses and releases the primary
        /// button, each on its own frame. One more frame follows so anything
        /// the click opened has been drawn.
        pub fn click(&mut self, pos: Pos2, mut run_ui: impl FnMut(&Context)) {
            let button = |pressed| Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            };

            self.frame(vec![Event::PointerMoved(pos)], &mut run_ui);
            self.frame(vec![button(true)], &mut run_ui);
            self.frame(vec![button(false)], &mut run_ui);
            self.frame(Vec::new(), &mut run_ui);
        }

        /// Points on the screen `step` apart, row by row from the top.
        pub fn grid(&self, step: Vec2) -> Vec<Pos2> {
            let mut points = Vec::new();
            let mut y = self.screen.top() + step.y / 2.0;
            while y < self.screen.bottom() {
                let mut x = self.screen.left() + step.x / 2.0;
                while x < self.screen.right() {
                    points.push(Pos2::new(x, y));
                    x += step.x;
                }
                y += step.y;
            }
            points
        }
    }

    /// Appends `item` unless it repeats the last one.
    pub fn push_new<T: PartialEq>(seen: &mut Vec<T>, item: T) {
        if seen.last() != Some(&item) {
            seen.push(item);
        }
    }
}
