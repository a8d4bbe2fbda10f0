//! The stitching pipeline's state as far as the UI is concerned: progress,
//! matches and panos.

use egui::Context;

use gui::{Action, MatchSummary, PanoSummary, ProgressReport, ProgressStage};

use crate::catalog::ImageCatalog;

/// What the user picked with a "Show" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Match(usize),
    Pano(usize),
}

impl Selection {
    /// The selection a "Show" action asks for.
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::ShowMatch(index) => Some(Selection::Match(index)),
            Action::ShowPano(index) => Some(Selection::Pano(index)),
            _ => None,
        }
    }

    pub fn match_index(self) -> Option<usize> {
        match self {
            Selection::Match(index) => Some(index),
            Selection::Pano(_) => None,
        }
    }

    pub fn pano_index(self) -> Option<usize> {
        match self {
            Selection::Pano(index) => Some(index),
            Selection::Match(_) => None,
        }
    }
}

/// Results of the pipeline. Without a stitcher attached these stay empty
/// unless sample data was asked for.
#[derive(Debug, Default)]
pub struct PipelineState {
    matches: Vec<MatchSummary>,
    panos: Vec<PanoSummary>,
}

impl PipelineState {
    /// Made-up matches and panos over `num_images` images: every image is
    /// matched with the next one, and consecutive runs of
    /// [Self::SAMPLE_PANO_LEN] images form a pano.
    pub fn sample(num_images: usize) -> Self {
        let matches = (1..num_images)
            .map(|id2| MatchSummary {
                id1: id2 - 1,
                id2,
                inlier_count: 40 + (id2 * 37) % 160,
            })
            .collect();

        let ids: Vec<usize> = (0..num_images).collect();
        let panos = ids
            .chunks(Self::SAMPLE_PANO_LEN)
            .filter(|chunk| chunk.len() > 1)
            .map(|chunk| PanoSummary {
                ids: chunk.to_vec(),
                exported: false,
            })
            .collect();

        Self { matches, panos }
    }

    const SAMPLE_PANO_LEN: usize = 3;

    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }

    pub fn panos(&self) -> &[PanoSummary] {
        &self.panos
    }

    pub fn match_at(&self, index: usize) -> Option<&MatchSummary> {
        self.matches.get(index)
    }

    pub fn pano_at(&self, index: usize) -> Option<&PanoSummary> {
        self.panos.get(index)
    }

    /// Flags the pano as exported, returning `false` if there's no such pano.
    pub fn mark_exported(&mut self, index: usize) -> bool {
        match self.panos.get_mut(index) {
            Some(pano) => {
                pano.exported = true;
                true
            }
            None => false,
        }
    }

    /// The progress to show this frame. Only image loading is tracked since
    /// nothing else runs in-process.
    pub fn progress(&self, catalog: &ImageCatalog, ctx: &Context) -> ProgressReport {
        ProgressReport::new(
            ProgressStage::LoadingImages,
            catalog.finished_loads(ctx),
            catalog.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_actions_select() {
        assert_eq!(
            Selection::from_action(Action::ShowMatch(2)),
            Some(Selection::Match(2))
        );
        assert_eq!(
            Selection::from_action(Action::ShowPano(0)),
            Some(Selection::Pano(0))
        );
        assert_eq!(Selection::from_action(Action::Export), None);
    }

    #[test]
    fn selection_indices() {
        assert_eq!(Selection::Match(3).match_index(), Some(3));
        assert_eq!(Selection::Match(3).pano_index(), None);
        assert_eq!(Selection::Pano(1).pano_index(), Some(1));
        assert_eq!(Selection::Pano(1).match_index(), None);
    }

    #[test]
    fn too_few_images_for_samples() {
        for n in [0, 1] {
            let state = PipelineState::sample(n);
            assert!(state.matches().is_empty());
            assert!(state.panos().is_empty());
        }
    }

    #[test]
    fn sample_ids_stay_in_range() {
        let state = PipelineState::sample(7);

        assert_eq!(state.matches().len(), 6);
        assert!(
            state
                .matches()
                .iter()
                .all(|m| m.id1 < 7 && m.id2 < 7 && m.id1 + 1 == m.id2)
        );

        // The last image is left alone, a pano needs at least two.
        let pano_ids: Vec<_> = state.panos().iter().map(|pano| pano.ids.clone()).collect();
        assert_eq!(pano_ids, [vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn exporting_flags_the_pano() {
        let mut state = PipelineState::sample(3);
        assert!(!state.panos()[0].exported);

        assert!(state.mark_exported(0));
        assert!(state.panos()[0].exported);
        assert!(!state.mark_exported(1));
    }
}
