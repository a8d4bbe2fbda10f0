//! The seam between the tables and whatever can draw image previews.

use egui::Ui;
use thiserror::Error;

/// Indicates that a preview couldn't be drawn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewError {
    #[error("Image {id} doesn't exist, there are only {len} images.")]
    ImageOutOfRange { id: usize, len: usize },
    #[error("There are no images to preview.")]
    NoImages,
}

/// Draws the images a table row refers to, usually inside a tooltip.
#[cfg_attr(test, mockall::automock)]
pub trait ThumbnailPreview {
    /// Draws a preview of the images with the ids `ids` into `ui`.
    fn tooltip(&self, ui: &mut Ui, ids: &[usize]) -> Result<(), PreviewError>;
}

/// Checks that every id in `ids` refers to one of `len` images.
pub fn check_ids(ids: &[usize], len: usize) -> Result<(), PreviewError> {
    if ids.is_empty() {
        return Err(PreviewError::NoImages);
    }

    match ids.iter().find(|&&id| id >= len) {
        Some(&id) => Err(PreviewError::ImageOutOfRange { id, len }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_in_range_are_fine() {
        assert_eq!(check_ids(&[0, 2, 4], 5), Ok(()));
    }

    #[test]
    fn first_bad_id_is_reported() {
        assert_eq!(
            check_ids(&[1, 7, 9], 5),
            Err(PreviewError::ImageOutOfRange { id: 7, len: 5 })
        );
    }

    #[test]
    fn nothing_to_preview() {
        assert_eq!(check_ids(&[], 5), Err(PreviewError::NoImages));
    }
}
