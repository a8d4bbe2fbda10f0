//! Contains [ImageCatalog], the list of images the user opened.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use egui::load::{ImagePoll, SizeHint};
use egui::{Context, Image, RichText, Ui};

use gui::thumbnails::{self, PreviewError, ThumbnailPreview};

/// File extensions (lowercase) that can be opened.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];

/// How tall thumbnails are drawn.
const THUMBNAIL_HEIGHT: f32 = 96.0;

/// Whether `path` has one of the [IMAGE_EXTENSIONS].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// The opened images. An image's id is its index in the catalog.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    paths: Vec<PathBuf>,
}

impl ImageCatalog {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path(&self, id: usize) -> Option<&Path> {
        self.paths.get(id).map(PathBuf::as_path)
    }

    /// Adds the supported images among `files` that aren't in the catalog
    /// yet, returning how many were added.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = PathBuf>) -> usize {
        let before = self.paths.len();

        for file in files {
            if !is_supported_image(&file) {
                util::debug_log_info!("Skipping unsupported file `{}`.", file.display());
                continue;
            }
            if !self.paths.contains(&file) {
                self.paths.push(file);
            }
        }

        self.paths.len() - before
    }

    /// Adds every supported image directly inside `dir` (sorted by path),
    /// returning how many were added.
    pub fn add_directory(&mut self, dir: &Path) -> io::Result<usize> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        files.sort();

        Ok(self.add_files(files))
    }

    /// The URI egui's image loaders use for the image.
    fn uri(path: &Path) -> String {
        format!("file://{}", path.display())
    }

    /// How many images are done loading (successfully or not). Polling also
    /// starts loading any image that hasn't been requested yet.
    pub fn finished_loads(&self, ctx: &Context) -> usize {
        self.paths
            .iter()
            .filter(|path| {
                !matches!(
                    ctx.try_load_image(&Self::uri(path), SizeHint::default()),
                    Ok(ImagePoll::Pending { .. })
                )
            })
            .count()
    }

    /// Draws the thumbnail of a single image with its id and file name below.
    fn thumbnail(&self, ui: &mut Ui, id: usize, path: &Path) {
        ui.vertical(|ui| {
            ui.add(Image::new(Self::uri(path)).max_height(THUMBNAIL_HEIGHT));

            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into());
            ui.label(RichText::new(format!("#{id} {name}")).small());
        });
    }
}

impl ThumbnailPreview for ImageCatalog {
    fn tooltip(&self, ui: &mut Ui, ids: &[usize]) -> Result<(), PreviewError> {
        thumbnails::check_ids(ids, self.len())?;

        ui.horizontal(|ui| {
            for &id in ids {
                if let Some(path) = self.path(id) {
                    self.thumbnail(ui, id, path);
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use egui::{CentralPanel, RawInput};

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pano-stitcher-{name}-{}", std::process::id()));
        _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Creating a temp dir should work.");
        dir
    }

    #[test]
    fn supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("a/b/IMG_001.JPG")));
        assert!(is_supported_image(Path::new("scan.tiff")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn duplicates_and_unsupported_files_are_skipped() {
        let mut catalog = ImageCatalog::default();
        let added = catalog.add_files([
            PathBuf::from("a.jpg"),
            PathBuf::from("readme.md"),
            PathBuf::from("b.png"),
            PathBuf::from("a.jpg"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(catalog.path(0), Some(Path::new("a.jpg")));
        assert_eq!(catalog.path(1), Some(Path::new("b.png")));
        assert_eq!(catalog.path(2), None);
    }

    #[test]
    fn directory_images_are_added_in_order() {
        let dir = temp_dir("catalog");
        for name in ["c.jpg", "a.png", "b.txt", "d.JPEG"] {
            fs::write(dir.join(name), b"").expect("Writing a temp file should work.");
        }
        fs::create_dir(dir.join("nested.jpg")).expect("Creating a temp dir should work.");

        let mut catalog = ImageCatalog::default();
        assert_eq!(catalog.add_directory(&dir).expect("The dir exists."), 3);
        assert_eq!(catalog.path(0), Some(dir.join("a.png").as_path()));
        assert_eq!(catalog.path(1), Some(dir.join("c.jpg").as_path()));
        assert_eq!(catalog.path(2), Some(dir.join("d.JPEG").as_path()));

        _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut catalog = ImageCatalog::default();
        assert!(catalog.add_directory(Path::new("/definitely/not/here")).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn tooltip_rejects_unknown_images() {
        let mut catalog = ImageCatalog::default();
        catalog.add_files([PathBuf::from("a.jpg")]);

        let ctx = Context::default();
        let mut result = Ok(());
        _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                result = catalog.tooltip(ui, &[0, 3]);
            });
        });

        assert_eq!(result, Err(PreviewError::ImageOutOfRange { id: 3, len: 1 }));
    }

    #[test]
    fn tooltip_draws_known_images() {
        let mut catalog = ImageCatalog::default();
        catalog.add_files([PathBuf::from("a.jpg"), PathBuf::from("b.png")]);

        let ctx = Context::default();
        let mut result = Err(PreviewError::NoImages);
        _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                result = catalog.tooltip(ui, &[1, 0]);
            });
        });

        assert_eq!(result, Ok(()));
    }
}
