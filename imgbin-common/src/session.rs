use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbImage};

use crate::pipeline::{PipelineError, RenderArgs};

/// The currently loaded source image. Starts out empty, is replaced wholesale
/// by every successful load and is read-only while rendering.
#[derive(Default)]
pub struct Session {
    material: Option<DynamicImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the image at `path` into the session. A failed load leaves the
    /// previously loaded image untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let path = path.as_ref();
        let img = image::open(path)?;

        let (width, height) = img.dimensions();
        log::info!("Loaded a {width}x{height} image from: {}", path.display());

        self.material = Some(img);
        Ok(())
    }

    pub fn material(&self) -> Option<&DynamicImage> {
        self.material.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_none()
    }

    /// Runs the pipeline on the loaded image. Rendering an empty session is
    /// not an error, there is just nothing to do.
    pub fn render(&self, args: &RenderArgs) -> Result<Option<RgbImage>, PipelineError> {
        match &self.material {
            None => {
                log::debug!("Nothing is loaded, skipping the render");
                Ok(None)
            }
            Some(img) => args.render(img).map(Some),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::imgutils::filled;

    #[test]
    fn an_empty_session_renders_nothing() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(None, session.render(&RenderArgs::default()).unwrap());
    }

    #[test]
    fn loads_replace_the_material_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        filled(4, 3, 0, 0, 0).save(&first).unwrap();
        filled(7, 2, 0, 0, 0).save(&second).unwrap();

        let mut session = Session::new();
        session.load(&first).unwrap();
        assert_eq!((4, 3), session.material().unwrap().dimensions());

        session.load(&second).unwrap();
        assert_eq!((7, 2), session.material().unwrap().dimensions());
    }

    #[test]
    fn a_failed_load_keeps_the_old_material() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        filled(4, 3, 0, 0, 0).save(&good).unwrap();

        let mut session = Session::new();
        session.load(&good).unwrap();

        assert!(session.load(dir.path().join("missing.png")).is_err());
        assert_eq!((4, 3), session.material().unwrap().dimensions());

        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not an image").unwrap();
        assert!(session.load(&corrupt).is_err());
        assert_eq!((4, 3), session.material().unwrap().dimensions());
    }
}
