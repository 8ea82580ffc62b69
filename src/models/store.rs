//! Named in-memory image storage.

use std::collections::HashMap;

use pixel_dither::Image;

use crate::error::CommandError;

/// Images addressed by name, as referenced from command scripts.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, Image>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `image` under `name`, returning any image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) -> Option<Image> {
        self.images.insert(name.into(), image)
    }

    pub fn get(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Dither the image named `src` and store the result as `dest`.
    ///
    /// The source image is dithered in place, so it carries the diffused
    /// error afterwards. When `src == dest` the result replaces it.
    pub fn dither(&mut self, src: &str, dest: &str) -> Result<(), CommandError> {
        let source = self
            .images
            .get_mut(src)
            .ok_or_else(|| CommandError::ImageNotFound(src.to_string()))?;

        let output = pixel_dither::dither(source);
        tracing::debug!(
            src,
            dest,
            width = output.width(),
            height = output.height(),
            "Dithered image"
        );

        self.images.insert(dest.to_string(), output);
        Ok(())
    }
}
