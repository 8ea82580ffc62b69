//! Test workspace factory for integration tests.

use std::path::{Path, PathBuf};

use pixel_dither::Image;
use pixmanip::codec;
use pixmanip::commands::run_script;
use pixmanip::error::CommandError;
use pixmanip::models::{AppConfig, ImageStore};

/// Temporary directory with a config rooted in it and an image store
pub struct TestWorkspace {
    dir: tempfile::TempDir,
    pub config: AppConfig,
    pub store: ImageStore,
}

impl TestWorkspace {
    /// Create a workspace whose config resolves relative paths into a fresh temp dir
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = AppConfig {
            base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        Self {
            dir,
            config,
            store: ImageStore::new(),
        }
    }

    /// Same as [`TestWorkspace::new`] but refusing to overwrite existing files
    pub fn without_overwrite() -> Self {
        let mut workspace = Self::new();
        workspace.config.overwrite = false;
        workspace
    }

    /// Root of the workspace
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an image as PNG into the workspace
    pub fn write_image(&self, name: &str, image: &Image) -> PathBuf {
        let path = self.path(name);
        codec::write_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Read a PNG from the workspace
    pub fn read_image(&self, name: &str) -> Image {
        codec::read_png(&self.path(name)).expect("Failed to read PNG")
    }

    /// Run a script against this workspace's store and config
    pub fn run(&mut self, script: &str) -> Result<usize, CommandError> {
        run_script(script, &mut self.store, &self.config)
    }
}
