use std::path::PathBuf;

use crate::codec;
use crate::error::CommandError;
use crate::models::{AppConfig, ImageStore};

/// A single image manipulation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `load <path> <name>`: read a PNG file into the store.
    Load { path: PathBuf, name: String },

    /// `save <path> <name>`: write a stored image to a PNG file.
    Save { name: String, path: PathBuf },

    /// `dither <src> <dest>`: Floyd-Steinberg dither `src` into `dest`.
    Dither { src: String, dest: String },
}

impl Command {
    /// Parse one script line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. Paths are
    /// resolved against the configured base directory. `line_no` is only
    /// used for error messages.
    pub fn parse(
        line: &str,
        line_no: usize,
        config: &AppConfig,
    ) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword {
            "load" => {
                let [path, name] = expect_args::<2>(keyword, args, line_no)?;
                Command::Load {
                    path: config.resolve(path),
                    name: name.to_string(),
                }
            }
            "save" => {
                let [path, name] = expect_args::<2>(keyword, args, line_no)?;
                Command::Save {
                    name: name.to_string(),
                    path: config.resolve(path),
                }
            }
            "dither" => {
                let [src, dest] = expect_args::<2>(keyword, args, line_no)?;
                Command::Dither {
                    src: src.to_string(),
                    dest: dest.to_string(),
                }
            }
            other => {
                return Err(CommandError::UnknownCommand {
                    line: line_no,
                    keyword: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }

    /// Run the command against `store`.
    pub fn execute(&self, store: &mut ImageStore, config: &AppConfig) -> Result<(), CommandError> {
        match self {
            Command::Load { path, name } => {
                let image = codec::read_png(path)?;
                tracing::info!(
                    name = %name,
                    path = %path.display(),
                    width = image.width(),
                    height = image.height(),
                    "Loaded image"
                );
                store.insert(name.clone(), image);
            }
            Command::Save { name, path } => {
                let image = store
                    .get(name)
                    .ok_or_else(|| CommandError::ImageNotFound(name.clone()))?;
                if !config.overwrite && path.exists() {
                    return Err(CommandError::Exists(path.clone()));
                }
                codec::write_png(path, image)?;
                tracing::info!(name = %name, path = %path.display(), "Saved image");
            }
            Command::Dither { src, dest } => {
                store.dither(src, dest)?;
                tracing::info!(src = %src, dest = %dest, "Dithered image");
            }
        }
        Ok(())
    }

    /// Script keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Load { .. } => "load",
            Command::Save { .. } => "save",
            Command::Dither { .. } => "dither",
        }
    }
}

fn expect_args<'a, const N: usize>(
    keyword: &str,
    args: &[&'a str],
    line_no: usize,
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::Parse {
        line: line_no,
        message: format!("{keyword} expects {N} arguments, got {}", args.len()),
    })
}
