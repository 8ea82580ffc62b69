//! Pixmanip - scriptable image manipulation
//!
//! Named images live in an [`ImageStore`](models::ImageStore); scripts of
//! [`Command`](commands::Command)s load PNG files, dither them and save the
//! results. The pixel model and the dithering transform come from the
//! `pixel-dither` crate.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod commands;
pub mod error;
pub mod models;
