//! Image manipulation commands.
//!
//! A [`Command`] names one operation and its arguments; executing it against
//! an [`ImageStore`](crate::models::ImageStore) performs the operation.
//! Scripts are sequences of commands, one per line (see [`run_script`]).

mod command;
mod script;

pub use command::Command;
pub use script::run_script;
