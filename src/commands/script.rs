use super::Command;
use crate::error::CommandError;
use crate::models::{AppConfig, ImageStore};

/// Execute a command script line by line.
///
/// Stops at the first line that fails to parse or execute. Returns the
/// number of commands executed.
pub fn run_script(
    script: &str,
    store: &mut ImageStore,
    config: &AppConfig,
) -> Result<usize, CommandError> {
    let mut executed = 0;

    for (idx, line) in script.lines().enumerate() {
        let line_no = idx + 1;
        let command = match Command::parse(line, line_no, config) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_no, %e, "Invalid command");
                return Err(e);
            }
        };

        tracing::debug!(line = line_no, command = command.keyword(), "Executing");
        if let Err(e) = command.execute(store, config) {
            tracing::warn!(line = line_no, %e, "Command failed");
            return Err(e);
        }
        executed += 1;
    }

    Ok(executed)
}
