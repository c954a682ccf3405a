//! Opening written entries with the platform's default viewer

use crate::error::Result;
use std::path::Path;
use std::process::Command;

/// Something that can show a file to the user
pub trait FileOpener {
    fn open(&self, file_path: &Path) -> Result<()>;
}

/// Opens files with the OS default handler, or with an override command
pub struct SystemOpener {
    command: Option<(String, Vec<String>)>,
}

impl SystemOpener {
    /// Create an opener. `override_command` replaces the platform default
    /// and receives the file path as its final argument.
    pub fn new(override_command: Option<String>) -> Self {
        let command = match override_command {
            Some(cmd) => parse_command(&cmd),
            None => platform_command(std::env::consts::OS),
        };
        SystemOpener { command }
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, file_path: &Path) -> Result<()> {
        let Some((program, args)) = &self.command else {
            log::warn!(
                "Cannot auto-open file on unsupported OS: {}",
                std::env::consts::OS
            );
            return Ok(());
        };

        log::debug!("Opening {} with {}", file_path.display(), program);

        // Launchers return as soon as the viewer is up
        let status = Command::new(program).args(args).arg(file_path).status()?;
        if !status.success() {
            log::warn!("{} exited with {}", program, status);
        }

        Ok(())
    }
}

/// Opener that does nothing (for --no-open)
pub struct NoopOpener;

impl FileOpener for NoopOpener {
    fn open(&self, _file_path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Default open command for an OS name as reported by `std::env::consts::OS`
fn platform_command(os: &str) -> Option<(String, Vec<String>)> {
    match os {
        "macos" => Some(("open".to_string(), vec![])),
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => {
            Some(("xdg-open".to_string(), vec![]))
        }
        // The empty string is the window title `start` expects first
        "windows" => Some((
            "cmd".to_string(),
            vec!["/C".to_string(), "start".to_string(), String::new()],
        )),
        _ => None,
    }
}

/// Parse command into program and arguments
fn parse_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?.to_string();
    let args = parts.map(|s| s.to_string()).collect();
    Some((program, args))
}
