//! Detached application launch
//!
//! Exec lines are cut at the first field code (`%U`, `%f`, ...) rather than
//! expanded. The result runs through `sh -c` in its own process group so it
//! survives the hotbar and never inherits its terminal.

use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::constants::desktop::{DETACH_SCRIPT, FIELD_CODE_MARKER, SHELL};

/// Command line actually run for an Exec value
pub fn command_line(exec: &str) -> &str {
    exec.split(FIELD_CODE_MARKER).next().unwrap_or_default().trim()
}

pub trait Launcher {
    /// Start the application described by `exec` without waiting on it
    fn launch(&self, exec: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch(&self, exec: &str) -> Result<()> {
        let command = command_line(exec);
        if command.is_empty() {
            bail!("Exec line {exec:?} has no command before its field codes");
        }

        // The outer shell backgrounds an inner shell and exits at once; reaping
        // it leaves the app reparented to init with no zombie behind. The
        // command travels as `$1` and reaches the inner shell untouched.
        let mut shell = Command::new(SHELL);
        shell
            .arg("-c")
            .arg(DETACH_SCRIPT)
            .arg(SHELL)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            shell.process_group(0);
        }

        let mut child = shell
            .spawn()
            .with_context(|| format!("Failed to spawn {SHELL} for {command:?}"))?;
        let pid = child.id();
        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for launcher shell (pid {pid})"))?;
        debug!(pid, ?status, "Launcher shell exited");

        if !status.success() {
            bail!("Launcher shell for {command:?} exited with {status}");
        }

        info!(command = %command, "Launched application");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records launches instead of spawning anything
    #[derive(Default)]
    pub(crate) struct RecordingLauncher {
        pub launched: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, exec: &str) -> Result<()> {
            if self.fail {
                bail!("spawn refused");
            }
            self.launched.borrow_mut().push(command_line(exec).to_string());
            Ok(())
        }
    }

    #[test]
    fn test_command_line_truncates_at_first_field_code() {
        assert_eq!(command_line("myapp %U --flag"), "myapp");
        assert_eq!(command_line("  code --new-window %F"), "code --new-window");
        assert_eq!(command_line("plain-command"), "plain-command");
        assert_eq!(command_line("%U"), "");
        assert_eq!(command_line(""), "");
    }

    #[test]
    fn test_shell_launcher_rejects_empty_command() {
        assert!(ShellLauncher.launch("%u").is_err());
        assert!(ShellLauncher.launch("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_launcher_runs_detached_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("launched");
        let exec = format!("touch {} %U", marker.display());

        ShellLauncher.launch(&exec).unwrap();

        // The app runs in the background; give it a moment to start
        for _ in 0..50 {
            if marker.exists() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(marker.exists());
    }

    fn wait_for(path: &std::path::Path) -> bool {
        for _ in 0..50 {
            if path.exists() {
                return true;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        path.exists()
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_launcher_keeps_comments_and_parentheses_intact() {
        let dir = tempfile::TempDir::new().unwrap();
        let commented = dir.path().join("commented");
        let grouped = dir.path().join("grouped");

        ShellLauncher.launch(&format!("touch {} # opens editor", commented.display())).unwrap();
        ShellLauncher.launch(&format!("(touch {}) %F", grouped.display())).unwrap();

        assert!(wait_for(&commented));
        assert!(wait_for(&grouped));
    }

    #[test]
    fn test_recording_launcher_sees_truncated_command() {
        let launcher = RecordingLauncher::default();
        launcher.launch("myapp %U --flag").unwrap();
        assert_eq!(*launcher.launched.borrow(), vec!["myapp".to_string()]);
    }
}
