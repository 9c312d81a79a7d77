//! fzf picker adapter
//!
//! This module provides an implementation of the `Picker` trait that drives
//! an external `fzf` process. Rows are written to the child's stdin as
//! [`FIELD_DELIMITER`]-separated lines; fzf draws its UI on the terminal and
//! prints the accepted lines on stdout once the user is done.

use super::error::{Result, UiError};
use super::traits::{Picker, PickerConfig, PickerSession};
use super::types::{FIELD_DELIMITER, Row, Selection};
use log::debug;
use std::ffi::OsString;
use std::io::{BufWriter, ErrorKind, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

/// [`FIELD_DELIMITER`] as passed to `--delimiter`
const DELIMITER_ARG: &str = "\x01";

/// fzf exit code when nothing matched the query
const EXIT_NO_MATCH: i32 = 1;
/// fzf exit code when the user aborted (Esc, Ctrl-C)
const EXIT_INTERRUPTED: i32 = 130;

/// fzf-based picker implementation
#[derive(Debug, Clone)]
pub struct FzfPicker {
    command: String,
    envs: Vec<(OsString, OsString)>,
}

impl FzfPicker {
    /// Create a picker running `fzf` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_command("fzf")
    }

    /// Create a picker running a custom fzf executable
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for fzf and the commands it runs
    /// (preview, bindings)
    #[must_use]
    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Executable launched by this picker
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for FzfPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for FzfPicker {
    type Session = FzfSession;

    fn open(&self, config: &PickerConfig) -> Result<FzfSession> {
        FzfSession::spawn(&self.command, &fzf_args(config), &self.envs)
    }
}

/// Build the fzf command line for a session
#[must_use]
pub fn fzf_args(config: &PickerConfig) -> Vec<String> {
    let mut args: Vec<String> = [
        "--delimiter",
        DELIMITER_ARG,
        "--tiebreak",
        "begin",
        "--ansi",
        "--exact",
        "--tabstop",
        "4",
        "--height",
        "100%",
        "--layout",
        "reverse",
        // Keep the title visible when the body is long
        "--no-hscroll",
        // Don't highlight search terms
        "--color",
        "hl:-1,hl+:-1",
        "--preview-window",
        "wrap",
        // Hide the identifier column
        "--with-nth",
        "2..",
        "--multi",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let header = config
        .bindings
        .iter()
        .filter(|binding| !binding.description.is_empty())
        .map(|binding| format!("{}: {}", binding.keys, binding.description))
        .collect::<Vec<_>>()
        .join(", ");
    if !header.is_empty() {
        args.push("--header".to_string());
        args.push(header);
    }

    if let Some(preview) = &config.preview_command {
        args.push("--preview".to_string());
        args.push(preview.clone());
    }

    if config.padding > 0 {
        args.push("--margin".to_string());
        args.push(format!("{},0", config.padding));
    }

    // One flag per binding: a colon-form action consumes the rest of its
    // --bind value, commas included
    for binding in &config.bindings {
        args.push("--bind".to_string());
        args.push(format!("{}:{}", binding.keys.to_lowercase(), binding.action));
    }

    args
}

/// Parse the lines fzf printed for the accepted rows
#[must_use]
pub fn parse_selection(output: &str) -> Selection {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(Row::parse)
        .collect()
}

/// A running fzf process
///
/// The child is killed and reaped on drop unless [`PickerSession::selection`]
/// already waited for it.
#[derive(Debug)]
pub struct FzfSession {
    child: Option<Child>,
    stdin: Option<BufWriter<ChildStdin>>,
}

impl FzfSession {
    fn spawn(program: &str, args: &[String], envs: &[(OsString, OsString)]) -> Result<Self> {
        debug!("launching {program} {args:?}");

        let mut child = Command::new(program)
            .args(args)
            .envs(envs.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| UiError::Launch {
                command: program.to_string(),
                source,
            })?;

        let stdin = child.stdin.take().map(BufWriter::new);
        Ok(Self {
            child: Some(child),
            stdin,
        })
    }
}

impl PickerSession for FzfSession {
    fn feed(&mut self, row: &Row) -> Result<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Ok(());
        };

        match writeln!(stdin, "{}", row.to_line()) {
            Ok(()) => Ok(()),
            // fzf exits as soon as the user accepts, possibly before every
            // row was sent.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("picker closed its input, no more rows are sent");
                self.stdin = None;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn selection(mut self) -> Result<Selection> {
        if let Some(mut stdin) = self.stdin.take() {
            match stdin.flush() {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let Some(child) = self.child.take() else {
            return Ok(Selection::new());
        };
        let output = child.wait_with_output()?;

        match output.status.code() {
            Some(0) => {
                let selection = parse_selection(&String::from_utf8_lossy(&output.stdout));
                debug!("picker returned {} row(s)", selection.len());
                Ok(selection)
            }
            Some(EXIT_NO_MATCH | EXIT_INTERRUPTED) => {
                debug!("picker cancelled");
                Ok(Selection::new())
            }
            _ => Err(UiError::Exit(output.status)),
        }
    }
}

impl Drop for FzfSession {
    fn drop(&mut self) {
        self.stdin.take();
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Binding;

    fn value_of<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|arg| arg == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    fn values_of<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
        args.windows(2)
            .filter(|pair| pair[0] == flag)
            .map(|pair| pair[1].as_str())
            .collect()
    }

    #[test]
    fn test_args_without_options() {
        let args = fzf_args(&PickerConfig::new());
        assert_eq!(
            value_of(&args, "--delimiter"),
            Some(FIELD_DELIMITER.to_string().as_str())
        );
        assert_eq!(value_of(&args, "--with-nth"), Some("2.."));
        assert!(args.contains(&"--multi".to_string()));
        assert!(value_of(&args, "--header").is_none());
        assert!(value_of(&args, "--preview").is_none());
        assert!(value_of(&args, "--margin").is_none());
        assert!(value_of(&args, "--bind").is_none());
    }

    #[test]
    fn test_args_with_preview_padding_and_bindings() {
        let config = PickerConfig::new()
            .with_preview("notepick list --format raw-content {1}")
            .with_padding(2)
            .with_bindings(vec![
                Binding::new("Ctrl-N", "create a note", "abort+execute:new, then (more)"),
                Binding::new("Ctrl-D", "", "abort"),
            ]);
        let args = fzf_args(&config);

        assert_eq!(
            value_of(&args, "--preview"),
            Some("notepick list --format raw-content {1}")
        );
        assert_eq!(value_of(&args, "--margin"), Some("2,0"));
        assert_eq!(value_of(&args, "--header"), Some("Ctrl-N: create a note"));
        assert_eq!(
            values_of(&args, "--bind"),
            vec!["ctrl-n:abort+execute:new, then (more)", "ctrl-d:abort"]
        );
    }

    #[test]
    fn test_parse_selection() {
        let selection = parse_selection("c.md\x01C\x01body\na.md\x01A\x01\n\n");
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].id(), Some("c.md"));
        assert_eq!(selection[1].columns(), ["a.md", "A", ""]);
    }

    #[test]
    fn test_launch_failure() {
        let picker = FzfPicker::with_command("notepick-missing-picker-binary");
        let err = picker.open(&PickerConfig::new()).unwrap_err();
        assert!(matches!(err, UiError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_round_trip_through_process() {
        let mut session = FzfSession::spawn("cat", &[], &[]).unwrap();
        session.feed(&Row::new(["a.md", "A", "one\ntwo"])).unwrap();
        session.feed(&Row::new(["b.md", "B", ""])).unwrap();

        let selection = session.selection().unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].columns(), ["a.md", "A", "one two"]);
        assert_eq!(selection[1].id(), Some("b.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_is_passed_to_picker() {
        let args = ["-c".to_string(), "echo \"$NOTEPICK_TEST_VAR\"".to_string()];
        let envs: [(OsString, OsString); 1] = [("NOTEPICK_TEST_VAR".into(), "a.md".into())];
        let session = FzfSession::spawn("sh", &args, &envs).unwrap();

        let selection = session.selection().unwrap();
        assert_eq!(selection, vec![Row::new(["a.md"])]);
    }

    #[cfg(unix)]
    #[test]
    fn test_interrupted_session_is_empty() {
        let args = ["-c".to_string(), "exit 130".to_string()];
        let session = FzfSession::spawn("sh", &args, &[]).unwrap();
        assert!(session.selection().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_session_is_an_error() {
        let args = ["-c".to_string(), "exit 2".to_string()];
        let session = FzfSession::spawn("sh", &args, &[]).unwrap();
        assert!(matches!(session.selection(), Err(UiError::Exit(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_dropped_session_kills_child() {
        let args = ["-c".to_string(), "sleep 30".to_string()];
        let session = FzfSession::spawn("sh", &args, &[]).unwrap();
        let pid = session.child.as_ref().unwrap().id();
        drop(session);

        // The child was reaped, so its pid no longer names a process
        let alive = Command::new("sh")
            .args(["-c", &format!("kill -0 {pid} 2>/dev/null")])
            .status()
            .unwrap();
        assert!(!alive.success());
    }
}
