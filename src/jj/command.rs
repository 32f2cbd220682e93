//! jj process execution.

use crate::error::{GitToJjError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A single call against the jj command-line interface.
///
/// Arguments are stored without the program name. A command either
/// captures its output (so the caller can inspect it) or passes it
/// straight through to the user's terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JjCommand {
    args: Vec<String>,
    capture: bool,
    cwd: Option<PathBuf>,
}

impl JjCommand {
    /// Create a command whose output goes straight to the terminal.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            capture: false,
            cwd: None,
        }
    }

    /// Create a command whose stdout and stderr are captured.
    pub fn captured<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capture: true,
            ..Self::new(args)
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command in `dir` instead of the executor's directory.
    ///
    /// Relative paths are resolved against the executor's directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The arguments passed to jj.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Whether output is captured rather than inherited.
    pub fn captures_output(&self) -> bool {
        self.capture
    }

    /// Directory override for this command, if any.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for JjCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jj")?;
        for arg in &self.args {
            write!(f, " {}", quote_arg(arg))?;
        }
        Ok(())
    }
}

/// Characters that force an argument to be quoted when displayed.
const SHELL_SPECIAL: &[char] = &[
    '\'', '"', '$', '`', '\\', '*', '?', '(', ')', ';', '&', '|', '<', '>',
];

/// Quote an argument for display the way a POSIX shell would need it.
fn quote_arg(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || SHELL_SPECIAL.contains(&c));

    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

/// Result of running a jj command.
#[derive(Debug, Clone)]
pub struct JjOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl JjOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Something that can run jj commands.
///
/// This is the only way the rest of the crate reaches the engine, which
/// lets tests substitute [`MockExecutor`](super::MockExecutor).
pub trait JjExecutor {
    /// Run a command to completion.
    ///
    /// A non-zero exit is reported through [`JjOutput::success`], not as an
    /// error. `Err` means the process could not be run at all.
    fn execute(&self, command: &JjCommand) -> Result<JjOutput>;
}

/// Runs jj as a child process.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: String,
    cwd: PathBuf,
    env: HashMap<String, String>,
}

impl ProcessExecutor {
    /// Create an executor for `program`, running in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
            env: HashMap::new(),
        }
    }

    /// Set extra environment variables for every call (merged with system env).
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }
}

impl JjExecutor for ProcessExecutor {
    fn execute(&self, command: &JjCommand) -> Result<JjOutput> {
        let start = Instant::now();

        let cwd = match command.cwd() {
            Some(dir) => self.cwd.join(dir),
            None => self.cwd.clone(),
        };

        let mut cmd = Command::new(&self.program);
        cmd.args(command.arguments());
        cmd.current_dir(&cwd);
        cmd.envs(&self.env);
        cmd.stdin(Stdio::null());

        if command.captures_output() {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        tracing::debug!(command = %command, cwd = %cwd.display(), "running jj");

        let output = cmd.output().map_err(|e| GitToJjError::DelegateSpawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(JjOutput::success(stdout, stderr, duration))
        } else {
            Ok(JjOutput::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_program_name() {
        let cmd = JjCommand::new(["bookmark", "list"]);
        assert_eq!(cmd.to_string(), "jj bookmark list");
    }

    #[test]
    fn display_quotes_whitespace_and_empty_args() {
        let cmd = JjCommand::new(["describe", "@-", "--message", ""]);
        assert_eq!(cmd.to_string(), "jj describe @- --message ''");

        let cmd = JjCommand::new(["new", "--message", "working tree"]);
        assert_eq!(cmd.to_string(), "jj new --message 'working tree'");
    }

    #[test]
    fn display_quotes_template_expressions() {
        let cmd = JjCommand::captured(["operation", "show", "--template", "self.id()"]);
        assert_eq!(cmd.to_string(), "jj operation show --template 'self.id()'");

        let cmd = JjCommand::new(["describe", "--message", "it's done"]);
        assert_eq!(cmd.to_string(), r"jj describe --message 'it'\''s done'");
    }

    #[test]
    fn builder_appends_args_in_order() {
        let cmd = JjCommand::new(["squash"])
            .arg("--keep-emptied")
            .args(["a.txt", "b.txt"]);
        assert_eq!(cmd.arguments(), ["squash", "--keep-emptied", "a.txt", "b.txt"]);
        assert!(!cmd.captures_output());
        assert!(cmd.cwd().is_none());
    }

    #[test]
    fn captured_commands_capture_output() {
        let cmd = JjCommand::captured(["diff"]).current_dir("repo");
        assert!(cmd.captures_output());
        assert_eq!(cmd.cwd(), Some(Path::new("repo")));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let executor = ProcessExecutor::new("definitely-not-a-real-jj-binary", temp.path());

        let err = executor
            .execute(&JjCommand::captured(["--version"]))
            .unwrap_err();

        assert!(matches!(err, GitToJjError::DelegateSpawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-jj-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let temp = tempfile::TempDir::new().unwrap();
        let executor = ProcessExecutor::new("sh", temp.path());

        let ok = executor
            .execute(&JjCommand::captured(["-c", "echo hello"]))
            .unwrap();
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = executor
            .execute(&JjCommand::captured(["-c", "echo oops >&2; exit 3"]))
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
        assert_eq!(failed.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn passes_extra_environment() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut env = HashMap::new();
        env.insert("GIT_TO_JJ_TEST_VAR".to_string(), "my_value".to_string());
        let executor = ProcessExecutor::new("sh", temp.path()).with_env(env);

        let result = executor
            .execute(&JjCommand::captured(["-c", "echo $GIT_TO_JJ_TEST_VAR"]))
            .unwrap();

        assert_eq!(result.stdout.trim(), "my_value");
    }

    #[cfg(unix)]
    #[test]
    fn relative_command_dir_resolves_against_executor_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        let executor = ProcessExecutor::new("sh", temp.path());

        let result = executor
            .execute(&JjCommand::captured(["-c", "pwd"]).current_dir("nested"))
            .unwrap();

        assert!(result.stdout.trim().ends_with("nested"));
    }
}
