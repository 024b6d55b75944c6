mod runner;
mod shell;

use tracing::debug;

pub use runner::{DuctRunner, ShellRunner};
pub use shell::{host_shell, PosixShell, ShellWrapper, WindowsCmd, WrappedCommand};

/// Outcome of running a hook command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit status of the user command; 0 is success.
    pub exit_code: i32,
    /// Merged stdout and stderr of the user command.
    pub output: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Fatal errors from running a command.
///
/// These mean the shell could not be started or the exit-code echo was not
/// where it should be. They are never mapped to an exit code of 0.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ExecuteError {
    #[error("failed to spawn `{program}`")]
    #[diagnostic(code(husky::execute::spawn))]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("shell output ended before the exit-code line")]
    #[diagnostic(
        code(husky::execute::missing_exit_code),
        help(
            "the status echo never ran: the command called `exit` itself \
             (e.g. `mix test || exit 1`) or ends in a `#` comment"
        )
    )]
    MissingExitCode { output: String },
    #[error("exit-code line `{line}` is not an integer")]
    #[diagnostic(
        code(husky::execute::invalid_exit_code),
        help(
            "the status echo never ran or was glued to output: the command called \
             `exit` itself, ends in a `#` comment, or printed a last line without a newline"
        )
    )]
    InvalidExitCode {
        line: String,
        /// Everything the shell printed, so it can be shown before the error.
        output: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl ExecuteError {
    /// Output the command printed before the error was detected, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            ExecuteError::Spawn { .. } => None,
            ExecuteError::MissingExitCode { output } | ExecuteError::InvalidExitCode { output, .. } => {
                Some(output.as_str()).filter(|o| !o.is_empty())
            }
        }
    }
}

/// Runs commands through a shell wrapper and a runner.
#[derive(Clone, Copy)]
pub struct Executor<'a> {
    shell: &'a dyn ShellWrapper,
    runner: &'a dyn ShellRunner,
}

impl<'a> Executor<'a> {
    pub fn new(shell: &'a dyn ShellWrapper, runner: &'a dyn ShellRunner) -> Self {
        Executor { shell, runner }
    }

    /// Host shell, spawned with `duct`.
    pub fn host() -> Executor<'static> {
        Executor {
            shell: host_shell(),
            runner: &DuctRunner,
        }
    }

    /// Run `command` to completion and recover its exit code.
    pub fn execute(&self, command: &str) -> Result<ExecutionResult, ExecuteError> {
        let wrapped = self.shell.wrap(command);
        debug!(program = wrapped.program, args = ?wrapped.args, "running hook command");
        let raw = self
            .runner
            .run(&wrapped)
            .map_err(|source| ExecuteError::Spawn {
                program: wrapped.program,
                source,
            })?;
        let result = parse_output(&raw, wrapped.exit_code_line)?;
        debug!(exit_code = result.exit_code, "hook command finished");
        Ok(result)
    }
}

/// Split captured shell output into the command's own output and its exit code.
///
/// The exit code is the line `exit_code_line` positions from the end; every
/// line before it is output. Carriage returns are stripped so `cmd` output
/// parses the same way as `sh` output.
pub fn parse_output(raw: &str, exit_code_line: usize) -> Result<ExecutionResult, ExecuteError> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let captured = || lines.join("\n").trim_end_matches('\n').to_string();

    let Some(index) = lines.len().checked_sub(exit_code_line) else {
        return Err(ExecuteError::MissingExitCode { output: captured() });
    };

    let line = lines[index].trim();
    let exit_code = line
        .parse::<i32>()
        .map_err(|source| ExecuteError::InvalidExitCode {
            line: line.to_string(),
            output: captured(),
            source,
        })?;

    Ok(ExecutionResult {
        exit_code,
        output: lines[..index].join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Runner that records what it was asked to run and replays canned output.
    struct FakeRunner {
        output: std::io::Result<String>,
        seen: RefCell<Vec<WrappedCommand>>,
    }

    impl FakeRunner {
        fn replying(output: &str) -> Self {
            FakeRunner {
                output: Ok(output.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            FakeRunner {
                output: Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no shell")),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShellRunner for FakeRunner {
        fn run(&self, wrapped: &WrappedCommand) -> std::io::Result<String> {
            self.seen.borrow_mut().push(wrapped.clone());
            match &self.output {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(std::io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    // ---- parse_output ----

    #[test]
    fn parse_output_success_with_lines() {
        let result = parse_output("line one\nline two\n0\n", 2).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "line one\nline two");
        assert!(result.success());
    }

    #[test]
    fn parse_output_nonzero_exit() {
        let result = parse_output("boom\n3\n", 2).unwrap();
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.output, "boom");
        assert!(!result.success());
    }

    #[test]
    fn parse_output_no_command_output() {
        let result = parse_output("0\n", 2).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "");
    }

    #[test]
    fn parse_output_keeps_blank_lines_in_output() {
        let result = parse_output("a\n\nb\n1\n", 2).unwrap();
        assert_eq!(result.output, "a\n\nb");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn parse_output_strips_carriage_returns() {
        let result = parse_output("hi\r\n0 \r\n", 2).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "hi");
    }

    #[test]
    fn parse_output_empty_is_missing_exit_code() {
        let err = parse_output("", 2).unwrap_err();
        assert!(matches!(err, ExecuteError::MissingExitCode { .. }));
    }

    #[test]
    fn parse_output_without_trailing_newline_is_invalid() {
        // "hi\n0" puts "hi" where the code should be.
        let err = parse_output("hi\n0", 2).unwrap_err();
        match err {
            ExecuteError::InvalidExitCode { line, .. } => assert_eq!(line, "hi"),
            other => panic!("expected InvalidExitCode, got {other:?}"),
        }
    }

    #[test]
    fn parse_output_keeps_output_when_command_exits_early() {
        // `echo 3-tests-failed; exit 4; echo $?` never reaches the echo.
        let err = parse_output("3-tests-failed\n", 2).unwrap_err();
        match &err {
            ExecuteError::InvalidExitCode { line, output, .. } => {
                assert_eq!(line, "3-tests-failed");
                assert_eq!(output, "3-tests-failed");
            }
            other => panic!("expected InvalidExitCode, got {other:?}"),
        }
        assert_eq!(err.captured_output(), Some("3-tests-failed"));
    }

    #[test]
    fn parse_output_keeps_multiline_output_and_strips_carriage_returns() {
        let err = parse_output("compiling\r\n2 tests failed\r\n", 2).unwrap_err();
        assert_eq!(err.captured_output(), Some("compiling\n2 tests failed"));
    }

    #[test]
    fn captured_output_is_none_without_output() {
        let err = parse_output("", 2).unwrap_err();
        assert_eq!(err.captured_output(), None);

        let spawn = ExecuteError::Spawn {
            program: "sh",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"),
        };
        assert_eq!(spawn.captured_output(), None);
    }

    #[test]
    fn parse_output_non_numeric_code_is_error() {
        let err = parse_output("out\nnot-a-number\n", 2).unwrap_err();
        assert!(matches!(err, ExecuteError::InvalidExitCode { .. }));
    }

    // ---- Executor with a fake runner ----

    #[test]
    fn execute_round_trips_through_posix_wrapper() {
        let runner = FakeRunner::replying("running tests\nall good\n0\n");
        let result = Executor::new(&PosixShell, &runner).execute("mix test").unwrap();

        assert_eq!(
            result,
            ExecutionResult {
                exit_code: 0,
                output: "running tests\nall good".into()
            }
        );
        let seen = runner.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].args[1], "mix test; echo $?");
    }

    #[test]
    fn execute_round_trips_through_windows_wrapper() {
        let runner = FakeRunner::replying("lint failed\r\n3\r\n");
        let result = Executor::new(&WindowsCmd, &runner).execute("npm run lint").unwrap();

        assert_eq!(
            result,
            ExecutionResult {
                exit_code: 3,
                output: "lint failed".into()
            }
        );
        assert_eq!(runner.seen.borrow()[0].args[2], "npm run lint & echo !ERRORLEVEL!");
    }

    #[test]
    fn execute_propagates_spawn_failure() {
        let runner = FakeRunner::failing();
        let err = Executor::new(&PosixShell, &runner).execute("x").unwrap_err();
        assert!(matches!(err, ExecuteError::Spawn { program: "sh", .. }));
    }

    #[test]
    fn execute_propagates_protocol_violation() {
        let runner = FakeRunner::replying("garbage\n");
        let err = Executor::new(&PosixShell, &runner).execute("x").unwrap_err();
        assert!(matches!(err, ExecuteError::InvalidExitCode { .. }));
    }

    // ---- Real shell ----

    #[cfg(unix)]
    #[test]
    fn host_executor_keeps_output_when_command_exits() {
        let err = Executor::host()
            .execute("echo 3-tests-failed; exit 4")
            .unwrap_err();
        assert_eq!(err.captured_output(), Some("3-tests-failed"));
    }

    #[cfg(unix)]
    #[test]
    fn host_executor_keeps_output_when_comment_swallows_echo() {
        let err = Executor::host().execute("echo ran # lint step").unwrap_err();
        assert_eq!(err.captured_output(), Some("ran"));
    }

    #[cfg(unix)]
    #[test]
    fn host_executor_captures_output_and_status() {
        let result = Executor::host()
            .execute("echo out; echo err 1>&2; (exit 3)")
            .unwrap();
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.output, "out\nerr");
    }

    #[cfg(unix)]
    #[test]
    fn host_executor_success() {
        let result = Executor::host().execute("echo hi").unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "hi");
    }
}
