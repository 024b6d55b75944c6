//! Per-platform shell wrapping.
//!
//! A shell run through a capture primitive does not hand back the child's
//! exit status, so the wrapper appends an `echo` of it and the executor reads
//! it back from the output.

mod private {
    pub trait Sealed {}
}

/// A command ready to hand to a [`ShellRunner`](super::ShellRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedCommand {
    /// Shell program to spawn.
    pub program: &'static str,
    /// Arguments to the shell, with the user command and exit-code echo last.
    pub args: Vec<String>,
    /// Position of the exit-code line, counted from the end of the split output.
    ///
    /// The final echo ends with a newline, so splitting on `\n` leaves an empty
    /// last element and the code sits one before it.
    pub exit_code_line: usize,
}

/// Strategy for wrapping a command so its exit status is echoed last.
pub trait ShellWrapper: private::Sealed + std::fmt::Debug {
    fn wrap(&self, command: &str) -> WrappedCommand;
}

/// `sh -c "<command>; echo $?"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixShell;

/// `cmd /V:ON /C "<command> & echo !ERRORLEVEL!"`.
///
/// Delayed expansion (`/V:ON`) makes `!ERRORLEVEL!` read after the command ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsCmd;

impl private::Sealed for PosixShell {}
impl private::Sealed for WindowsCmd {}

impl ShellWrapper for PosixShell {
    fn wrap(&self, command: &str) -> WrappedCommand {
        WrappedCommand {
            program: "sh",
            args: vec!["-c".to_string(), format!("{command}; echo $?")],
            exit_code_line: 2,
        }
    }
}

impl ShellWrapper for WindowsCmd {
    fn wrap(&self, command: &str) -> WrappedCommand {
        WrappedCommand {
            program: "cmd",
            args: vec![
                "/V:ON".to_string(),
                "/C".to_string(),
                format!("{command} & echo !ERRORLEVEL!"),
            ],
            exit_code_line: 2,
        }
    }
}

/// The wrapper for the platform this binary was built for.
pub fn host_shell() -> &'static dyn ShellWrapper {
    if cfg!(windows) {
        &WindowsCmd
    } else {
        &PosixShell
    }
}
