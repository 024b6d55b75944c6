use super::WrappedCommand;

/// Runs a wrapped command to completion and returns its merged output.
///
/// Implementations block until the shell exits and return stdout and stderr
/// interleaved in the order they were written.
pub trait ShellRunner {
    fn run(&self, wrapped: &WrappedCommand) -> std::io::Result<String>;
}

/// Spawns the shell through `duct`, with stderr redirected into stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctRunner;

impl ShellRunner for DuctRunner {
    fn run(&self, wrapped: &WrappedCommand) -> std::io::Result<String> {
        let output = duct::cmd(wrapped.program, &wrapped.args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
