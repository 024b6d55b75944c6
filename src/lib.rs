pub mod config;
pub mod domain;
pub mod execute;
pub mod logging;
pub mod report;

pub(crate) mod cli;

pub use cli::hook::resolve_request;
pub use cli::RunOptions;

/// Run a hook: resolve its command, execute it, print the result, and exit.
///
/// This is the binary entry point. It returns only on a fatal execution
/// error; every other path terminates the process with the hook's exit code.
pub fn run_hook(
    name: String,
    hook_args: Vec<String>,
    options: RunOptions,
) -> Result<std::convert::Infallible, execute::ExecuteError> {
    cli::hook::run(name, hook_args, options)
}
