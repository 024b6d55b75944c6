use std::convert::Infallible;
use std::path::Path;

use tracing::debug;

use super::RunOptions;
use crate::config::{resolve, AppConfig, ConfigSource};
use crate::domain::{HookRequest, ResolvedCommand};
use crate::execute::{ExecuteError, Executor};
use crate::report::{self, BannerStyle};

/// Run one hook invocation and terminate the process.
///
/// Exits 0 silently when no command is configured for the hook. Otherwise the
/// command runs, its output and a banner are printed, and the process exits
/// with the command's status. Only fatal execution errors return; any output
/// captured before one is printed first.
pub fn run(
    name: String,
    hook_args: Vec<String>,
    options: RunOptions,
) -> Result<Infallible, ExecuteError> {
    let request = HookRequest::new(name, hook_args);
    let app = AppConfig::load_or_default(options.config.as_deref());

    let Some(resolved) = resolve_request(request, &app, Path::new(".")) else {
        std::process::exit(0);
    };

    let result = Executor::host()
        .execute(&resolved.command)
        .inspect_err(|e| {
            if let Some(output) = e.captured_output() {
                println!("{output}");
            }
        })?;
    report::report(
        &result,
        &resolved,
        BannerStyle {
            upcase: options.upcase,
        },
    )
}

/// Resolve the command for `request` from `.husky.json` in `dir` and `app`.
///
/// The application config is merged last, so it wins over the JSON file.
pub fn resolve_request(
    request: HookRequest,
    app: &AppConfig,
    dir: &Path,
) -> Option<ResolvedCommand> {
    let sources = ConfigSource::defaults(dir, app);
    match resolve(&sources, &request.hook.key()) {
        Ok(command) => Some(ResolvedCommand {
            hook: request,
            command,
        }),
        Err(not_found) => {
            debug!("{not_found}");
            None
        }
    }
}
