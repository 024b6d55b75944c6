use crate::domain::{HookRequest, ResolvedCommand};
use crate::execute::ExecutionResult;

const BYPASS_ALLOWED: &str = "(add --no-verify to bypass)";
const BYPASS_DISALLOWED: &str = "(cannot be bypassed with --no-verify due to Git specs)";

/// How banners are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerStyle {
    /// Print banner lines in uppercase.
    pub upcase: bool,
}

/// Rendered outcome of a hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Process exit status to terminate with.
    pub exit_code: i32,
    /// Captured command output, printed before the banner. Empty when there was none.
    pub output: String,
    /// Success or failure banner.
    pub banner: String,
}

impl Report {
    /// Everything printed to stdout, in order.
    pub fn text(&self) -> String {
        if self.output.is_empty() {
            self.banner.clone()
        } else {
            format!("{}\n{}", self.output, self.banner)
        }
    }
}

/// The no-verify hint for the hook named by the request's first argument.
pub fn bypass_hint(request: &HookRequest) -> &'static str {
    if request.first_arg_hook().is_bypassable() {
        BYPASS_ALLOWED
    } else {
        BYPASS_DISALLOWED
    }
}

/// Build the report for a finished command. The exit code is the child's own.
pub fn render(result: &ExecutionResult, resolved: &ResolvedCommand, style: BannerStyle) -> Report {
    let hook = &resolved.hook.name;
    let command = &resolved.command;
    let banner = if result.success() {
        format!("husky > {hook} ({command})")
    } else {
        format!(
            "husky > {hook} hook failed {}\n({command})",
            bypass_hint(&resolved.hook)
        )
    };
    let banner = if style.upcase {
        banner.to_uppercase()
    } else {
        banner
    };

    Report {
        exit_code: result.exit_code,
        output: result.output.clone(),
        banner,
    }
}

/// Print the outcome and terminate the process with the command's exit code.
pub fn report(result: &ExecutionResult, resolved: &ResolvedCommand, style: BannerStyle) -> ! {
    let report = render(result, resolved, style);
    println!("{}", report.text());
    std::process::exit(report.exit_code)
}
