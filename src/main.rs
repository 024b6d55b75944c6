use clap::Parser;
use std::path::PathBuf;

/// Run the command configured for a git hook.
#[derive(Debug, Parser)]
#[command(name = "husky-hook", version, about)]
struct Cli {
    /// Print banners in uppercase
    #[arg(short, long)]
    upcase: bool,

    /// KDL config file to load before resolving the hook
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the git hook being run (e.g. pre-commit)
    hook: String,

    /// Arguments git passed to the hook
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    husky_hook::logging::init();

    let options = husky_hook::RunOptions {
        upcase: cli.upcase,
        config: cli.config,
    };
    match husky_hook::run_hook(cli.hook, cli.args, options)? {}
}
