use clap::Parser;
use git_selector::commands;
use git_selector::core::{print_error, Git, Outcome, Result};
use std::process;

/// Interactive candidate selection for git subcommands.
///
/// Help and version interception are disabled on purpose: every argument
/// except the leading `--dry-run` flag belongs to git, including `-h` and
/// `--help`, which trigger the banner and are then forwarded untouched.
#[derive(Parser)]
#[command(name = "git-selector")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print the would-be git command instead of executing it
    #[arg(long, hide = true)]
    dry_run: bool,

    /// Everything forwarded to git
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let git = Git::new(cli.dry_run);

    let code = match run(&git, &cli.args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            print_error(&e.to_string());
            log::debug!("fatal: {e:?}");
            1
        }
    };
    process::exit(code);
}

fn run(git: &Git, args: &[String]) -> Result<Outcome> {
    if args.is_empty() || args.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!(
            "git-selector {}: interactive candidate selection for git",
            env!("CARGO_PKG_VERSION")
        );
        return git.run(args).map(Outcome::Ran);
    }

    commands::dispatch(git, args)
}
