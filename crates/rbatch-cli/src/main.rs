use anyhow::Context;
use clap::Parser;
use rbatch_core::config::{DEFAULT_CONTROL_PROGRAM, DEFAULT_ESCAPE_PROGRAM, DEFAULT_TEMPLATE};
use rbatch_core::{resolve_action, LaunchConfig, LaunchError, Launcher};

/// Start the `rbatch@<action>.service` user unit, where <action> is the name
/// this program was invoked as.
///
/// Install it as symlinks named after each action; run with no arguments.
#[derive(Parser)]
#[command(name = "rbatch-start", version)]
struct Cli {
    /// Action to start instead of the program name
    #[arg(long, env = "RBATCH_ACTION")]
    action: Option<String>,

    /// Template unit to instantiate
    #[arg(long, env = "RBATCH_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Escaping utility
    #[arg(long, env = "RBATCH_ESCAPE_PROGRAM", default_value = DEFAULT_ESCAPE_PROGRAM)]
    escape_program: String,

    /// Service-control utility (always called with --user)
    #[arg(long, env = "RBATCH_CONTROL_PROGRAM", default_value = DEFAULT_CONTROL_PROGRAM)]
    control_program: String,

    /// Print the escaped unit name without starting it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<LaunchError>()
            .map(LaunchError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let argv0 = std::env::args_os().next();
    let action = resolve_action(cli.action.as_deref(), argv0.as_deref())?;

    let launcher = Launcher::new(LaunchConfig {
        template: cli.template,
        escape_program: cli.escape_program,
        control_program: cli.control_program,
    });

    if cli.dry_run {
        launcher.config().validate()?;
        let unit = launcher
            .escape(&action)
            .with_context(|| format!("action '{action}'"))?;
        println!("{unit}");
        return Ok(());
    }

    launcher
        .launch(&action)
        .with_context(|| format!("action '{action}'"))?;
    Ok(())
}
