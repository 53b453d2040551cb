/// Main file
mod app_log;
mod args;
mod choices;
mod interactive;
mod package_manager;
mod progressbar;
mod selection;
mod summary;
mod template;
mod template_config;
mod template_variables;

use app_log::log_env_init;
use args::*;
use interactive::TerminalPrompter;
use package_manager::USER_AGENT_ENV;
use selection::{resolve, Resolution, ResolverConfig, SelectionRequest};

use anyhow::{Context, Result};
use console::style;
use log::{debug, error, info};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the user backs out of a prompt
const EXIT_CANCELLED: u8 = 130;

enum Outcome {
    Created(PathBuf),
    Cancelled,
}

fn main() -> ExitCode {
    let args = resolve_args();
    log_env_init(args.verbose);
    match generate(args) {
        Ok(Outcome::Created(project_dir)) => {
            debug!("created {}", project_dir.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => {
            error!("{} {}", style("✖").red(), style("Operation cancelled").bold());
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            error!(
                "{} {}",
                style("An error occurred:").bold().red(),
                style(format!("{e:#}")).red()
            );
            ExitCode::FAILURE
        }
    }
}

/// Resolve what the user wants, then scaffold it
fn generate(args: AppArgs) -> Result<Outcome> {
    let cwd = env::current_dir().context("cannot read the current directory")?;
    let config = ResolverConfig::new(cwd, env::var(USER_AGENT_ENV).ok());
    let request = SelectionRequest {
        add_ons: args.add_ons(),
        target_dir: args.target_dir,
        template: args.template,
        typescript: args.typescript,
    };

    let selection = match resolve(&request, &config, &mut TerminalPrompter::default())? {
        Resolution::Selected(selection) => selection,
        Resolution::Cancelled => return Ok(Outcome::Cancelled),
    };

    let project_dir = template::scaffold(&config.cwd, &selection)?;

    info!(
        "\n✨ {} {}",
        style("Done.").bold().green(),
        style("Now run:").bold()
    );
    for step in summary::next_steps(
        &config.cwd,
        &project_dir,
        &selection.target_dir,
        &selection.package_manager,
    ) {
        info!("  {}", style(step).cyan());
    }

    Ok(Outcome::Created(project_dir.as_ref().to_owned()))
}
