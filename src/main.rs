mod cli;
mod clipboard;
mod command;
mod config;
mod deps;
mod display;
mod format;
mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use command::{BuildError, build_command};
use config::{Config, FormInputs};
use logging::LogTarget;

/// Exit code for an empty URL in print mode.
const EXIT_EMPTY_INPUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list_formats {
        display::show_formats();
        return Ok(ExitCode::SUCCESS);
    }

    let target = if cli.print { LogTarget::Stderr } else { LogTarget::File };
    logging::init(cli.verbose, target)?;

    let config = Config::load(cli.config.as_deref())?;
    let inputs = FormInputs::from_cli(&cli, &config);
    tracing::debug!(?inputs, "initial form values");

    if cli.print {
        let report = print_command(&cli, &inputs, |command| {
            clipboard::copy_to_clipboard(command).map(|backend| backend.to_string())
        })?;
        if let Some(out) = &report.stdout {
            println!("{}", out);
        }
        if let Some(e) = &report.error {
            display::show_error(e);
        }
        if let Some(backend) = &report.copied_via {
            display::show_copied(backend);
        }
        return Ok(ExitCode::from(report.exit_code));
    }

    let tools = deps::check_tools();
    let app = ui::App::new(inputs, &config, tools);

    // Initialize TUI
    let terminal = ui::init_terminal()?;
    let mut terminal_guard = ui::TerminalGuard::new(terminal);

    let result = ui::run_app(terminal_guard.get_mut(), app);

    // Terminal cleanup happens via Drop guard
    drop(terminal_guard);

    result.map(|_| ExitCode::SUCCESS)
}

/// What `--print` writes and how it exits.
#[derive(Debug, Default)]
struct PrintReport {
    exit_code: u8,
    stdout: Option<String>,
    error: Option<BuildError>,
    copied_via: Option<String>,
}

fn print_command(
    cli: &Cli,
    inputs: &FormInputs,
    copy: impl FnOnce(&str) -> Result<String>,
) -> Result<PrintReport> {
    let result = build_command(&inputs.url, inputs.format, &inputs.output_dir);
    let mut report = PrintReport::default();

    if cli.json {
        report.stdout = Some(serde_json::to_string_pretty(&display::command_json(inputs, &result))?);
    }

    let command = match result {
        Ok(command) => command,
        Err(e) => {
            if !cli.json {
                report.error = Some(e);
            }
            report.exit_code = EXIT_EMPTY_INPUT;
            return Ok(report);
        }
    };

    if cli.copy {
        report.copied_via = Some(copy(&command)?);
    }

    if !cli.json {
        report.stdout = Some(command);
    }

    Ok(report)
}
