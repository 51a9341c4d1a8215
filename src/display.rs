use colored::Colorize;
use serde_json::{Value, json};

use crate::command::BuildError;
use crate::config::FormInputs;
use crate::format::FormatChoice;

pub fn show_formats() {
    println!("{}", "Available formats:".green());
    for choice in FormatChoice::ALL {
        println!("  {:<20} {}", choice.value().yellow(), choice.label());
    }
}

pub fn command_json(inputs: &FormInputs, result: &Result<String, BuildError>) -> Value {
    json!({
        "url": inputs.url.trim(),
        "format": inputs.format.value(),
        "output_dir": inputs.output_dir,
        "command": result.as_ref().ok(),
    })
}

pub fn show_command(command: &str) {
    println!("{}", command);
}

pub fn show_error(err: &BuildError) {
    eprintln!("{} {}", "Error:".red(), err);
}

pub fn show_copied(backend: &str) {
    eprintln!("{} {}", "Copied to clipboard via".green(), backend);
}
