use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Build yt-dlp command lines from a form instead of remembering flags
#[derive(Parser, Debug)]
#[command(name = "ytdlp-cmdgen", version, about)]
pub struct Cli {
    /// Media URL to download
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Format choice (best, bestaudio, mp4, mp3, 1080p, list_formats, ...)
    #[arg(short = 'f', long = "format")]
    pub format: Option<String>,

    /// Output directory prefix for the output template
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Print the command and exit instead of opening the form
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Print as JSON (with --print)
    #[arg(long = "json", requires = "print")]
    pub json: bool,

    /// Also copy the command to the clipboard (with --print)
    #[arg(short = 'c', long = "copy", requires = "print")]
    pub copy: bool,

    /// List the available format choices and exit
    #[arg(long = "list-formats")]
    pub list_formats: bool,

    /// Use this configuration file instead of the default one
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
