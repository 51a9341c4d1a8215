use thiserror::Error;

use crate::format::FormatChoice;

pub const TOOL: &str = "yt-dlp";

/// Filename pattern yt-dlp fills in at download time.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Please enter a valid URL.")]
    EmptyInput,
}

/// Result of the last build, as shown by the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommandState {
    #[default]
    Empty,
    Ready(String),
}

impl CommandState {
    pub fn command(&self) -> Option<&str> {
        match self {
            CommandState::Empty => None,
            CommandState::Ready(cmd) => Some(cmd),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CommandState::Ready(_))
    }
}

impl From<Result<String, BuildError>> for CommandState {
    fn from(result: Result<String, BuildError>) -> Self {
        match result {
            Ok(cmd) => CommandState::Ready(cmd),
            Err(BuildError::EmptyInput) => CommandState::Empty,
        }
    }
}

/// Assemble the yt-dlp command line for the given form values.
///
/// Only the URL can make this fail. The URL and output path are wrapped in
/// double quotes as-is, so quote characters inside them are not escaped.
pub fn build_command(
    url: &str,
    format: FormatChoice,
    output_dir: &str,
) -> Result<String, BuildError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    if format.is_list_formats() {
        return Ok(format!("{} {} \"{}\"", TOOL, format.flags(), url));
    }

    let mut parts: Vec<String> = vec![TOOL.to_string()];

    let flags = format.flags();
    if !flags.is_empty() {
        parts.push(flags.to_string());
    }

    parts.push(format!("-o \"{}{}\"", output_dir, OUTPUT_TEMPLATE));

    if let Some(post) = format.post_process() {
        parts.push(post.to_string());
    }

    parts.push(format!("\"{}\"", url));

    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_1080p() {
        let cmd = build_command("https://x.com/v", FormatChoice::P1080, "~/Downloads/").unwrap();
        assert_eq!(
            cmd,
            "yt-dlp -f \"bestvideo[height=1080]+bestaudio/best\" -o \"~/Downloads/%(title)s.%(ext)s\" \"https://x.com/v\""
        );
    }

    #[test]
    fn test_every_choice_ends_with_quoted_url() {
        for choice in FormatChoice::ALL {
            let cmd = build_command("  https://x.com/v \t", choice, "./").unwrap();
            assert!(cmd.starts_with("yt-dlp "), "{}: {}", choice, cmd);
            assert!(cmd.ends_with(" \"https://x.com/v\""), "{}: {}", choice, cmd);
        }
    }

    #[test]
    fn test_list_formats_ignores_output_dir() {
        for dir in ["~/Downloads/", "./", "C:\\Users\\YourUser\\Videos\\", ""] {
            let cmd = build_command(" https://x.com/v ", FormatChoice::ListFormats, dir).unwrap();
            assert_eq!(cmd, "yt-dlp -F \"https://x.com/v\"");
        }
    }

    #[test]
    fn test_best_has_only_output_template() {
        let cmd = build_command("https://x.com/v", FormatChoice::Best, "/tmp/media/").unwrap();
        assert_eq!(cmd, "yt-dlp -o \"/tmp/media/%(title)s.%(ext)s\" \"https://x.com/v\"");
        assert!(!cmd.contains("-f "));
        assert!(!cmd.contains("-x"));
    }

    #[test]
    fn test_audio_choices_extract_and_embed_thumbnail() {
        for choice in [FormatChoice::BestAudio, FormatChoice::Mp3] {
            let cmd = build_command("https://x.com/a", choice, "./").unwrap();
            assert_eq!(
                cmd,
                "yt-dlp -x --audio-format mp3 -o \"./%(title)s.%(ext)s\" --embed-thumbnail \"https://x.com/a\""
            );
        }
    }

    #[test]
    fn test_container_choice() {
        let cmd = build_command("https://x.com/v", FormatChoice::Mkv, "./").unwrap();
        assert!(cmd.contains("-f \"bestvideo[ext=mkv]+bestaudio[ext=mka]/best[ext=mkv]/best\""));
        assert!(!cmd.contains("--embed-thumbnail"));
    }

    #[test]
    fn test_empty_and_whitespace_url() {
        for url in ["", "   ", "\t\n"] {
            for choice in FormatChoice::ALL {
                assert_eq!(build_command(url, choice, "./"), Err(BuildError::EmptyInput));
            }
        }
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let a = build_command("https://x.com/v", FormatChoice::Webm, "~/Movies/");
        let _ = build_command("https://other", FormatChoice::Mp3, "./");
        let b = build_command("https://x.com/v", FormatChoice::Webm, "~/Movies/");
        assert_eq!(a, b);
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let cmd = build_command("https://x.com/\"v", FormatChoice::Best, "./").unwrap();
        assert!(cmd.ends_with("\"https://x.com/\"v\""));
    }

    #[test]
    fn test_command_state_from_result() {
        let ready = CommandState::from(build_command("u", FormatChoice::Best, "./"));
        assert!(ready.is_ready());
        assert_eq!(ready.command(), Some("yt-dlp -o \"./%(title)s.%(ext)s\" \"u\""));

        let empty = CommandState::from(build_command(" ", FormatChoice::Best, "./"));
        assert_eq!(empty, CommandState::Empty);
        assert_eq!(empty.command(), None);
    }
}
