use std::time::{Duration, Instant};

use crate::command::{CommandState, build_command};
use crate::config::{Config, FormInputs, OutputLocation};
use crate::deps::ToolStatus;
use crate::format::FormatChoice;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedField {
    Url,
    Format,
    Output,
    CopyButton,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    None,
    Copy(String),
}

/// Deadline after which the "Copied!" acknowledgment disappears. Setting a
/// new one replaces the old, so a stale deadline can never fire.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopyAck {
    until: Option<Instant>,
}

impl CopyAck {
    pub fn show(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Clear an expired deadline. Returns true when something changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.until.is_some() && !self.is_visible(now) {
            self.until = None;
            return true;
        }
        false
    }
}

pub struct App {
    pub url_input: String,
    pub format_index: usize,
    pub output_locations: Vec<OutputLocation>,
    pub output_index: usize,
    pub focused_field: FocusedField,
    pub command: CommandState,
    pub copy_ack: CopyAck,
    pub copy_ack_duration: Duration,
    pub status_message: Option<String>,
    pub tools: Vec<ToolStatus>,
    pub pending_action: AppAction,
    pub should_quit: bool,
}

impl App {
    pub fn new(inputs: FormInputs, config: &Config, tools: Vec<ToolStatus>) -> Self {
        let mut output_locations = config.output_locations.clone();
        let output_index = match output_locations.iter().position(|l| l.path == inputs.output_dir) {
            Some(idx) => idx,
            None => {
                output_locations.insert(0, OutputLocation::new("Command Line", &inputs.output_dir));
                0
            }
        };

        let mut app = Self {
            url_input: inputs.url,
            format_index: inputs.format.index(),
            output_locations,
            output_index,
            focused_field: FocusedField::Url,
            command: CommandState::Empty,
            copy_ack: CopyAck::default(),
            copy_ack_duration: config.copy_ack(),
            status_message: None,
            tools,
            pending_action: AppAction::None,
            should_quit: false,
        };
        app.regenerate();
        app
    }

    pub fn format(&self) -> FormatChoice {
        FormatChoice::ALL[self.format_index]
    }

    pub fn output_dir(&self) -> &str {
        &self.output_locations[self.output_index].path
    }

    /// The output selector is irrelevant while listing formats.
    pub fn output_visible(&self) -> bool {
        !self.format().is_list_formats()
    }

    /// The validation message tracks the Empty state, including on a fresh
    /// form.
    pub fn show_url_error(&self) -> bool {
        !self.command.is_ready()
    }

    /// Rebuild the command from the current field values. Called after every
    /// input mutation.
    pub fn regenerate(&mut self) {
        self.command = build_command(&self.url_input, self.format(), self.output_dir()).into();
        match self.command.command() {
            Some(cmd) => tracing::trace!(command = cmd, "command regenerated"),
            None => tracing::trace!("command cleared, url empty"),
        }
    }

    pub fn push_url_char(&mut self, c: char) {
        self.url_input.push(c);
        self.regenerate();
    }

    pub fn pop_url_char(&mut self) {
        self.url_input.pop();
        self.regenerate();
    }

    pub fn clear_url(&mut self) {
        self.url_input.clear();
        self.regenerate();
    }

    pub fn select_format(&mut self, index: usize) {
        self.format_index = index.min(FormatChoice::ALL.len() - 1);
        if !self.output_visible() && self.focused_field == FocusedField::Output {
            self.focused_field = FocusedField::CopyButton;
        }
        self.regenerate();
    }

    pub fn select_output(&mut self, index: usize) {
        self.output_index = index.min(self.output_locations.len() - 1);
        self.regenerate();
    }

    /// Queue a clipboard copy of the current command. No-op without one.
    pub fn request_copy(&mut self) {
        if let Some(cmd) = self.command.command() {
            self.pending_action = AppAction::Copy(cmd.to_string());
        }
    }

    pub fn copy_succeeded(&mut self, now: Instant) {
        self.status_message = None;
        self.copy_ack.show(now, self.copy_ack_duration);
    }

    pub fn copy_failed(&mut self, message: String) {
        self.copy_ack.cancel();
        self.status_message = Some(message);
    }

    pub fn tick(&mut self, now: Instant) {
        self.copy_ack.expire(now);
    }

    pub fn missing_tools(&self) -> Vec<&'static str> {
        crate::deps::missing(&self.tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(url: &str, format: FormatChoice, output_dir: &str) -> FormInputs {
        FormInputs {
            url: url.to_string(),
            format,
            output_dir: output_dir.to_string(),
        }
    }

    fn test_app(url: &str) -> App {
        App::new(inputs(url, FormatChoice::Best, "~/Downloads/"), &Config::default(), Vec::new())
    }

    #[test]
    fn test_new_app_with_url_is_ready() {
        let app = App::new(inputs("https://x.com/v", FormatChoice::P1080, "~/Downloads/"), &Config::default(), Vec::new());

        assert_eq!(app.format(), FormatChoice::P1080);
        assert_eq!(app.output_index, 0);
        assert_eq!(
            app.command.command(),
            Some("yt-dlp -f \"bestvideo[height=1080]+bestaudio/best\" -o \"~/Downloads/%(title)s.%(ext)s\" \"https://x.com/v\"")
        );
    }

    #[test]
    fn test_fresh_form_shows_error() {
        let app = test_app("");
        assert_eq!(app.command, CommandState::Empty);
        assert!(app.show_url_error());

        let app = test_app("https://x.com/v");
        assert!(!app.show_url_error());
    }

    #[test]
    fn test_unknown_output_dir_becomes_first_location() {
        let app = App::new(inputs("u", FormatChoice::Best, "/srv/media/"), &Config::default(), Vec::new());

        assert_eq!(app.output_locations.len(), 5);
        assert_eq!(app.output_dir(), "/srv/media/");
        assert_eq!(app.output_locations[0].label, "Command Line");
    }

    #[test]
    fn test_preset_output_dir_is_selected() {
        let app = App::new(inputs("u", FormatChoice::Best, "./"), &Config::default(), Vec::new());
        assert_eq!(app.output_locations.len(), 4);
        assert_eq!(app.output_index, 1);
    }

    #[test]
    fn test_every_edit_regenerates() {
        let mut app = test_app("");
        for c in "https://x.com/v".chars() {
            app.push_url_char(c);
        }
        assert_eq!(app.command.command(), Some("yt-dlp -o \"~/Downloads/%(title)s.%(ext)s\" \"https://x.com/v\""));

        app.select_output(1);
        assert_eq!(app.command.command(), Some("yt-dlp -o \"./%(title)s.%(ext)s\" \"https://x.com/v\""));

        app.select_format(FormatChoice::ListFormats.index());
        assert_eq!(app.command.command(), Some("yt-dlp -F \"https://x.com/v\""));
        assert!(!app.output_visible());
    }

    #[test]
    fn test_clearing_url_clears_command() {
        let mut app = test_app("https://x.com/v");
        assert!(app.command.is_ready());

        app.clear_url();
        assert_eq!(app.command, CommandState::Empty);
        assert!(app.show_url_error());

        app.push_url_char(' ');
        assert_eq!(app.command, CommandState::Empty);
    }

    #[test]
    fn test_list_formats_moves_focus_off_output() {
        let mut app = test_app("u");
        app.focused_field = FocusedField::Output;
        app.select_format(FormatChoice::ListFormats.index());
        assert_eq!(app.focused_field, FocusedField::CopyButton);
    }

    #[test]
    fn test_request_copy_without_command_is_noop() {
        let mut app = test_app("");
        app.request_copy();
        assert_eq!(app.pending_action, AppAction::None);

        app.push_url_char('u');
        app.request_copy();
        assert_eq!(
            app.pending_action,
            AppAction::Copy("yt-dlp -o \"~/Downloads/%(title)s.%(ext)s\" \"u\"".to_string())
        );
    }

    #[test]
    fn test_copy_ack_expires() {
        let mut app = test_app("u");
        let start = Instant::now();

        app.copy_succeeded(start);
        assert!(app.copy_ack.is_visible(start + Duration::from_millis(1999)));

        app.tick(start + Duration::from_secs(2));
        assert!(!app.copy_ack.is_visible(start + Duration::from_secs(2)));
        assert_eq!(app.copy_ack, CopyAck::default());
    }

    #[test]
    fn test_new_copy_replaces_deadline() {
        let mut ack = CopyAck::default();
        let start = Instant::now();

        ack.show(start, Duration::from_secs(2));
        ack.show(start + Duration::from_millis(1500), Duration::from_secs(2));

        assert!(!ack.expire(start + Duration::from_millis(2500)));
        assert!(ack.is_visible(start + Duration::from_millis(2500)));
        assert!(ack.expire(start + Duration::from_millis(3500)));
    }

    #[test]
    fn test_copy_failure_cancels_ack() {
        let mut app = test_app("u");
        let now = Instant::now();
        app.copy_succeeded(now);
        app.copy_failed("no clipboard".to_string());

        assert!(!app.copy_ack.is_visible(now));
        assert_eq!(app.status_message.as_deref(), Some("no clipboard"));
    }
}
