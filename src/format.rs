use std::fmt;

/// Download format choices offered by the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatChoice {
    #[default]
    Best,
    BestVideoBestAudio,
    BestAudio,
    Mp4,
    Mp3,
    Webm,
    Mkv,
    P2160,
    P1440,
    P1080,
    P720,
    P480,
    P360,
    ListFormats,
}

impl FormatChoice {
    pub const ALL: [FormatChoice; 14] = [
        FormatChoice::Best,
        FormatChoice::BestVideoBestAudio,
        FormatChoice::BestAudio,
        FormatChoice::Mp4,
        FormatChoice::Mp3,
        FormatChoice::Webm,
        FormatChoice::Mkv,
        FormatChoice::P2160,
        FormatChoice::P1440,
        FormatChoice::P1080,
        FormatChoice::P720,
        FormatChoice::P480,
        FormatChoice::P360,
        FormatChoice::ListFormats,
    ];

    /// Identifier used on the command line and in the config file.
    pub fn value(self) -> &'static str {
        match self {
            FormatChoice::Best => "best",
            FormatChoice::BestVideoBestAudio => "bestvideo+bestaudio",
            FormatChoice::BestAudio => "bestaudio",
            FormatChoice::Mp4 => "mp4",
            FormatChoice::Mp3 => "mp3",
            FormatChoice::Webm => "webm",
            FormatChoice::Mkv => "mkv",
            FormatChoice::P2160 => "2160p",
            FormatChoice::P1440 => "1440p",
            FormatChoice::P1080 => "1080p",
            FormatChoice::P720 => "720p",
            FormatChoice::P480 => "480p",
            FormatChoice::P360 => "360p",
            FormatChoice::ListFormats => "list_formats",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatChoice::Best => "Best Quality (Video+Audio)",
            FormatChoice::BestVideoBestAudio => "Best Video + Best Audio (Merged)",
            FormatChoice::BestAudio => "Best Audio Only",
            FormatChoice::Mp4 => "MP4 Video",
            FormatChoice::Mp3 => "MP3 Audio",
            FormatChoice::Webm => "WebM Video",
            FormatChoice::Mkv => "MKV Video",
            FormatChoice::P2160 => "4K (2160p) Video",
            FormatChoice::P1440 => "2K (1440p) Video",
            FormatChoice::P1080 => "Full HD (1080p) Video",
            FormatChoice::P720 => "HD (720p) Video",
            FormatChoice::P480 => "SD (480p) Video",
            FormatChoice::P360 => "SD (360p) Video",
            FormatChoice::ListFormats => "List Available Formats (Run in Terminal)",
        }
    }

    /// Flags placed right after the tool name. Empty for `best`, which is
    /// yt-dlp's own default.
    pub fn flags(self) -> &'static str {
        match self {
            FormatChoice::Best => "",
            FormatChoice::BestVideoBestAudio => r#"-f "bestvideo+bestaudio/best""#,
            FormatChoice::BestAudio | FormatChoice::Mp3 => "-x --audio-format mp3",
            FormatChoice::Mp4 => {
                r#"-f "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best""#
            }
            FormatChoice::Webm => {
                r#"-f "bestvideo[ext=webm]+bestaudio[ext=webm]/best[ext=webm]/best""#
            }
            FormatChoice::Mkv => {
                r#"-f "bestvideo[ext=mkv]+bestaudio[ext=mka]/best[ext=mkv]/best""#
            }
            FormatChoice::P2160 => r#"-f "bestvideo[height=2160]+bestaudio/best""#,
            FormatChoice::P1440 => r#"-f "bestvideo[height=1440]+bestaudio/best""#,
            FormatChoice::P1080 => r#"-f "bestvideo[height=1080]+bestaudio/best""#,
            FormatChoice::P720 => r#"-f "bestvideo[height=720]+bestaudio/best""#,
            FormatChoice::P480 => r#"-f "bestvideo[height=480]+bestaudio/best""#,
            FormatChoice::P360 => r#"-f "bestvideo[height=360]+bestaudio/best""#,
            FormatChoice::ListFormats => "-F",
        }
    }

    /// Post-processing flags appended after the output template.
    pub fn post_process(self) -> Option<&'static str> {
        match self {
            FormatChoice::BestAudio | FormatChoice::Mp3 => Some("--embed-thumbnail"),
            _ => None,
        }
    }

    pub fn is_list_formats(self) -> bool {
        self == FormatChoice::ListFormats
    }

    /// Exact lookup by identifier.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Lookup that never fails: anything unrecognized means `best`.
    pub fn from_value_or_best(value: &str) -> Self {
        match Self::from_value(value) {
            Some(choice) => choice,
            None => {
                tracing::warn!(format = value, "unknown format choice, falling back to best");
                FormatChoice::Best
            }
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for FormatChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
