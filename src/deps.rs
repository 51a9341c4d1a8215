/// Tools the generated commands rely on. They are never run from here; the
/// form only tells the user when one is missing from `PATH`.
pub const REQUIRED_TOOLS: [&str; 2] = ["yt-dlp", "ffmpeg"];

#[derive(Debug, Clone, PartialEq)]
pub struct ToolStatus {
    pub name: &'static str,
    pub found: bool,
}

pub fn check_dependency(name: &str) -> bool {
    which::which(name).is_ok()
}

pub fn check_tools() -> Vec<ToolStatus> {
    REQUIRED_TOOLS
        .iter()
        .map(|&name| {
            let found = check_dependency(name);
            if !found {
                tracing::info!(tool = name, "tool not found in PATH");
            }
            ToolStatus { name, found }
        })
        .collect()
}

pub fn missing(tools: &[ToolStatus]) -> Vec<&'static str> {
    tools.iter().filter(|t| !t.found).map(|t| t.name).collect()
}
