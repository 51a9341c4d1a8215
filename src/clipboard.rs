use std::env;
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Ways of reaching the host clipboard, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipboardBackend {
    WlCopy,
    Pbcopy,
    Xclip,
    Xsel,
    ClipExe,
    /// Terminal escape sequence; works over SSH in terminals that allow it.
    Osc52,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBackend::WlCopy => write!(f, "wl-copy"),
            ClipboardBackend::Pbcopy => write!(f, "pbcopy"),
            ClipboardBackend::Xclip => write!(f, "xclip"),
            ClipboardBackend::Xsel => write!(f, "xsel"),
            ClipboardBackend::ClipExe => write!(f, "clip.exe"),
            ClipboardBackend::Osc52 => write!(f, "terminal (OSC 52)"),
        }
    }
}

const PROGRAM_BACKENDS: [ClipboardBackend; 5] = [
    ClipboardBackend::WlCopy,
    ClipboardBackend::Pbcopy,
    ClipboardBackend::Xclip,
    ClipboardBackend::Xsel,
    ClipboardBackend::ClipExe,
];

impl ClipboardBackend {
    /// External program reading the text from stdin, if this backend is one.
    pub fn program(self) -> Option<&'static str> {
        match self {
            ClipboardBackend::WlCopy => Some("wl-copy"),
            ClipboardBackend::Pbcopy => Some("pbcopy"),
            ClipboardBackend::Xclip => Some("xclip"),
            ClipboardBackend::Xsel => Some("xsel"),
            ClipboardBackend::ClipExe => Some("clip.exe"),
            ClipboardBackend::Osc52 => None,
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            ClipboardBackend::Xclip => &["-selection", "clipboard"],
            ClipboardBackend::Xsel => &["--clipboard", "--input"],
            _ => &[],
        }
    }
}

/// What the host offers: display sessions and the `PATH` to search.
#[derive(Debug, Clone, Default)]
pub struct ClipboardEnv {
    pub wayland: bool,
    pub x11: bool,
    pub path: Option<OsString>,
}

impl ClipboardEnv {
    pub fn from_env() -> Self {
        Self {
            wayland: env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty()),
            x11: env::var_os("DISPLAY").is_some_and(|v| !v.is_empty()),
            path: env::var_os("PATH"),
        }
    }

    /// wl-copy needs a Wayland session, xclip/xsel an X display.
    fn allows(&self, backend: ClipboardBackend) -> bool {
        match backend {
            ClipboardBackend::WlCopy => self.wayland,
            ClipboardBackend::Xclip | ClipboardBackend::Xsel => self.x11,
            _ => true,
        }
    }

    fn find(&self, program: &str) -> Option<PathBuf> {
        let path = self.path.as_ref()?;
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(program, Some(path), cwd).ok()
    }
}

/// Program backends usable here, in the order they are tried.
pub fn candidates(clip_env: &ClipboardEnv) -> Vec<(ClipboardBackend, PathBuf)> {
    PROGRAM_BACKENDS
        .into_iter()
        .filter(|backend| clip_env.allows(*backend))
        .filter_map(|backend| {
            let program = backend.program()?;
            clip_env.find(program).map(|path| (backend, path))
        })
        .collect()
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copy `text` to the clipboard and report which backend took it.
pub fn copy_to_clipboard(text: &str) -> Result<ClipboardBackend> {
    // stderr, so a piped `--print` stdout stays clean
    copy_with(text, &ClipboardEnv::from_env(), &mut io::stderr())
}

/// Try each available program in turn; a failing one hands over to the
/// next. The OSC 52 escape written to `terminal` is the last resort.
pub fn copy_with(
    text: &str,
    clip_env: &ClipboardEnv,
    terminal: &mut impl Write,
) -> Result<ClipboardBackend> {
    for (backend, path) in candidates(clip_env) {
        tracing::debug!(%backend, "copying to clipboard");
        match copy_with_program(&path, backend.args(), text) {
            Ok(()) => return Ok(backend),
            Err(e) => tracing::warn!(%backend, error = %e, "clipboard program failed, trying next"),
        }
    }

    tracing::debug!("copying to clipboard via OSC 52");
    terminal.write_all(osc52_sequence(text).as_bytes())?;
    terminal.flush()?;
    Ok(ClipboardBackend::Osc52)
}

fn copy_with_program(program: &Path, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {}", program.display()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program.display()))?;
    }

    let status = child.wait()?;
    if !status.success() {
        bail!("{} exited with code: {:?}", program.display(), status.code());
    }
    Ok(())
}
