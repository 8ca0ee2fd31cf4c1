use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    XdgOpen,
    Gio,
    MacOpen,
    WindowsStart,
}

impl Opener {
    pub fn detect() -> Option<Opener> {
        if cfg!(target_os = "macos") {
            Some(Opener::MacOpen)
        } else if cfg!(target_os = "windows") {
            Some(Opener::WindowsStart)
        } else if which::which("xdg-open").is_ok() {
            Some(Opener::XdgOpen)
        } else if which::which("gio").is_ok() {
            Some(Opener::Gio)
        } else {
            None
        }
    }

    pub fn command(self, url: &str) -> Command {
        let mut cmd = match self {
            Opener::XdgOpen => Command::new("xdg-open"),
            Opener::Gio => {
                let mut cmd = Command::new("gio");
                cmd.arg("open");
                cmd
            }
            Opener::MacOpen => Command::new("open"),
            Opener::WindowsStart => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "start", ""]);
                cmd
            }
        };
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Refusing to open unsupported link: {0}")]
    Unsupported(String),
    #[error("No program found to open links")]
    NoOpener,
    #[error("Failed to start opener: {0}")]
    Spawn(#[from] std::io::Error),
}

pub fn is_openable(url: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Hands `url` to the desktop's default handler without waiting on it.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    if !is_openable(url) {
        return Err(LaunchError::Unsupported(url.to_string()));
    }
    let opener = Opener::detect().ok_or(LaunchError::NoOpener)?;
    opener.command(url).spawn()?;
    log::info!("Opened {url}");
    Ok(())
}
