use super::tools::Tool;
use std::path::PathBuf;

/// Command line choices for the sheet binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config: Option<PathBuf>,
    pub tool: Tool,
    /// Mark raw pointer samples and button presses above the ink.
    pub debug: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            config: None,
            tool: Tool::Pen,
            debug: false,
        }
    }
}

pub fn parse_launch_args(args: impl IntoIterator<Item = String>) -> LaunchOptions {
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--curve" | "--tool=curve" => options.tool = Tool::Curve,
            "--pen" | "--tool=pen" => options.tool = Tool::Pen,
            "--debug" => options.debug = true,
            "--config" => {
                if let Some(next) = args.next() {
                    options.config = Some(PathBuf::from(next));
                }
            }
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    options.config = Some(PathBuf::from(path));
                } else {
                    log::warn!("ignoring unknown argument {other:?}");
                }
            }
        }
    }
    options
}
