use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "screenshot", version, about = "Take a screenshot and open it in the image viewer")]
pub struct CliArguments {
    /// Directory to save the screenshot in (skips the location prompt)
    pub output: Option<PathBuf>,

    /// Screenshot type: "full" or "window"
    #[arg(long = "type", value_name = "TYPE")]
    pub screenshot_type: Option<String>,

    /// Display number for a full screen screenshot
    #[arg(long, value_name = "NUMBER", value_parser = clap::value_parser!(u32).range(1..))]
    pub display: Option<u32>,
}
