// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::theme::Theme;

#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Animated portfolio viewer", long_about = None)]
pub struct Cli {
    /// Visual skin for the scene and the shell
    #[arg(long, value_enum, default_value_t = Theme::Terminal)]
    pub theme: Theme,

    /// Fix the placement RNG so the scene is reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}
