use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// JSON-lines file of host events to replay.
    #[arg(long)]
    pub events: Option<String>,

    /// Users on the buddy list, exempt from warnings and bans.
    #[arg(long = "buddy")]
    pub buddies: Vec<String>,

    /// Users the host already watches for stats.
    #[arg(long = "watched")]
    pub watched: Vec<String>,

    /// Write the settings, including detected leechers, back to the config file.
    #[arg(long)]
    pub save: bool,

    /// Print the settings schema as JSON and exit.
    #[arg(long)]
    pub schema: bool,
}
