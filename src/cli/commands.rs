use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "cpfuzz", version, about = "Content provider path fuzzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Listen for fuzz run requests (GET /?authority=...)
    Serve(ServeArgs),
    /// Run a single fuzz pass against an authority and exit
    Fuzz(FuzzArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Wordlist file, one candidate per line
    #[arg(short, long)]
    pub wordlist: Option<String>,

    /// Report file, overwritten by every run
    #[arg(short, long)]
    pub report: Option<String>,

    /// File listing locators that served content, overwritten by every run
    #[arg(long)]
    pub found: Option<String>,
}

#[derive(Args, Clone)]
pub struct FuzzArgs {
    /// Content provider authority to fuzz
    #[arg(short, long)]
    pub authority: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Wordlist file, one candidate per line
    #[arg(short, long)]
    pub wordlist: Option<String>,

    /// Report file, overwritten by every run
    #[arg(short, long)]
    pub report: Option<String>,

    /// File listing locators that served content, overwritten by every run
    #[arg(long)]
    pub found: Option<String>,

    /// Also print the run as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
