use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookdesk", bin_name = "bookdesk", version)]
#[command(
    about = "Keep track of clients and their bookings from an interactive menu",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the client and booking documents
    /// [default: $BOOKDESK_DATA_DIR, then ./data]
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log what is loaded and saved to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
