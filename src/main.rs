use clap::Parser;
use showroom::SubmitterKind;
use showroom::core::config::{self, CliOverrides, ShowroomConfig};
use showroom::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showroom", about = "Automotive applications showroom for the terminal")]
struct Args {
    /// Where contact enquiries go
    #[arg(short, long, default_value_t, value_enum)]
    submitter: SubmitterKind,

    /// Outbox file used by the outbox submitter
    #[arg(long)]
    outbox: Option<PathBuf>,

    /// TOML catalog replacing the built-in showcase items
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Scroll distance before the header reacts
    #[arg(long)]
    threshold: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to showroom.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("showroom.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; falling back to defaults");
            ShowroomConfig::default()
        }
    };
    let cli = CliOverrides {
        scroll_threshold: args.threshold,
        catalog_file: args.catalog,
        outbox: args.outbox,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Showroom starting up with submitter: {:?}, config: {:?}",
        args.submitter,
        resolved
    );

    tui::run(resolved, args.submitter)
}
