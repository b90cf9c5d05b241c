use clap::Parser;
use geonotes::cli::{
    handle_add, handle_delete, handle_init, handle_list, handle_locate, handle_reset,
    handle_show, handle_title, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            lat,
            lng,
            text,
            json,
        } => handle_add(lat, lng, text, json, verbose),
        Commands::List { json } => handle_list(json, verbose),
        Commands::Show { id, json } => handle_show(id, json, verbose),
        Commands::Delete { id, force } => handle_delete(id, force, verbose),
        Commands::Title { value } => handle_title(value, verbose),
        Commands::Locate { fallback } => handle_locate(fallback, verbose),
        Commands::Reset { force } => handle_reset(force, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
