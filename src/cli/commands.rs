use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "geonotes")]
#[command(version, about = "Geotagged notes pinned to a map")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print every map drawing command
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new geonotes project in the current directory
    Init,

    /// Drop a note at a location
    Add {
        /// Latitude of the map click
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the map click
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Note text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes in the order they were created
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note and fly the map to it
    Show {
        /// Note ID (any unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note and its marker
    Delete {
        /// Note ID (any unique prefix)
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the title, or set it when a value is given
    Title {
        /// New title
        value: Option<String>,
    },

    /// Fly the map to the current position (from GEONOTES_POSITION)
    Locate {
        /// Use the configured default center when the position is unknown
        #[arg(long)]
        fallback: bool,
    },

    /// Delete all stored notes (the title is kept)
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}
