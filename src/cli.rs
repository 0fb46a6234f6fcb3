use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eroom", version, about = "e-room course prices and site content")]
pub struct Cli {
    /// Root directory of the website checkout
    #[arg(long, env = "EROOM_SITE_ROOT", default_value = ".", global = true)]
    pub site_root: PathBuf,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up the price of a course, room and period selection
    Quote {
        /// Course key, e.g. esl-light
        #[arg(short, long)]
        course: Option<String>,

        /// Room occupancy: single, double or triple
        #[arg(short, long)]
        room: Option<String>,

        /// Period in weeks: 1, 2, 3, 4, 8, 12, 16, 20 or 24
        #[arg(short, long)]
        period: Option<String>,

        /// Print the description as the result panel markup
        #[arg(long)]
        html: bool,
    },

    /// List the courses in the catalog
    Courses {
        /// Also print every price
        #[arg(short, long)]
        prices: bool,
    },

    /// Graduate testimonials
    Voices {
        #[command(subcommand)]
        action: VoicesCommands,
    },

    /// List the hero slideshow images and their markup
    Slides,

    /// Print the gallery carousel options as JSON
    Carousels,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VoicesCommands {
    /// Render the feed as voice cards
    Render {
        /// Feed path, relative to the site root
        #[arg(short, long, default_value = eroom_site::voices::DEFAULT_FEED_PATH)]
        feed: PathBuf,
    },

    /// Rebuild the feed from the experiences page
    Fetch {
        /// Output path, relative to the site root
        #[arg(short, long, default_value = eroom_site::voices::DEFAULT_FEED_PATH)]
        output: PathBuf,

        /// Number of posts to keep
        #[arg(short, long, default_value_t = eroom_site::voices::DEFAULT_LIMIT)]
        limit: usize,

        /// Site to harvest from
        #[arg(long, default_value = eroom_site::constants::APP_SITE_URL)]
        site_url: String,
    },
}
