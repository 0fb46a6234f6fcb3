use clap::Parser;

mod cli;
mod commands;

use eroom_site::prelude::*;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    eroom_site::init_tracing(&args.log_level);

    match args.command {
        cli::Commands::Quote { course, room, period, html } => {
            commands::quote(course.as_deref(), room.as_deref(), period.as_deref(), html)
        }
        cli::Commands::Courses { prices } => commands::courses(prices),
        cli::Commands::Voices { action } => match action {
            cli::VoicesCommands::Render { feed } => {
                commands::render_voices(&args.site_root.join(feed))
            }
            cli::VoicesCommands::Fetch { output, limit, site_url } => {
                commands::fetch_voices(&args.site_root.join(output), limit, &site_url)
            }
        },
        cli::Commands::Slides => commands::slides(&args.site_root),
        cli::Commands::Carousels => commands::carousels(),
    }
}
