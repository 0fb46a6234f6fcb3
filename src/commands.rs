use std::path::Path;

use eroom_site::carousel::GALLERIES;
use eroom_site::prelude::*;
use eroom_site::slideshow::{Slideshow, SLIDE_INTERVAL};
use eroom_site::voices::{self, Harvester};
use eroom_site::{constants, Occupancy, Period, Repository, Resolver, Selection};

pub fn quote(course: Option<&str>, room: Option<&str>, period: Option<&str>, html: bool) -> Result<()> {
    let selection = Selection::new(course, room, period);

    let Some(quote) = Resolver::default().resolve_selection(&selection)? else {
        println!("Selection incomplete: choose a course, a room and a period.");
        return Ok(());
    };

    println!("{}", quote.formatted_price);
    if html {
        println!("{}", quote.description.to_html());
    } else {
        println!("{}", quote.description);
    }

    Ok(())
}

pub fn courses(with_prices: bool) -> Result<()> {
    println!("{} ({})", constants::APP_TITLE, constants::APP_SITE_URL);

    for course in Repository::default().courses() {
        let badge = if course.is_new { format!(" [{}]", constants::NEW_COURSE_BADGE) } else { String::new() };
        println!("{:<10} {}{badge}", course.slug, course.name);

        if with_prices {
            for occupancy in Occupancy::all() {
                let row = Period::all()
                    .iter()
                    .map(|&period| format!("{period}: {}", course.prices.get(*occupancy, period)))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("    {occupancy}: {row}");
            }
        }
    }

    Ok(())
}

pub fn render_voices(feed: &Path) -> Result<()> {
    let voices = voices::load_feed(feed)?;
    print!("{}", voices::render_cards(&voices));
    Ok(())
}

pub fn fetch_voices(output: &Path, limit: usize, site_url: &str) -> Result<()> {
    let voices = Harvester::new(site_url).with_limit(limit).harvest()?;
    if voices.is_empty() {
        bail!("No voices found at {site_url}; keeping the existing feed");
    }

    voices::save_feed(output, &voices)?;
    println!("Saved {} voices to {}", voices.len(), output.display());
    Ok(())
}

pub fn slides(site_root: &Path) -> Result<()> {
    let slideshow = Slideshow::discover(site_root);

    println!(
        "{} slide(s), switching every {}s",
        slideshow.slides().len(),
        SLIDE_INTERVAL.as_secs()
    );
    for slide in slideshow.slides() {
        println!("  {slide}");
    }
    println!("{}", slideshow.render_html());

    Ok(())
}

pub fn carousels() -> Result<()> {
    for gallery in &GALLERIES {
        println!("{}: {}", gallery.selector, gallery.options_json()?);
    }
    Ok(())
}
