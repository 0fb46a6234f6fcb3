//! Options for the two continuously scrolling photo galleries.
//!
//! The field names serialize to the option names of the Swiper slider used
//! by the page, so the JSON can be handed to its constructor unchanged.

use serde::Serialize;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reverse_direction: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    #[serde(skip)]
    pub selector: &'static str,
    pub autoplay: Autoplay,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub speed: u32,
    pub slides_per_view: &'static str,
    pub space_between: u32,
    pub free_mode: bool,
    pub free_mode_momentum: bool,
}

impl Gallery {
    const fn continuous(selector: &'static str, speed: u32, reverse_direction: bool) -> Self {
        Self {
            selector,
            autoplay: Autoplay {
                delay: 0,
                disable_on_interaction: false,
                reverse_direction,
            },
            looping: true,
            speed,
            slides_per_view: "auto",
            space_between: 16,
            free_mode: true,
            free_mode_momentum: false,
        }
    }

    /// # Errors
    ///
    /// Fails only if serialization fails, which the fixed option set does not.
    pub fn options_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize options for {}", self.selector))
    }
}

pub const GALLERY: Gallery = Gallery::continuous(".gallery-slider", 10_000, false);
pub const GALLERY_REVERSE: Gallery = Gallery::continuous(".gallery-slider-reverse", 8_000, true);

pub const GALLERIES: [Gallery; 2] = [GALLERY, GALLERY_REVERSE];
