//! Graduate testimonials ("voices") shown on the landing page.
//!
//! The feed is a JSON array kept in `contents/person.json`. It is produced by
//! [`Harvester`] from the school's experiences page and rendered into cards
//! by [`render_cards`].

mod harvester;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use v_htmlescape::escape;

use crate::prelude::*;

pub use self::harvester::{Harvester, ProfileTitle, DEFAULT_LIMIT};

pub const DEFAULT_FEED_PATH: &str = "contents/person.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    #[serde(default)]
    pub gender: String,
    pub age: String,
    pub period: String,
    #[serde(default)]
    pub img: Option<String>,
    pub url: String,
    #[serde(default)]
    pub advice: String,
}

impl Voice {
    /// Portrait URL, if the post had one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.img.as_deref().filter(|image| !image.trim().is_empty())
    }

    fn render_card(&self) -> String {
        let url = escape(&self.url);
        let name = escape(&self.name);
        let portrait = match self.image() {
            Some(image) => format!(
                r#"<img src="{image}" alt="{name}" class="voice-image">"#,
                image = escape(image)
            ),
            None => r#"<div class="voice-image" style="background-color: #ddd;"></div>"#.to_string(),
        };

        format!(
            r#"<div class="voice-card">
  <div class="voice-image-container">
    <a href="{url}">
      {portrait}
      <div class="voice-info">
        <div class="name">{name}</div>
        <div class="details">年齢：{age}<br>留学期間：{period}</div>
      </div>
    </a>
  </div>
  <div class="advice">{advice}</div>
  <a href="{url}" class="read-more">続きを読む <span>›</span></a>
</div>
"#,
            age = escape(&self.age),
            period = escape(&self.period),
            advice = escape(&self.advice),
        )
    }
}

/// Parses a feed document.
///
/// # Errors
///
/// Fails when the text is not a JSON array of voices.
pub fn parse_feed(text: &str) -> Result<Vec<Voice>> {
    serde_json::from_str(text).context("Voice feed is not a valid JSON array of voices")
}

/// Reads the feed from disk.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_feed(path: &Path) -> Result<Vec<Voice>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read voice feed {}", path.display()))?;
    let voices = parse_feed(&text)
        .with_context(|| format!("Failed to load voice feed {}", path.display()))?;

    debug!(path = %path.display(), count = voices.len(), "loaded voice feed");
    Ok(voices)
}

/// Writes the feed as pretty-printed JSON, creating the parent directory.
///
/// # Errors
///
/// Fails when the directory or file cannot be written.
pub fn save_feed(path: &Path, voices: &[Voice]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(voices).context("Failed to serialize voices")?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write voice feed {}", path.display()))?;

    info!(path = %path.display(), count = voices.len(), "saved voice feed");
    Ok(())
}

/// Card markup for the voices grid, in feed order.
#[must_use]
pub fn render_cards(voices: &[Voice]) -> String {
    voices.iter().map(Voice::render_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
  {
    "name": "Aiko",
    "gender": "女性",
    "age": "22歳",
    "period": "12週間",
    "img": "https://e-roomjp.com/wp-content/uploads/aiko.jpg",
    "url": "https://e-roomjp.com/experiences/aiko/",
    "advice": "毎日話すことが大切です。"
  },
  {
    "name": "Ken <3",
    "age": "30歳",
    "period": "4週間",
    "img": "",
    "url": "https://e-roomjp.com/experiences/ken/?a=1&b=2",
    "advice": "Go for it"
  }
]"#;

    #[test]
    fn parses_feed_with_optional_fields() {
        let voices = parse_feed(FEED).unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].gender, "女性");
        assert_eq!(voices[1].gender, "");
        assert_eq!(voices[0].image(), Some("https://e-roomjp.com/wp-content/uploads/aiko.jpg"));
        assert_eq!(voices[1].image(), None);
    }

    #[test]
    fn rejects_non_array_feed() {
        assert!(parse_feed(r#"{"name": "Aiko"}"#).is_err());
        assert!(parse_feed("").is_err());
    }

    #[test]
    fn renders_one_card_per_voice() {
        let html = render_cards(&parse_feed(FEED).unwrap());
        assert_eq!(html.matches(r#"<div class="voice-card">"#).count(), 2);
        let portrait = format!(
            r#"<img src="{}" alt="Aiko" class="voice-image">"#,
            escape("https://e-roomjp.com/wp-content/uploads/aiko.jpg")
        );
        assert!(html.contains(&portrait));
        assert!(html.contains("年齢：22歳<br>留学期間：12週間"));
        assert!(html.contains(r#"<div class="advice">毎日話すことが大切です。</div>"#));
    }

    #[test]
    fn missing_portrait_uses_placeholder() {
        let html = render_cards(&parse_feed(FEED).unwrap()[1..]);
        assert!(html.contains(r#"<div class="voice-image" style="background-color: #ddd;"></div>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn feed_values_are_escaped() {
        let html = render_cards(&parse_feed(FEED).unwrap()[1..]);
        assert!(html.contains("Ken &lt;3"));
        assert!(html.contains("?a=1&amp;b=2"));
    }

    #[test]
    fn empty_feed_renders_nothing() {
        assert_eq!(render_cards(&[]), "");
    }

    #[test]
    fn saved_feed_loads_back() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("contents").join("person.json");
        let voices = parse_feed(FEED).unwrap();

        save_feed(&path, &voices).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("毎日話すことが大切です。"));
        assert_eq!(load_feed(&path).unwrap(), voices);
    }

    #[test]
    fn missing_feed_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let error = load_feed(&directory.path().join("absent.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read voice feed"));
    }
}
