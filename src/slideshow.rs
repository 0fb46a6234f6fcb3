use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};
use v_htmlescape::escape;

pub const SLIDE_COUNT: usize = 5;
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(3);

const LOADING_MESSAGE: &str = "画像を読み込み中...";

/// Site-relative path of the `number`th slide image.
#[must_use]
pub fn slide_path(number: usize) -> String {
    format!("images/facebook/slide_{number}.jpg")
}

/// Hero slideshow: the slides found on disk and the one currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slideshow {
    slides: Vec<String>,
    current: usize,
}

impl Slideshow {
    #[must_use]
    pub const fn new(slides: Vec<String>) -> Self {
        Self { slides, current: 0 }
    }

    /// Looks for `slide_1.jpg` to `slide_5.jpg` under the site root, keeping
    /// numeric order and skipping gaps.
    #[must_use]
    pub fn discover(site_root: &Path) -> Self {
        let slides: Vec<String> = (1..=SLIDE_COUNT)
            .map(slide_path)
            .filter(|path| {
                let exists = site_root.join(path).is_file();
                if !exists {
                    debug!(%path, "slide not found");
                }
                exists
            })
            .collect();

        info!(count = slides.len(), "discovered slides");
        Self::new(slides)
    }

    #[must_use]
    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.slides.get(self.current).map(String::as_str)
    }

    /// Moves to the next slide, wrapping after the last one.
    pub fn advance(&mut self) -> Option<&str> {
        if self.slides.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.active()
    }

    /// Slide markup for the hero container. The active slide carries the
    /// `active` class; without slides a loading placeholder is shown.
    #[must_use]
    pub fn render_html(&self) -> String {
        if self.slides.is_empty() {
            return format!(
                r#"<div class="hero-slide active" style="background-color: #f0f0f0; display: flex; align-items: center; justify-content: center;"><p style="color: #666; font-size: 1.2rem;">{LOADING_MESSAGE}</p></div>"#
            );
        }

        self.slides
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let class = if index == self.current { "hero-slide active" } else { "hero-slide" };
                format!(
                    r#"<div class="{class}" style="background-image: url('{path}')"></div>"#,
                    path = escape(path)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_slides(numbers: &[usize]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("images/facebook")).unwrap();
        for number in numbers {
            std::fs::write(root.path().join(slide_path(*number)), b"jpeg").unwrap();
        }
        root
    }

    #[test]
    fn discovers_existing_slides_in_order() {
        let root = site_with_slides(&[4, 1, 2]);
        let slideshow = Slideshow::discover(root.path());
        assert_eq!(slideshow.slides(), [slide_path(1), slide_path(2), slide_path(4)]);
        assert_eq!(slideshow.active(), Some("images/facebook/slide_1.jpg"));
    }

    #[test]
    fn ignores_slides_beyond_the_fifth() {
        let root = site_with_slides(&[5, 6]);
        assert_eq!(Slideshow::discover(root.path()).slides(), [slide_path(5)]);
    }

    #[test]
    fn advancing_wraps_around() {
        let mut slideshow = Slideshow::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(slideshow.advance(), Some("b"));
        assert_eq!(slideshow.advance(), Some("c"));
        assert_eq!(slideshow.advance(), Some("a"));
    }

    #[test]
    fn single_slide_stays_active() {
        let mut slideshow = Slideshow::new(vec!["only".into()]);
        assert_eq!(slideshow.advance(), Some("only"));
        assert_eq!(slideshow.advance(), Some("only"));
    }

    #[test]
    fn empty_slideshow_shows_placeholder() {
        let root = site_with_slides(&[]);
        let mut slideshow = Slideshow::discover(root.path());
        assert!(slideshow.is_empty());
        assert_eq!(slideshow.advance(), None);
        assert!(slideshow.render_html().contains(LOADING_MESSAGE));
    }

    #[test]
    fn only_the_current_slide_is_active() {
        let mut slideshow = Slideshow::new(vec![slide_path(1), slide_path(2)]);
        slideshow.advance();
        let html = slideshow.render_html();
        assert_eq!(html.matches("hero-slide active").count(), 1);
        assert!(html.lines().nth(1).unwrap().starts_with(r#"<div class="hero-slide active""#));
    }
}
