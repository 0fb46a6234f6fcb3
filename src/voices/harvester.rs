use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use super::Voice;
use crate::constants;
use crate::prelude::*;

pub const DEFAULT_LIMIT: usize = 4;

const EXPERIENCES_PATH: &str = "/experiences/";
const ADVICE_MARKER: &str = "卒業生からのアドバイス";
const ADVICE_MAX_CHARS: usize = 100;

// ===== HTTP CLIENT =====

struct HttpClient;

impl HttpClient {
    fn user_agent() -> String {
        format!("{}/{}", constants::APP_NAME, constants::APP_VERSION)
    }

    fn send_request(url: &str) -> Result<minreq::Response> {
        let response = minreq::get(url)
            .with_header("User-Agent", Self::user_agent())
            .send()
            .with_context(|| format!("Failed to send request to {url}"))?;

        if response.status_code != 200 {
            bail!("HTTP error {status} from {url}", status = response.status_code);
        }

        Ok(response)
    }

    fn fetch_html(url: &str) -> Result<Html> {
        let response = Self::send_request(url)?;
        let text = response.as_str()
            .with_context(|| format!("Response from {url} is not valid UTF-8"))?;
        Ok(Html::parse_document(text))
    }
}

// ===== DOCUMENT SELECTORS =====

struct DocumentSelectors {
    post: Selector,
    link: Selector,
    image: Selector,
    page_title: Selector,
    article: Selector,
    advice_candidates: Selector,
}

static DOCUMENT_SELECTORS: LazyLock<DocumentSelectors> = LazyLock::new(|| {
    DocumentSelectors {
        post: Selector::parse("#content article.post").expect("post selector"),
        link: Selector::parse("a[href]").expect("link selector"),
        image: Selector::parse("img[src]").expect("image selector"),
        page_title: Selector::parse(".pageTitle h1").expect("page title selector"),
        article: Selector::parse("article").expect("article selector"),
        advice_candidates: Selector::parse("span, p").expect("advice selector"),
    }
});

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<name>[^（]*)（(?P<gender>[^）]*)）.*?年齢：(?P<age>.*?)留学期間：(?P<period>.*)$")
        .expect("title pattern")
});

// ===== PROFILE TITLE =====

/// Heading of an experience post, e.g. `名前（女性）年齢：22歳 留学期間：12週間`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTitle {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub period: String,
}

impl ProfileTitle {
    /// # Errors
    ///
    /// Fails when the heading does not follow the name, gender, age, period
    /// layout.
    pub fn parse(title: &str) -> Result<Self> {
        let captures = TITLE_PATTERN
            .captures(title.trim())
            .with_context(|| format!("Unrecognised profile title '{title}'"))?;

        let field = |name: &str| {
            captures.name(name)
                .map(|value| value.as_str().trim().to_string())
                .unwrap_or_default()
        };

        Ok(Self {
            name: field("name"),
            gender: field("gender"),
            age: field("age"),
            period: field("period"),
        })
    }
}

// ===== POST DISCOVERY =====

#[derive(Debug, Clone, PartialEq, Eq)]
struct PostLink {
    url: String,
    image: Option<String>,
}

impl PostLink {
    fn collect(document: &Html) -> Vec<Self> {
        document.select(&DOCUMENT_SELECTORS.post)
            .filter_map(|post| {
                let url = Self::first_attribute(post, &DOCUMENT_SELECTORS.link, "href")?;
                let image = Self::first_attribute(post, &DOCUMENT_SELECTORS.image, "src");
                Some(Self { url, image })
            })
            .collect()
    }

    fn first_attribute(element: ElementRef<'_>, selector: &Selector, attribute: &str) -> Option<String> {
        element.select(selector)
            .next()
            .and_then(|child| child.value().attr(attribute))
            .map(ToString::to_string)
    }
}

// ===== ADVICE EXTRACTOR =====

struct AdviceExtractor;

impl AdviceExtractor {
    /// Text of the first paragraph following the advice heading.
    fn extract(document: &Html) -> Option<String> {
        let article = document.select(&DOCUMENT_SELECTORS.article).next()?;
        let mut heading_seen = false;

        for element in article.select(&DOCUMENT_SELECTORS.advice_candidates) {
            let text = element.text().collect::<String>();
            match element.value().name() {
                "span" if text.contains(ADVICE_MARKER) => heading_seen = true,
                "p" if heading_seen => return Some(text.trim().to_string()),
                _ => {}
            }
        }

        None
    }

    fn shorten(advice: &str) -> String {
        if advice.chars().count() > ADVICE_MAX_CHARS {
            let mut short: String = advice.chars().take(ADVICE_MAX_CHARS).collect();
            short.push_str("...");
            short
        } else {
            advice.to_string()
        }
    }
}

// ===== CONCURRENT EXECUTOR =====

struct ConcurrentExecutor;

impl ConcurrentExecutor {
    fn execute_and_collect<T, F, R>(items: Vec<T>, worker: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        F: Fn(T) -> Result<R> + Send + Sync + Copy + 'static,
        R: Send + 'static,
    {
        let handles: Vec<_> = items
            .into_iter()
            .map(|item| std::thread::spawn(move || worker(item)))
            .collect();

        handles.into_iter()
            .map(|handle| {
                handle.join()
                    .map_err(|error| anyhow::anyhow!("Thread panicked: {error:?}"))?
            })
            .collect()
    }
}

// ===== HARVESTER =====

/// Builds the voice feed from the experiences page of the school website.
#[derive(Debug, Clone)]
pub struct Harvester {
    site_url: String,
    limit: usize,
}

impl Default for Harvester {
    fn default() -> Self {
        Self::new(constants::APP_SITE_URL)
    }
}

impl Harvester {

    #[must_use]
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn experiences_url(&self) -> String {
        format!("{}{EXPERIENCES_PATH}", self.site_url)
    }

    /// Fetches the newest posts, at most `limit` of them, in page order.
    ///
    /// # Errors
    ///
    /// Fails when a page cannot be fetched or a post heading cannot be parsed.
    pub fn harvest(&self) -> Result<Vec<Voice>> {
        let url = self.experiences_url();
        info!(%url, limit = self.limit, "harvesting voices");

        let index = HttpClient::fetch_html(&url)?;
        let posts: Vec<PostLink> = PostLink::collect(&index)
            .into_iter()
            .take(self.limit)
            .collect();

        if posts.is_empty() {
            warn!(%url, "no experience posts found");
            return Ok(Vec::new());
        }

        let voices = ConcurrentExecutor::execute_and_collect(posts, Self::harvest_post)?;
        info!(count = voices.len(), "harvested voices");
        Ok(voices)
    }

    fn harvest_post(post: PostLink) -> Result<Voice> {
        debug!(url = %post.url, "fetching experience post");
        let document = HttpClient::fetch_html(&post.url)?;
        Self::voice_from_document(post, &document)
            .context("Failed to read experience post")
    }

    fn voice_from_document(post: PostLink, document: &Html) -> Result<Voice> {
        let heading = document.select(&DOCUMENT_SELECTORS.page_title)
            .next()
            .map(|element| element.text().collect::<String>())
            .with_context(|| format!("Post {} has no title", post.url))?;
        let title = ProfileTitle::parse(&heading)?;

        let advice = AdviceExtractor::extract(document).unwrap_or_else(|| {
            warn!(url = %post.url, "post has no advice section");
            String::new()
        });

        Ok(Voice {
            name: title.name,
            gender: title.gender,
            age: title.age,
            period: title.period,
            img: post.image,
            url: post.url,
            advice: AdviceExtractor::shorten(&advice),
        })
    }
}
