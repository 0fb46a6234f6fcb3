//! Maps a course, room occupancy and period selection to a displayable quote.
//!
//! Resolution is a direct lookup in the compiled catalog. There is no
//! fallback to a neighbouring period or occupancy and no rounding; the
//! caller decides what to do with the quote (show it, reveal the result
//! panel, scroll to it).

use tracing::debug;

use super::constants;
use super::error::PricingError;
use super::models::{Course, Occupancy, Period, Yen};
use super::repository::Repository;

/// Raw values of the three selection controls. An empty value means the
/// control still shows its placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection<'s> {
    pub course: Option<&'s str>,
    pub occupancy: Option<&'s str>,
    pub period: Option<&'s str>,
}

impl<'s> Selection<'s> {
    #[must_use]
    pub const fn new(course: Option<&'s str>, occupancy: Option<&'s str>, period: Option<&'s str>) -> Self {
        Self { course, occupancy, period }
    }

    fn chosen(value: Option<&'s str>) -> Option<&'s str> {
        value.map(str::trim).filter(|value| !value.is_empty())
    }

    /// All three values, or `None` while any control is unset.
    #[must_use]
    pub fn complete(&self) -> Option<(&'s str, &'s str, &'s str)> {
        Some((
            Self::chosen(self.course)?,
            Self::chosen(self.occupancy)?,
            Self::chosen(self.period)?,
        ))
    }
}

/// Course text shown next to the price: optional badge, name, then body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    pub is_new: bool,
    pub name: &'a str,
    pub body: &'a str,
}

impl Description<'_> {
    /// Markup fragment for the result panel. The body is catalog text and may
    /// already contain markup, so it is inserted as is.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if self.is_new {
            html.push_str(&format!(
                "<span class=\"new-badge\">{badge}</span><br>",
                badge = constants::NEW_COURSE_BADGE
            ));
        }
        html.push_str(&format!("<strong>{name}</strong><br>{body}", name = self.name, body = self.body));
        html
    }
}

impl std::fmt::Display for Description<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_new {
            writeln!(formatter, "{badge}", badge = constants::NEW_COURSE_BADGE)?;
        }
        write!(formatter, "{name}\n{body}", name = self.name, body = self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote<'a> {
    pub course: &'a Course,
    pub occupancy: Occupancy,
    pub period: Period,
    pub price: Yen,
    pub formatted_price: String,
    pub description: Description<'a>,
}

impl<'a> Quote<'a> {
    fn new(course: &'a Course, occupancy: Occupancy, period: Period) -> Self {
        let price = course.prices.get(occupancy, period);

        Self {
            course,
            occupancy,
            period,
            price,
            formatted_price: price.to_string(),
            description: Description {
                is_new: course.is_new,
                name: course.name,
                body: course.description,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    repository: Repository<'a>,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(Repository::default())
    }
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(repository: Repository<'a>) -> Self {
        Self { repository }
    }

    /// Resolves typed inputs. Returns `Ok(None)` without any lookup when an
    /// input is missing.
    ///
    /// # Errors
    ///
    /// [`PricingError::UnknownCourse`] when the key is not in the catalog.
    pub fn resolve(
        &self,
        course: Option<&str>,
        occupancy: Option<Occupancy>,
        period: Option<Period>,
    ) -> Result<Option<Quote<'a>>, PricingError> {
        let (Some(slug), Some(occupancy), Some(period)) = (course, occupancy, period) else {
            return Ok(None);
        };

        let course = self.repository
            .course(slug)
            .ok_or_else(|| PricingError::UnknownCourse(slug.to_string()))?;

        let quote = Quote::new(course, occupancy, period);
        debug!(
            course = slug,
            occupancy = occupancy.slug(),
            weeks = period.weeks(),
            price = quote.price.amount(),
            "resolved price"
        );

        Ok(Some(quote))
    }

    /// Resolves the raw control values. Presence is checked before parsing,
    /// so an incomplete selection is never an error.
    ///
    /// # Errors
    ///
    /// A [`PricingError`] naming the first value outside the catalog.
    pub fn resolve_selection(&self, selection: &Selection<'_>) -> Result<Option<Quote<'a>>, PricingError> {
        let Some((course, occupancy, period)) = selection.complete() else {
            return Ok(None);
        };

        let occupancy = Occupancy::parse(occupancy)
            .ok_or_else(|| PricingError::UnknownOccupancy(occupancy.to_string()))?;
        let period = Period::parse(period)
            .ok_or_else(|| PricingError::UnknownPeriod(period.to_string()))?;

        self.resolve(Some(course), Some(occupancy), Some(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(course: &str, occupancy: Occupancy, period: Period) -> Quote<'static> {
        Resolver::default()
            .resolve(Some(course), Some(occupancy), Some(period))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn light_course_single_one_week() {
        let quote = quote("esl-light", Occupancy::Single, Period::OneWeek);
        assert_eq!(quote.price, Yen(47125));
        assert_eq!(quote.formatted_price, "¥47,125");
        assert!(quote.description.is_new);
        assert!(quote.description.to_string().starts_with("新コース\nESL Light course\n"));
    }

    #[test]
    fn d_course_triple_longest_period() {
        let quote = quote("esl-d", Occupancy::Triple, Period::TwentyFourWeeks);
        assert_eq!(quote.formatted_price, "¥1,070,000");
        assert!(!quote.description.is_new);
        assert!(quote.description.to_string().starts_with("ESL D course\n"));
    }

    #[test]
    fn exam_course_double_eight_weeks() {
        assert_eq!(quote("test-d", Occupancy::Double, Period::EightWeeks).formatted_price, "¥406,000");
    }

    #[test]
    fn twelve_weeks_single_light_course() {
        assert_eq!(quote("esl-light", Occupancy::Single, Period::TwelveWeeks).formatted_price, "¥431,000");
    }

    #[test]
    fn missing_inputs_skip_lookup() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve(None, Some(Occupancy::Single), Some(Period::FourWeeks)), Ok(None));
        assert_eq!(resolver.resolve(Some("esl-a"), None, Some(Period::FourWeeks)), Ok(None));
        assert_eq!(resolver.resolve(Some("esl-a"), Some(Occupancy::Single), None), Ok(None));
        assert_eq!(resolver.resolve(Some("no-such-course"), None, None), Ok(None));
    }

    #[test]
    fn unknown_course_is_reported() {
        let result = Resolver::default().resolve(Some("esl-z"), Some(Occupancy::Single), Some(Period::OneWeek));
        assert_eq!(result, Err(PricingError::UnknownCourse("esl-z".to_string())));
    }

    #[test]
    fn resolving_twice_gives_the_same_quote() {
        let resolver = Resolver::default();
        let first = resolver.resolve(Some("test-b"), Some(Occupancy::Double), Some(Period::ThreeWeeks));
        let second = resolver.resolve(Some("test-b"), Some(Occupancy::Double), Some(Period::ThreeWeeks));
        assert_eq!(first, second);
        assert!(first.unwrap().is_some());
    }

    #[test]
    fn empty_controls_count_as_unset() {
        let resolver = Resolver::default();
        let selection = Selection::new(Some(""), Some("single"), Some("4"));
        assert_eq!(resolver.resolve_selection(&selection), Ok(None));

        let selection = Selection::new(Some("esl-a"), Some("  "), Some("4"));
        assert_eq!(resolver.resolve_selection(&selection), Ok(None));

        assert_eq!(resolver.resolve_selection(&Selection::default()), Ok(None));
    }

    #[test]
    fn incomplete_selection_is_not_parsed() {
        let selection = Selection::new(None, Some("penthouse"), Some("5"));
        assert_eq!(Resolver::default().resolve_selection(&selection), Ok(None));
    }

    #[test]
    fn raw_selection_resolves() {
        let selection = Selection::new(Some("esl-b"), Some("triple"), Some("16"));
        let quote = Resolver::default().resolve_selection(&selection).unwrap().unwrap();
        assert_eq!(quote.occupancy, Occupancy::Triple);
        assert_eq!(quote.period, Period::SixteenWeeks);
        assert_eq!(quote.formatted_price, "¥626,000");
    }

    #[test]
    fn values_outside_the_closed_sets_are_errors() {
        let resolver = Resolver::default();

        let selection = Selection::new(Some("esl-b"), Some("quad"), Some("16"));
        assert_eq!(
            resolver.resolve_selection(&selection),
            Err(PricingError::UnknownOccupancy("quad".to_string()))
        );

        let selection = Selection::new(Some("esl-b"), Some("single"), Some("6"));
        assert_eq!(
            resolver.resolve_selection(&selection),
            Err(PricingError::UnknownPeriod("6".to_string()))
        );
    }

    #[test]
    fn html_description_puts_badge_first() {
        let html = quote("esl-light", Occupancy::Double, Period::TwoWeeks).description.to_html();
        assert!(html.starts_with("<span class=\"new-badge\">新コース</span><br><strong>ESL Light course</strong><br>"));
        assert!(html.ends_with("で構成されています。"));
    }

    #[test]
    fn html_description_omits_badge_for_established_courses() {
        let html = quote("test-a", Occupancy::Single, Period::OneWeek).description.to_html();
        assert!(html.starts_with("<strong>IELTS/TOEIC A course</strong><br>"));
        assert!(!html.contains("new-badge"));
    }
}
