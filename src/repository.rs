use super::constants;
use super::models::{Catalog, Course};

/// Read-only view over the compiled course catalog.
#[derive(Debug, Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl Default for Repository<'static> {
    fn default() -> Self {
        Self::new(&constants::APP_CATALOG)
    }
}

impl<'a> Repository<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Courses in catalog order.
    #[must_use]
    pub const fn courses(&self) -> &'a [Course] {
        self.catalog.courses
    }

    /// Looks a course up by its key. An unknown key is not an error.
    #[must_use]
    pub fn course(&self, slug: &str) -> Option<&'a Course> {
        self.catalog
            .courses_map
            .get(slug)
            .and_then(|&index| self.catalog.courses.get(index))
    }

    #[must_use]
    pub fn course_keys(&self) -> impl Iterator<Item = &'static str> + 'a {
        self.catalog.courses.iter().map(|course| course.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Occupancy, Period, Yen};

    const KEYS: [&str; 9] = [
        "esl-light", "esl-a", "esl-b", "esl-c", "esl-d",
        "test-a", "test-b", "test-c", "test-d",
    ];

    #[test]
    fn keeps_source_order() {
        let keys: Vec<_> = Repository::default().course_keys().collect();
        assert_eq!(keys, KEYS);
    }

    #[test]
    fn every_key_resolves_to_its_course() {
        let repository = Repository::default();
        for key in KEYS {
            let course = repository.course(key).expect("catalog course");
            assert_eq!(course.slug, key);
        }
    }

    #[test]
    fn unknown_keys_are_absent() {
        let repository = Repository::default();
        assert!(repository.course("").is_none());
        assert!(repository.course("esl-e").is_none());
        assert!(repository.course("ESL-A").is_none());
    }

    #[test]
    fn only_the_light_course_is_new() {
        let new_courses: Vec<_> = Repository::default()
            .courses()
            .iter()
            .filter(|course| course.is_new)
            .map(|course| course.slug)
            .collect();
        assert_eq!(new_courses, ["esl-light"]);
    }

    #[test]
    fn price_tables_are_dense() {
        for course in Repository::default().courses() {
            assert_eq!(course.prices.iter().count(), Occupancy::COUNT * Period::COUNT);
            assert!(course.prices.iter().all(|(_, _, price)| price > Yen(0)));
        }
    }

    #[test]
    fn prices_fall_with_shared_rooms() {
        for course in Repository::default().courses() {
            for &period in Period::all() {
                let single = course.prices.get(Occupancy::Single, period);
                let double = course.prices.get(Occupancy::Double, period);
                let triple = course.prices.get(Occupancy::Triple, period);
                assert!(single > double && double > triple, "{} {period}", course.slug);
            }
        }
    }
}
