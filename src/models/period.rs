macro_rules! define_periods {
    ($(($variant:ident, $weeks:literal, $slug:literal)),* $(,)?) => {
        /// Contract length in weeks. Only these lengths are sold.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Period {
            $($variant,)*
        }

        impl Period {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub fn parse(string: &str) -> Option<Self> {
                match string.trim() {
                    $($slug => Some(Self::$variant),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn from_weeks(weeks: u32) -> Option<Self> {
                match weeks {
                    $($weeks => Some(Self::$variant),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn weeks(&self) -> u32 {
                match self {
                    $(Self::$variant => $weeks,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(Self::$variant,)*]
            }

            #[must_use]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }

        impl std::fmt::Display for Period {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.weeks() {
                    1 => write!(formatter, "1 week"),
                    weeks => write!(formatter, "{weeks} weeks"),
                }
            }
        }
    };
}

define_periods! {
    (OneWeek, 1, "1"),
    (TwoWeeks, 2, "2"),
    (ThreeWeeks, 3, "3"),
    (FourWeeks, 4, "4"),
    (EightWeeks, 8, "8"),
    (TwelveWeeks, 12, "12"),
    (SixteenWeeks, 16, "16"),
    (TwentyWeeks, 20, "20"),
    (TwentyFourWeeks, 24, "24"),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sold_lengths_are_periods() {
        assert_eq!(Period::from_weeks(8), Some(Period::EightWeeks));
        assert_eq!(Period::from_weeks(5), None);
        assert_eq!(Period::from_weeks(0), None);
        assert_eq!(Period::parse("24"), Some(Period::TwentyFourWeeks));
        assert_eq!(Period::parse(" 4 "), Some(Period::FourWeeks));
        assert_eq!(Period::parse("6"), None);
        assert_eq!(Period::parse("four"), None);
    }

    #[test]
    fn weeks_are_strictly_increasing() {
        let weeks: Vec<u32> = Period::all().iter().map(Period::weeks).collect();
        assert_eq!(weeks, [1, 2, 3, 4, 8, 12, 16, 20, 24]);
        assert!(Period::all().iter().enumerate().all(|(position, period)| period.index() == position));
    }

    #[test]
    fn displays_in_weeks() {
        assert_eq!(Period::OneWeek.to_string(), "1 week");
        assert_eq!(Period::TwelveWeeks.to_string(), "12 weeks");
    }
}
