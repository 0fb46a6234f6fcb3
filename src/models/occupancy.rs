macro_rules! define_occupancies {
    ($(($variant:ident, $slug:literal, $display_name:literal)),* $(,)?) => {
        /// Room-sharing tier of the student accommodation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Occupancy {
            $($variant,)*
        }

        impl Occupancy {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub fn parse(string: &str) -> Option<Self> {
                match string.trim() {
                    $($slug => Some(Self::$variant),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn slug(&self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)*
                }
            }

            #[must_use]
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $display_name,)*
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

        impl std::fmt::Display for Occupancy {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{display_name}", display_name = self.display_name())
            }
        }
    };
}

define_occupancies! {
    (Single, "single", "Single room"),
    (Double, "double", "Double room"),
    (Triple, "triple", "Triple room"),
}
