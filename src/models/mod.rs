macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

mod occupancy;
mod period;
mod price;
mod course;
mod catalog;

#[cfg(runtime)]
type String = &'static str;
#[cfg(not(runtime))]
type String = std::string::String;

pub use self::occupancy::Occupancy;
pub use self::period::Period;
pub use self::price::Yen;
pub use self::course::{Course, PriceTable};
pub use self::catalog::Catalog;
