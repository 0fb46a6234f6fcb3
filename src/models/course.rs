use super::String;
use super::{Occupancy, Period, Yen};

/// Dense price grid, one row per occupancy and one column per period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    pub rows: [[Yen; Period::COUNT]; Occupancy::COUNT],
}

impl PriceTable {
    #[must_use]
    pub const fn get(&self, occupancy: Occupancy, period: Period) -> Yen {
        self.rows[occupancy.index()][period.index()]
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (Occupancy, Period, Yen)> + '_ {
        Occupancy::all().iter().flat_map(move |&occupancy| {
            Period::all()
                .iter()
                .map(move |&period| (occupancy, period, self.get(occupancy, period)))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub is_new: bool,
    pub prices: PriceTable,
}
