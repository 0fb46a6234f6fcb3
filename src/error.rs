use thiserror::Error;

/// A selection names something the catalog does not know.
///
/// An incomplete selection is never an error; these variants only cover
/// values that are present but outside the closed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("unknown course '{0}'")]
    UnknownCourse(String),

    #[error("unknown room occupancy '{0}'")]
    UnknownOccupancy(String),

    #[error("unknown period '{0}'")]
    UnknownPeriod(String),
}
