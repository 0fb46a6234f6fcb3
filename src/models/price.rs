/// An exact amount in Japanese yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Yen(pub u64);

impl Yen {
    pub const SYMBOL: char = '¥';

    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Digits of the amount grouped by thousands, without the currency symbol.
    #[must_use]
    pub fn grouped(&self) -> std::string::String {
        let digits = self.0.to_string();
        let mut grouped = std::string::String::with_capacity(digits.len() + digits.len() / 3);

        for (position, digit) in digits.chars().enumerate() {
            if position > 0 && (digits.len() - position) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        grouped
    }
}

impl std::fmt::Display for Yen {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{symbol}{grouped}", symbol = Self::SYMBOL, grouped = self.grouped())
    }
}

impl From<u64> for Yen {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}
