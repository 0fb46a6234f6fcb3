use anyhow::{bail, Context, Result};

use crate::models::{Occupancy, Period, PriceTable, Yen};

/// Reads one course's `[prices]` table, rejecting unknown keys and any
/// occupancy/period pair left without a price.
pub struct PriceTableReader {
    table: PriceTable,
    filled: [[bool; Period::COUNT]; Occupancy::COUNT],
}

impl PriceTableReader {
    pub fn read(prices: &toml::map::Map<String, toml::Value>) -> Result<PriceTable> {
        let mut reader = Self {
            table: PriceTable { rows: [[Yen(0); Period::COUNT]; Occupancy::COUNT] },
            filled: [[false; Period::COUNT]; Occupancy::COUNT],
        };

        for (occupancy_key, periods) in prices {
            let occupancy = Occupancy::parse(occupancy_key)
                .context(format!("Unknown occupancy '{occupancy_key}'"))?;
            let periods = periods.as_table()
                .context(format!("Prices for '{occupancy_key}' are not a table"))?;

            for (period_key, price) in periods {
                reader.insert(occupancy, period_key, price)
                    .context(format!("Invalid price for {occupancy_key}/{period_key}"))?;
            }
        }

        reader.ensure_complete()?;
        Ok(reader.table)
    }

    fn insert(&mut self, occupancy: Occupancy, period_key: &str, price: &toml::Value) -> Result<()> {
        let period = Period::parse(period_key)
            .context(format!("Unknown period '{period_key}'"))?;
        let amount = price.as_integer()
            .context("Price is not an integer")?;
        let amount = u64::try_from(amount)
            .context("Price is negative")?;

        let cell = &mut self.filled[occupancy.index()][period.index()];
        if *cell {
            bail!("Duplicate price");
        }
        *cell = true;
        self.table.rows[occupancy.index()][period.index()] = Yen(amount);

        Ok(())
    }

    fn ensure_complete(&self) -> Result<()> {
        let missing: Vec<String> = Occupancy::all()
            .iter()
            .flat_map(move |occupancy| {
                Period::all()
                    .iter()
                    .filter(move |period| !self.filled[occupancy.index()][period.index()])
                    .map(move |period| format!("{}/{}", occupancy.slug(), period.weeks()))
            })
            .collect();

        if !missing.is_empty() {
            bail!("Missing prices for {}", missing.join(", "));
        }

        Ok(())
    }
}
