//! # Chart Data
//!
//! Synthetic series for the arena charts. Rendering is someone else's job;
//! this module only produces points.
//!
//! Both generators draw from an injected RNG so a fixed seed reproduces a
//! chart exactly.
//!
//! # Series
//!
//! ```text
//! % chance     8 hourly points 18:00..01:00, base U[30,70) + noise U[-5,5)
//! Yes price    24 hourly points, clamp(0.65 + (sin(h*0.3) + U[-0.2,0.2)) * 0.1, 0.1, 0.95)
//!              rounded to 3 dp, volume 5000 + U[0,10000)
//! ```
//!
//! # Examples
//!
//! ```
//! use agent_arena::application::services::chart_data::ChartGenerator;
//!
//! let mut a = ChartGenerator::seeded(7);
//! let mut b = ChartGenerator::seeded(7);
//! assert_eq!(a.yes_price_series(), b.yes_price_series());
//! ```

use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic, clamp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

const CHANCE_POINTS: u32 = 8;
const CHANCE_START_HOUR: u32 = 18;
const PRICE_POINTS: u32 = 24;

const PRICE_BASE: f64 = 0.65;
const PRICE_FLOOR: Decimal = dec!(0.1);
const PRICE_CEILING: Decimal = dec!(0.95);

/// A point of the % chance series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChancePoint {
    /// Hour label, e.g. `18:00`.
    pub label: String,
    /// Chance in percent.
    pub chance: f64,
}

/// A point of the intraday Yes price series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    /// Hour label, e.g. `07:00`.
    pub label: String,
    /// Price in dollars per share, 3 dp.
    pub price: Decimal,
    /// Traded volume in whole units.
    pub volume: u32,
}

/// Summary of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceStats {
    /// First price.
    pub opening: Decimal,
    /// Last price.
    pub current: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// `current - opening`.
    pub change: Decimal,
    /// `change / opening * 100`.
    pub change_percent: Decimal,
}

impl PriceStats {
    /// Computes statistics; `None` for an empty series.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the opening price is zero.
    pub fn from_series(series: &[PricePoint]) -> ArithmeticResult<Option<Self>> {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Ok(None);
        };
        let high = series.iter().map(|p| p.price).max().unwrap_or(first.price);
        let low = series.iter().map(|p| p.price).min().unwrap_or(first.price);
        let change = last.price.safe_sub(first.price)?;
        let change_percent = change
            .safe_div(first.price)?
            .safe_mul(Decimal::ONE_HUNDRED)?;

        Ok(Some(Self {
            opening: first.price,
            current: last.price,
            high,
            low,
            change,
            change_percent,
        }))
    }

    /// Change to 2 dp with a sign, e.g. `+2.31%`.
    #[must_use]
    pub fn change_percent_label(&self) -> String {
        let rounded = self
            .change_percent
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() { "" } else { "+" };
        format!("{sign}{rounded:.2}%")
    }
}

/// Produces chart series from an RNG.
#[derive(Debug, Clone)]
pub struct ChartGenerator<R> {
    rng: R,
}

impl ChartGenerator<StdRng> {
    /// A generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ChartGenerator<R> {
    /// Wraps an RNG.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The % chance series: 8 hourly points from 18:00.
    pub fn chance_series(&mut self) -> Vec<ChancePoint> {
        let base = self.rng.random_range(30.0..70.0);
        (0..CHANCE_POINTS)
            .map(|i| {
                let hour = (CHANCE_START_HOUR + i) % 24;
                let noise = self.rng.random_range(-5.0..5.0);
                ChancePoint {
                    label: format!("{hour:02}:00"),
                    chance: base + noise,
                }
            })
            .collect()
    }

    /// The intraday Yes price series: 24 hourly points from 00:00.
    pub fn yes_price_series(&mut self) -> Vec<PricePoint> {
        (0..PRICE_POINTS)
            .map(|hour| {
                let wave = (f64::from(hour) * 0.3).sin();
                let noise = self.rng.random_range(-0.2..0.2);
                let raw = PRICE_BASE + (wave + noise) * 0.1;
                let price = Decimal::from_f64(raw).unwrap_or(PRICE_FLOOR);
                let price = clamp(price, PRICE_FLOOR, PRICE_CEILING)
                    .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
                PricePoint {
                    label: format!("{hour:02}:00"),
                    price,
                    volume: 5_000 + self.rng.random_range(0..10_000),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn chance_series_shape() {
        let series = ChartGenerator::seeded(42).chance_series();
        assert_eq!(series.len(), 8);
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["18:00", "19:00", "20:00", "21:00", "22:00", "23:00", "00:00", "01:00"]
        );
        assert!(series.iter().all(|p| (25.0..75.0).contains(&p.chance)));
    }

    #[test]
    fn price_series_bounds() {
        for seed in 0..20 {
            let series = ChartGenerator::seeded(seed).yes_price_series();
            assert_eq!(series.len(), 24);
            assert!(series.iter().all(|p| p.price >= PRICE_FLOOR && p.price <= PRICE_CEILING));
            assert!(series.iter().all(|p| p.price.scale() <= 3));
            assert!(series.iter().all(|p| (5_000..15_000).contains(&p.volume)));
        }
    }

    #[test]
    fn same_seed_same_series() {
        let a = ChartGenerator::seeded(9).chance_series();
        let b = ChartGenerator::seeded(9).chance_series();
        assert_eq!(a, b);
    }

    #[test]
    fn stats_over_series() {
        let points = [dec!(0.650), dec!(0.700), dec!(0.600), dec!(0.715)]
            .into_iter()
            .map(|price| PricePoint {
                label: String::new(),
                price,
                volume: 0,
            })
            .collect::<Vec<_>>();
        let stats = PriceStats::from_series(&points).unwrap().unwrap();
        assert_eq!(stats.opening, dec!(0.65));
        assert_eq!(stats.current, dec!(0.715));
        assert_eq!(stats.high, dec!(0.715));
        assert_eq!(stats.low, dec!(0.6));
        assert_eq!(stats.change, dec!(0.065));
        assert_eq!(stats.change_percent_label(), "+10.00%");
    }

    #[test]
    fn stats_of_empty_series() {
        assert_eq!(PriceStats::from_series(&[]).unwrap(), None);
    }

    #[test]
    fn stats_with_zero_opening() {
        let points = vec![
            PricePoint {
                label: String::new(),
                price: Decimal::ZERO,
                volume: 0,
            },
            PricePoint {
                label: String::new(),
                price: dec!(0.5),
                volume: 0,
            },
        ];
        assert!(PriceStats::from_series(&points).is_err());
    }
}
