use std::cmp::{max, min};

use ordered_float::OrderedFloat;

use crate::Float;

/// Model coordinates of a point placed on a chart.
pub trait ChartPoint {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candle {
    pub timestamp: i64,
    pub open: Float,
    pub high: Float,
    pub low: Float,
    pub close: Float,
}

impl Candle {
    /// Values are stored as given. Inconsistent or non-finite data is not
    /// rejected here; see [`Candle::is_consistent`].
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open: OrderedFloat::from(open),
            high: OrderedFloat::from(high),
            low: OrderedFloat::from(low),
            close: OrderedFloat::from(close),
        }
    }

    /// `low <= min(open, close)` and `max(open, close) <= high`, all finite.
    pub fn is_consistent(&self) -> bool {
        let all_finite = [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite());

        all_finite
            && self.low <= min(self.open, self.close)
            && max(self.open, self.close) <= self.high
    }
}

impl ChartPoint for Candle {
    fn x(&self) -> f64 {
        self.timestamp as f64
    }

    fn y(&self) -> f64 {
        *self.high
    }
}

#[cfg(test)]
mod tests {
    use super::{Candle, ChartPoint};

    #[test]
    fn keeps_values_as_given() {
        let candle = Candle::new(1, 10.0, 9.0, 16.0, 15.0);
        assert_eq!(*candle.open, 10.0);
        assert_eq!(*candle.high, 9.0);
        assert_eq!(*candle.low, 16.0);
        assert_eq!(*candle.close, 15.0);
        assert!(!candle.is_consistent());
    }

    #[test]
    fn consistency() {
        assert!(Candle::new(1, 10.0, 16.0, 9.0, 15.0).is_consistent());
        assert!(Candle::new(1, 10.0, 10.0, 10.0, 10.0).is_consistent());
        assert!(!Candle::new(1, 10.0, 14.0, 9.0, 15.0).is_consistent());
        assert!(!Candle::new(1, f64::NAN, 16.0, 9.0, 15.0).is_consistent());
    }

    #[test]
    fn model_coordinates() {
        let candle = Candle::new(1703656020000, 42366.0, 42391.1, 42366.0, 42391.1);
        assert_eq!(candle.x(), 1703656020000.0);
        assert_eq!(candle.y(), 42391.1);
    }
}
