use serde::{Deserialize, Serialize};

/// One (low, high) hysteresis threshold pair for the edge detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub low: u16,
    pub high: u16,
}

impl ThresholdPair {
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Thresholds as `(weak, strong)` floats with `weak <= strong`.
    ///
    /// A pair given in the wrong order is swapped rather than rejected.
    pub fn ordered(&self) -> (f32, f32) {
        let (a, b) = (self.low as f32, self.high as f32);
        if a > b {
            (b, a)
        } else {
            (a, b)
        }
    }
}

/// Cartesian product of `lows` x `highs`, low outer and high inner.
pub fn threshold_grid(lows: &[u16], highs: &[u16]) -> Vec<ThresholdPair> {
    lows.iter()
        .flat_map(|&low| highs.iter().map(move |&high| ThresholdPair::new(low, high)))
        .collect()
}
