//! Rating average and severity classification
//!
//! The average is kept in tenths so rounding and band comparisons use
//! integer arithmetic only.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Bounded slider range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

impl RatingRange {
    pub const DEFAULT: RatingRange = RatingRange { min: 1, max: 10 };

    /// Build a range, returning `None` when `min > max`
    pub fn new(min: u8, max: u8) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn clamp(&self, value: u8) -> u8 {
        value.clamp(self.min, self.max)
    }

    /// Move a value by `delta` steps without leaving the range
    pub fn step(&self, value: u8, delta: i16) -> u8 {
        let moved = (value as i16 + delta).clamp(self.min as i16, self.max as i16);
        moved as u8
    }

    /// Position of `value` inside the range as a 0..=1 fraction
    pub fn fraction(&self, value: u8) -> f32 {
        let span = self.max.saturating_sub(self.min);
        if span == 0 {
            return 1.0;
        }
        (self.clamp(value) - self.min) as f32 / span as f32
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The three slider values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingTriple(pub [u8; 3]);

impl RatingTriple {
    pub fn average(&self) -> Average {
        let sum: u32 = self.0.iter().map(|r| *r as u32).sum();
        // round(sum * 10 / 3), half up
        Average::from_tenths((sum * 20 + 3) / 6)
    }
}

/// Mean rating, rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Average {
    tenths: u32,
}

impl Average {
    pub fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    pub fn tenths(&self) -> u32 {
        self.tenths
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display band for the average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Inclusive lower bounds of the medium and high bands, in whole points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub medium_from: u32,
    pub high_from: u32,
}

impl BandThresholds {
    pub const DEFAULT: BandThresholds = BandThresholds {
        medium_from: 4,
        high_from: 7,
    };

    /// Build thresholds, returning `None` when the bands would overlap or a
    /// cut point lies above any reachable rating
    pub fn new(medium_from: u32, high_from: u32) -> Option<Self> {
        (medium_from <= high_from && high_from <= u8::MAX as u32).then_some(Self {
            medium_from,
            high_from,
        })
    }

    /// Classify the rounded average; a value equal to a cut point belongs to
    /// the upper band.
    pub fn classify(&self, average: Average) -> SeverityBand {
        if average.tenths() >= self.high_from.saturating_mul(10) {
            SeverityBand::High
        } else if average.tenths() >= self.medium_from.saturating_mul(10) {
            SeverityBand::Medium
        } else {
            SeverityBand::Low
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
