use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Closed parameter interval `[start, end]`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub start: f32,
    pub end: f32,
}

impl ParamRange {
    /// Create a range, rejecting reversed or non-finite bounds
    pub fn new(start: f32, end: f32) -> Result<Self, SceneError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub const fn new_unchecked(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(SceneError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value <= self.end
    }

    /// Parameter at fraction `alpha` of the interval
    pub fn at(&self, alpha: f32) -> f32 {
        self.start + self.span() * alpha
    }

    /// `segments + 1` evenly spaced values; both ends are hit exactly
    pub fn linspace(self, segments: u32) -> impl Iterator<Item = f32> {
        (0..=segments).map(move |i| {
            if i == segments {
                self.end
            } else {
                self.at(i as f32 / segments as f32)
            }
        })
    }
}
