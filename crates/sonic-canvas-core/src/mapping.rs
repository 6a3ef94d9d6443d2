/// Inclusive numeric range a normalized control value is projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn map(&self, normalized: f32) -> f32 {
        map_normalized_to_range(normalized, self.min, self.max)
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        value.clamp(lo, hi)
    }
}

/// Linear projection of `normalized` (expected in [0, 1]) onto `[min, max]`.
#[inline]
pub fn map_normalized_to_range(normalized: f32, min: f32, max: f32) -> f32 {
    min + normalized * (max - min)
}

/// Round to two decimal places, the precision parameter writes are sent with.
#[inline]
pub fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
