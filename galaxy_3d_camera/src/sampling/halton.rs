use glam::Vec2;
use super::PatternGenerator;

/// Halton (2, 3) low-discrepancy sequence.
///
/// Sample `i` is `(radical_inverse(i, 2), radical_inverse(i, 3)) - 0.5`,
/// with `i` starting at 1 so the first sample is not the pixel corner.
#[derive(Debug, Clone)]
pub struct HaltonSamplePattern {
    sample_count: u32,
    current: u32,
}

impl HaltonSamplePattern {
    /// `sample_count` of 0 runs the sequence without wrapping.
    pub fn new(sample_count: u32) -> Self {
        Self { sample_count, current: 0 }
    }
}

/// Van der Corput radical inverse of `index` in `base`.
pub(crate) fn radical_inverse(mut index: u32, base: u32) -> f32 {
    let inv_base = 1.0 / base as f32;
    let mut fraction = inv_base;
    let mut result = 0.0;
    while index > 0 {
        result += (index % base) as f32 * fraction;
        index /= base;
        fraction *= inv_base;
    }
    result
}

impl PatternGenerator for HaltonSamplePattern {
    fn next(&mut self) -> Vec2 {
        let index = self.current.wrapping_add(1);
        self.current = if self.sample_count == 0 {
            self.current.wrapping_add(1)
        } else {
            (self.current + 1) % self.sample_count
        };

        Vec2::new(radical_inverse(index, 2), radical_inverse(index, 3)) - Vec2::splat(0.5)
    }

    fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

#[cfg(test)]
#[path = "halton_tests.rs"]
mod tests;
