use glam::Vec2;
use super::PatternGenerator;

/// Standard D3D 8x MSAA sample positions, in 1/16 pixel units.
const DX_8X_PATTERN: [(i8, i8); 8] = [
    (1, -3),
    (-1, 3),
    (5, 1),
    (-3, -5),
    (-5, 5),
    (-7, -1),
    (3, 7),
    (7, -7),
];

/// Cycles through the D3D 8x MSAA sample positions.
#[derive(Debug, Clone, Default)]
pub struct DxSamplePattern {
    current: usize,
}

impl DxSamplePattern {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternGenerator for DxSamplePattern {
    fn next(&mut self) -> Vec2 {
        let (x, y) = DX_8X_PATTERN[self.current];
        self.current = (self.current + 1) % DX_8X_PATTERN.len();
        Vec2::new(x as f32, y as f32) / 16.0
    }

    fn sample_count(&self) -> u32 {
        DX_8X_PATTERN.len() as u32
    }
}
