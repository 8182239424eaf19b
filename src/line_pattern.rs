//! Repeating on/off pixel patterns for dashed strokes.

/// A repeating boolean pattern described by alternating run lengths,
/// starting with an "on" run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePattern {
    runs: &'static [u32],
    period: u32,
}

impl LinePattern {
    /// Ten on, nine off.
    pub const DASHED: Self = Self::from_runs(&[10, 9]);
    /// Two on, four off.
    pub const DOTTED: Self = Self::from_runs(&[2, 4]);
    /// A dash followed by a dot.
    pub const DOT_DASH: Self = Self::from_runs(&[10, 4, 2, 4]);
    /// Twenty on, eight off.
    pub const LONG_DASH: Self = Self::from_runs(&[20, 8]);
    /// A long dash followed by a short dash.
    pub const TWO_DASH: Self = Self::from_runs(&[14, 4, 6, 4]);

    /// Build a pattern from run lengths. Runs alternate on/off, starting on.
    pub const fn from_runs(runs: &'static [u32]) -> Self {
        let mut period = 0;
        let mut i = 0;
        while i < runs.len() {
            period += runs[i];
            i += 1;
        }
        Self { runs, period }
    }

    /// Length of one repetition in pixels.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Whether the pixel at `offset` along the stroke is drawn.
    pub fn is_on(&self, offset: u64) -> bool {
        if self.period == 0 {
            return false;
        }
        let mut k = (offset % self.period as u64) as u32;
        for (i, &run) in self.runs.iter().enumerate() {
            if k < run {
                return i % 2 == 0;
            }
            k -= run;
        }
        false
    }
}

/// Offset into a [`LinePattern`], carried from one segment of a series to the
/// next so dashes continue across vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternPhase(pub u64);

impl PatternPhase {
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_runs() {
        let p = LinePattern::DASHED;
        assert_eq!(p.period(), 19);
        assert!((0..10).all(|i| p.is_on(i)));
        assert!((10..19).all(|i| !p.is_on(i)));
        assert!(p.is_on(19));
    }

    #[test]
    fn dot_dash_has_two_on_runs() {
        let p = LinePattern::DOT_DASH;
        let on: Vec<u64> = (0..p.period() as u64).filter(|&i| p.is_on(i)).collect();
        assert_eq!(on.len(), 12);
        assert!(p.is_on(14) && p.is_on(15));
        assert!(!p.is_on(16));
    }

    #[test]
    fn empty_pattern_is_off() {
        assert!(!LinePattern::from_runs(&[]).is_on(3));
    }
}
