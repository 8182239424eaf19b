//! Tick placement along a linear axis.

/// Visual weight of a tick mark or grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickWeight {
    /// Every tenth step.
    Major,
    /// Every fifth step.
    Minor,
    /// Every other step.
    SubMinor,
}

impl TickWeight {
    /// Half-length of the tick mark drawn across an axis line, in pixels.
    pub fn mark_half_length(self) -> i32 {
        match self {
            Self::Major => 4,
            Self::Minor => 3,
            Self::SubMinor => 1,
        }
    }
}

/// A position along an axis where a tick mark or grid line is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// The value at this tick in data coordinates.
    pub value: f64,

    /// The step size between ticks.
    pub step_size: f64,

    /// The visual weight of the mark at this tick.
    pub weight: TickWeight,
}

impl Tick {
    pub fn new(value: f64, step_size: f64, weight: TickWeight) -> Self {
        Self {
            value,
            step_size,
            weight,
        }
    }
}

/// Default number of steps aimed for across the visible range.
pub const TARGET_STEPS: u32 = 20;

/// Produce ticks over `[min, max]` with roughly `target` steps between them.
///
/// Weights are derived from the tick's index relative to zero, so the same
/// value always gets the same weight regardless of the range.
pub fn ticks(min: f64, max: f64, target: u32) -> Vec<Tick> {
    const MAJOR_INTERVAL: i64 = 10;
    const MINOR_INTERVAL: i64 = 5;

    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }

    let step = nice_step(span / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|idx| {
            let weight = if idx % MAJOR_INTERVAL == 0 {
                TickWeight::Major
            } else if idx % MINOR_INTERVAL == 0 {
                TickWeight::Minor
            } else {
                TickWeight::SubMinor
            };
            Tick::new(idx as f64 * step, step, weight)
        })
        .collect()
}

/// Round `raw` up to a "nice" step: 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    const NICE_STEP_BASES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exp = raw.log10().floor();
    let base = 10.0_f64.powf(exp);
    for &m in &NICE_STEP_BASES {
        if raw <= m * base {
            return m * base;
        }
    }
    base * 10.0
}
