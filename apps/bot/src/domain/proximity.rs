//! Distance-to-visual scaling policy.
//!
//! The oracle assigns each guess a rank distance; this module turns
//! that distance into a color category and a bar fill percentage. The
//! exact thresholds are policy carried by [`RankScale`]; the renderer
//! only relies on the [`ProximityScale`] contract.

/// Color category of a rendered guess bar, closest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Cyan,
    Gray,
}

pub const ANSI_RESET: &str = "\u{1b}[0m";

impl BarColor {
    /// ANSI escape prefix understood by chat clients that render
    /// `ansi` code blocks.
    pub fn ansi_prefix(&self) -> &'static str {
        match self {
            BarColor::Green => "\u{1b}[2;32m",
            BarColor::Cyan => "\u{1b}[2;36m",
            BarColor::Gray => "\u{1b}[2;30m",
        }
    }
}

/// Maps a rank distance to a visual representation.
///
/// Implementations must be monotonic: a smaller distance never yields a
/// smaller fill, and `fill_percent(0)` is 100.
pub trait ProximityScale: Send + Sync {
    fn color(&self, distance: u32) -> BarColor;

    /// Fill of the proximity bar in percent, 0..=100.
    fn fill_percent(&self, distance: u32) -> u8;
}

/// Distances at or beyond this render an empty bar.
const FAR_LIMIT: u32 = 100_000;

const GREEN_BAND: u32 = 300;
const CYAN_BAND: u32 = 1_500;

/// Default scaling policy: the top 300 ranks are green, ranks up to
/// 1500 cyan, everything else gray, with a logarithmic fill falloff so
/// near guesses stay visually distinguishable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankScale;

impl ProximityScale for RankScale {
    fn color(&self, distance: u32) -> BarColor {
        if distance < GREEN_BAND {
            BarColor::Green
        } else if distance < CYAN_BAND {
            BarColor::Cyan
        } else {
            BarColor::Gray
        }
    }

    fn fill_percent(&self, distance: u32) -> u8 {
        if distance == 0 {
            return 100;
        }
        if distance >= FAR_LIMIT {
            return 0;
        }
        let falloff = f64::from(distance + 1).ln() / f64::from(FAR_LIMIT + 1).ln();
        (100.0 * (1.0 - falloff)).round() as u8
    }
}
