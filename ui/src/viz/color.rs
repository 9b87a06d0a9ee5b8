//! Score-to-color scales for the two color modes.

use std::fmt;

use crate::core::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Sentiment,
    Subjectivity,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Sentiment, ColorMode::Subjectivity];

    /// Value used in the mode `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Sentiment => "Sentiment",
            ColorMode::Subjectivity => "Subjectivity",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn value_of(self, record: &Record) -> f64 {
        match self {
            ColorMode::Sentiment => record.sentiment,
            ColorMode::Subjectivity => record.subjectivity,
        }
    }

    pub fn scale(self) -> ColorScale {
        match self {
            ColorMode::Sentiment => ColorScale::new(vec![
                (-1.0, Rgb::RED),
                (0.0, Rgb::NEUTRAL),
                (1.0, Rgb::GREEN),
            ]),
            ColorMode::Subjectivity => {
                ColorScale::new(vec![(0.0, Rgb::NEUTRAL), (1.0, Rgb::BLUE)])
            }
        }
    }

    pub fn fill(self, record: &Record) -> Rgb {
        self.scale().color_at(self.value_of(record))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const NEUTRAL: Rgb = Rgb::new(0xEC, 0xEC, 0xEC);
    pub const BLUE: Rgb = Rgb::new(0x44, 0x67, 0xC4);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Piecewise-linear scale over ascending knots; out-of-domain values clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    knots: Vec<(f64, Rgb)>,
}

impl ColorScale {
    pub fn new(knots: Vec<(f64, Rgb)>) -> Self {
        debug_assert!(!knots.is_empty());
        debug_assert!(knots.windows(2).all(|w| w[0].0 < w[1].0));
        Self { knots }
    }

    pub fn domain(&self) -> (f64, f64) {
        let first = self.knots.first().map(|k| k.0).unwrap_or(0.0);
        let last = self.knots.last().map(|k| k.0).unwrap_or(0.0);
        (first, last)
    }

    pub fn color_at(&self, value: f64) -> Rgb {
        let (Some(&(lo, lo_color)), Some(&(hi, hi_color))) = (self.knots.first(), self.knots.last())
        else {
            return Rgb::NEUTRAL;
        };

        if value.is_nan() || value <= lo {
            return lo_color;
        }
        if value >= hi {
            return hi_color;
        }

        for pair in self.knots.windows(2) {
            let (a, a_color) = pair[0];
            let (b, b_color) = pair[1];
            if value <= b {
                return a_color.lerp(b_color, (value - a) / (b - a));
            }
        }
        hi_color
    }
}
