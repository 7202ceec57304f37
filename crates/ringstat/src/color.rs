use derive_more::{Deref, From, Into};
use palette::Srgba;
use rand::Rng;
use serde_with::DeserializeFromStr;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_PALETTE_COLORS: usize = 4;

pub const TRANSPARENT_WHITE: Srgba<f64> = Srgba::new(1.0, 1.0, 1.0, 0.0);
pub const OPAQUE_BLACK: Srgba<f64> = Srgba::new(0.0, 0.0, 0.0, 1.0);

/// Supplies a color for a category the palette does not cover.
pub trait FallbackColors {
    fn fallback_color(&self, index: usize) -> Srgba<f64>;
}

impl<F> FallbackColors for F
where
    F: Fn(usize) -> Srgba<f64>,
{
    fn fallback_color(&self, index: usize) -> Srgba<f64> {
        self(index)
    }
}

/// Opaque color with random RGB channels, fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomColors;

impl FallbackColors for RandomColors {
    fn fallback_color(&self, _index: usize) -> Srgba<f64> {
        let mut rng = rand::rng();
        Srgba::new(
            rng.random_range(0.0..=1.0),
            rng.random_range(0.0..=1.0),
            rng.random_range(0.0..=1.0),
            1.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<Srgba<f64>>,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Srgba<f64>>) -> Self {
        let mut colors: Vec<_> = colors.into_iter().collect();
        if colors.len() > MAX_PALETTE_COLORS {
            log::warn!(
                "Palette has {} colors, only the first {} are used",
                colors.len(),
                MAX_PALETTE_COLORS
            );
            colors.truncate(MAX_PALETTE_COLORS);
        }
        Self { colors }
    }

    pub fn get(&self, index: usize) -> Option<Srgba<f64>> {
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Option<Srgba<f64>> {
        self.colors.first().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Fills every unset slot up to [`MAX_PALETTE_COLORS`] from `fallback`,
    /// so the first four categories keep one color for the palette's life.
    pub fn filled(mut self, fallback: &impl FallbackColors) -> Self {
        for index in self.colors.len()..MAX_PALETTE_COLORS {
            self.colors.push(fallback.fallback_color(index));
        }
        self
    }

    pub fn resolve(&self, index: usize, fallback: &impl FallbackColors) -> Srgba<f64> {
        self.get(index)
            .unwrap_or_else(|| fallback.fallback_color(index))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected 6 or 8 hex digits, got '{0}'")]
    Length(String),
    #[error("Invalid hex digits in '{0}'")]
    Digits(String),
}

/// `#RRGGBB` or `#RRGGBBAA`, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, DeserializeFromStr)]
pub struct HexColor(Srgba<f64>);

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ColorParseError::Length(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|c| c as f64 / 255.0)
                .map_err(|_| ColorParseError::Digits(s.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self(Srgba::new(channel(0)?, channel(2)?, channel(4)?, alpha)))
    }
}
