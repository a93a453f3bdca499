//! Palette and color assignment
//!
//! Level data names block *types*, not colors. The first time a type shows
//! up during a load it gets a random palette color that no other type holds
//! yet; every later block or destination of that type reuses it.
//!
//! Palettes are small (at most [`MAX_PALETTE_COLORS`]), so picking uses plain
//! rejection sampling against the colors already handed out.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ConfigError};
use crate::rng::SimpleRng;
use crate::types::{BlockType, Color, MAX_PALETTE_COLORS};

/// Ordered set of distinct colors available to a level
///
/// Serialized as a plain list of color names; deserializing goes through
/// [`Palette::new`], so an empty or repeated list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: ArrayVec<Color, MAX_PALETTE_COLORS>,
}

impl Palette {
    /// Build a palette, rejecting empty lists and repeated colors
    pub fn new(colors: &[Color]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let mut out = ArrayVec::new();
        for &color in colors {
            if out.contains(&color) {
                return Err(ConfigError::DuplicateColor(color));
            }
            out.try_push(color)
                .map_err(|_| ConfigError::PaletteTooLarge(colors.len()))?;
        }
        Ok(Self { colors: out })
    }

    /// Parse a comma separated list of color names
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Color::from_str(name).ok_or_else(|| ConfigError::UnknownColor(name.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Every color the engine knows
    pub fn full() -> Self {
        Self {
            colors: Color::ALL.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(&colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors.to_vec()
    }
}

/// Per-load mapping from block type to color
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Palette,
    assigned: BTreeMap<BlockType, Color>,
    seed: u32,
    rng: SimpleRng,
}

impl ColorAssigner {
    pub fn new(palette: Palette, seed: u32) -> Self {
        Self {
            palette,
            assigned: BTreeMap::new(),
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Color for `block_type`, assigning a fresh one on first sight
    pub fn color_for(&mut self, block_type: BlockType) -> Result<Color, ColorError> {
        if let Some(&color) = self.assigned.get(&block_type) {
            return Ok(color);
        }

        // Without this check the sampling loop below would never terminate.
        if self.assigned.len() >= self.palette.len() {
            return Err(ColorError::PaletteExhausted {
                block_type,
                palette_len: self.palette.len(),
            });
        }

        let colors = self.palette.colors();
        let color = loop {
            let candidate = colors[self.rng.next_index(colors.len())];
            if !self.assigned.values().any(|&used| used == candidate) {
                break candidate;
            }
        };

        tracing::debug!(block_type, color = color.as_str(), "assigned block color");
        self.assigned.insert(block_type, color);
        Ok(color)
    }

    /// Previously assigned color, without assigning
    pub fn assigned(&self, block_type: BlockType) -> Option<Color> {
        self.assigned.get(&block_type).copied()
    }

    /// All assignments made so far, ordered by block type
    pub fn assignments(&self) -> impl Iterator<Item = (BlockType, Color)> + '_ {
        self.assigned.iter().map(|(&t, &c)| (t, c))
    }

    /// Forget every assignment and rewind the rng to its seed.
    ///
    /// Afterwards the assigner hands out exactly the colors a freshly built
    /// one would.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.rng = SimpleRng::new(self.seed);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_gets_same_color() {
        let mut colors = ColorAssigner::new(Palette::full(), 3);
        let first = colors.color_for(7).unwrap();
        for _ in 0..10 {
            assert_eq!(colors.color_for(7).unwrap(), first);
        }
    }

    #[test]
    fn test_distinct_types_get_distinct_colors_until_exhausted() {
        let mut colors = ColorAssigner::new(Palette::full(), 99);
        let mut seen = Vec::new();
        for block_type in 0..MAX_PALETTE_COLORS as u32 {
            let color = colors.color_for(block_type).unwrap();
            assert!(!seen.contains(&color), "{:?} handed out twice", color);
            seen.push(color);
        }

        assert_eq!(
            colors.color_for(100),
            Err(ColorError::PaletteExhausted {
                block_type: 100,
                palette_len: MAX_PALETTE_COLORS,
            })
        );
        // Known types still resolve after exhaustion.
        assert_eq!(colors.color_for(0).unwrap(), seen[0]);
    }

    #[test]
    fn test_two_color_palette_fails_on_third_type() {
        let palette = Palette::new(&[Color::Red, Color::Blue]).unwrap();
        let mut colors = ColorAssigner::new(palette, 5);

        let a = colors.color_for(1).unwrap();
        let b = colors.color_for(2).unwrap();
        assert_ne!(a, b);
        assert!(matches!(
            colors.color_for(3),
            Err(ColorError::PaletteExhausted { block_type: 3, palette_len: 2 })
        ));
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let mut a = ColorAssigner::new(Palette::full(), 1234);
        let mut b = ColorAssigner::new(Palette::full(), 1234);
        for block_type in [4, 1, 9] {
            assert_eq!(a.color_for(block_type), b.color_for(block_type));
        }
    }

    #[test]
    fn test_reset_clears_assignments() {
        let mut colors = ColorAssigner::new(Palette::new(&[Color::Green]).unwrap(), 1);
        assert_eq!(colors.color_for(1), Ok(Color::Green));
        assert!(colors.color_for(2).is_err());

        colors.reset();
        assert_eq!(colors.assigned(1), None);
        assert_eq!(colors.color_for(2), Ok(Color::Green));
    }

    #[test]
    fn test_reset_replays_the_first_assignment() {
        let mut colors = ColorAssigner::new(Palette::full(), 42);
        let first: Vec<_> = [3, 1, 8].iter().map(|&t| colors.color_for(t).unwrap()).collect();

        colors.reset();
        let again: Vec<_> = [3, 1, 8].iter().map(|&t| colors.color_for(t).unwrap()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_palette_deserialize_validates() {
        let palette: Palette = serde_json::from_str(r#"["red","blue"]"#).unwrap();
        assert_eq!(palette.colors(), &[Color::Red, Color::Blue]);
        assert_eq!(serde_json::to_string(&palette).unwrap(), r#"["red","blue"]"#);

        assert!(serde_json::from_str::<Palette>(r#"["red","red"]"#).is_err());
        assert!(serde_json::from_str::<Palette>("[]").is_err());
        assert!(serde_json::from_str::<Palette>(r#"{"colors":["red","red"]}"#).is_err());
    }

    #[test]
    fn test_palette_validation() {
        assert_eq!(Palette::new(&[]), Err(ConfigError::EmptyPalette));
        assert_eq!(
            Palette::new(&[Color::Red, Color::Red]),
            Err(ConfigError::DuplicateColor(Color::Red))
        );
        assert_eq!(
            Palette::parse("red, blue").unwrap().colors(),
            &[Color::Red, Color::Blue]
        );
        assert_eq!(
            Palette::parse("red,teal"),
            Err(ConfigError::UnknownColor("teal".to_string()))
        );
        assert_eq!(Palette::full().len(), MAX_PALETTE_COLORS);
    }
}
