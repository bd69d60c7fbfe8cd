//! Colour sources for diagnostic strokes.

use crate::shapes::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that hands out colours, one per request.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgb;
}

/// Random colours on a coarse grid: every channel is a multiple of 10 in `0..=250`.
#[derive(Debug, Clone)]
pub struct RandomColors<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn channel(&mut self) -> u8 {
        // floor(x * 25.9) is at most 25
        ((self.rng.random::<f64>() * 25.9).floor() * 10.0) as u8
    }
}

impl RandomColors<StdRng> {
    /// Reproducible colour sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Colour sequence seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgb {
        let r = self.channel();
        let g = self.channel();
        let b = self.channel();
        Rgb::new(r, g, b)
    }
}

/// Always the same colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColor(pub Rgb);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Rgb {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_on_grid() {
        let mut colors = RandomColors::seeded(7);
        for _ in 0..200 {
            let c = colors.next_color();
            for channel in [c.r, c.g, c.b] {
                assert_eq!(channel % 10, 0);
                assert!(channel <= 250);
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomColors::seeded(42);
        let mut b = RandomColors::seeded(42);
        let first: Vec<Rgb> = (0..8).map(|_| a.next_color()).collect();
        let second: Vec<Rgb> = (0..8).map(|_| b.next_color()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_color() {
        let mut fixed = FixedColor(Rgb::new(1, 2, 3));
        assert_eq!(fixed.next_color(), Rgb::new(1, 2, 3));
        assert_eq!(fixed.next_color(), Rgb::new(1, 2, 3));
    }
}
