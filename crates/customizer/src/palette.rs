//! Random starting colors

use rand::Rng;
use scarab_ipc::Rgb;

/// The two carapace colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Rgb,
    pub accent: Rgb,
}

impl Palette {
    /// Two independent uniformly random 24-bit colors
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            base: random_color(rng),
            accent: random_color(rng),
        }
    }
}

pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::from_u32(rng.random::<u32>() & 0x00ff_ffff)
}
