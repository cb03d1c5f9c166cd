//! Grayscale pattern masks
//!
//! Only the red channel of a mask is meaningful. Masks are sampled with
//! clamp-to-edge addressing and without vertical flipping; the GPU textures
//! are configured that way when they are loaded.

/// An immutable single-channel image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMask {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl PatternMask {
    /// The 1x1 solid white mask used for the plain pattern. Any sampler
    /// reads its one texel, so every UV gets full weight.
    pub fn plain() -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![u8::MAX],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Expand to opaque gray RGBA8 for texture upload
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.texels.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect()
    }
}
