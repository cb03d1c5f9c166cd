//! Environment snapshot cadence and cube face layout
//!
//! The snapshot is six square face images rendered by 90 degree cameras
//! looking along the axes. [`CubeFace::project`] is the lookup the carapace
//! shader performs to fetch a reflection, so the camera orientations here and
//! the WGSL face selection must agree.

use glam::{Vec2, Vec3};

/// Decides on which frames the environment snapshot is re-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionSchedule {
    /// Frames between captures; 0 disables periodic capture
    pub interval_frames: u32,
}

impl ReflectionSchedule {
    pub fn new(interval_frames: u32) -> Self {
        Self { interval_frames }
    }

    /// Capture on frames 0, N, 2N, ... of a monotonically increasing counter
    pub fn is_capture_frame(&self, frame: u64) -> bool {
        self.interval_frames != 0 && frame % u64::from(self.interval_frames) == 0
    }
}

/// One face of the environment cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl CubeFace {
    /// Face order, also the shader's face index
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    pub fn index(self) -> usize {
        match self {
            CubeFace::PosX => 0,
            CubeFace::NegX => 1,
            CubeFace::PosY => 2,
            CubeFace::NegY => 3,
            CubeFace::PosZ => 4,
            CubeFace::NegZ => 5,
        }
    }

    /// Direction the face camera looks along
    pub fn forward(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::X,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
            CubeFace::NegY => Vec3::NEG_Y,
            CubeFace::PosZ => Vec3::Z,
            CubeFace::NegZ => Vec3::NEG_Z,
        }
    }

    /// Up vector of the face camera
    pub fn up(self) -> Vec3 {
        match self {
            CubeFace::PosY => Vec3::Z,
            CubeFace::NegY => Vec3::NEG_Z,
            _ => Vec3::Y,
        }
    }

    /// Screen-right of the face camera (`forward x up`)
    pub fn right(self) -> Vec3 {
        self.forward().cross(self.up())
    }

    /// Face and image UV (origin top-left) that `dir` lands on
    pub fn project(dir: Vec3) -> (CubeFace, Vec2) {
        let a = dir.abs();
        let face = if a.x >= a.y && a.x >= a.z {
            if dir.x >= 0.0 { CubeFace::PosX } else { CubeFace::NegX }
        } else if a.y >= a.z {
            if dir.y >= 0.0 { CubeFace::PosY } else { CubeFace::NegY }
        } else if dir.z >= 0.0 {
            CubeFace::PosZ
        } else {
            CubeFace::NegZ
        };

        let depth = dir.dot(face.forward()).max(f32::EPSILON);
        let x = dir.dot(face.right()) / depth;
        let y = dir.dot(face.up()) / depth;
        (face, Vec2::new(0.5 + 0.5 * x, 0.5 - 0.5 * y))
    }
}
