//! Hand landmark topology (MediaPipe Hands, 21 points).

use std::ops::Index;

use glam::{Vec2, Vec3};
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertip landmarks, thumb to pinky.
pub const FINGER_TIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Landmarks each fingertip is compared against, thumb to pinky.
pub const FINGER_BASES: [usize; 5] = [THUMB_MCP, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected {LANDMARK_COUNT} hand landmarks, got {0}")]
    WrongCount(usize),
}

/// The 21 landmarks of one detected hand, in normalized image coordinates.
///
/// x and y are in `[0, 1]` relative to the image, with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks([Vec3; LANDMARK_COUNT]);

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    /// Replaces one landmark.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`LANDMARK_COUNT`].
    pub fn set(&mut self, index: usize, point: Vec3) {
        self.0[index] = point;
    }

    /// Where a label for this hand should be anchored: the mean x of all
    /// landmarks and the smallest y, which is never more than 1.0.
    pub fn label_anchor(&self) -> Vec2 {
        let top = self.0.iter().fold(1.0f32, |top, p| top.min(p.y));
        let mean_x = self.0.iter().map(|p| p.x).sum::<f32>() / LANDMARK_COUNT as f32;
        Vec2::new(mean_x, top)
    }
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self([Vec3::ZERO; LANDMARK_COUNT])
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.0[index]
    }
}

impl TryFrom<Vec<Vec3>> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: Vec<Vec3>) -> Result<Self, Self::Error> {
        let len = points.len();
        let points: [Vec3; LANDMARK_COUNT] = points.try_into()
            .map_err(|_| LandmarkError::WrongCount(len))?;
        Ok(Self(points))
    }
}

impl From<[Vec3; LANDMARK_COUNT]> for HandLandmarks {
    fn from(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self(points)
    }
}
