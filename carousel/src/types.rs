/// The direction of the most recent navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirection {
    Forward,
    Backward,
}

/// Number of neighbor cards rendered on each side of the centered card.
///
/// The visible window is `[-left ..= right]`; `left + 1 + right` cards render at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideCounts {
    pub left: u8,
    pub right: u8,
}

impl SideCounts {
    /// Same neighbor count on both sides (what responsive sizing produces).
    pub fn symmetric(per_side: u8) -> Self {
        Self {
            left: per_side,
            right: per_side,
        }
    }

    /// Number of simultaneously rendered cards (`left + 1 + right`).
    pub fn visible_count(&self) -> usize {
        self.left as usize + 1 + self.right as usize
    }
}

/// Immutable-per-instance visual geometry consumed by transform projection.
///
/// All lengths are in pixels, `tilt` in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Max width of the centered card.
    pub card_width: f32,
    /// Base horizontal separation between neighboring cards.
    pub gap: f32,
    /// Z depth pushed per step away from the center.
    pub depth: f32,
    /// Y rotation per step (the coverflow tilt).
    pub tilt: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            card_width: 420.0,
            gap: 32.0,
            depth: 120.0,
            tilt: 14.0,
        }
    }
}

impl Geometry {
    /// Accumulated drag distance required to trigger one navigation step.
    pub fn drag_threshold(&self) -> f32 {
        (self.card_width + self.gap) * 0.35
    }
}

/// The projected 3D transform for one card at a signed offset from center.
///
/// Lengths in pixels, `rotate_y` in degrees; `scale` and `opacity` in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_z: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub z_index: i32,
    pub opacity: f32,
    pub max_width: f32,
}

/// A card resolved for rendering: the real item index behind a window offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSlot {
    pub index: usize,
    /// Signed distance from the centered position (`0` = center).
    pub offset: i32,
    pub is_center: bool,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSlotKeyed<K> {
    pub key: K,
    pub index: usize,
    /// Signed distance from the centered position (`0` = center).
    pub offset: i32,
    pub is_center: bool,
}

pub type ItemKey = u64;
