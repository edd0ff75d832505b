use serde::{Deserialize, Serialize};

/// Player input collected for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementInput {
    /// Horizontal axis in `[-1, 1]`.
    pub move_x: f32,
    /// Vertical axis in `[-1, 1]`. Negative is "down" (fast fall).
    pub move_y: f32,
    /// Jump was pressed this tick.
    pub jump_pressed: bool,
    /// Jump was released this tick.
    pub jump_released: bool,
}

/// Collision snapshot for one tick, produced by the physics collaborator.
///
/// Wall probes are relative to the current facing: `wall_front` is the side the
/// character looks at. A probe that was not supplied reads as "not touching".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollisionProbes {
    pub grounded: Option<bool>,
    pub wall_front: Option<bool>,
    pub wall_back: Option<bool>,
}

impl CollisionProbes {
    pub fn new(grounded: bool, wall_front: bool, wall_back: bool) -> Self {
        Self {
            grounded: Some(grounded),
            wall_front: Some(wall_front),
            wall_back: Some(wall_back),
        }
    }

    #[inline]
    pub fn grounded(&self) -> bool {
        self.grounded.unwrap_or(false)
    }

    #[inline]
    pub fn wall_front(&self) -> bool {
        self.wall_front.unwrap_or(false)
    }

    #[inline]
    pub fn wall_back(&self) -> bool {
        self.wall_back.unwrap_or(false)
    }

    /// True when any probe was left out of the snapshot.
    pub fn is_partial(&self) -> bool {
        self.grounded.is_none() || self.wall_front.is_none() || self.wall_back.is_none()
    }
}
