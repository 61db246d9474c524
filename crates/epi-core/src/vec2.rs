//! Arena-local 2-D geometry.
//!
//! Positions use `f32` (single-precision): the arena is a 100-unit logical
//! square, so f32 gives far sub-pixel precision at any drawing-surface size
//! while halving memory vs. `f64`.

/// A 2-D vector in arena-local coordinates — used for both positions and
/// (unit) velocities.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    /// Euclidean distance to `other`.
    ///
    /// Proximity checks are O(n²) over the population each tick, which is
    /// fine at the target population sizes (tens to low hundreds).
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The bounded square arena agents move inside.
///
/// The arena has a fixed logical size independent of any drawing surface;
/// rendering scales arena-local coordinates out to surface pixels.  Agents
/// reflect off the walls of the inset rectangle
/// `[margin, size - margin] × [margin, size - margin]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    /// Side length of the logical square, in arena units.
    pub size: f32,
    /// Inset from each wall at which reflection triggers.
    pub margin: f32,
}

impl Arena {
    pub fn new(size: f32, margin: f32) -> Self {
        Self { size, margin }
    }

    /// Lower bound of the reflecting interior (same for both axes).
    #[inline]
    pub fn low(&self) -> f32 {
        self.margin
    }

    /// Upper bound of the reflecting interior.
    #[inline]
    pub fn high(&self) -> f32 {
        self.size - self.margin
    }

    /// `true` if `coord` lies inside the reflecting interval on one axis.
    #[inline]
    pub fn contains_axis(&self, coord: f32) -> bool {
        coord >= self.low() && coord <= self.high()
    }

    /// Scale an arena-local position to a drawing surface of the given size.
    ///
    /// Pure arithmetic — the surface geometry never feeds back into physics.
    #[inline]
    pub fn to_surface(&self, pos: Vec2, width: f32, height: f32) -> Vec2 {
        Vec2 {
            x: pos.x / self.size * width,
            y: pos.y / self.size * height,
        }
    }
}

impl Default for Arena {
    /// The reference arena: a 100-unit square with a 5-unit wall margin.
    fn default() -> Self {
        Self { size: 100.0, margin: 5.0 }
    }
}
