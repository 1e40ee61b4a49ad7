//! Planar geometry: points, arena bounds, and the four walls.
//!
//! Coordinates are `f64` game units (pixels in the classic 800×600 arena).
//! Trails store gap markers as [`Vec2::GAP`] (both components NaN) so a
//! trail stays time-indexed even while no line is being drawn.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D point or displacement.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Trail gap marker.  Never compares equal to anything, itself included.
    pub const GAP: Vec2 = Vec2 { x: f64::NAN, y: f64::NAN };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for heading `angle` (radians from the +x axis).
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: c, y: s }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f64 {
        (self - other).length_sq()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// `false` for gap markers (and any other non-finite point).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn is_gap(self) -> bool {
        !self.is_finite()
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self + (other - self) * t
    }

    /// `[x, y]`, the point type used by the spatial index.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Walls ─────────────────────────────────────────────────────────────────────

/// One of the four arena walls.
///
/// `Bottom` is the `y = ymax` wall because the y axis points down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Bottom,
    Right,
    Top,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Left, Wall::Bottom, Wall::Right, Wall::Top];

    /// Outward-facing unit normal.
    #[inline]
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Left   => Vec2::new(-1.0, 0.0),
            Wall::Bottom => Vec2::new(0.0, 1.0),
            Wall::Right  => Vec2::new(1.0, 0.0),
            Wall::Top    => Vec2::new(0.0, -1.0),
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Wall::Left   => "left",
            Wall::Bottom => "bottom",
            Wall::Right  => "right",
            Wall::Top    => "top",
        };
        f.write_str(s)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned arena rectangle, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    /// `[0, width] × [0, height]`.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(0.5 * (self.xmin + self.xmax), 0.5 * (self.ymin + self.ymax))
    }

    /// `true` if `p` lies strictly inside the rectangle shrunk by `margin` on
    /// every side.  Gap markers are never inside.
    #[inline]
    pub fn contains(&self, p: Vec2, margin: f64) -> bool {
        self.xmin + margin < p.x
            && p.x < self.xmax - margin
            && self.ymin + margin < p.y
            && p.y < self.ymax - margin
    }

    /// Wall hit test: touching a wall counts as a collision.
    #[inline]
    pub fn hits_wall(&self, p: Vec2) -> bool {
        p.x <= self.xmin || p.x >= self.xmax || p.y <= self.ymin || p.y >= self.ymax
    }

    /// Distance from `p` to `wall`, positive inside the arena.
    #[inline]
    pub fn distance_to(&self, wall: Wall, p: Vec2) -> f64 {
        match wall {
            Wall::Left   => p.x - self.xmin,
            Wall::Bottom => self.ymax - p.y,
            Wall::Right  => self.xmax - p.x,
            Wall::Top    => p.y - self.ymin,
        }
    }

    /// Rectangle shrunk by `margin` on every side.
    #[inline]
    pub fn shrink(&self, margin: f64) -> Bounds {
        Bounds::new(self.xmin + margin, self.xmax - margin, self.ymin + margin, self.ymax - margin)
    }

    /// `true` if the rectangle has positive finite extent.
    pub fn is_valid(&self) -> bool {
        [self.xmin, self.xmax, self.ymin, self.ymax].iter().all(|v| v.is_finite())
            && self.xmax > self.xmin
            && self.ymax > self.ymin
    }
}
