//! Geometric and color primitives shared by every shape.
//!
//! Design goals:
//! - `Point` is the single coordinate type; its `z` doubles as a draw-order
//!   key ("depth"), not true 3D depth
//! - 2D identity (`equals`) deliberately ignores `z` — connectable-point
//!   matching during routing relies on 2D identity only

use std::fmt;

use glam::{DVec2, DVec3, dvec2, dvec3};

/// A point in 2D space with an optional depth component.
///
/// `z` defaults to 0 and is used as a render-order key by the playground.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a point at depth 0.
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y, z: 0.0 }
    }

    /// Create a point with an explicit depth.
    pub const fn at_depth(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }

    /// Euclidean distance to another point.
    ///
    /// The depth component always participates; since it defaults to 0,
    /// plain 2D distances come out unchanged.
    pub fn distance_to(self, other: Point) -> f64 {
        self.vec3().distance(other.vec3())
    }

    /// 2D identity: true iff `x` and `y` match exactly. `z` is excluded
    /// by design.
    pub fn equals(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Midpoint between two points (depth 0).
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// The 2D projection as a glam vector.
    pub(crate) fn vec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    fn vec3(self) -> DVec3 {
        dvec3(self.x, self.y, self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An RGBA color with integer channels.
///
/// Channels are expected in 0–255 but are only clamped when formatted as
/// hex, matching the drawing surface's `#rrggbb` contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub alpha: i32,
}

impl Color {
    /// Shared "no paint" sentinel used for default backgrounds and borders.
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 1);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(red: i32, green: i32, blue: i32) -> Color {
        Color { red, green, blue, alpha: 0 }
    }

    pub const fn rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Color {
        Color { red, green, blue, alpha }
    }

    /// Format as `#rrggbb`, clamping each channel to 0–255. Alpha is not
    /// part of the wire format.
    pub fn hex(self) -> String {
        let r = self.red.clamp(0, 255);
        let g = self.green.clamp(0, 255);
        let b = self.blue.clamp(0, 255);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
