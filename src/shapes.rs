//! Shape primitives: rectangle, square, circle, diamond.
//!
//! Each shape stores only its semantic fields (anchor plus dimensions) and
//! derives its outline on demand; there is no separately tracked vertex
//! array to keep in sync. The closed [`ShapeKind`] enum dispatches the
//! [`Shape`] trait over the four kinds.
//!
//! Every kind answers two geometric questions:
//! - `contains`: exact, boundary-inclusive hit test
//! - `connectable_points`: the four attachment points a connector may
//!   anchor to, always in the order [top, right, bottom, left]

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::errors::ShapeError;
use crate::types::{Color, Point};

/// Paint attributes shared by every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub foreground: Color,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub border_radius: f64,
    pub text: String,
    pub id: String,
}

impl Default for ShapeStyle {
    fn default() -> ShapeStyle {
        ShapeStyle {
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            border_radius: 0.0,
            text: String::new(),
            id: String::new(),
        }
    }
}

/// Common behavior for all shapes.
///
/// The anchor is the shape's reference vertex: the top-left corner for
/// rectangles and squares, the center for circles and diamonds. Its depth
/// component orders shapes during rendering.
#[enum_dispatch]
pub trait Shape {
    /// The shape's reference vertex.
    fn anchor(&self) -> Point;

    /// Replace the reference vertex wholesale (depth included).
    fn set_anchor(&mut self, point: Point);

    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// The derived outline: corner points for rectangles and squares, the
    /// center for circles and diamonds. Never empty.
    fn vertices(&self) -> Vec<Point>;

    /// Exact hit test, inclusive of the boundary.
    fn contains(&self, point: Point) -> bool;

    /// The four attachment points in canonical order
    /// [top-mid, right-mid, bottom-mid, left-mid]. Index parity determines
    /// the connector routing case, so the order is load-bearing.
    fn connectable_points(&self) -> [Point; 4];

    /// Vector from the shape's reference corner to `point`.
    fn offset(&self, point: Point) -> Point {
        let anchor = self.anchor();
        Point::new(point.x - anchor.x, point.y - anchor.y)
    }

    /// Relocate the anchor to `point` (depth included).
    fn place(&mut self, point: Point) {
        self.set_anchor(point);
    }

    /// Move the shape so the anchor lands at `(nx, ny)`; depth is kept.
    fn translate(&mut self, nx: f64, ny: f64) {
        let z = self.anchor().z;
        self.set_anchor(Point::at_depth(nx, ny, z));
    }

    /// Rotate the anchor about `pivot` by `angle_deg` degrees. Shapes
    /// stay axis-aligned; only their position moves.
    fn rotate(&mut self, angle_deg: f64, pivot: Point) {
        let anchor = self.anchor();
        let rotation = DVec2::from_angle(angle_deg.to_radians());
        let rotated = rotation.rotate(anchor.vec2() - pivot.vec2()) + pivot.vec2();
        self.set_anchor(Point::at_depth(rotated.x, rotated.y, anchor.z));
    }

    /// Render-order key, ascending. Reuses the anchor's z coordinate.
    fn depth(&self) -> f64 {
        self.anchor().z
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone)]
pub struct Rectangle {
    top_left: Point,
    width: f64,
    height: f64,
    style: ShapeStyle,
}

impl Rectangle {
    /// Width and height must be strictly positive.
    pub fn new(top_left: Point, width: f64, height: f64) -> Result<Rectangle, ShapeError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ShapeError::NonPositiveDimension { width, height });
        }
        Ok(Rectangle { top_left, width, height, style: ShapeStyle::default() })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn anchor(&self) -> Point {
        self.top_left
    }

    fn set_anchor(&mut self, point: Point) {
        self.top_left = point;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn vertices(&self) -> Vec<Point> {
        let Point { x, y, .. } = self.top_left;
        vec![
            self.top_left,
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && self.top_left.x + self.width >= point.x
            && point.y >= self.top_left.y
            && self.top_left.y + self.height >= point.y
    }

    fn connectable_points(&self) -> [Point; 4] {
        let Point { x, y, .. } = self.top_left;
        [
            Point::new(x + self.width / 2.0, y),
            Point::new(x + self.width, y + self.height / 2.0),
            Point::new(x + self.width / 2.0, y + self.height),
            Point::new(x, y + self.height / 2.0),
        ]
    }
}

/// A square anchored at its top-left corner.
///
/// Deliberately not a `Rectangle` wrapper: the hit test and attachment
/// points are computed directly off `side`, and must agree with the
/// rectangle formulas whenever `side == width == height`.
#[derive(Debug, Clone)]
pub struct Square {
    top_left: Point,
    side: f64,
    style: ShapeStyle,
}

impl Square {
    /// The side length must be strictly positive.
    pub fn new(top_left: Point, side: f64) -> Result<Square, ShapeError> {
        if side <= 0.0 {
            return Err(ShapeError::NonPositiveSide { side });
        }
        Ok(Square { top_left, side, style: ShapeStyle::default() })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn anchor(&self) -> Point {
        self.top_left
    }

    fn set_anchor(&mut self, point: Point) {
        self.top_left = point;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn vertices(&self) -> Vec<Point> {
        let Point { x, y, .. } = self.top_left;
        vec![
            self.top_left,
            Point::new(x + self.side, y),
            Point::new(x + self.side, y + self.side),
            Point::new(x, y + self.side),
        ]
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && self.top_left.x + self.side >= point.x
            && point.y >= self.top_left.y
            && self.top_left.y + self.side >= point.y
    }

    fn connectable_points(&self) -> [Point; 4] {
        let Point { x, y, .. } = self.top_left;
        [
            Point::new(x + self.side / 2.0, y),
            Point::new(x + self.side, y + self.side / 2.0),
            Point::new(x + self.side / 2.0, y + self.side),
            Point::new(x, y + self.side / 2.0),
        ]
    }
}

/// A circle anchored at its center.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    style: ShapeStyle,
}

impl Circle {
    /// The radius must be non-negative; zero is a point.
    pub fn new(center: Point, radius: f64) -> Result<Circle, ShapeError> {
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius { radius });
        }
        Ok(Circle { center, radius, style: ShapeStyle::default() })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Circle {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, point: Point) {
        self.center = point;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn vertices(&self) -> Vec<Point> {
        vec![self.center]
    }

    fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn connectable_points(&self) -> [Point; 4] {
        let Point { x, y, .. } = self.center;
        [
            Point::new(x, y - self.radius),
            Point::new(x + self.radius, y),
            Point::new(x, y + self.radius),
            Point::new(x - self.radius, y),
        ]
    }

    /// Measured from the top-left corner of the bounding box, not the
    /// center.
    fn offset(&self, point: Point) -> Point {
        let corner_x = self.center.x - self.radius;
        let corner_y = self.center.y - self.radius;
        Point::new(point.x - corner_x, point.y - corner_y)
    }
}

/// A diamond (rhombus) anchored at its center, with `width` and `height`
/// spanning the full horizontal and vertical diagonals.
#[derive(Debug, Clone)]
pub struct Diamond {
    center: Point,
    width: f64,
    height: f64,
    style: ShapeStyle,
}

impl Diamond {
    pub fn new(center: Point, width: f64, height: f64) -> Diamond {
        Diamond { center, width, height, style: ShapeStyle::default() }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Barycentric containment test for the right triangle spanned by the
    /// center and one horizontal plus one vertical half-diagonal endpoint.
    /// A degenerate triangle (zero doubled area) contains nothing.
    fn contains_right_triangle(&self, point: Point, horizontal: Point, vertical: Point) -> bool {
        let center = self.center.vec2();
        let v0: DVec2 = horizontal.vec2() - center;
        let v1: DVec2 = vertical.vec2() - center;
        let v2: DVec2 = point.vec2() - center;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 {
            return false;
        }

        let inv_denom = 1.0 / denom;
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}

impl Shape for Diamond {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, point: Point) {
        self.center = point;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn vertices(&self) -> Vec<Point> {
        vec![self.center]
    }

    fn contains(&self, point: Point) -> bool {
        let Point { x, y, .. } = self.center;
        let left = Point::new(x - self.width / 2.0, y);
        let right = Point::new(x + self.width / 2.0, y);
        let top = Point::new(x, y - self.height / 2.0);
        let bottom = Point::new(x, y + self.height / 2.0);

        self.contains_right_triangle(point, left, top)
            || self.contains_right_triangle(point, right, top)
            || self.contains_right_triangle(point, left, bottom)
            || self.contains_right_triangle(point, right, bottom)
    }

    fn connectable_points(&self) -> [Point; 4] {
        let Point { x, y, .. } = self.center;
        [
            Point::new(x, y - self.height / 2.0),
            Point::new(x + self.width / 2.0, y),
            Point::new(x, y + self.height / 2.0),
            Point::new(x - self.width / 2.0, y),
        ]
    }
}

/// The closed set of shape kinds the playground can hold.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
    Diamond,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    // ==================== Constructor validation ====================

    #[test]
    fn rectangle_rejects_non_positive_dimensions() {
        assert!(matches!(
            Rectangle::new(p(0.0, 0.0), 0.0, 10.0),
            Err(ShapeError::NonPositiveDimension { .. })
        ));
        assert!(matches!(
            Rectangle::new(p(0.0, 0.0), 10.0, -1.0),
            Err(ShapeError::NonPositiveDimension { .. })
        ));
    }

    #[test]
    fn square_rejects_non_positive_side() {
        assert!(matches!(
            Square::new(p(0.0, 0.0), 0.0),
            Err(ShapeError::NonPositiveSide { .. })
        ));
    }

    #[test]
    fn circle_rejects_negative_radius() {
        assert!(matches!(
            Circle::new(p(0.0, 0.0), -1.0),
            Err(ShapeError::NegativeRadius { .. })
        ));
        assert!(Circle::new(p(0.0, 0.0), 0.0).is_ok());
    }

    // ==================== Rectangle / Square ====================

    #[test]
    fn rectangle_contains_is_boundary_inclusive() {
        let rect = Rectangle::new(p(10.0, 10.0), 20.0, 10.0).unwrap();
        assert!(rect.contains(p(10.0, 10.0)));
        assert!(rect.contains(p(30.0, 20.0)));
        assert!(rect.contains(p(20.0, 15.0)));
        assert!(!rect.contains(p(30.1, 15.0)));
        assert!(!rect.contains(p(20.0, 9.9)));
    }

    #[test]
    fn rectangle_connectable_points_order() {
        let rect = Rectangle::new(p(10.0, 20.0), 40.0, 10.0).unwrap();
        let [top, right, bottom, left] = rect.connectable_points();
        assert!(top.equals(p(30.0, 20.0)));
        assert!(right.equals(p(50.0, 25.0)));
        assert!(bottom.equals(p(30.0, 30.0)));
        assert!(left.equals(p(10.0, 25.0)));
    }

    #[test]
    fn rectangle_vertices_are_clockwise_corners() {
        let rect = Rectangle::new(p(0.0, 0.0), 4.0, 2.0).unwrap();
        let vertices = rect.vertices();
        assert_eq!(vertices.len(), 4);
        assert!(vertices[1].equals(p(4.0, 0.0)));
        assert!(vertices[2].equals(p(4.0, 2.0)));
        assert!(vertices[3].equals(p(0.0, 2.0)));
    }

    #[test]
    fn square_matches_rectangle_behavior() {
        let square = Square::new(p(10.0, 10.0), 20.0).unwrap();
        let rect = Rectangle::new(p(10.0, 10.0), 20.0, 20.0).unwrap();
        for probe in [p(10.0, 10.0), p(30.0, 30.0), p(15.0, 25.0), p(31.0, 15.0), p(9.0, 9.0)] {
            assert_eq!(square.contains(probe), rect.contains(probe), "probe {probe}");
        }
        let sq_pts = square.connectable_points();
        let rect_pts = rect.connectable_points();
        for i in 0..4 {
            assert!(sq_pts[i].equals(rect_pts[i]));
        }
    }

    // ==================== Circle ====================

    #[test]
    fn circle_contains_a_point() {
        let circle = Circle::new(p(100.0, 100.0), 10.0).unwrap();
        assert!(circle.contains(p(95.0, 95.0)));
    }

    #[test]
    fn circle_does_not_contain_a_point() {
        let circle = Circle::new(p(100.0, 100.0), 10.0).unwrap();
        assert!(!circle.contains(p(115.0, 115.0)));
    }

    #[test]
    fn circle_contains_boundary() {
        let circle = Circle::new(p(0.0, 0.0), 5.0).unwrap();
        assert!(circle.contains(p(5.0, 0.0)));
        assert!(circle.contains(p(0.0, -5.0)));
    }

    #[test]
    fn circle_offset_is_from_bounding_corner() {
        let circle = Circle::new(p(100.0, 100.0), 10.0).unwrap();
        let offset = circle.offset(p(95.0, 95.0));
        assert!(offset.equals(p(5.0, 5.0)));
    }

    #[test]
    fn circle_area() {
        let circle = Circle::new(p(0.0, 0.0), 5.0).unwrap();
        assert!((circle.area() - 78.53981633974483).abs() < 1e-12);
    }

    #[test]
    fn circle_connectable_points_order() {
        let circle = Circle::new(p(100.0, 100.0), 10.0).unwrap();
        let [top, right, bottom, left] = circle.connectable_points();
        assert!(top.equals(p(100.0, 90.0)));
        assert!(right.equals(p(110.0, 100.0)));
        assert!(bottom.equals(p(100.0, 110.0)));
        assert!(left.equals(p(90.0, 100.0)));
    }

    // ==================== Diamond ====================

    #[test]
    fn diamond_contains_inner_quadrant_points() {
        let diamond = Diamond::new(p(100.0, 100.0), 20.0, 20.0);
        assert!(diamond.contains(p(95.0, 95.0)));
        assert!(diamond.contains(p(95.0, 105.0)));
        assert!(diamond.contains(p(105.0, 95.0)));
        assert!(diamond.contains(p(105.0, 105.0)));
    }

    #[test]
    fn diamond_excludes_outer_quadrant_points() {
        let diamond = Diamond::new(p(100.0, 100.0), 20.0, 20.0);
        assert!(!diamond.contains(p(94.0, 94.0)));
        assert!(!diamond.contains(p(94.0, 106.0)));
        assert!(!diamond.contains(p(106.0, 94.0)));
        assert!(!diamond.contains(p(106.0, 106.0)));
    }

    #[test]
    fn degenerate_diamond_contains_nothing() {
        let diamond = Diamond::new(p(0.0, 0.0), 0.0, 0.0);
        assert!(!diamond.contains(p(0.0, 0.0)));
    }

    #[test]
    fn diamond_connectable_points_order() {
        let diamond = Diamond::new(p(100.0, 100.0), 40.0, 20.0);
        let [top, right, bottom, left] = diamond.connectable_points();
        assert!(top.equals(p(100.0, 90.0)));
        assert!(right.equals(p(120.0, 100.0)));
        assert!(bottom.equals(p(100.0, 110.0)));
        assert!(left.equals(p(80.0, 100.0)));
    }

    // ==================== Shared operations ====================

    #[test]
    fn contains_is_pure_and_idempotent() {
        let kind: ShapeKind = Diamond::new(p(100.0, 100.0), 20.0, 20.0).into();
        let probe = p(95.0, 95.0);
        assert_eq!(kind.contains(probe), kind.contains(probe));
        // Geometry unchanged by the query.
        assert!(kind.anchor().equals(p(100.0, 100.0)));
    }

    #[test]
    fn translate_moves_anchor_exactly() {
        let mut rect = Rectangle::new(p(10.0, 10.0), 4.0, 4.0).unwrap();
        rect.translate(25.0, 35.0);
        assert!(rect.anchor().equals(p(25.0, 35.0)));
        // The whole outline shifts with the anchor.
        assert!(rect.vertices()[2].equals(p(29.0, 39.0)));
    }

    #[test]
    fn translate_preserves_depth() {
        let mut circle = Circle::new(Point::at_depth(0.0, 0.0, 7.0), 2.0).unwrap();
        circle.translate(5.0, 5.0);
        assert_eq!(circle.depth(), 7.0);
    }

    #[test]
    fn place_replaces_depth() {
        let mut circle = Circle::new(Point::at_depth(0.0, 0.0, 7.0), 2.0).unwrap();
        circle.place(p(5.0, 5.0));
        assert_eq!(circle.depth(), 0.0);
    }

    #[test]
    fn rotate_full_turn_restores_coordinates() {
        let mut rect = Rectangle::new(p(10.0, 20.0), 4.0, 4.0).unwrap();
        rect.rotate(360.0, p(3.0, 3.0));
        let anchor = rect.anchor();
        assert!((anchor.x - 10.0).abs() < 1e-9);
        assert!((anchor.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let mut circle = Circle::new(p(10.0, 0.0), 1.0).unwrap();
        circle.rotate(90.0, p(0.0, 0.0));
        let anchor = circle.anchor();
        assert!((anchor.x - 0.0).abs() < 1e-9);
        assert!((anchor.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rectangle_offset_is_from_top_left() {
        let rect = Rectangle::new(p(10.0, 20.0), 4.0, 4.0).unwrap();
        assert!(rect.offset(p(15.0, 26.0)).equals(p(5.0, 6.0)));
    }

    #[test]
    fn diamond_offset_is_from_center() {
        let diamond = Diamond::new(p(100.0, 100.0), 20.0, 20.0);
        assert!(diamond.offset(p(95.0, 95.0)).equals(p(-5.0, -5.0)));
    }

    #[test]
    fn default_style_matches_contract() {
        let rect = Rectangle::new(p(0.0, 0.0), 1.0, 1.0).unwrap();
        let style = rect.style();
        assert_eq!(style.foreground, Color::BLACK);
        assert_eq!(style.background, Color::TRANSPARENT);
        assert_eq!(style.border_color, Color::TRANSPARENT);
        assert_eq!(style.border_width, 0.0);
    }
}
