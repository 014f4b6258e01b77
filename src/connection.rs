//! Orthogonal connector routing between two shapes.
//!
//! A connection binds a source shape to a target shape by id and owns no
//! geometry of its own: every render recomputes the nearest pair of
//! connectable points from the shapes' current positions, picks an elbow
//! path from the pair's index parity, and draws an arrowhead oriented into
//! the target side.

use crate::log::{debug, warn};
use crate::playground::ShapeId;
use crate::shapes::{Shape, ShapeKind};
use crate::surface::Surface;
use crate::types::Point;

/// Arrowhead fill, a fixed slate color.
const ARROW_FILL: &str = "#2c3e50";

/// Arrowhead size used by connector routing.
const ARROW_SIZE: f64 = 10.0;

/// Which side of the target shape a connector arrives at. The variant is
/// the index into `connectable_points()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn from_index(index: usize) -> Side {
        match index {
            0 => Side::Top,
            1 => Side::Right,
            2 => Side::Bottom,
            _ => Side::Left,
        }
    }

    /// Offset pulling the path endpoint away from the attachment point so
    /// the arrowhead has room: vertical sides offset on y, horizontal
    /// sides on x.
    fn endpoint_offsets(self, size: f64) -> (f64, f64) {
        match self {
            Side::Top => (0.0, -size),
            Side::Right => (size, 0.0),
            Side::Bottom => (0.0, size),
            Side::Left => (-size, 0.0),
        }
    }
}

/// A directed link between two shapes held by the same playground.
#[derive(Debug, Clone)]
pub struct Connection {
    source: ShapeId,
    target: ShapeId,
    label: String,
    color: String,
}

impl Connection {
    pub const LINE_WIDTH: f64 = 2.0;

    pub fn new(source: ShapeId, target: ShapeId) -> Connection {
        Connection {
            source,
            target,
            label: String::new(),
            color: "black".to_string(),
        }
    }

    pub fn source(&self) -> ShapeId {
        self.source
    }

    pub fn target(&self) -> ShapeId {
        self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Route and draw the connector from `source` to `target`.
    ///
    /// Stateless: nothing is cached between renders, so dragging either
    /// shape re-routes the connector on the next render.
    pub fn render<S: Surface>(&self, surface: &mut S, source: &ShapeKind, target: &ShapeKind) {
        let src_pts = source.connectable_points();
        let tgt_pts = target.connectable_points();

        let Some((src_idx, tgt_idx)) = nearest_pair(&src_pts, &tgt_pts) else {
            // Unreachable with the fixed 4-point contract, but a missing
            // route must not leave a stray arrowhead at the origin.
            warn!("connection has no route, skipping");
            return;
        };
        let start = src_pts[src_idx];
        let end = tgt_pts[tgt_idx];

        let side = Side::from_index(tgt_idx);
        let (offset_x, offset_y) = side.endpoint_offsets(ARROW_SIZE);

        debug!(
            src_idx,
            tgt_idx,
            "routing connector from ({}, {}) to ({}, {})",
            start.x,
            start.y,
            end.x,
            end.y
        );

        surface.set_line_width(Self::LINE_WIDTH);
        surface.set_stroke_style(&self.color);
        surface.begin_path();

        // Index parity picks the routing case: even indices face vertically
        // (top/bottom), odd indices horizontally (left/right).
        if src_idx % 2 == tgt_idx % 2 {
            // Same facing: a 3-segment zig-zag through the midpoint.
            let middle = start.midpoint(end);
            if src_idx % 2 == 0 {
                surface.move_to(start.x, start.y);
                surface.line_to(start.x, middle.y);
                surface.line_to(end.x + offset_x, middle.y);
                surface.line_to(end.x + offset_x, end.y + offset_y);
            } else {
                surface.move_to(start.x, start.y);
                surface.line_to(middle.x, start.y);
                surface.line_to(middle.x, end.y + offset_y);
                surface.line_to(end.x + offset_x, end.y + offset_y);
            }
        } else if src_idx % 2 == 0 {
            // Vertical-facing source into horizontal-facing target: one
            // corner at (source.x, target.y).
            let corner = Point::new(start.x, end.y);
            surface.move_to(start.x, start.y);
            surface.line_to(corner.x, corner.y + offset_y);
            surface.line_to(end.x + offset_x, end.y + offset_y);
        } else {
            // Horizontal-facing source into vertical-facing target: one
            // corner at (target.x, source.y - offset).
            let corner = Point::new(end.x, start.y - offset_y);
            surface.move_to(start.x, start.y);
            surface.line_to(corner.x, corner.y + offset_y);
            surface.line_to(end.x + offset_x, end.y + offset_y);
        }

        surface.stroke();
        surface.close_path();

        render_arrow_head(surface, end.x, end.y, side, ARROW_SIZE);
    }
}

/// Exhaustive nearest-pair search over the 4x4 point combinations.
///
/// Strict `<` with a row-major scan keeps ties deterministic: the first
/// minimum encountered wins.
fn nearest_pair(src_pts: &[Point; 4], tgt_pts: &[Point; 4]) -> Option<(usize, usize)> {
    let mut best = None;
    let mut min = f64::INFINITY;
    for (i, src) in src_pts.iter().enumerate() {
        for (j, tgt) in tgt_pts.iter().enumerate() {
            let dist = src.distance_to(*tgt);
            if dist < min {
                best = Some((i, j));
                min = dist;
            }
        }
    }
    best
}

/// Draw a filled triangular arrowhead at `(x, y)` pointing into `side`.
///
/// The tip is nudged by half the line width so it touches the shape
/// boundary rather than the attachment point itself.
fn render_arrow_head<S: Surface>(surface: &mut S, x: f64, y: f64, side: Side, size: f64) {
    surface.set_fill_style(ARROW_FILL);
    let nudge = Connection::LINE_WIDTH / 2.0;

    surface.begin_path();
    match side {
        Side::Top => {
            let x = x + nudge;
            surface.move_to(x, y);
            surface.line_to(x - size / 2.0, y - size);
            surface.line_to(x + size / 2.0, y - size);
            surface.move_to(x, y);
        }
        Side::Right => {
            let y = y + nudge;
            surface.move_to(x, y);
            surface.line_to(x + size, y - size / 2.0);
            surface.line_to(x + size, y + size / 2.0);
            surface.move_to(x, y);
        }
        Side::Bottom => {
            let x = x + nudge;
            surface.move_to(x, y);
            surface.line_to(x - size / 2.0, y + size);
            surface.line_to(x + size / 2.0, y + size);
            surface.move_to(x, y);
        }
        Side::Left => {
            let y = y + nudge;
            surface.move_to(x, y);
            surface.line_to(x - size, y - size / 2.0);
            surface.line_to(x - size, y + size / 2.0);
            surface.move_to(x, y);
        }
    }
    surface.stroke();
    surface.close_path();
    surface.fill();
}
