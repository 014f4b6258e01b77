//! Per-kind shape painters.
//!
//! Painters are stateless functions over the drawing surface; the
//! playground dispatches on [`ShapeKind`] instead of inspecting runtime
//! types. Shape text is carried in the style but not painted (text layout
//! is out of scope).

use std::f64::consts::TAU;

use crate::shapes::{Circle, Diamond, Rectangle, Shape, ShapeKind, Square};
use crate::surface::Surface;
use crate::types::{Color, Point};

/// Paint a shape onto the surface with its current style.
pub fn paint_shape<S: Surface>(surface: &mut S, shape: &ShapeKind) {
    match shape {
        ShapeKind::Rectangle(rect) => paint_rectangle(surface, rect),
        ShapeKind::Square(square) => paint_square(surface, square),
        ShapeKind::Circle(circle) => paint_circle(surface, circle),
        ShapeKind::Diamond(diamond) => paint_diamond(surface, diamond),
    }
}

pub fn paint_rectangle<S: Surface>(surface: &mut S, rect: &Rectangle) {
    let style = rect.style();
    let Point { x, y, .. } = rect.top_left();
    if style.border_radius == 0.0 {
        surface.set_stroke_style(&style.border_color.hex());
        surface.set_line_width(style.border_width);
        surface.set_fill_style(&style.background.hex());
        surface.fill_rect(x, y, rect.width(), rect.height());
        surface.stroke_rect(x, y, rect.width(), rect.height());
    } else {
        paint_rounded_rect(
            surface,
            x,
            y,
            rect.width(),
            rect.height(),
            style.border_radius,
            style.border_width,
            style.border_color,
            style.background,
        );
    }
}

pub fn paint_square<S: Surface>(surface: &mut S, square: &Square) {
    let style = square.style();
    let Point { x, y, .. } = square.top_left();
    if style.border_radius == 0.0 {
        surface.set_stroke_style(&style.border_color.hex());
        surface.set_line_width(style.border_width);
        surface.set_fill_style(&style.background.hex());
        surface.fill_rect(x, y, square.side(), square.side());
        surface.stroke_rect(x, y, square.side(), square.side());
    } else {
        paint_rounded_rect(
            surface,
            x,
            y,
            square.side(),
            square.side(),
            style.border_radius,
            style.border_width,
            style.border_color,
            style.background,
        );
    }
}

pub fn paint_circle<S: Surface>(surface: &mut S, circle: &Circle) {
    let style = circle.style();
    let center = circle.center();

    surface.begin_path();
    surface.arc(center.x, center.y, circle.radius(), 0.0, TAU);
    surface.close_path();

    surface.set_fill_style(&style.background.hex());
    surface.fill();

    if style.border_width > 0.0 {
        surface.set_line_width(style.border_width);
        surface.set_stroke_style(&style.border_color.hex());
    } else {
        // Borderless circles trace their own fill color so the boundary
        // stays crisp against the dot grid.
        surface.set_stroke_style(&style.background.hex());
    }
    surface.stroke();
}

pub fn paint_diamond<S: Surface>(surface: &mut S, diamond: &Diamond) {
    let style = diamond.style();
    let [top, right, bottom, left] = diamond.connectable_points();

    surface.set_stroke_style(&style.border_color.hex());
    surface.set_line_width(style.border_width);
    surface.set_fill_style(&style.background.hex());

    surface.begin_path();
    surface.move_to(top.x, top.y);
    surface.line_to(right.x, right.y);
    surface.line_to(bottom.x, bottom.y);
    surface.line_to(left.x, left.y);
    surface.line_to(top.x, top.y);
    surface.close_path();
    surface.fill();
    surface.stroke();
}

/// Trace a rectangle with the same radius on all four corners, then fill
/// and stroke it.
#[allow(clippy::too_many_arguments)]
pub fn paint_rounded_rect<S: Surface>(
    surface: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    border_radius: f64,
    border_width: f64,
    border_color: Color,
    background: Color,
) {
    surface.set_fill_style(&background.hex());
    surface.set_stroke_style(&border_color.hex());
    surface.set_line_width(border_width);

    surface.begin_path();
    surface.move_to(x + border_radius, y);
    surface.line_to(x + width - border_radius, y);
    surface.quadratic_curve_to(x + width, y, x + width, y + border_radius);
    surface.line_to(x + width, y + height - border_radius);
    surface.quadratic_curve_to(x + width, y + height, x + width - border_radius, y + height);
    surface.line_to(x + border_radius, y + height);
    surface.quadratic_curve_to(x, y + height, x, y + height - border_radius);
    surface.line_to(x, y + border_radius);
    surface.quadratic_curve_to(x, y, x + border_radius, y);
    surface.close_path();

    surface.fill();
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Command, CommandLog};

    #[test]
    fn plain_rectangle_fills_then_strokes() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 30.0, 40.0).unwrap();
        let mut log = CommandLog::new();
        paint_rectangle(&mut log, &rect);
        let commands = log.commands();
        assert!(commands.contains(&Command::FillRect { x: 10.0, y: 20.0, width: 30.0, height: 40.0 }));
        assert!(commands.contains(&Command::StrokeRect { x: 10.0, y: 20.0, width: 30.0, height: 40.0 }));
    }

    #[test]
    fn rounded_rectangle_uses_quadratic_corners() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 30.0, 40.0).unwrap();
        rect.style_mut().border_radius = 5.0;
        let mut log = CommandLog::new();
        paint_rectangle(&mut log, &rect);
        let curves = log
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::QuadraticCurveTo { .. }))
            .count();
        assert_eq!(curves, 4);
    }

    #[test]
    fn circle_paints_full_arc() {
        let circle = Circle::new(Point::new(50.0, 60.0), 10.0).unwrap();
        let mut log = CommandLog::new();
        paint_circle(&mut log, &circle);
        assert!(log.commands().contains(&Command::Arc {
            cx: 50.0,
            cy: 60.0,
            radius: 10.0,
            start_angle: 0.0,
            end_angle: TAU,
        }));
    }

    #[test]
    fn borderless_circle_strokes_with_background_color() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 10.0).unwrap();
        circle.style_mut().background = Color::rgb(10, 20, 30);
        let mut log = CommandLog::new();
        paint_circle(&mut log, &circle);
        let last_stroke_style = log
            .commands()
            .iter()
            .rev()
            .find_map(|c| match c {
                Command::StrokeStyle(color) => Some(color.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_stroke_style, "#0a141e");
    }

    #[test]
    fn diamond_polygon_closes_back_to_top() {
        let diamond = Diamond::new(Point::new(100.0, 100.0), 20.0, 20.0);
        let mut log = CommandLog::new();
        paint_diamond(&mut log, &diamond);
        assert_eq!(log.segments_in_last_path(), 4);
        assert!(log.commands().contains(&Command::MoveTo { x: 100.0, y: 90.0 }));
        assert!(log.commands().contains(&Command::LineTo { x: 100.0, y: 90.0 }));
    }
}
