//! The drawing-surface contract consumed by shape painters and connections.
//!
//! The surface is a canvas-style imperative sink: path verbs plus fill and
//! stroke state. Colors cross the boundary as `#rrggbb` strings. Two
//! implementations ship with the crate: [`CommandLog`] records every call
//! for assertions, [`SvgSurface`] serializes the stream to an SVG document.

use std::f64::consts::TAU;
use std::fmt::Write;

/// Canvas-style drawing operations.
///
/// Implementations are single-threaded and exclusively owned by their
/// playground; callers serialize all interaction into sequential calls.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    BezierCurveTo { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
}

/// A surface that records every call, for tests and debugging.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> CommandLog {
        CommandLog::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Count of line segments drawn since the last `BeginPath`.
    pub fn segments_in_last_path(&self) -> usize {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, Command::BeginPath))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.commands[start..]
            .iter()
            .filter(|c| matches!(c, Command::LineTo { .. }))
            .count()
    }
}

impl Surface for CommandLog {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(Command::QuadraticCurveTo { cx, cy, x, y });
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands.push(Command::BezierCurveTo { c1x, c1y, c2x, c2y, x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(Command::Arc { cx, cy, radius, start_angle, end_angle });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::Rect { x, y, width, height });
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::StrokeRect { x, y, width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(Command::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(Command::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::LineWidth(width));
    }
}

/// A surface that serializes the command stream to an SVG document.
///
/// Path verbs accumulate into the current path data; `fill`/`stroke` emit a
/// `<path>` element with the current style state. The path survives a fill
/// or stroke and is only reset by `begin_path`, matching canvas semantics.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    path: String,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface {
            width,
            height,
            path: String::new(),
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
            elements: Vec::new(),
        }
    }

    /// Serialize the accumulated elements into a complete SVG document.
    pub fn document(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_verb(&mut self, verb: &str) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(verb);
    }
}

impl Surface for SvgSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if x <= 0.0 && y <= 0.0 && width >= self.width && height >= self.height {
            self.elements.clear();
        } else {
            self.elements.push(format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"#ffffff\"/>"
            ));
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        if !self.path.is_empty() {
            self.push_verb("Z");
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_verb(&format!("M {x} {y}"));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_verb(&format!("L {x} {y}"));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.push_verb(&format!("Q {cx} {cy} {x} {y}"));
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.push_verb(&format!("C {c1x} {c1y} {c2x} {c2y} {x} {y}"));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let sx = cx + radius * start_angle.cos();
        let sy = cy + radius * start_angle.sin();
        let verb = if self.path.is_empty() { 'M' } else { 'L' };
        let mut d = format!("{verb} {sx} {sy}");

        let sweep = end_angle - start_angle;
        if sweep.abs() >= TAU - 1e-9 {
            // Full circle: one A command would collapse to its start point,
            // so emit two half arcs.
            let mx = cx - radius * start_angle.cos();
            let my = cy - radius * start_angle.sin();
            let _ = write!(
                d,
                " A {radius} {radius} 0 1 1 {mx} {my} A {radius} {radius} 0 1 1 {sx} {sy}"
            );
        } else {
            let ex = cx + radius * end_angle.cos();
            let ey = cy + radius * end_angle.sin();
            let large_arc = i32::from(sweep.abs() > TAU / 2.0);
            let sweep_flag = i32::from(sweep > 0.0);
            let _ = write!(d, " A {radius} {radius} 0 {large_arc} {sweep_flag} {ex} {ey}");
        }
        self.push_verb(&d);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let right = x + width;
        let bottom = y + height;
        self.push_verb(&format!("M {x} {y} L {right} {y} L {right} {bottom} L {x} {bottom} Z"));
    }

    fn fill(&mut self) {
        if !self.path.is_empty() {
            self.elements.push(format!(
                "<path d=\"{}\" fill=\"{}\" stroke=\"none\"/>",
                self.path, self.fill_style
            ));
        }
    }

    fn stroke(&mut self) {
        if !self.path.is_empty() {
            self.elements.push(format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                self.path, self.stroke_style, self.line_width
            ));
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            self.fill_style
        ));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"none\" \
             stroke=\"{}\" stroke-width=\"{}\"/>",
            self.stroke_style, self.line_width
        ));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}
