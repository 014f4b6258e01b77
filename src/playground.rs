//! The playground: a surface-backed scene that owns shapes and
//! connections and repaints itself after every mutation.

use crate::connection::Connection;
use crate::errors::PlaygroundError;
use crate::log::debug;
use crate::render::paint_shape;
use crate::shapes::{Shape, ShapeKind};
use crate::surface::Surface;
use crate::types::{Color, Point};

/// Border applied to the selected shape.
const SELECTION_WIDTH: f64 = 2.0;
const SELECTION_COLOR: Color = Color::rgb(122, 36, 188);

/// Stable handle to a shape inside a playground.
///
/// Ids are append-only indices: shapes are never removed, so a `ShapeId`
/// stays valid for the lifetime of the playground that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Dot-grid backdrop painted beneath the shapes.
#[derive(Debug, Clone)]
pub struct BackgroundStyle {
    pub dot_radius: f64,
    pub spacing: f64,
    pub dot_color: String,
    pub background: String,
}

impl Default for BackgroundStyle {
    fn default() -> BackgroundStyle {
        BackgroundStyle {
            dot_radius: 1.0,
            spacing: 20.0,
            dot_color: "#999".to_string(),
            background: "#fff".to_string(),
        }
    }
}

/// A flat scene of shapes and connections drawn onto a [`Surface`].
///
/// Every mutating operation repaints the whole scene: shapes in depth
/// order, then connections on top in insertion order.
pub struct Playground<S: Surface> {
    width: f64,
    height: f64,
    shapes: Vec<ShapeKind>,
    connections: Vec<Connection>,
    surface: S,
    background: BackgroundStyle,
}

impl<S: Surface> Playground<S> {
    pub fn new(surface: S, width: f64, height: f64) -> Playground<S> {
        Playground {
            width,
            height,
            shapes: Vec::new(),
            connections: Vec::new(),
            surface,
            background: BackgroundStyle::default(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &BackgroundStyle {
        &self.background
    }

    pub fn set_background(&mut self, background: BackgroundStyle) {
        self.background = background;
        self.render();
    }

    /// Add a shape and repaint. The returned id stays valid forever.
    pub fn add_shape(&mut self, shape: impl Into<ShapeKind>) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(shape.into());
        debug!("added shape #{}", id.0);
        self.render();
        id
    }

    /// Connect two shapes and repaint.
    ///
    /// Parallel connections between the same pair are allowed; each is
    /// routed and drawn independently.
    pub fn connect(&mut self, source: ShapeId, target: ShapeId) -> Result<(), PlaygroundError> {
        self.check(source)?;
        self.check(target)?;
        self.connections.push(Connection::new(source, target));
        self.render();
        Ok(())
    }

    /// Hit-test `(x, y)` against every shape and highlight the hits.
    ///
    /// All selection borders are cleared first, then every shape whose
    /// `contains` test passes gets the highlight border. The returned id is
    /// the last hit in insertion order, so overlapping shapes resolve to
    /// the most recently added one.
    pub fn select(&mut self, x: f64, y: f64) -> Option<ShapeId> {
        for shape in &mut self.shapes {
            let style = shape.style_mut();
            style.border_width = 0.0;
            style.border_color = Color::TRANSPARENT;
        }

        let point = Point::new(x, y);
        let mut selected = None;
        for (index, shape) in self.shapes.iter_mut().enumerate() {
            if shape.contains(point) {
                let style = shape.style_mut();
                style.border_width = SELECTION_WIDTH;
                style.border_color = SELECTION_COLOR;
                selected = Some(ShapeId(index));
            }
        }

        self.render();
        selected
    }

    /// Move a shape so the point grabbed at `offset` follows `mouse`.
    ///
    /// Placement goes through [`Shape::place`], so the shape's depth is
    /// reset to the plane of `mouse` (zero for plain points).
    pub fn shift_shape(
        &mut self,
        id: ShapeId,
        mouse: Point,
        offset: Point,
    ) -> Result<(), PlaygroundError> {
        self.check(id)?;
        self.shapes[id.0].place(Point::new(mouse.x - offset.x, mouse.y - offset.y));
        self.render();
        Ok(())
    }

    pub fn shape(&self, id: ShapeId) -> Result<&ShapeKind, PlaygroundError> {
        self.check(id)?;
        Ok(&self.shapes[id.0])
    }

    /// Mutable access to a shape. The caller is responsible for calling
    /// [`Playground::render`] after editing.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut ShapeKind, PlaygroundError> {
        self.check(id)?;
        Ok(&mut self.shapes[id.0])
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Repaint the whole scene: backdrop, shapes by ascending depth, then
    /// connections in insertion order.
    pub fn render(&mut self) {
        self.surface.clear_rect(0.0, 0.0, self.width, self.height);
        self.render_background();

        // Stable sort on depth: equal depths keep insertion order.
        let mut order: Vec<usize> = (0..self.shapes.len()).collect();
        order.sort_by(|a, b| self.shapes[*a].depth().total_cmp(&self.shapes[*b].depth()));
        for index in order {
            paint_shape(&mut self.surface, &self.shapes[index]);
        }

        for connection in &self.connections {
            let source = &self.shapes[connection.source().0];
            let target = &self.shapes[connection.target().0];
            connection.render(&mut self.surface, source, target);
        }
    }

    fn render_background(&mut self) {
        let bg = &self.background;
        self.surface.set_fill_style(&bg.background);
        self.surface.fill_rect(0.0, 0.0, self.width, self.height);

        // Non-positive spacing would make the grid unbounded.
        if bg.spacing <= 0.0 {
            return;
        }

        self.surface.set_fill_style(&bg.dot_color);
        let columns = (self.width / bg.spacing).ceil() as usize;
        let rows = (self.height / bg.spacing).ceil() as usize;
        for row in 0..rows {
            for column in 0..columns {
                let cx = column as f64 * bg.spacing + bg.spacing / 2.0;
                let cy = row as f64 * bg.spacing + bg.spacing / 2.0;
                self.surface.begin_path();
                self.surface
                    .arc(cx, cy, bg.dot_radius, 0.0, std::f64::consts::TAU);
                self.surface.fill();
                self.surface.close_path();
            }
        }
    }

    fn check(&self, id: ShapeId) -> Result<(), PlaygroundError> {
        if id.0 >= self.shapes.len() {
            return Err(PlaygroundError::UnknownShape { index: id.0 });
        }
        Ok(())
    }
}
