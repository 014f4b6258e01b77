//! A small 2D diagramming library: shapes, orthogonal connectors, and a
//! self-repainting playground, all drawn through a pluggable canvas-style
//! [`Surface`].
//!
//! The core flow:
//!
//! ```
//! use scrawl::{Playground, Rectangle, Circle, Point, SvgSurface};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut playground = Playground::new(SvgSurface::new(400.0, 300.0), 400.0, 300.0);
//! let a = playground.add_shape(Rectangle::new(Point::new(40.0, 40.0), 80.0, 50.0)?);
//! let b = playground.add_shape(Circle::new(Point::new(280.0, 200.0), 30.0)?);
//! playground.connect(a, b)?;
//! let svg = playground.surface().document();
//! # assert!(svg.contains("<svg"));
//! # Ok(())
//! # }
//! ```
//!
//! Shapes are a closed set ([`ShapeKind`]) dispatched through the [`Shape`]
//! trait; painting is stateless and re-derives everything from shape fields
//! on every render.

mod connection;
mod errors;
mod log;
mod playground;
mod render;
mod shapes;
mod surface;
mod types;

pub use connection::Connection;
pub use errors::{PlaygroundError, ShapeError};
pub use playground::{BackgroundStyle, Playground, ShapeId};
pub use render::paint_shape;
pub use shapes::{Circle, Diamond, Rectangle, Shape, ShapeKind, ShapeStyle, Square};
pub use surface::{Command, CommandLog, Surface, SvgSurface};
pub use types::{Color, Point};
