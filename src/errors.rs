//! Error types for shape construction and playground operations.
//!
//! Constructors validate and fail fast: a caller never receives a partially
//! constructed shape. Geometry predicates (`contains`,
//! `connectable_points`) are total and have no error channel.

use miette::Diagnostic;
use thiserror::Error;

/// Rejections raised by shape constructors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("width and height must be greater than 0 (got {width} x {height})")]
    #[diagnostic(code(scrawl::shape::non_positive_dimension))]
    NonPositiveDimension { width: f64, height: f64 },

    #[error("side length must be greater than 0 (got {side})")]
    #[diagnostic(code(scrawl::shape::non_positive_side))]
    NonPositiveSide { side: f64 },

    #[error("radius must be non-negative (got {radius})")]
    #[diagnostic(code(scrawl::shape::negative_radius))]
    NegativeRadius { radius: f64 },
}

/// Errors from playground operations that take shape ids.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlaygroundError {
    #[error("unknown shape id {index}")]
    #[diagnostic(
        code(scrawl::playground::unknown_shape),
        help("shape ids come from `Playground::add_shape` on the same playground")
    )]
    UnknownShape { index: usize },
}
