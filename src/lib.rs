#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Converts TrueType font outlines into the CXF stroke-font format.
//!
//! Glyph outlines are flattened into straight-line chords by adaptive
//! subdivision within an angular tolerance, scaled so that capital A is
//! nine output units tall, and written one record per glyph.

mod calibrate;
mod cxf;
mod error;
mod flatten;
mod font;
mod path;
mod pipeline;
mod tracer;

pub use crate::{
    calibrate::{calibrate, CAP_HEIGHT, REFERENCE_CHAR},
    cxf::Header,
    error::CxfError,
    flatten::flatten_quad,
    font::{GlyphSource, TtfFont},
    path::{CommandPen, PathCommand},
    pipeline::{convert, Options, Summary},
    tracer::{Trace, TraceMode, Tracer},
};
