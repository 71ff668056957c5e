//! Paint model.
//!
//! Shapes carry a single flat color. Colors are straight (non-premultiplied)
//! alpha; the GPU canvas blends with `SrcAlpha, OneMinusSrcAlpha`.

pub mod color;

pub use color::Color;
