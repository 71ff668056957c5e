//! Scene types.
//!
//! Responsibilities:
//! - the closed `Shape` sum type and its per-variant geometry
//! - the append-only `DisplayList` (insertion order = paint order)
//! - the bee composite, expressed purely as data over the above

mod error;
mod list;
mod shape;

pub mod bee;
pub mod shapes;

pub use bee::push_bee;
pub use error::ShapeError;
pub use list::DisplayList;
pub use shape::{Shape, ShapeKind};
pub use shapes::circle::CircleShape;
pub use shapes::point::PointShape;
pub use shapes::triangle::TriangleShape;
