//! Interactive drawing state.
//!
//! [`Style`] is the pending style for the next shape; [`Sketchpad`] turns
//! pointer input into shapes and re-renders after every change.

mod pad;
mod style;

pub use pad::Sketchpad;
pub use style::{
    Channel, Style, StyleCommand, MAX_SEGMENTS, MAX_SIZE, MIN_SIZE,
};
