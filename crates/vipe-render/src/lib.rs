//! Rendering primitives for the vipe banner.
//!
//! This crate provides the three building blocks of the banner: styled
//! horizontal borders, display-width-centered text lines, and the
//! character-by-character greeting animation. Everything writes to a
//! caller-supplied [`std::io::Write`] so output can be captured in tests.

mod greeting;
mod text;

pub use greeting::{animated_greeting, MESSAGE, PASSES};
pub use text::{border, centered};
