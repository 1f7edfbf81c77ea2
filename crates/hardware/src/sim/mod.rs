//! Program loading.
//!
//! Provides the loader that turns the line-oriented binary text format into
//! a memory image, and the encoders that render an image back into that format.

pub mod loader;
