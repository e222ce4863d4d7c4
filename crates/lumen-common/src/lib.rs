//! Common utilities for the Lumen rasterizer.
//!
//! This crate provides shared infrastructure used by the graphics crate and
//! the command-line front end:
//! - **Warning System** - colored, deduplicated terminal output for
//!   conditions worth reporting once (missing glyphs, missing fonts)

pub mod warning;
