//! Core library for the workshop-tracker command line application.
//!
//! The library exposes the normalization pipeline that powers the
//! command-line interface as well as the unit tests. The modules are
//! structured to keep responsibilities narrow and composable: the Excel
//! adapter lives under [`io`], record representations inside [`model`], the
//! grid-to-record transformation in [`normalize`], pure filtering in
//! [`filter`], sheet-role configuration in [`layout`], and terminal output
//! under [`render`].

pub mod dates;
pub mod error;
pub mod filter;
pub mod io;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod render;

pub use error::{Result, TrackerError};
