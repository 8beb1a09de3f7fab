//! Constant values for the jcurve library
//!
//! This crate only holds published domain parameters as literals. Parsing
//! and validation happen in `jcurve-algorithms`.

#![no_std]

pub mod nist;

pub use nist::{CurveConstants, ALL_NIST_CURVES};
