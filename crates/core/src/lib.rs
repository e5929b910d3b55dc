//! # Job-fair interview agenda core
//!
//! Pure scheduling logic shared by the store and the HTTP layer:
//!
//! - [`slots`]: splits a selected time range into interview slots
//! - [`calendar`]: builds the Monday-anchored week view
//! - [`grid`]: lays a week view out on a minute-resolution grid
//! - [`selection`]: the drag-gesture state machine feeding the generator
//!
//! Nothing in this crate performs I/O.

pub mod calendar;
pub mod errors;
pub mod grid;
pub mod models;
pub mod selection;
pub mod slots;
