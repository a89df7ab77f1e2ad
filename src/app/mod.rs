//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the colour-command pipeline: hex parsing, the
//! three-channel driver, and the service that ties them together.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod color;
pub mod commands;
pub mod driver;
pub mod events;
pub mod ports;
pub mod service;
