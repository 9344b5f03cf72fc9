//! Excel workbook generation for small building/rental management
//!
//! Two generators ship with this crate: [`workbook::generate_workbook`]
//! renders a JSON [`config::Config`] into five styled sheets (buildings,
//! units, tenants, rent payments, expenses), and
//! [`sample::generate_sample_workbook`] builds the fixed demo workbook the
//! legacy tool produces.

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod format;
pub mod sample;
pub mod sheets;
pub mod workbook;

pub use config::{Config, load_config};
pub use error::{Error, Result};
