//! Run configuration for the demonstration binary.
//!
//! The configuration only shapes the console session (pausing before exit,
//! printing a JSON summary). It never changes how salaries or reports are
//! produced.
//!
//! # Example
//!
//! ```no_run
//! use solid_payroll::config::DemoConfig;
//!
//! let config = DemoConfig::load("./demo.yaml").unwrap();
//! println!("summary: {}", config.print_summary);
//! ```

mod loader;
mod types;

pub use types::DemoConfig;
