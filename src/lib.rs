//! Payroll salary strategies and report generators.
//!
//! This crate computes employee salaries under interchangeable employment
//! strategies, generates employee reports in interchangeable formats, and
//! wires them together in a small scripted demonstration.

#![warn(missing_docs)]

pub mod calculation;
pub mod capabilities;
pub mod config;
pub mod demo;
pub mod error;
pub mod manager;
pub mod models;
pub mod reports;
