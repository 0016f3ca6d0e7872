//! Termination Settlement Engine for CLT Employment Contracts
//!
//! This crate estimates the settlement (rescission) payments owed to an employee
//! when a Brazilian CLT employment contract ends, producing itemized earnings,
//! deductions, and totals from the contract dates, last salary, and termination
//! circumstances.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
