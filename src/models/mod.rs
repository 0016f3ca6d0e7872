//! Core data models for the Termination Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod statement;

pub use contract::{NoticePeriodMode, SettlementInput, TerminationReason};
pub use statement::{
    AuditStep, AuditTrace, AuditWarning, PayItem, PayItemKind, SettlementStatement,
    SettlementTotals,
};
