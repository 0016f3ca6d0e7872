//! Configuration loading and management for the Termination Settlement Engine.
//!
//! This module provides functionality to load statutory rule parameters from
//! YAML files, including statute metadata, salary conventions, notice period
//! rules, bonus and vacation proration rules, and the FGTS penalty rate.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::RuleLoader;
//!
//! let rules = RuleLoader::load("./config/clt").unwrap();
//! println!("Loaded statute: {}", rules.statute().name);
//! ```

mod loader;
mod types;

pub use loader::RuleLoader;
pub use types::{
    BonusRules, FgtsRules, NoticeRules, RuleBook, RuleSections, SalaryConventions,
    StatuteMetadata, VacationRules,
};
