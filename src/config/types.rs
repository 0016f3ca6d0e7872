//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the statute the rules are drawn from.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// The short statute code (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or consolidation date of the rule set.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// Salary conversion conventions.
///
/// The engine uses the statutory 30-day month and 365-day year conventions;
/// proration is by day counts, not calendar months, and is not leap-year
/// aware.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryConventions {
    /// Reference to the statute backing these conventions.
    pub statute: String,
    /// Days per month used to derive the daily rate.
    pub month_divisor: u32,
    /// Days per year used to count completed service years.
    pub year_divisor: i64,
}

/// Notice period rules (Lei 12.506/2011).
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeRules {
    /// Reference to the statute backing the notice period.
    pub statute: String,
    /// Base notice days owed regardless of service time.
    pub base_days: i64,
    /// Additional notice days per completed year of service.
    pub days_per_service_year: i64,
    /// Maximum notice days.
    pub cap_days: i64,
}

/// Year-end (13th-month) bonus proration rules.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRules {
    /// Reference to the statute backing the bonus.
    pub statute: String,
    /// A month counts toward the bonus when at least this day of the month
    /// was reached.
    pub day_threshold: u32,
}

/// Vacation accrual proration rules.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationRules {
    /// Reference to the statute backing vacation entitlements.
    pub statute: String,
    /// A partial accrual month counts as whole when the remainder reaches
    /// this many days.
    pub rounding_threshold_days: i64,
    /// Maximum accrual months within one period.
    pub max_months: i64,
}

/// Severance-fund (FGTS) penalty rules.
#[derive(Debug, Clone, Deserialize)]
pub struct FgtsRules {
    /// Reference to the statute backing the penalty.
    pub statute: String,
    /// Penalty rate applied to the fund balance on dismissal without cause.
    pub penalty_rate: Decimal,
}

/// Rule sections as laid out in rules.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSections {
    /// Salary conversion conventions.
    pub salary: SalaryConventions,
    /// Notice period rules.
    pub notice: NoticeRules,
    /// Year-end bonus rules.
    pub bonus: BonusRules,
    /// Vacation rules.
    pub vacation: VacationRules,
    /// FGTS penalty rules.
    pub fgts: FgtsRules,
}

/// The complete rule set loaded from YAML files.
///
/// Aggregates the statute metadata with the statutory parameters every
/// calculation step reads from.
#[derive(Debug, Clone)]
pub struct RuleBook {
    /// Statute metadata.
    metadata: StatuteMetadata,
    /// Statutory parameters by concern.
    rules: RuleSections,
}

impl RuleBook {
    /// Creates a new RuleBook from its component parts.
    pub fn new(metadata: StatuteMetadata, rules: RuleSections) -> Self {
        Self { metadata, rules }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the salary conversion conventions.
    pub fn salary(&self) -> &SalaryConventions {
        &self.rules.salary
    }

    /// Returns the notice period rules.
    pub fn notice(&self) -> &NoticeRules {
        &self.rules.notice
    }

    /// Returns the year-end bonus rules.
    pub fn bonus(&self) -> &BonusRules {
        &self.rules.bonus
    }

    /// Returns the vacation rules.
    pub fn vacation(&self) -> &VacationRules {
        &self.rules.vacation
    }

    /// Returns the FGTS penalty rules.
    pub fn fgts(&self) -> &FgtsRules {
        &self.rules.fgts
    }
}
