//! Settlement statement models for the Termination Settlement Engine.
//!
//! This module contains the [`SettlementStatement`] type and its associated
//! structures that capture all outputs from a settlement calculation,
//! including pay items, totals, and audit traces.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the category of a settlement pay item.
///
/// Each category corresponds to one statutory entitlement (or deduction)
/// evaluated by the calculation pipeline.
///
/// # Example
///
/// ```
/// use settlement_engine::models::PayItemKind;
///
/// let kind = PayItemKind::SalaryBalance;
/// assert_eq!(format!("{:?}", kind), "SalaryBalance");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayItemKind {
    /// Salary for days worked in the final month.
    SalaryBalance,
    /// Notice period paid in lieu of work.
    IndemnifiedNotice,
    /// Proportional year-end (13th-month) bonus.
    YearEndBonus,
    /// One full untaken vacation accrual period.
    OverdueVacation,
    /// Constitutional one-third bonus on overdue vacation.
    OverdueVacationBonus,
    /// Vacation accrued in the current accrual period.
    ProportionalVacation,
    /// Constitutional one-third bonus on proportional vacation.
    ProportionalVacationBonus,
    /// Penalty on the FGTS balance for dismissal without cause.
    FgtsPenalty,
    /// Deduction for a resignation notice period that was not served.
    NoticeDeduction,
}

/// Represents a single line item in a settlement statement.
///
/// Each pay item captures one entitlement or deduction, with a display
/// label that embeds the computed parameters (day or month counts) the
/// way the statement is presented to the employee.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use settlement_engine::models::{PayItem, PayItemKind};
///
/// let item = PayItem {
///     kind: PayItemKind::SalaryBalance,
///     label: "Balance of Salary".to_string(),
///     amount: Decimal::new(100_000, 2),
///     statute_ref: "CLT art. 457".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayItem {
    /// The category of this item.
    pub kind: PayItemKind,
    /// Display label, including computed parameters such as day counts.
    pub label: String,
    /// The monetary amount of this item.
    pub amount: Decimal,
    /// Reference to the statute that justifies this item.
    pub statute_ref: String,
}

/// Aggregated totals for a settlement calculation.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use settlement_engine::models::SettlementTotals;
///
/// let totals = SettlementTotals {
///     total_earnings: Decimal::new(735_000, 2),
///     total_deductions: Decimal::ZERO,
///     net_amount: Decimal::new(735_000, 2),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTotals {
    /// Sum of all earning items.
    pub total_earnings: Decimal,
    /// Sum of all deduction items.
    pub total_deductions: Decimal,
    /// Net amount: earnings minus deductions.
    pub net_amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute backing this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings surface documented approximations that apply to a particular
/// input without preventing the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
///
/// # Example
///
/// ```
/// use settlement_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a settlement calculation.
///
/// Earnings are ordered by computation order: balance of salary, indemnified
/// notice, year-end bonus, overdue vacation, proportional vacation, FGTS
/// penalty. Nothing persists beyond the call; a fresh statement is returned
/// each time.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use settlement_engine::models::{AuditTrace, SettlementStatement, SettlementTotals};
/// use uuid::Uuid;
///
/// let statement = SettlementStatement {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     completed_years: 2,
///     projected_termination_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
///     earnings: vec![],
///     deductions: vec![],
///     totals: SettlementTotals {
///         total_earnings: Decimal::ZERO,
///         total_deductions: Decimal::ZERO,
///         net_amount: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStatement {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whole years of service (floor).
    pub completed_years: i64,
    /// Termination date plus indemnified notice, where applicable.
    pub projected_termination_date: NaiveDate,
    /// Earning items, in computation order.
    pub earnings: Vec<PayItem>,
    /// Deduction items; empty unless resignation without served notice.
    pub deductions: Vec<PayItem>,
    /// Aggregated totals for the calculation.
    pub totals: SettlementTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
