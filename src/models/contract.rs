//! Settlement input model and related types.
//!
//! This module defines the SettlementInput struct together with the
//! TerminationReason and NoticePeriodMode enums that describe how an
//! employment contract ended.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the reason an employment contract was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The employer dismissed the employee without cause.
    EmployerDismissalNoCause,
    /// The employee resigned.
    EmployeeResignation,
    /// The employer dismissed the employee for cause (CLT art. 482).
    ForCauseDismissal,
}

/// Represents how the statutory notice period was handled.
///
/// Meaningful for dismissal without cause (worked or indemnified) and for
/// resignation (not serving the notice triggers a deduction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticePeriodMode {
    /// The notice period was worked through.
    Worked,
    /// The notice period was paid in lieu of work.
    Indemnified,
    /// The resigning employee did not serve the notice period.
    NotServed,
}

/// Input record for one settlement calculation.
///
/// The record is caller-supplied and immutable for the duration of a
/// calculation. Monetary values are accepted as given, including zero or
/// negative amounts; the only validated invariant is the date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Last monthly gross base salary.
    pub gross_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The last day of the contract.
    pub termination_date: NaiveDate,
    /// Why the contract ended.
    pub termination_reason: TerminationReason,
    /// How the notice period was handled.
    pub notice_period_mode: NoticePeriodMode,
    /// Current balance of the employee's FGTS account, as reported by the
    /// caller. The engine does not compute deposits.
    pub fgts_balance: Decimal,
    /// Whether the employee holds one full untaken 12-month vacation
    /// accrual period.
    pub has_overdue_vacation: bool,
}

impl SettlementInput {
    /// Returns true when the contract ended by for-cause dismissal.
    ///
    /// For-cause terminations forfeit the notice period, year-end bonus,
    /// vacation payouts, and the FGTS penalty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use settlement_engine::models::{NoticePeriodMode, SettlementInput, TerminationReason};
    ///
    /// let input = SettlementInput {
    ///     gross_salary: Decimal::new(300_000, 2),
    ///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
    ///     termination_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     termination_reason: TerminationReason::ForCauseDismissal,
    ///     notice_period_mode: NoticePeriodMode::Worked,
    ///     fgts_balance: Decimal::ZERO,
    ///     has_overdue_vacation: false,
    /// };
    /// assert!(input.is_for_cause());
    /// ```
    pub fn is_for_cause(&self) -> bool {
        self.termination_reason == TerminationReason::ForCauseDismissal
    }
}
