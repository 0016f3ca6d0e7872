//! Service time assessment functionality.
//!
//! This module validates the contract date order and derives the two base
//! rates every later step shares: completed years of service and the daily
//! salary rate.

use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, SettlementInput};

/// The result of assessing service time, including the audit step.
#[derive(Debug, Clone)]
pub struct ServiceTimeResult {
    /// Whole years of service (floor of total days / 365).
    pub completed_years: i64,
    /// Daily salary rate (gross salary / 30).
    pub daily_rate: Decimal,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Assesses the employee's service time and daily salary rate.
///
/// Completed years use the statutory calendar-day approximation: total days
/// of service divided by 365, floored. The daily rate uses the fixed 30-day
/// month convention. Neither is leap-year aware.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `ServiceTimeResult`, or `DateOrderInvalid` when the
/// termination date precedes the hire date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use settlement_engine::calculation::assess_service_time;
/// use settlement_engine::config::RuleLoader;
/// use settlement_engine::models::{NoticePeriodMode, SettlementInput, TerminationReason};
///
/// let rules = RuleLoader::load("./config/clt").unwrap();
/// let input = SettlementInput {
///     gross_salary: Decimal::new(300_000, 2),
///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     termination_reason: TerminationReason::EmployerDismissalNoCause,
///     notice_period_mode: NoticePeriodMode::Indemnified,
///     fgts_balance: Decimal::ZERO,
///     has_overdue_vacation: false,
/// };
///
/// let result = assess_service_time(&input, rules.rule_book(), 1).unwrap();
/// assert_eq!(result.completed_years, 2);
/// assert_eq!(result.daily_rate, Decimal::new(10_000, 2));
/// ```
pub fn assess_service_time(
    input: &SettlementInput,
    rules: &RuleBook,
    step_number: u32,
) -> EngineResult<ServiceTimeResult> {
    if input.termination_date < input.hire_date {
        return Err(EngineError::DateOrderInvalid {
            hire_date: input.hire_date,
            termination_date: input.termination_date,
        });
    }

    let service_days = (input.termination_date - input.hire_date).num_days();
    let completed_years = service_days / rules.salary().year_divisor;
    let daily_rate = input.gross_salary / Decimal::from(rules.salary().month_divisor);

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_time".to_string(),
        rule_name: "Service Time Assessment".to_string(),
        statute_ref: rules.salary().statute.clone(),
        input: serde_json::json!({
            "hire_date": input.hire_date.to_string(),
            "termination_date": input.termination_date.to_string(),
            "gross_salary": input.gross_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "service_days": service_days,
            "completed_years": completed_years,
            "daily_rate": daily_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{} days of service / {} = {} completed years; R$ {} / {} = R$ {} per day",
            service_days,
            rules.salary().year_divisor,
            completed_years,
            input.gross_salary.normalize(),
            rules.salary().month_divisor,
            daily_rate.normalize()
        ),
    };

    Ok(ServiceTimeResult {
        completed_years,
        daily_rate,
        audit_step,
    })
}
