//! Balance of salary calculation functionality.
//!
//! This module pays the days worked in the final month of the contract at
//! the daily rate. The day count is the day-of-month of the termination
//! date, per the 30-day month convention.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::models::{AuditStep, PayItem, PayItemKind, SettlementInput};

/// The result of calculating the balance of salary, including the audit step.
#[derive(Debug, Clone)]
pub struct SalaryBalanceResult {
    /// The balance-of-salary earning item.
    pub item: PayItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary owed for days worked in the final month.
///
/// Every termination reason earns the balance of salary; it is the only
/// item a for-cause dismissal retains.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `daily_rate` - The daily salary rate from the service time assessment
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use settlement_engine::calculation::calculate_salary_balance;
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
/// let result = calculate_salary_balance(&input, Decimal::new(10_000, 2), rules.rule_book(), 2);
/// assert_eq!(result.item.amount, Decimal::from(1000));
/// ```
pub fn calculate_salary_balance(
    input: &SettlementInput,
    daily_rate: Decimal,
    rules: &RuleBook,
    step_number: u32,
) -> SalaryBalanceResult {
    let days_worked = input.termination_date.day();
    let amount = daily_rate * Decimal::from(days_worked);

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_balance".to_string(),
        rule_name: "Balance of Salary".to_string(),
        statute_ref: rules.salary().statute.clone(),
        input: serde_json::json!({
            "termination_date": input.termination_date.to_string(),
            "daily_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "days_worked_in_final_month": days_worked,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R$ {} × {} days worked in the final month = R$ {}",
            daily_rate.normalize(),
            days_worked,
            amount.normalize()
        ),
    };

    let item = PayItem {
        kind: PayItemKind::SalaryBalance,
        label: "Balance of Salary".to_string(),
        amount,
        statute_ref: rules.salary().statute.clone(),
    };

    SalaryBalanceResult { item, audit_step }
}
