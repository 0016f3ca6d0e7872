//! Settlement calculation orchestration.
//!
//! This module wires the individual rule evaluations into the settlement
//! pipeline: validate and assess service time, pay the balance of salary,
//! resolve the notice period, prorate the year-end bonus, pay vacation, and
//! apply the FGTS penalty, then aggregate totals and the audit trace.

use std::time::Instant;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RuleBook;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayItem, SettlementInput, SettlementStatement,
    SettlementTotals,
};

use super::{
    assess_service_time, calculate_fgts_penalty, calculate_overdue_vacation,
    calculate_proportional_vacation, calculate_salary_balance, calculate_year_end_bonus,
    resolve_notice_period,
};

/// Calculates the settlement statement for one termination event.
///
/// The calculation is pure and deterministic apart from the statement
/// envelope (id, timestamp, duration): the same input and rules always
/// produce the same items and totals. It either fails validation
/// (`DateOrderInvalid`) or returns a complete statement; there is no
/// partial result.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `rules` - The statutory rule book
///
/// # Errors
///
/// Returns `EngineError::DateOrderInvalid` when the termination date
/// precedes the hire date. All other inputs, including zero or negative
/// monetary values, are accepted as given.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use settlement_engine::calculation::calculate_settlement;
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
///     fgts_balance: Decimal::new(500_000, 2),
///     has_overdue_vacation: false,
/// };
///
/// let statement = calculate_settlement(&input, rules.rule_book()).unwrap();
/// assert_eq!(statement.completed_years, 2);
/// assert_eq!(
///     statement.totals.net_amount,
///     statement.totals.total_earnings - statement.totals.total_deductions
/// );
/// ```
pub fn calculate_settlement(
    input: &SettlementInput,
    rules: &RuleBook,
) -> EngineResult<SettlementStatement> {
    let started = Instant::now();

    let mut earnings: Vec<PayItem> = Vec::new();
    let mut deductions: Vec<PayItem> = Vec::new();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Service time and base rates; validates the date order.
    let service = assess_service_time(input, rules, step_number)?;
    steps.push(service.audit_step);
    step_number += 1;

    // Balance of salary.
    let balance = calculate_salary_balance(input, service.daily_rate, rules, step_number);
    earnings.push(balance.item);
    steps.push(balance.audit_step);
    step_number += 1;

    // Notice period: earning, deduction, and the projected date shared by
    // the bonus and vacation prorations.
    let notice = resolve_notice_period(
        input,
        service.completed_years,
        service.daily_rate,
        rules,
        step_number,
    );
    if let Some(item) = notice.earning {
        earnings.push(item);
    }
    if let Some(item) = notice.deduction {
        deductions.push(item);
    }
    steps.push(notice.audit_step);
    step_number += 1;

    if notice.projected_date.year() > input.termination_date.year() {
        warnings.push(AuditWarning {
            code: "BONUS_YEAR_ROLLOVER".to_string(),
            message: format!(
                "Indemnified notice projects the termination into {}; the year-end bonus \
                 proration counts months of the projected year only and is not reset at \
                 the year boundary",
                notice.projected_date.year()
            ),
            severity: "medium".to_string(),
        });
    }

    // Year-end bonus proration.
    let bonus = calculate_year_end_bonus(input, notice.projected_date, rules, step_number);
    if let Some(item) = bonus.item {
        earnings.push(item);
    }
    steps.push(bonus.audit_step);
    step_number += 1;

    // Vacation: overdue period first, then the proportional accrual.
    let overdue = calculate_overdue_vacation(input, rules, step_number);
    earnings.extend(overdue.items);
    steps.push(overdue.audit_step);
    step_number += 1;

    let proportional =
        calculate_proportional_vacation(input, notice.projected_date, rules, step_number);
    earnings.extend(proportional.items);
    steps.push(proportional.audit_step);
    step_number += 1;

    // FGTS penalty.
    let penalty = calculate_fgts_penalty(input, rules, step_number);
    if let Some(item) = penalty.item {
        earnings.push(item);
    }
    steps.push(penalty.audit_step);

    // Aggregation.
    let total_earnings: Decimal = earnings.iter().map(|item| item.amount).sum();
    let total_deductions: Decimal = deductions.iter().map(|item| item.amount).sum();
    let net_amount = total_earnings - total_deductions;

    let duration_us = started.elapsed().as_micros() as u64;

    Ok(SettlementStatement {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        completed_years: service.completed_years,
        projected_termination_date: notice.projected_date,
        earnings,
        deductions,
        totals: SettlementTotals {
            total_earnings,
            total_deductions,
            net_amount,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
