//! Vacation payout functionality.
//!
//! This module pays overdue vacation (one full untaken accrual period) and
//! prorates vacation accrued since the most recent service anniversary, each
//! with the constitutional one-third bonus (CF art. 7º, XVII). Both are
//! forfeited by for-cause dismissal.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::models::{AuditStep, PayItem, PayItemKind, SettlementInput};

/// Divisor for the constitutional one-third vacation bonus.
const ONE_THIRD_DIVISOR: u32 = 3;

/// Proration denominator: accrual months per vacation period.
const MONTHS_PER_PERIOD: u32 = 12;

/// The result of the overdue vacation check, including the audit step.
#[derive(Debug, Clone)]
pub struct OverdueVacationResult {
    /// Overdue vacation and its one-third bonus, when owed (two items), or
    /// empty.
    pub items: Vec<PayItem>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// The result of the proportional vacation proration, including the audit step.
#[derive(Debug, Clone)]
pub struct ProportionalVacationResult {
    /// Proportional vacation and its one-third bonus (two items), or empty
    /// when forfeited.
    pub items: Vec<PayItem>,
    /// Accrual months counted since the last service anniversary.
    pub accrual_months: i64,
    /// The audit step recording this proration.
    pub audit_step: AuditStep,
}

/// Pays one full untaken vacation accrual period, when the caller reports
/// one.
///
/// The engine tracks a single overdue period; older untaken periods are out
/// of scope. The payout is one gross salary plus one third.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_overdue_vacation(
    input: &SettlementInput,
    rules: &RuleBook,
    step_number: u32,
) -> OverdueVacationResult {
    let vacation = rules.vacation();
    let owed = input.has_overdue_vacation && !input.is_for_cause();

    if !owed {
        let reasoning = if input.is_for_cause() {
            "For-cause dismissal forfeits vacation payouts".to_string()
        } else {
            "No full untaken accrual period reported".to_string()
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "overdue_vacation".to_string(),
            rule_name: "Overdue Vacation".to_string(),
            statute_ref: vacation.statute.clone(),
            input: serde_json::json!({
                "has_overdue_vacation": input.has_overdue_vacation,
                "termination_reason": input.termination_reason
            }),
            output: serde_json::json!({
                "owed": false
            }),
            reasoning,
        };

        return OverdueVacationResult {
            items: vec![],
            audit_step,
        };
    }

    let one_third = input.gross_salary / Decimal::from(ONE_THIRD_DIVISOR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "overdue_vacation".to_string(),
        rule_name: "Overdue Vacation".to_string(),
        statute_ref: vacation.statute.clone(),
        input: serde_json::json!({
            "has_overdue_vacation": true,
            "gross_salary": input.gross_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "owed": true,
            "vacation": input.gross_salary.normalize().to_string(),
            "one_third_bonus": one_third.normalize().to_string()
        }),
        reasoning: format!(
            "One full untaken period pays R$ {} plus the one-third bonus of R$ {}",
            input.gross_salary.normalize(),
            one_third.normalize()
        ),
    };

    let items = vec![
        PayItem {
            kind: PayItemKind::OverdueVacation,
            label: "Overdue Vacation".to_string(),
            amount: input.gross_salary,
            statute_ref: vacation.statute.clone(),
        },
        PayItem {
            kind: PayItemKind::OverdueVacationBonus,
            label: "One-Third Bonus on Overdue Vacation".to_string(),
            amount: one_third,
            statute_ref: "CF art. 7º, XVII".to_string(),
        },
    ];

    OverdueVacationResult { items, audit_step }
}

/// Prorates vacation accrued since the most recent service anniversary.
///
/// The current accrual period is assumed to have started at the last
/// anniversary of the hire date on or before the projected termination date.
/// Accrued days convert to months by the 30-day convention, rounding a
/// partial month up once it reaches 14 days, clamped to 12 months.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `projected_date` - Termination date projected past indemnified notice
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_proportional_vacation(
    input: &SettlementInput,
    projected_date: NaiveDate,
    rules: &RuleBook,
    step_number: u32,
) -> ProportionalVacationResult {
    let vacation = rules.vacation();

    if input.is_for_cause() {
        let audit_step = AuditStep {
            step_number,
            rule_id: "proportional_vacation".to_string(),
            rule_name: "Proportional Vacation".to_string(),
            statute_ref: vacation.statute.clone(),
            input: serde_json::json!({
                "termination_reason": input.termination_reason
            }),
            output: serde_json::json!({
                "forfeited": true,
                "accrual_months": 0
            }),
            reasoning: "For-cause dismissal forfeits vacation payouts".to_string(),
        };

        return ProportionalVacationResult {
            items: vec![],
            accrual_months: 0,
            audit_step,
        };
    }

    let anniversary = service_anniversary(input.hire_date, projected_date);
    let accrual_days = (projected_date - anniversary).num_days();
    let month_divisor = i64::from(rules.salary().month_divisor);

    let mut accrual_months = accrual_days / month_divisor;
    if accrual_days % month_divisor >= vacation.rounding_threshold_days {
        accrual_months += 1;
    }
    accrual_months = accrual_months.min(vacation.max_months);

    let prorated =
        input.gross_salary / Decimal::from(MONTHS_PER_PERIOD) * Decimal::from(accrual_months);
    let one_third = prorated / Decimal::from(ONE_THIRD_DIVISOR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "proportional_vacation".to_string(),
        rule_name: "Proportional Vacation".to_string(),
        statute_ref: vacation.statute.clone(),
        input: serde_json::json!({
            "hire_date": input.hire_date.to_string(),
            "projected_date": projected_date.to_string(),
            "gross_salary": input.gross_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "forfeited": false,
            "anniversary": anniversary.to_string(),
            "accrual_days": accrual_days,
            "accrual_months": accrual_months,
            "vacation": prorated.normalize().to_string(),
            "one_third_bonus": one_third.normalize().to_string()
        }),
        reasoning: format!(
            "{} days since the {} anniversary count {} months; R$ {} / 12 × {} = R$ {}",
            accrual_days,
            anniversary,
            accrual_months,
            input.gross_salary.normalize(),
            accrual_months,
            prorated.normalize()
        ),
    };

    let items = vec![
        PayItem {
            kind: PayItemKind::ProportionalVacation,
            label: format!("Proportional Vacation ({accrual_months}/12)"),
            amount: prorated,
            statute_ref: vacation.statute.clone(),
        },
        PayItem {
            kind: PayItemKind::ProportionalVacationBonus,
            label: "One-Third Bonus on Proportional Vacation".to_string(),
            amount: one_third,
            statute_ref: "CF art. 7º, XVII".to_string(),
        },
    ];

    ProportionalVacationResult {
        items,
        accrual_months,
        audit_step,
    }
}

/// Finds the most recent service anniversary on or before the reference date.
///
/// Feb 29 hire anniversaries are observed on Feb 28 in common years.
fn service_anniversary(hire_date: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let in_year = |year: i32| {
        hire_date.with_year(year).or_else(|| {
            NaiveDate::from_ymd_opt(year, hire_date.month(), hire_date.day().saturating_sub(1))
        })
    };

    match in_year(reference.year()) {
        Some(anniversary) if anniversary <= reference => anniversary,
        _ => in_year(reference.year() - 1).unwrap_or(hire_date),
    }
}
