//! Year-end (13th-month) bonus proration functionality.
//!
//! This module prorates the statutory year-end bonus by months reached in
//! the calendar year of the projected termination date. A month counts when
//! at least its 15th day was reached (Lei 4.090/1962).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::models::{AuditStep, PayItem, PayItemKind, SettlementInput};

/// Months in the bonus year; the proration denominator.
const MONTHS_PER_YEAR: u32 = 12;

/// The result of prorating the year-end bonus, including the audit step.
#[derive(Debug, Clone)]
pub struct YearEndBonusResult {
    /// The bonus earning item, unless forfeited by for-cause dismissal.
    pub item: Option<PayItem>,
    /// Months of the projected year counted toward the bonus.
    pub months_accrued: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prorates the year-end bonus up to the projected termination date.
///
/// The month count is taken from the projected date alone: the month number
/// itself when its day-of-month reached the threshold (15), one less
/// otherwise. When an indemnified notice pushes the projection into the next
/// calendar year the count is NOT reset relative to that year; the
/// orchestrator surfaces an audit warning for this known simplification
/// instead of correcting it.
///
/// For-cause dismissal forfeits the bonus entirely.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `projected_date` - Termination date projected past indemnified notice
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_year_end_bonus(
    input: &SettlementInput,
    projected_date: NaiveDate,
    rules: &RuleBook,
    step_number: u32,
) -> YearEndBonusResult {
    let bonus = rules.bonus();

    if input.is_for_cause() {
        let audit_step = AuditStep {
            step_number,
            rule_id: "year_end_bonus".to_string(),
            rule_name: "Year-End Bonus Proration".to_string(),
            statute_ref: bonus.statute.clone(),
            input: serde_json::json!({
                "termination_reason": input.termination_reason
            }),
            output: serde_json::json!({
                "forfeited": true,
                "months_accrued": 0
            }),
            reasoning: "For-cause dismissal forfeits the year-end bonus".to_string(),
        };

        return YearEndBonusResult {
            item: None,
            months_accrued: 0,
            audit_step,
        };
    }

    let months_accrued = if projected_date.day() >= bonus.day_threshold {
        projected_date.month()
    } else {
        projected_date.month() - 1
    };
    let amount =
        input.gross_salary / Decimal::from(MONTHS_PER_YEAR) * Decimal::from(months_accrued);

    let audit_step = AuditStep {
        step_number,
        rule_id: "year_end_bonus".to_string(),
        rule_name: "Year-End Bonus Proration".to_string(),
        statute_ref: bonus.statute.clone(),
        input: serde_json::json!({
            "projected_date": projected_date.to_string(),
            "day_threshold": bonus.day_threshold,
            "gross_salary": input.gross_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "forfeited": false,
            "months_accrued": months_accrued,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Projected date {} counts {} months; R$ {} / 12 × {} = R$ {}",
            projected_date,
            months_accrued,
            input.gross_salary.normalize(),
            months_accrued,
            amount.normalize()
        ),
    };

    let item = PayItem {
        kind: PayItemKind::YearEndBonus,
        label: format!("Year-End Bonus Proportional ({months_accrued}/12)"),
        amount,
        statute_ref: bonus.statute.clone(),
    };

    YearEndBonusResult {
        item: Some(item),
        months_accrued,
        audit_step,
    }
}
