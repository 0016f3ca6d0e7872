//! Severance-fund (FGTS) penalty calculation functionality.
//!
//! Dismissal without cause obliges the employer to pay a 40% penalty on the
//! employee's FGTS account balance (Lei 8.036/1990). The balance itself is
//! caller-reported; the engine does not compute deposits.

use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::models::{AuditStep, PayItem, PayItemKind, SettlementInput, TerminationReason};

/// The result of the FGTS penalty calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct FgtsPenaltyResult {
    /// The penalty earning item, when owed.
    pub item: Option<PayItem>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the FGTS penalty for a dismissal without cause.
///
/// Any other termination reason owes no penalty. The amount is the reported
/// fund balance multiplied by the statutory rate.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use settlement_engine::calculation::calculate_fgts_penalty;
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
/// let result = calculate_fgts_penalty(&input, rules.rule_book(), 7);
/// assert_eq!(result.item.unwrap().amount, Decimal::new(200_000, 2));
/// ```
pub fn calculate_fgts_penalty(
    input: &SettlementInput,
    rules: &RuleBook,
    step_number: u32,
) -> FgtsPenaltyResult {
    let fgts = rules.fgts();

    if input.termination_reason != TerminationReason::EmployerDismissalNoCause {
        let audit_step = AuditStep {
            step_number,
            rule_id: "fgts_penalty".to_string(),
            rule_name: "FGTS Penalty".to_string(),
            statute_ref: fgts.statute.clone(),
            input: serde_json::json!({
                "termination_reason": input.termination_reason
            }),
            output: serde_json::json!({
                "owed": false
            }),
            reasoning: "FGTS penalty applies only to dismissal without cause".to_string(),
        };

        return FgtsPenaltyResult {
            item: None,
            audit_step,
        };
    }

    let amount = input.fgts_balance * fgts.penalty_rate;
    let rate_percent = (fgts.penalty_rate * Decimal::from(100u32)).normalize();

    let audit_step = AuditStep {
        step_number,
        rule_id: "fgts_penalty".to_string(),
        rule_name: "FGTS Penalty".to_string(),
        statute_ref: fgts.statute.clone(),
        input: serde_json::json!({
            "fgts_balance": input.fgts_balance.normalize().to_string(),
            "penalty_rate": fgts.penalty_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "owed": true,
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R$ {} × {} = R$ {}",
            input.fgts_balance.normalize(),
            fgts.penalty_rate.normalize(),
            amount.normalize()
        ),
    };

    let item = PayItem {
        kind: PayItemKind::FgtsPenalty,
        label: format!("{rate_percent}% Severance-Fund Penalty"),
        amount,
        statute_ref: fgts.statute.clone(),
    };

    FgtsPenaltyResult {
        item: Some(item),
        audit_step,
    }
}
