//! Notice period resolution functionality.
//!
//! This module determines the statutory notice period (Lei 12.506/2011:
//! 30 days plus 3 per completed service year, capped at 90), decides whether
//! it produces an earning, a deduction, or neither, and projects the
//! termination date forward when the notice is indemnified.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::RuleBook;
use crate::models::{
    AuditStep, NoticePeriodMode, PayItem, PayItemKind, SettlementInput, TerminationReason,
};

/// The outcome of resolving the notice period.
///
/// At most one of `earning` and `deduction` is set. The `projected_date`
/// feeds the bonus and vacation prorations: an indemnified notice extends
/// the employment for proration purposes.
#[derive(Debug, Clone)]
pub struct NoticeOutcome {
    /// The notice period length in days.
    pub notice_days: i64,
    /// Indemnified notice earning, when owed.
    pub earning: Option<PayItem>,
    /// Unserved resignation notice deduction, when owed.
    pub deduction: Option<PayItem>,
    /// Termination date projected past the indemnified notice, or the
    /// termination date itself otherwise.
    pub projected_date: NaiveDate,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the notice period for a termination.
///
/// The resolution is a single match over the termination reason and notice
/// mode:
///
/// - dismissal without cause, indemnified: the notice value is earned and
///   the projected date moves past the notice period;
/// - dismissal without cause, worked: already paid through salary, only the
///   final date stands;
/// - resignation without serving notice: one full month's salary is
///   deducted, not prorated;
/// - for-cause dismissal: notice is forfeited entirely.
///
/// # Arguments
///
/// * `input` - The settlement input record
/// * `completed_years` - Whole years of service from the service time step
/// * `daily_rate` - The daily salary rate
/// * `rules` - The statutory rule book
/// * `step_number` - The step number for audit trail sequencing
pub fn resolve_notice_period(
    input: &SettlementInput,
    completed_years: i64,
    daily_rate: Decimal,
    rules: &RuleBook,
    step_number: u32,
) -> NoticeOutcome {
    let notice = rules.notice();
    let notice_days =
        (notice.base_days + notice.days_per_service_year * completed_years).min(notice.cap_days);
    let notice_value = daily_rate * Decimal::from(notice_days);

    let (earning, deduction, projected_date, reasoning) =
        match (input.termination_reason, input.notice_period_mode) {
            (TerminationReason::EmployerDismissalNoCause, NoticePeriodMode::Indemnified) => {
                let item = PayItem {
                    kind: PayItemKind::IndemnifiedNotice,
                    label: format!("Indemnified Notice ({notice_days} days)"),
                    amount: notice_value,
                    statute_ref: notice.statute.clone(),
                };
                let projected = input.termination_date + Duration::days(notice_days);
                let reasoning = format!(
                    "R$ {} × {} days = R$ {}; projection extends employment to {}",
                    daily_rate.normalize(),
                    notice_days,
                    notice_value.normalize(),
                    projected
                );
                (Some(item), None, projected, reasoning)
            }
            (TerminationReason::EmployerDismissalNoCause, _) => (
                None,
                None,
                input.termination_date,
                "Notice worked through; paid as ordinary salary, no settlement line".to_string(),
            ),
            (TerminationReason::EmployeeResignation, NoticePeriodMode::NotServed) => {
                let item = PayItem {
                    kind: PayItemKind::NoticeDeduction,
                    label: format!("Notice Period Deduction ({} days)", notice.base_days),
                    amount: input.gross_salary,
                    statute_ref: "CLT art. 487, §2º".to_string(),
                };
                let reasoning = format!(
                    "Resignation without serving notice deducts one full salary of R$ {}",
                    input.gross_salary.normalize()
                );
                (None, Some(item), input.termination_date, reasoning)
            }
            (TerminationReason::EmployeeResignation, _) => (
                None,
                None,
                input.termination_date,
                "Resignation with notice handled; nothing owed either way".to_string(),
            ),
            (TerminationReason::ForCauseDismissal, _) => (
                None,
                None,
                input.termination_date,
                "For-cause dismissal forfeits the notice period".to_string(),
            ),
        };

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_period".to_string(),
        rule_name: "Notice Period".to_string(),
        statute_ref: notice.statute.clone(),
        input: serde_json::json!({
            "termination_reason": input.termination_reason,
            "notice_period_mode": input.notice_period_mode,
            "completed_years": completed_years,
            "daily_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "notice_days": notice_days,
            "earning": earning.as_ref().map(|i| i.amount.normalize().to_string()),
            "deduction": deduction.as_ref().map(|i| i.amount.normalize().to_string()),
            "projected_date": projected_date.to_string()
        }),
        reasoning,
    };

    NoticeOutcome {
        notice_days,
        earning,
        deduction,
        projected_date,
        audit_step,
    }
}
