//! Request types for the Termination Settlement Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NoticePeriodMode, SettlementInput, TerminationReason};

/// Request body for the `/calculate` endpoint.
///
/// Contains the contract facts and termination circumstances needed to
/// calculate one settlement statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The employment contract facts.
    pub contract: ContractRequest,
    /// Why the contract ended.
    pub termination_reason: TerminationReason,
    /// How the notice period was handled.
    pub notice_period_mode: NoticePeriodMode,
    /// Current FGTS account balance, as reported by the caller.
    #[serde(default)]
    pub fgts_balance: Decimal,
    /// Whether the employee holds one full untaken vacation accrual period.
    #[serde(default)]
    pub has_overdue_vacation: bool,
}

/// Employment contract facts in a settlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Last monthly gross base salary.
    pub gross_salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The last day of the contract.
    pub termination_date: NaiveDate,
}

impl From<SettlementRequest> for SettlementInput {
    fn from(req: SettlementRequest) -> Self {
        SettlementInput {
            gross_salary: req.contract.gross_salary,
            hire_date: req.contract.hire_date,
            termination_date: req.contract.termination_date,
            termination_reason: req.termination_reason,
            notice_period_mode: req.notice_period_mode,
            fgts_balance: req.fgts_balance,
            has_overdue_vacation: req.has_overdue_vacation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_settlement_request() {
        let json = r#"{
            "contract": {
                "gross_salary": "3000.00",
                "hire_date": "2022-01-10",
                "termination_date": "2024-01-10"
            },
            "termination_reason": "employer_dismissal_no_cause",
            "notice_period_mode": "indemnified",
            "fgts_balance": "5000.00",
            "has_overdue_vacation": false
        }"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.termination_reason,
            TerminationReason::EmployerDismissalNoCause
        );
        assert_eq!(request.notice_period_mode, NoticePeriodMode::Indemnified);
        assert_eq!(request.contract.gross_salary, Decimal::new(300_000, 2));
        assert_eq!(
            request.contract.hire_date,
            NaiveDate::from_ymd_opt(2022, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_fgts_balance_and_overdue_flag_default() {
        let json = r#"{
            "contract": {
                "gross_salary": "2000.00",
                "hire_date": "2023-03-01",
                "termination_date": "2024-05-20"
            },
            "termination_reason": "employee_resignation",
            "notice_period_mode": "worked"
        }"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.fgts_balance, Decimal::ZERO);
        assert!(!request.has_overdue_vacation);
    }

    #[test]
    fn test_settlement_input_conversion() {
        let request = SettlementRequest {
            contract: ContractRequest {
                gross_salary: Decimal::new(300_000, 2),
                hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
                termination_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            },
            termination_reason: TerminationReason::EmployeeResignation,
            notice_period_mode: NoticePeriodMode::NotServed,
            fgts_balance: Decimal::ZERO,
            has_overdue_vacation: true,
        };

        let input: SettlementInput = request.into();
        assert_eq!(input.gross_salary, Decimal::new(300_000, 2));
        assert_eq!(
            input.termination_reason,
            TerminationReason::EmployeeResignation
        );
        assert_eq!(input.notice_period_mode, NoticePeriodMode::NotServed);
        assert!(input.has_overdue_vacation);
    }
}
