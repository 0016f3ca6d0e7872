//! Calculation logic for the Termination Settlement Engine.
//!
//! This module contains the settlement calculation pipeline: service time
//! assessment, balance of salary, notice period resolution, year-end bonus
//! proration, overdue and proportional vacation, the FGTS penalty, and the
//! orchestrating [`calculate_settlement`] entry point.

mod fgts_penalty;
mod notice_period;
mod salary_balance;
mod service_time;
mod settlement;
mod vacation;
mod year_end_bonus;

pub use fgts_penalty::{FgtsPenaltyResult, calculate_fgts_penalty};
pub use notice_period::{NoticeOutcome, resolve_notice_period};
pub use salary_balance::{SalaryBalanceResult, calculate_salary_balance};
pub use service_time::{ServiceTimeResult, assess_service_time};
pub use settlement::calculate_settlement;
pub use vacation::{
    OverdueVacationResult, ProportionalVacationResult, calculate_overdue_vacation,
    calculate_proportional_vacation,
};
pub use year_end_bonus::{YearEndBonusResult, calculate_year_end_bonus};

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::config::{
        BonusRules, FgtsRules, NoticeRules, RuleBook, RuleSections, SalaryConventions,
        StatuteMetadata, VacationRules,
    };
    use crate::models::{NoticePeriodMode, SettlementInput, TerminationReason};

    pub fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    pub fn create_test_rules() -> RuleBook {
        let metadata = StatuteMetadata {
            code: "CLT".to_string(),
            name: "Consolidação das Leis do Trabalho".to_string(),
            version: "2024-01-01".to_string(),
            source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                .to_string(),
        };

        let rules = RuleSections {
            salary: SalaryConventions {
                statute: "CLT art. 64".to_string(),
                month_divisor: 30,
                year_divisor: 365,
            },
            notice: NoticeRules {
                statute: "Lei 12.506/2011, art. 1º".to_string(),
                base_days: 30,
                days_per_service_year: 3,
                cap_days: 90,
            },
            bonus: BonusRules {
                statute: "Lei 4.090/1962, art. 1º, §2º".to_string(),
                day_threshold: 15,
            },
            vacation: VacationRules {
                statute: "CLT arts. 129-146".to_string(),
                rounding_threshold_days: 14,
                max_months: 12,
            },
            fgts: FgtsRules {
                statute: "Lei 8.036/1990, art. 18, §1º".to_string(),
                penalty_rate: dec("0.40"),
            },
        };

        RuleBook::new(metadata, rules)
    }

    pub fn create_test_input(reason: TerminationReason) -> SettlementInput {
        SettlementInput {
            gross_salary: dec("3000.00"),
            hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
            termination_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            termination_reason: reason,
            notice_period_mode: NoticePeriodMode::Indemnified,
            fgts_balance: dec("5000.00"),
            has_overdue_vacation: false,
        }
    }
}
