//! Property-based tests for the settlement calculation invariants.
//!
//! These exercise the calculation pipeline over randomly generated inputs:
//! totals consistency, validation of the date order, for-cause forfeitures,
//! notice period monotonicity, and non-negativity of prorated earnings.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use settlement_engine::calculation::{calculate_settlement, resolve_notice_period};
use settlement_engine::config::RuleLoader;
use settlement_engine::error::EngineError;
use settlement_engine::models::{
    NoticePeriodMode, PayItemKind, SettlementInput, TerminationReason,
};

fn load_rules() -> RuleLoader {
    RuleLoader::load("./config/clt").expect("Failed to load config")
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_money() -> impl Strategy<Value = Decimal> {
    // Cents up to one million reais.
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_reason() -> impl Strategy<Value = TerminationReason> {
    prop_oneof![
        Just(TerminationReason::EmployerDismissalNoCause),
        Just(TerminationReason::EmployeeResignation),
        Just(TerminationReason::ForCauseDismissal),
    ]
}

fn arb_mode() -> impl Strategy<Value = NoticePeriodMode> {
    prop_oneof![
        Just(NoticePeriodMode::Worked),
        Just(NoticePeriodMode::Indemnified),
        Just(NoticePeriodMode::NotServed),
    ]
}

fn arb_input() -> impl Strategy<Value = SettlementInput> {
    (
        arb_money(),
        arb_date(),
        arb_date(),
        arb_reason(),
        arb_mode(),
        arb_money(),
        any::<bool>(),
    )
        .prop_map(
            |(salary, a, b, reason, mode, fgts, overdue)| SettlementInput {
                gross_salary: salary,
                hire_date: a.min(b),
                termination_date: a.max(b),
                termination_reason: reason,
                notice_period_mode: mode,
                fgts_balance: fgts,
                has_overdue_vacation: overdue,
            },
        )
}

proptest! {
    #[test]
    fn net_amount_is_earnings_minus_deductions(input in arb_input()) {
        let rules = load_rules();
        let statement = calculate_settlement(&input, rules.rule_book()).unwrap();

        let earnings_sum: Decimal = statement.earnings.iter().map(|i| i.amount).sum();
        let deductions_sum: Decimal = statement.deductions.iter().map(|i| i.amount).sum();

        prop_assert_eq!(statement.totals.total_earnings, earnings_sum);
        prop_assert_eq!(statement.totals.total_deductions, deductions_sum);
        prop_assert_eq!(
            statement.totals.net_amount,
            earnings_sum - deductions_sum
        );
    }

    #[test]
    fn inverted_dates_always_fail_validation(
        salary in arb_money(),
        a in arb_date(),
        b in arb_date(),
        reason in arb_reason(),
        mode in arb_mode(),
    ) {
        prop_assume!(a != b);
        let rules = load_rules();
        let input = SettlementInput {
            gross_salary: salary,
            hire_date: a.max(b),
            termination_date: a.min(b),
            termination_reason: reason,
            notice_period_mode: mode,
            fgts_balance: Decimal::ZERO,
            has_overdue_vacation: false,
        };

        let result = calculate_settlement(&input, rules.rule_book());
        let is_date_order_invalid = matches!(result, Err(EngineError::DateOrderInvalid { .. }));
        prop_assert!(is_date_order_invalid);
    }

    #[test]
    fn for_cause_forfeits_everything_but_salary_balance(
        mut input in arb_input(),
    ) {
        input.termination_reason = TerminationReason::ForCauseDismissal;
        let rules = load_rules();
        let statement = calculate_settlement(&input, rules.rule_book()).unwrap();

        prop_assert!(statement.deductions.is_empty());
        for item in &statement.earnings {
            prop_assert_eq!(item.kind, PayItemKind::SalaryBalance);
        }
    }

    #[test]
    fn notice_days_monotonic_and_capped(
        years_a in 0i64..50,
        years_b in 0i64..50,
        daily_rate in arb_money(),
    ) {
        prop_assume!(years_a <= years_b);
        let rules = load_rules();
        let input = SettlementInput {
            gross_salary: daily_rate * Decimal::from(30),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            termination_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            termination_reason: TerminationReason::EmployerDismissalNoCause,
            notice_period_mode: NoticePeriodMode::Indemnified,
            fgts_balance: Decimal::ZERO,
            has_overdue_vacation: false,
        };

        let shorter = resolve_notice_period(&input, years_a, daily_rate, rules.rule_book(), 1);
        let longer = resolve_notice_period(&input, years_b, daily_rate, rules.rule_book(), 1);

        prop_assert!(shorter.notice_days <= longer.notice_days);
        prop_assert!(longer.notice_days <= 90);
        prop_assert!(shorter.notice_days >= 30);
    }

    #[test]
    fn bonus_and_vacation_earnings_non_negative(mut input in arb_input()) {
        // Non-negative salary is the documented precondition for the
        // non-negativity of prorated earnings.
        prop_assume!(input.gross_salary >= Decimal::ZERO);
        input.termination_reason = TerminationReason::EmployerDismissalNoCause;
        let rules = load_rules();
        let statement = calculate_settlement(&input, rules.rule_book()).unwrap();

        for item in &statement.earnings {
            if matches!(
                item.kind,
                PayItemKind::YearEndBonus
                    | PayItemKind::OverdueVacation
                    | PayItemKind::OverdueVacationBonus
                    | PayItemKind::ProportionalVacation
                    | PayItemKind::ProportionalVacationBonus
            ) {
                prop_assert!(item.amount >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn calculation_is_deterministic(input in arb_input()) {
        let rules = load_rules();
        let first = calculate_settlement(&input, rules.rule_book()).unwrap();
        let second = calculate_settlement(&input, rules.rule_book()).unwrap();

        prop_assert_eq!(first.earnings, second.earnings);
        prop_assert_eq!(first.deductions, second.deductions);
        prop_assert_eq!(first.totals, second.totals);
        prop_assert_eq!(first.completed_years, second.completed_years);
    }
}
