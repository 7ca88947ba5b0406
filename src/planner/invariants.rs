use super::{Budget, PlanError};
use crate::calendar;
use crate::model::{BridgeCandidate, HolidaySet};
use std::collections::BTreeSet;

/// Vérifie un candidat contre l'ensemble de fériés dont il est issu.
pub(super) fn check_candidate(
    candidate: &BridgeCandidate,
    holidays: &HolidaySet,
) -> Result<(), PlanError> {
    let fail = |what: &str| -> Result<(), PlanError> {
        Err(PlanError::Invariant(format!(
            "{} ({}): {what}",
            candidate.holiday,
            calendar::iso(candidate.date)
        )))
    };
    if calendar::is_weekend(candidate.date) {
        return fail("holiday falls on a weekend");
    }
    if candidate.vacation_days as usize != candidate.bridging_days.len() {
        return fail("vacation_days differs from bridging_days");
    }
    if candidate.total_days != calendar::days_inclusive(candidate.break_start, candidate.break_end) {
        return fail("total_days differs from the break span");
    }
    if candidate
        .bridging_days
        .iter()
        .any(|d| calendar::is_weekend(*d) || holidays.contains(*d))
    {
        return fail("bridging day on a weekend or a holiday");
    }
    if candidate
        .bridging_days
        .iter()
        .any(|d| *d < candidate.break_start || *d > candidate.break_end)
    {
        return fail("bridging day outside the break");
    }
    Ok(())
}

/// Vérifie un plan sélectionné : budget respecté, jours de congé disjoints.
pub(super) fn check_plan(
    plan: &[BridgeCandidate],
    holidays: &HolidaySet,
    budget: Budget,
) -> Result<(), PlanError> {
    let mut seen = BTreeSet::new();
    let mut spent = 0u64;
    for candidate in plan {
        check_candidate(candidate, holidays)?;
        spent += u64::from(candidate.vacation_days);
        for day in &candidate.bridging_days {
            if !seen.insert(*day) {
                return Err(PlanError::Invariant(format!(
                    "leave day {} booked twice",
                    calendar::iso(*day)
                )));
            }
        }
    }
    if spent > u64::from(budget.get()) {
        return Err(PlanError::Invariant(format!(
            "plan spends {spent} days, budget is {}",
            budget.get()
        )));
    }
    if plan.windows(2).any(|w| w[0].date > w[1].date) {
        return Err(PlanError::Invariant("plan not ordered by date".to_string()));
    }
    Ok(())
}
