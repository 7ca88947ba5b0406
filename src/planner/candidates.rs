use crate::calendar::{self, add_days, days_inclusive};
use crate::model::{BridgeCandidate, BridgeKind, HolidaySet};
use chrono::NaiveDate;

/// Situation d'un férié selon les jours de congé nécessaires de chaque côté.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shape {
    Isolated,
    PreOnly,
    PostOnly,
    PreCheaper,
    PostCheaper,
    Tie,
}

pub(super) fn classify(pre: usize, post: usize) -> Shape {
    match (pre, post) {
        (0, 0) => Shape::Isolated,
        (_, 0) => Shape::PreOnly,
        (0, _) => Shape::PostOnly,
        (pre, post) if pre < post => Shape::PreCheaper,
        (pre, post) if post < pre => Shape::PostCheaper,
        _ => Shape::Tie,
    }
}

pub(super) fn candidates_from_holidays(holidays: &HolidaySet) -> Vec<BridgeCandidate> {
    let mut out: Vec<BridgeCandidate> = holidays
        .iter()
        .filter_map(|(date, name)| candidate_for(holidays, date, name))
        .collect();
    out.sort_by_key(|c| c.date);
    out
}

fn candidate_for(holidays: &HolidaySet, date: NaiveDate, name: &str) -> Option<BridgeCandidate> {
    if calendar::is_weekend(date) {
        return None;
    }
    let wd = i64::from(calendar::weekday_index(date));
    let start_pre = add_days(date, -(wd + 2));
    let end_post = add_days(date, 6 - wd);
    let pre = leave_days_between(holidays, start_pre, date);
    let post = leave_days_between(holidays, date, end_post);
    let name = name.to_string();

    let before = |days| BridgeCandidate::new(name.clone(), date, start_pre, date, days, BridgeKind::Before);
    let after = |days| BridgeCandidate::new(name.clone(), date, date, end_post, days, BridgeKind::After);

    let candidate = match classify(pre.len(), post.len()) {
        Shape::Isolated => {
            log_debug!(%date, holiday = name.as_str(), "no leave day around holiday, skipped");
            return None;
        }
        Shape::PreOnly | Shape::PostOnly => {
            let mut days = pre;
            days.extend(post);
            BridgeCandidate::new(
                name.clone(),
                date,
                start_pre,
                end_post,
                days,
                BridgeKind::ExtendToWeekend,
            )
        }
        Shape::PreCheaper => before(pre),
        Shape::PostCheaper => after(post),
        Shape::Tie => {
            if days_inclusive(start_pre, date) >= days_inclusive(date, end_post) {
                before(pre)
            } else {
                after(post)
            }
        }
    };
    Some(candidate)
}

/// Jours ouvrés non fériés strictement entre `start` et `end`.
fn leave_days_between(holidays: &HolidaySet, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .skip(1)
        .take_while(|d| *d < end)
        .filter(|d| !calendar::is_weekend(*d) && !holidays.contains(*d))
        .collect()
}
