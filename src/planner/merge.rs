use crate::calendar;
use crate::model::{BridgeCandidate, CombinedBlock};

/// Écart maximal (en jours, dans les deux sens) entre deux blocs fusionnables.
const MAX_GAP_DAYS: i64 = 1;

/// Repère les blocs consécutifs du plan (paires i, i+1 uniquement) qui se touchent.
pub(super) fn merge_adjacent_blocks(plan: &[BridgeCandidate]) -> Vec<CombinedBlock> {
    plan.windows(2)
        .filter_map(|pair| {
            let [a, b] = pair else { return None };
            let gap = (b.break_start - a.break_end).num_days();
            if gap.abs() > MAX_GAP_DAYS {
                return None;
            }
            let mut bridging_days = a.bridging_days.clone();
            bridging_days.extend(b.bridging_days.iter().copied());
            Some(CombinedBlock {
                holidays: vec![a.holiday.clone(), b.holiday.clone()],
                break_start: a.break_start,
                break_end: b.break_end,
                bridging_days,
                vacation_days: a.vacation_days + b.vacation_days,
                total_days: calendar::days_inclusive(a.break_start, b.break_end),
            })
        })
        .collect()
}
