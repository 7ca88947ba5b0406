use super::Budget;
use crate::model::BridgeCandidate;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sélection gloutonne par efficacité décroissante.
///
/// Approximation volontaire d'un problème de type sac à dos : déterministe, non
/// garantie optimale. Deux ponts peuvent se chevaucher en période tant qu'aucun
/// jour de congé n'est posé deux fois.
pub(super) fn select_plan(candidates: &[BridgeCandidate], budget: Budget) -> Vec<BridgeCandidate> {
    let mut ranked: Vec<&BridgeCandidate> = candidates.iter().collect();
    // tri stable : à efficacité égale, l'ordre chronologique est conservé
    ranked.sort_by(|a, b| compare_efficiency(b, a));

    let mut remaining = budget.get();
    let mut used: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut selected = Vec::new();

    for candidate in ranked {
        if candidate.vacation_days > remaining {
            log_debug!(holiday = candidate.holiday.as_str(), remaining, "over budget, rejected");
            continue;
        }
        if candidate.bridging_days.iter().any(|d| used.contains(d)) {
            log_debug!(holiday = candidate.holiday.as_str(), "leave day already booked, rejected");
            continue;
        }
        used.extend(candidate.bridging_days.iter().copied());
        remaining -= candidate.vacation_days;
        log_debug!(
            holiday = candidate.holiday.as_str(),
            vacation_days = candidate.vacation_days,
            remaining,
            "candidate accepted"
        );
        selected.push(candidate.clone());
    }

    selected.sort_by_key(|c| c.date);
    selected
}

/// Compare `total / max(vacation, 1)` sans passer par les flottants.
pub(super) fn compare_efficiency(a: &BridgeCandidate, b: &BridgeCandidate) -> Ordering {
    let lhs = u64::from(a.total_days) * u64::from(b.vacation_days.max(1));
    let rhs = u64::from(b.total_days) * u64::from(a.vacation_days.max(1));
    lhs.cmp(&rhs)
}
