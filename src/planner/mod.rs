mod candidates;
mod invariants;
mod merge;
mod optimizer;
mod types;

pub use crate::error::PlanError;
pub use types::{Budget, PlanRequest};

use crate::holidays;
use crate::model::{BridgeCandidate, CombinedBlock, HolidaySet, Region};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Résultat complet d'une planification, rendu à l'appelant (rien n'est conservé).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    pub year: i32,
    pub region: Region,
    pub budget: Budget,
    pub holidays: HolidaySet,
    pub candidates: Vec<BridgeCandidate>,
    pub selected: Vec<BridgeCandidate>,
    pub combined: Vec<CombinedBlock>,
}

impl Plan {
    pub fn vacation_days_used(&self) -> u32 {
        self.selected.iter().map(|c| c.vacation_days).sum()
    }

    pub fn remaining_budget(&self) -> u32 {
        self.budget.get().saturating_sub(self.vacation_days_used())
    }

    /// Jours libres cumulés des blocs retenus.
    pub fn total_days_off(&self) -> u32 {
        self.selected.iter().map(|c| c.total_days).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Ponts candidats d'une année pour un code de Land (tolérant : inconnu => `DE`).
pub fn bridge_candidates(year: i32, region_code: &str) -> Result<Vec<BridgeCandidate>, PlanError> {
    let set = holidays::holidays_for_region(year, region_code)?;
    Ok(candidates_from_holidays(&set))
}

/// Ponts candidats pour un ensemble de fériés arbitraire, triés par date.
pub fn candidates_from_holidays(holidays: &HolidaySet) -> Vec<BridgeCandidate> {
    candidates::candidates_from_holidays(holidays)
}

pub fn select_plan(candidates: &[BridgeCandidate], budget: Budget) -> Vec<BridgeCandidate> {
    optimizer::select_plan(candidates, budget)
}

pub fn merge_adjacent_blocks(plan: &[BridgeCandidate]) -> Vec<CombinedBlock> {
    merge::merge_adjacent_blocks(plan)
}

/// Contrôle les invariants d'un plan ; une erreur signale un défaut de génération.
pub fn check_plan(
    plan: &[BridgeCandidate],
    holidays: &HolidaySet,
    budget: Budget,
) -> Result<(), PlanError> {
    invariants::check_plan(plan, holidays, budget)
}

/// Chaîne complète : fériés -> candidats -> sélection -> blocs combinés.
pub fn build_plan(request: &PlanRequest) -> Result<Plan, PlanError> {
    let region = Region::from_code_or_nationwide(&request.region_code);
    let holidays = holidays::holidays(request.year, region)?;
    let candidates = candidates_from_holidays(&holidays);
    let selected = select_plan(&candidates, request.budget);
    let combined = merge_adjacent_blocks(&selected);
    log_debug!(
        year = request.year,
        region = region.code(),
        candidates = candidates.len(),
        selected = selected.len(),
        combined = combined.len(),
        "plan built"
    );
    Ok(Plan {
        year: request.year,
        region,
        budget: request.budget,
        holidays,
        candidates,
        selected,
        combined,
    })
}
