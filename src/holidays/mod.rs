//! Catalogue des jours fériés : ensemble national + surcouche du Land.

mod rules;

pub use rules::{regional_rules, HolidayRule, NamedRule, NATIONAL, REGIONAL};

use crate::calendar;
use crate::model::{HolidaySet, Region};
use crate::error::PlanError;

/// Fériés d'une année pour un Land. `Nationwide` ne renvoie que les 9 fériés nationaux.
pub fn holidays(year: i32, region: Region) -> Result<HolidaySet, PlanError> {
    let easter = calendar::easter_sunday(year)?;
    let mut set = HolidaySet::new();
    for named in NATIONAL.iter().chain(regional_rules(region)) {
        set.insert(named.rule.resolve(year, easter)?, named.name);
    }
    log_debug!(year, region = region.code(), count = set.len(), "holidays computed");
    Ok(set)
}

/// Comme [`holidays`], à partir d'un code texte ; un code inconnu vaut `DE`.
pub fn holidays_for_region(year: i32, code: &str) -> Result<HolidaySet, PlanError> {
    holidays(year, Region::from_code_or_nationwide(code))
}
