//! Table déclarative des règles de jours fériés : nationales et par Land.

use crate::calendar;
use crate::model::Region;
use crate::error::PlanError;
use chrono::{NaiveDate, Weekday};

/// Manière de situer un férié dans une année donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    Fixed { month: u32, day: u32 },
    /// Décalage en jours depuis le dimanche de Pâques.
    EasterOffset(i64),
    /// Premier `weekday` trouvé en reculant depuis `month`/`day` (inclus).
    WeekdayOnOrBefore { month: u32, day: u32, weekday: Weekday },
}

impl HolidayRule {
    pub fn resolve(self, year: i32, easter: NaiveDate) -> Result<NaiveDate, PlanError> {
        match self {
            HolidayRule::Fixed { month, day } => calendar::ymd(year, month, day),
            HolidayRule::EasterOffset(offset) => Ok(calendar::add_days(easter, offset)),
            HolidayRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => {
                let anchor = calendar::ymd(year, month, day)?;
                let back = (calendar::weekday_index(anchor) + 7 - weekday.num_days_from_monday()) % 7;
                Ok(calendar::add_days(anchor, -i64::from(back)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRule {
    pub name: &'static str,
    pub rule: HolidayRule,
}

const fn fixed(name: &'static str, month: u32, day: u32) -> NamedRule {
    NamedRule {
        name,
        rule: HolidayRule::Fixed { month, day },
    }
}

const fn easter(name: &'static str, offset: i64) -> NamedRule {
    NamedRule {
        name,
        rule: HolidayRule::EasterOffset(offset),
    }
}

pub const NATIONAL: &[NamedRule] = &[
    fixed("Neujahr", 1, 1),
    fixed("Tag der Arbeit", 5, 1),
    fixed("Tag der Deutschen Einheit", 10, 3),
    fixed("1. Weihnachtstag", 12, 25),
    fixed("2. Weihnachtstag", 12, 26),
    easter("Karfreitag", -2),
    easter("Ostermontag", 1),
    easter("Christi Himmelfahrt", 39),
    easter("Pfingstmontag", 50),
];

const EPIPHANY: NamedRule = fixed("Heilige Drei Könige", 1, 6);
const WOMENS_DAY: NamedRule = fixed("Frauentag", 3, 8);
const EASTER_SUNDAY: NamedRule = easter("Ostersonntag", 0);
const WHIT_SUNDAY: NamedRule = easter("Pfingstsonntag", 49);
const CORPUS_CHRISTI: NamedRule = easter("Fronleichnam", 60);
const ASSUMPTION: NamedRule = fixed("Mariä Himmelfahrt", 8, 15);
const CHILDRENS_DAY: NamedRule = fixed("Weltkindertag", 9, 20);
const REFORMATION: NamedRule = fixed("Reformationstag", 10, 31);
const ALL_SAINTS: NamedRule = fixed("Allerheiligen", 11, 1);
const REPENTANCE: NamedRule = NamedRule {
    name: "Buß- und Bettag",
    rule: HolidayRule::WeekdayOnOrBefore {
        month: 11,
        day: 23,
        weekday: Weekday::Wed,
    },
};

/// Surcouche régionale : seule source des fériés propres à chaque Land.
pub const REGIONAL: &[(Region, &[NamedRule])] = &[
    (Region::Nationwide, &[]),
    (Region::BW, &[EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS]),
    (Region::BY, &[EPIPHANY, CORPUS_CHRISTI, ASSUMPTION, ALL_SAINTS]),
    (Region::BE, &[WOMENS_DAY]),
    (Region::BB, &[EASTER_SUNDAY, WHIT_SUNDAY, REFORMATION]),
    (Region::HB, &[REFORMATION]),
    (Region::HH, &[REFORMATION]),
    (Region::HE, &[CORPUS_CHRISTI]),
    (Region::MV, &[WOMENS_DAY, REFORMATION]),
    (Region::NI, &[REFORMATION]),
    (Region::NW, &[CORPUS_CHRISTI, ALL_SAINTS]),
    (Region::RP, &[CORPUS_CHRISTI, ALL_SAINTS]),
    (Region::SL, &[CORPUS_CHRISTI, ASSUMPTION, ALL_SAINTS]),
    (Region::SN, &[REFORMATION, REPENTANCE]),
    (Region::ST, &[EPIPHANY, REFORMATION]),
    (Region::SH, &[REFORMATION]),
    (Region::TH, &[CHILDRENS_DAY, REFORMATION]),
];

pub fn regional_rules(region: Region) -> &'static [NamedRule] {
    REGIONAL
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, rules)| *rules)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_region_has_a_table_entry() {
        for region in Region::ALL {
            assert!(
                REGIONAL.iter().any(|(r, _)| *r == region),
                "missing rules for {region}"
            );
        }
        assert_eq!(REGIONAL.len(), Region::ALL.len());
    }

    #[test]
    fn repentance_day_walks_back_to_wednesday() {
        let easter = date(2025, 4, 20);
        // 23.11.2025 est un dimanche -> mercredi 19.11.
        assert_eq!(REPENTANCE.rule.resolve(2025, easter).unwrap(), date(2025, 11, 19));
        // 23.11.2022 est déjà un mercredi
        assert_eq!(REPENTANCE.rule.resolve(2022, easter).unwrap(), date(2022, 11, 23));
        assert_eq!(REPENTANCE.rule.resolve(2024, easter).unwrap(), date(2024, 11, 20));
    }

    #[test]
    fn easter_offsets_resolve_from_sunday() {
        let easter = date(2025, 4, 20);
        assert_eq!(CORPUS_CHRISTI.rule.resolve(2025, easter).unwrap(), date(2025, 6, 19));
        assert_eq!(WHIT_SUNDAY.rule.resolve(2025, easter).unwrap(), date(2025, 6, 8));
    }
}
