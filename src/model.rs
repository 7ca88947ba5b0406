use crate::calendar;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Land allemand, ou `Nationwide` (code `DE`) pour les seuls fériés nationaux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    #[cfg_attr(feature = "serde", serde(rename = "DE"))]
    Nationwide,
    BW,
    BY,
    BE,
    BB,
    HB,
    HH,
    HE,
    MV,
    NI,
    NW,
    RP,
    SL,
    SN,
    ST,
    SH,
    TH,
}

impl Region {
    /// Ordre d'affichage : le sentinel national puis les 16 Länder.
    pub const ALL: [Region; 17] = [
        Region::Nationwide,
        Region::BW,
        Region::BY,
        Region::BE,
        Region::BB,
        Region::HB,
        Region::HH,
        Region::HE,
        Region::MV,
        Region::NI,
        Region::NW,
        Region::RP,
        Region::SL,
        Region::SN,
        Region::ST,
        Region::SH,
        Region::TH,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Nationwide => "DE",
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HH => "HH",
            Region::HE => "HE",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Region::Nationwide => "Alle Bundesländer",
            Region::BW => "Baden-Württemberg",
            Region::BY => "Bayern",
            Region::BE => "Berlin",
            Region::BB => "Brandenburg",
            Region::HB => "Bremen",
            Region::HH => "Hamburg",
            Region::HE => "Hessen",
            Region::MV => "Mecklenburg-Vorpommern",
            Region::NI => "Niedersachsen",
            Region::NW => "Nordrhein-Westfalen",
            Region::RP => "Rheinland-Pfalz",
            Region::SL => "Saarland",
            Region::SN => "Sachsen",
            Region::ST => "Sachsen-Anhalt",
            Region::SH => "Schleswig-Holstein",
            Region::TH => "Thüringen",
        }
    }

    /// Code exact (insensible à la casse), `None` si inconnu.
    pub fn from_code(code: &str) -> Option<Region> {
        let code = code.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code))
    }

    /// Variante tolérante : un code inconnu retombe sur `Nationwide`.
    pub fn from_code_or_nationwide(code: &str) -> Region {
        match Region::from_code(code) {
            Some(region) => region,
            None => {
                log_warn!(code, "unknown region code, falling back to nationwide holidays");
                Region::Nationwide
            }
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Jours fériés d'une année, indexés par date (ordre chronologique).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HolidaySet {
    days: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère ou remplace le nom du férié à cette date.
    pub fn insert<N: Into<String>>(&mut self, date: NaiveDate, name: N) {
        self.days.insert(date, name.into());
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> + '_ {
        self.days.iter().map(|(d, n)| (*d, n.as_str()))
    }

    /// Vue `YYYY-MM-DD -> nom`, pour les couches de présentation.
    pub fn to_iso_map(&self) -> BTreeMap<String, String> {
        self.days
            .iter()
            .map(|(d, n)| (calendar::iso(*d), n.clone()))
            .collect()
    }
}

impl FromIterator<(NaiveDate, String)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Forme du pont proposé autour d'un férié.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BridgeKind {
    /// Relie les deux week-ends qui encadrent le férié.
    ExtendToWeekend,
    Before,
    After,
}

impl BridgeKind {
    pub fn label(self) -> &'static str {
        match self {
            BridgeKind::ExtendToWeekend => "Mit Brückentagen zu langem Wochenende",
            BridgeKind::Before => "Vor dem Feiertag",
            BridgeKind::After => "Nach dem Feiertag",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BridgeKind::ExtendToWeekend => "extend_to_weekend",
            BridgeKind::Before => "before",
            BridgeKind::After => "after",
        }
    }
}

/// Pont candidat autour d'un férié en semaine. Immuable une fois construit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeCandidate {
    pub holiday: String,
    pub date: NaiveDate,
    pub break_start: NaiveDate,
    pub break_end: NaiveDate,
    pub bridging_days: Vec<NaiveDate>,
    pub vacation_days: u32,
    pub total_days: u32,
    pub kind: BridgeKind,
}

impl BridgeCandidate {
    /// `vacation_days` et `total_days` sont dérivés des dates fournies.
    pub fn new(
        holiday: String,
        date: NaiveDate,
        break_start: NaiveDate,
        break_end: NaiveDate,
        bridging_days: Vec<NaiveDate>,
        kind: BridgeKind,
    ) -> Self {
        let vacation_days = u32::try_from(bridging_days.len()).unwrap_or(u32::MAX);
        Self {
            holiday,
            date,
            break_start,
            break_end,
            total_days: calendar::days_inclusive(break_start, break_end),
            vacation_days,
            bridging_days,
            kind,
        }
    }

    /// Jours libres obtenus par jour de congé posé.
    pub fn efficiency(&self) -> f64 {
        f64::from(self.total_days) / f64::from(self.vacation_days.max(1))
    }
}

/// Deux blocs retenus qui se touchent, rapportés comme une seule pause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombinedBlock {
    pub holidays: Vec<String>,
    pub break_start: NaiveDate,
    pub break_end: NaiveDate,
    pub bridging_days: Vec<NaiveDate>,
    pub vacation_days: u32,
    pub total_days: u32,
}

impl CombinedBlock {
    pub fn label(&self) -> String {
        self.holidays.join(" + ")
    }
}
