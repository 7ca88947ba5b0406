#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Budget de jours de congé. Jamais négatif : toute saisie invalide vaut zéro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Budget(u32);

impl Budget {
    pub const ZERO: Budget = Budget(0);

    /// Borne une valeur signée : les valeurs négatives donnent zéro.
    pub fn days(n: i64) -> Self {
        if n <= 0 {
            return Self::ZERO;
        }
        Self(u32::try_from(n).unwrap_or(u32::MAX))
    }

    /// Lecture tolérante d'une saisie utilisateur (préfixe entier, sinon zéro).
    pub fn parse_lenient(raw: &str) -> Self {
        let s = raw.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..end];
        if negative || digits.is_empty() {
            return Self::ZERO;
        }
        Self(digits.parse::<u32>().unwrap_or(u32::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Budget {
    fn from(days: u32) -> Self {
        Self(days)
    }
}

/// Paramètres d'une planification : année, code du Land, budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub year: i32,
    pub region_code: String,
    pub budget: Budget,
}

impl PlanRequest {
    pub fn new<S: Into<String>>(year: i32, region_code: S, budget: Budget) -> Self {
        Self {
            year,
            region_code: region_code.into(),
            budget,
        }
    }
}
