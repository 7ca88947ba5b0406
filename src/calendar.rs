//! Arithmétique calendaire : Pâques, décalages en jours, jours de semaine, format ISO.

use crate::error::PlanError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::ops::RangeInclusive;

/// Années couvertes : le calcul grégorien de Pâques vaut à partir de 1583.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

pub fn ensure_supported(year: i32) -> Result<(), PlanError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(PlanError::UnsupportedYear(year))
    }
}

/// Dimanche de Pâques (algorithme grégorien anonyme, Meeus/Jones/Butcher).
pub fn easter_sunday(year: i32) -> Result<NaiveDate, PlanError> {
    ensure_supported(year)?;
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    ymd(year, month as u32, day as u32)
}

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, PlanError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(PlanError::InvalidDate { year, month, day })
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Lundi = 0 … dimanche = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Nombre de jours de `start` à `end`, bornes incluses (0 si `end < start`).
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days() + 1;
    u32::try_from(span).unwrap_or(0)
}

/// Format canonique `YYYY-MM-DD`.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(raw: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| PlanError::Other(anyhow::anyhow!("invalid ISO date {raw:?}: {err}")))
}

/// `DD.MM.YYYY`, notation allemande utilisée dans les rapports.
pub fn german(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}
