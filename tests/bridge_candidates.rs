#![forbid(unsafe_code)]
use chrono::NaiveDate;
use offplanner::{
    bridge_candidates, calendar, candidates_from_holidays, holidays, BridgeKind, HolidaySet,
    Region,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn ascension_2025_bridges_after() {
    let candidates = bridge_candidates(2025, "DE").unwrap();
    let c = candidates
        .iter()
        .find(|c| c.date == date(2025, 5, 29))
        .unwrap();
    assert_eq!(c.kind, BridgeKind::After);
    assert_eq!(c.vacation_days, 1);
    assert_eq!(c.bridging_days, vec![date(2025, 5, 30)]);
    assert_eq!(c.total_days, 4);
    assert_eq!(c.break_start, date(2025, 5, 29));
    assert_eq!(c.break_end, date(2025, 6, 1));
}

#[test]
fn nationwide_2025_candidates() {
    let candidates = bridge_candidates(2025, "DE").unwrap();
    assert_eq!(candidates.len(), 9);
    assert!(candidates.windows(2).all(|w| w[0].date < w[1].date));

    // Mercredi : égalité de coût et de durée -> avant
    let new_year = &candidates[0];
    assert_eq!(new_year.kind, BridgeKind::Before);
    assert_eq!(new_year.bridging_days, vec![date(2024, 12, 30), date(2024, 12, 31)]);
    assert_eq!(new_year.total_days, 5);

    // Vendredi saint : jusqu'au week-end précédent
    let good_friday = &candidates[1];
    assert_eq!(good_friday.kind, BridgeKind::ExtendToWeekend);
    assert_eq!(good_friday.break_start, date(2025, 4, 12));
    assert_eq!(good_friday.break_end, date(2025, 4, 20));
    assert_eq!(good_friday.vacation_days, 4);
    assert_eq!(good_friday.total_days, 9);

    // Le 25.12 (jeudi) : le 26 est férié, seul le côté « avant » coûte des jours
    let christmas = candidates
        .iter()
        .find(|c| c.date == date(2025, 12, 25))
        .unwrap();
    assert_eq!(christmas.kind, BridgeKind::ExtendToWeekend);
    assert_eq!(
        christmas.bridging_days,
        vec![date(2025, 12, 22), date(2025, 12, 23), date(2025, 12, 24)]
    );
}

#[test]
fn no_weekend_candidates_and_invariants_hold() {
    for year in 2000..=2100 {
        for region in Region::ALL {
            let set = holidays(year, region).unwrap();
            for c in candidates_from_holidays(&set) {
                assert!(!calendar::is_weekend(c.date), "{year} {region} {}", c.holiday);
                assert_eq!(c.vacation_days as usize, c.bridging_days.len());
                assert!(c.vacation_days >= 1);
                assert_eq!(c.total_days, calendar::days_inclusive(c.break_start, c.break_end));
                for d in &c.bridging_days {
                    assert!(!calendar::is_weekend(*d));
                    assert!(!set.contains(*d));
                }
            }
        }
    }
}

#[test]
fn weekend_holidays_produce_no_candidate() {
    // 01.11.2025 est un samedi
    let candidates = bridge_candidates(2025, "BY").unwrap();
    assert!(candidates.iter().all(|c| c.date != date(2025, 11, 1)));
}

#[test]
fn isolated_holiday_is_skipped_silently() {
    let mut set = HolidaySet::new();
    for day in 2..=6 {
        set.insert(date(2025, 6, day), format!("Feiertag {day}"));
    }
    assert!(candidates_from_holidays(&set).is_empty());
}

#[test]
fn midweek_holiday_with_one_empty_side_spans_both_weekends() {
    let mut set = HolidaySet::new();
    set.insert(date(2025, 6, 2), "A");
    set.insert(date(2025, 6, 3), "B");
    set.insert(date(2025, 6, 4), "C");
    let candidates = candidates_from_holidays(&set);
    let wed = candidates
        .iter()
        .find(|c| c.date == date(2025, 6, 4))
        .unwrap();
    assert_eq!(wed.kind, BridgeKind::ExtendToWeekend);
    assert_eq!(wed.break_start, date(2025, 5, 31));
    assert_eq!(wed.break_end, date(2025, 6, 8));
    assert_eq!(wed.bridging_days, vec![date(2025, 6, 5), date(2025, 6, 6)]);
}

#[test]
fn equal_cost_prefers_longer_span() {
    // mardi férié, jeudi et vendredi fériés : un jour de chaque côté
    let mut set = HolidaySet::new();
    set.insert(date(2025, 6, 3), "Dienstag");
    set.insert(date(2025, 6, 5), "Donnerstag");
    set.insert(date(2025, 6, 6), "Freitag");
    let candidates = candidates_from_holidays(&set);
    let tue = candidates
        .iter()
        .find(|c| c.date == date(2025, 6, 3))
        .unwrap();
    assert_eq!(tue.kind, BridgeKind::After);
    assert_eq!(tue.bridging_days, vec![date(2025, 6, 4)]);
    assert_eq!(tue.total_days, 6);
}

#[test]
fn cheaper_side_before() {
    // mardi : lundi seul avant, mercredi..vendredi après
    let mut set = HolidaySet::new();
    set.insert(date(2025, 6, 3), "Dienstag");
    let c = &candidates_from_holidays(&set)[0];
    assert_eq!(c.kind, BridgeKind::Before);
    assert_eq!(c.bridging_days, vec![date(2025, 6, 2)]);
    assert_eq!(c.break_start, date(2025, 5, 31));
    assert_eq!(c.total_days, 4);
}
