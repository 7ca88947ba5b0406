#![forbid(unsafe_code)]
use chrono::NaiveDate;
use offplanner::{
    build_plan, io, prepare_reminder, Budget, JsonStorage, Plan, PlanRequest, Region, Settings,
    Storage, TextReminder,
};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn small_plan() -> Plan {
    build_plan(&PlanRequest::new(2025, "DE", Budget::from(2))).unwrap()
}

#[test]
fn ics_has_one_all_day_event_per_leave_day() {
    let plan = small_plan();
    let ics = io::render_ics(&plan.selected).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Offplanner//DE\r\n"));
    assert!(ics.ends_with("END:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("DTSTART;VALUE=DATE:20250502\r\n"));
    assert!(ics.contains("DTEND;VALUE=DATE:20250503\r\n"));
    assert!(ics.contains("SUMMARY:Urlaubstag: Tag der Arbeit\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20250530\r\n"));
    assert!(ics.contains("UID:uid-20250530-"));
}

#[test]
fn ics_refuses_empty_plan() {
    let plan = build_plan(&PlanRequest::new(2025, "DE", Budget::ZERO)).unwrap();
    assert!(io::render_ics(&plan.selected).is_err());
    let dir = tempdir().unwrap();
    assert!(io::export_ics(dir.path().join("x.ics"), &plan).is_err());
    assert_eq!(io::default_ics_name(2025), "urlaub_2025.ics");
}

#[test]
fn csv_and_json_exports() {
    let dir = tempdir().unwrap();
    let plan = small_plan();

    let csv_path = dir.path().join("plan.csv");
    io::export_plan_csv(&csv_path, &plan).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("holiday,date,weekday,kind,vacation_days,total_days,bridging_days")
    );
    assert_eq!(
        lines.next(),
        Some("Tag der Arbeit,2025-05-01,Donnerstag,after,1,4,2025-05-02")
    );
    assert_eq!(lines.count(), 1);

    let json_path = dir.path().join("plan.json");
    io::export_plan_json(&json_path, &plan).unwrap();
    let back: Plan = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn reminder_lists_blocks() {
    let plan = small_plan();
    let reminder = prepare_reminder(&plan, None, &TextReminder).unwrap();
    assert_eq!(reminder.blocks, 2);
    assert_eq!(reminder.region, "DE");
    insta::assert_snapshot!(reminder.content, @r"
    Geplante Urlaubsblöcke:

    Tag der Arbeit: 01.05.2025 bis 04.05.2025
    Christi Himmelfahrt: 29.05.2025 bis 01.06.2025
    ");
}

#[test]
fn reminder_lists_past_blocks_by_default() {
    let plan = build_plan(&PlanRequest::new(2025, "DE", Budget::from(10))).unwrap();
    let reminder = prepare_reminder(&plan, None, &TextReminder).unwrap();
    assert_eq!(reminder.blocks, plan.selected.len());
    assert!(reminder.content.contains("Neujahr"));

    let empty = build_plan(&PlanRequest::new(2025, "DE", Budget::ZERO)).unwrap();
    assert!(prepare_reminder(&empty, None, &TextReminder).is_err());
}

#[test]
fn reminder_from_date_keeps_unfinished_blocks() {
    let plan = small_plan();
    let reminder = prepare_reminder(&plan, Some(date(2025, 5, 10)), &TextReminder).unwrap();
    assert_eq!(reminder.blocks, 1);
    assert!(reminder.content.contains("Christi Himmelfahrt"));
    assert!(prepare_reminder(&plan, Some(date(2025, 7, 1)), &TextReminder).is_err());
}

#[test]
fn settings_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("offplanner.json")).unwrap();
    assert!(storage.load().is_err());

    let settings = Settings {
        year: Some(2026),
        region: Some(Region::SN),
        budget: Some(Budget::from(12)),
    };
    assert_eq!(storage.load_or_default().unwrap(), Settings::default());
    storage.save(&settings).unwrap();
    assert_eq!(storage.load().unwrap(), settings);

    let merged = Settings {
        year: Some(2027),
        ..Settings::default()
    }
    .or(settings);
    assert_eq!(merged.year, Some(2027));
    assert_eq!(merged.region, Some(Region::SN));
}

#[test]
fn corrupt_settings_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("offplanner.json");
    std::fs::write(&path, "{ not json").unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    let err = storage.load_or_default().unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}
