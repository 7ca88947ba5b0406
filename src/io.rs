use crate::calendar;
use crate::model::BridgeCandidate;
use crate::planner::Plan;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Export JSON du plan complet (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path.as_ref(), s)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Export CSV des ponts retenus:
/// header `holiday,date,weekday,kind,vacation_days,total_days,bridging_days`
pub fn export_plan_csv<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "holiday",
        "date",
        "weekday",
        "kind",
        "vacation_days",
        "total_days",
        "bridging_days",
    ])?;
    for c in &plan.selected {
        let date = calendar::iso(c.date);
        let vacation = c.vacation_days.to_string();
        let total = c.total_days.to_string();
        let days = c
            .bridging_days
            .iter()
            .map(|d| calendar::iso(*d))
            .collect::<Vec<_>>()
            .join(";");
        w.write_record([
            c.holiday.as_str(),
            date.as_str(),
            calendar::weekday_name(c.date),
            c.kind.as_str(),
            vacation.as_str(),
            total.as_str(),
            days.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Rendu iCalendar : un événement « journée entière » par jour de congé posé.
pub fn render_ics(selected: &[BridgeCandidate]) -> anyhow::Result<String> {
    if selected.iter().all(|c| c.bridging_days.is_empty()) {
        bail!("nothing to export: the plan has no vacation days");
    }
    let mut ics = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Offplanner//DE\r\n");
    for c in selected {
        for day in &c.bridging_days {
            let start = ics_date(*day);
            // DTEND exclusif
            let end = ics_date(calendar::add_days(*day, 1));
            let uid = Uuid::new_v4().simple();
            ics.push_str("BEGIN:VEVENT\r\n");
            ics.push_str(&format!("UID:uid-{start}-{uid}@offplanner\r\n"));
            ics.push_str(&format!("DTSTAMP:{start}T000000Z\r\n"));
            ics.push_str(&format!("DTSTART;VALUE=DATE:{start}\r\n"));
            ics.push_str(&format!("DTEND;VALUE=DATE:{end}\r\n"));
            ics.push_str(&format!("SUMMARY:Urlaubstag: {}\r\n", c.holiday));
            ics.push_str("END:VEVENT\r\n");
        }
    }
    ics.push_str("END:VCALENDAR");
    Ok(ics)
}

pub fn export_ics<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let ics = render_ics(&plan.selected)?;
    fs::write(path.as_ref(), ics)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Nom de fichier par défaut de l'export, ex. `urlaub_2025.ics`.
pub fn default_ics_name(year: i32) -> String {
    format!("urlaub_{year}.ics")
}

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
