use crate::calendar;
use crate::model::BridgeCandidate;
use crate::planner::Plan;
use anyhow::{bail, Result};
use chrono::NaiveDate;

/// Aperçu des blocs de congés à venir, prêt à être affiché ou envoyé.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub year: i32,
    pub region: String,
    pub blocks: usize,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait ReminderRenderer {
    fn render(&self, blocks: &[&BridgeCandidate]) -> String;
}

/// Liste texte simple, une ligne par bloc.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(&self, blocks: &[&BridgeCandidate]) -> String {
        let mut out = String::from("Geplante Urlaubsblöcke:\n\n");
        for b in blocks {
            out.push_str(&format!(
                "{}: {} bis {}\n",
                b.holiday,
                calendar::german(b.break_start),
                calendar::german(b.break_end)
            ));
        }
        out
    }
}

/// Prépare un rappel listant les blocs retenus du plan.
///
/// Avec `from`, seuls les blocs qui ne sont pas terminés à cette date sont gardés.
pub fn prepare_reminder(
    plan: &Plan,
    from: Option<NaiveDate>,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    if plan.selected.is_empty() {
        bail!("no vacation suggestions in the plan");
    }

    let blocks: Vec<&BridgeCandidate> = plan
        .selected
        .iter()
        .filter(|c| from.map_or(true, |day| c.break_end >= day))
        .collect();

    if let (Some(day), true) = (from, blocks.is_empty()) {
        bail!("no vacation block left after {}", calendar::iso(day));
    }

    let content = renderer.render(&blocks);
    Ok(Reminder {
        year: plan.year,
        region: plan.region.code().to_string(),
        blocks: blocks.len(),
        content,
    })
}
