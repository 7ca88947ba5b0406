#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use offplanner::{
    calendar, holidays, io,
    model::Region,
    notification::{prepare_reminder, TextReminder},
    planner::{self, build_plan, Budget, Plan, PlanRequest},
    storage::{JsonStorage, Settings, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

const DEFAULT_REGION: Region = Region::Nationwide;
const DEFAULT_BUDGET: u32 = 20;

/// Planificateur de ponts (Brückentage) autour des jours fériés allemands
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des préférences
    #[arg(long, global = true, default_value = "offplanner.json")]
    settings: String,

    #[command(subcommand)]
    cmd: Commands,
}

/// Sélection année / Land / budget ; les valeurs absentes viennent des préférences.
#[derive(Args, Debug, Clone, Default)]
struct Selection {
    #[arg(long)]
    year: Option<i32>,
    /// Code du Land (DE, BW, BY, ...) ; un code inconnu vaut DE
    #[arg(long)]
    region: Option<String>,
    /// Jours de congé disponibles ; une saisie non numérique ou négative vaut 0
    #[arg(long, allow_hyphen_values = true)]
    budget: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les codes de Land
    Regions,

    /// Lister les jours fériés d'une année
    Holidays {
        #[command(flatten)]
        sel: Selection,
    },

    /// Lister tous les ponts candidats
    Candidates {
        #[command(flatten)]
        sel: Selection,
    },

    /// Calculer le plan recommandé et l'exporter
    Plan {
        #[command(flatten)]
        sel: Selection,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Export iCalendar des jours de congé (`urlaub_<année>.ics` sans chemin)
        #[arg(long)]
        ics: Option<Option<String>>,
    },

    /// Générer un aperçu texte des blocs de congés retenus
    Remind {
        #[command(flatten)]
        sel: Selection,
        /// Ne garder que les blocs non terminés à cette date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },

    /// Mémoriser des valeurs par défaut
    Config {
        #[command(flatten)]
        sel: Selection,
    },
}

struct Resolved {
    year: i32,
    region: Region,
    budget: Budget,
}

impl Selection {
    fn to_settings(&self) -> Settings {
        Settings {
            year: self.year,
            region: self.region.as_deref().map(Region::from_code_or_nationwide),
            budget: self.budget.as_deref().map(Budget::parse_lenient),
        }
    }

    fn resolve(&self, stored: &Settings) -> Resolved {
        let merged = self.to_settings().or(stored.clone());
        Resolved {
            year: merged.year.unwrap_or_else(|| Local::now().year()),
            region: merged.region.unwrap_or(DEFAULT_REGION),
            budget: merged.budget.unwrap_or(Budget::from(DEFAULT_BUDGET)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.settings)?;
    let stored = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::Regions => {
            for region in Region::ALL {
                println!("{} | {}", region.code(), region.display_name());
            }
            0
        }
        Commands::Holidays { sel } => {
            let r = sel.resolve(&stored);
            let set = holidays::holidays(r.year, r.region)?;
            for (date, name) in set.iter() {
                println!(
                    "{} | {:<10} | {}",
                    calendar::iso(date),
                    calendar::weekday_name(date),
                    name
                );
            }
            println!("Total: {} holiday(s)", set.len());
            0
        }
        Commands::Candidates { sel } => {
            let r = sel.resolve(&stored);
            let candidates = planner::bridge_candidates(r.year, r.region.code())?;
            for c in &candidates {
                println!(
                    "{} | {} | {} | {} | {}/{} | {} - {}",
                    calendar::iso(c.date),
                    c.holiday,
                    c.kind.label(),
                    format_bridging(&c.bridging_days),
                    c.vacation_days,
                    c.total_days,
                    calendar::german(c.break_start),
                    calendar::german(c.break_end)
                );
            }
            0
        }
        Commands::Plan {
            sel,
            out_json,
            out_csv,
            ics,
        } => {
            let plan = compute(&sel, &stored)?;
            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(path) = out_csv {
                io::export_plan_csv(path, &plan)?;
            }
            if let Some(path) = ics {
                if !plan.is_empty() {
                    let path = path.unwrap_or_else(|| io::default_ics_name(plan.year));
                    io::export_ics(&path, &plan)?;
                    println!("Kalender exportiert: {path}");
                }
            }
            print_plan(&plan)
        }
        Commands::Remind { sel, from, out } => {
            let plan = compute(&sel, &stored)?;
            let from = from.as_deref().map(calendar::parse_iso).transpose()?;
            let reminder = prepare_reminder(&plan, from, &TextReminder)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &reminder.content)
                        .with_context(|| format!("writing {path}"))?;
                    println!(
                        "Reminder generated for {} {} ({} block(s))",
                        reminder.region, reminder.year, reminder.blocks
                    );
                }
                None => print!("{}", reminder.content),
            }
            0
        }
        Commands::Config { sel } => {
            let merged = sel.to_settings().or(stored);
            storage.save(&merged)?;
            println!("Settings saved to {}", storage.path().display());
            0
        }
    };

    std::process::exit(code);
}

fn compute(sel: &Selection, stored: &Settings) -> Result<Plan> {
    let r = sel.resolve(stored);
    let request = PlanRequest::new(r.year, r.region.code(), r.budget);
    Ok(build_plan(&request)?)
}

fn print_plan(plan: &Plan) -> i32 {
    println!(
        "Urlaubsplaner mit Brückentagen für {} im Jahr {}",
        plan.region.display_name(),
        plan.year
    );
    if plan.is_empty() {
        println!("Keine Vorschläge");
        // Code 2 = plan vide
        return 2;
    }
    for c in &plan.selected {
        println!(
            "{} | {} | {} | {} | {} | {} | {}",
            c.holiday,
            calendar::german(c.date),
            calendar::weekday_name(c.date),
            c.kind.label(),
            c.vacation_days,
            c.total_days,
            format_bridging(&c.bridging_days)
        );
    }
    println!(
        "Insgesamt verwendete Urlaubstage: {} von {}",
        plan.vacation_days_used(),
        plan.budget.get()
    );
    for block in &plan.combined {
        println!(
            "Kombi: {} | {} - {} | {} | {}",
            block.label(),
            calendar::german(block.break_start),
            calendar::german(block.break_end),
            block.vacation_days,
            block.total_days
        );
    }
    0
}

/// `DD.MM.` séparés par des virgules, `–` si la liste est vide.
fn format_bridging(days: &[NaiveDate]) -> String {
    if days.is_empty() {
        return "–".to_string();
    }
    days.iter()
        .map(|d| d.format("%d.%m.").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
