#![forbid(unsafe_code)]
//! Offplanner — planification de ponts (Brückentage) autour des jours fériés allemands.
//!
//! - Calcul déterministe des jours fériés (nationaux et par Land), Pâques inclus.
//! - Génération des ponts candidats autour de chaque férié en semaine.
//! - Sélection gloutonne sous budget de congés, sans double réservation d'un jour.
//! - Fusion des blocs adjacents pour le rapport.
//!
//! Tout est calculé en jours calendaires (`NaiveDate`), sans fuseau horaire.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::warn!($($arg)*);
    };
}

pub mod calendar;
pub mod error;
pub mod holidays;
pub mod model;
pub mod planner;

#[cfg(feature = "serde")]
pub mod io;
pub mod notification;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{easter_sunday, SUPPORTED_YEARS};
pub use holidays::{holidays, holidays_for_region};
pub use model::{BridgeCandidate, BridgeKind, CombinedBlock, HolidaySet, Region};
pub use notification::{prepare_reminder, Reminder, ReminderRenderer, TextReminder};
pub use planner::{
    bridge_candidates, build_plan, candidates_from_holidays, check_plan, merge_adjacent_blocks,
    select_plan, Budget, Plan, PlanError, PlanRequest,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Settings, Storage};
