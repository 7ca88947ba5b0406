use thiserror::Error;

/// Erreurs du moteur de fériés et du planificateur.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("unsupported year {0}: Gregorian Easter needs 1583..=9999")]
    UnsupportedYear(i32),
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
