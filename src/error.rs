use thiserror::Error;

/// Errors the provisioner can hit. Database errors are surfaced unmodified;
/// the first failure aborts the run and the process exits non-zero.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid database principal name: {0:?}")]
    InvalidPrincipal(String),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
