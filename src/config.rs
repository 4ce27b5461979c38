use std::env;

use crate::error::ProvisionError;

/// Connection target and the principal the schemas are granted to, both
/// provided through the environment by whatever invokes the provisioner.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    pub database_url: String,
    pub app_user: String,
}

impl ProvisionerConfig {
    /// Load configuration from environment variables.
    ///
    /// Tries `.env.{RUST_ENV}` first, then falls back to `.env`.
    pub fn from_env() -> Result<Self, ProvisionError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ProvisionError::MissingEnv("DATABASE_URL"))?;
        let app_user =
            env::var("DB_APP_USER").map_err(|_| ProvisionError::MissingEnv("DB_APP_USER"))?;

        // The principal name is spliced into GRANT statements verbatim
        if !is_valid_identifier(&app_user) {
            return Err(ProvisionError::InvalidPrincipal(app_user));
        }

        Ok(Self {
            database_url,
            app_user,
        })
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_role_names() {
        assert!(is_valid_identifier("blog_app"));
        assert!(is_valid_identifier("_svc"));
        assert!(is_valid_identifier("app2"));
    }

    #[test]
    fn rejects_names_that_need_quoting_or_worse() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("app user"));
        assert!(!is_valid_identifier("app\"; DROP SCHEMA auth; --"));
    }

    // Runs env-var scenarios sequentially in one test body; the process
    // environment is shared across test threads.
    #[test]
    fn from_env_reports_missing_variables_instead_of_panicking() {
        env::remove_var("DATABASE_URL");
        env::remove_var("DB_APP_USER");
        assert!(matches!(
            ProvisionerConfig::from_env(),
            Err(ProvisionError::MissingEnv("DATABASE_URL"))
        ));

        env::set_var("DATABASE_URL", "postgres://localhost/blog");
        assert!(matches!(
            ProvisionerConfig::from_env(),
            Err(ProvisionError::MissingEnv("DB_APP_USER"))
        ));

        env::set_var("DB_APP_USER", "not a role!");
        assert!(matches!(
            ProvisionerConfig::from_env(),
            Err(ProvisionError::InvalidPrincipal(_))
        ));

        env::set_var("DB_APP_USER", "blog_app");
        let config = ProvisionerConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/blog");
        assert_eq!(config.app_user, "blog_app");

        env::remove_var("DATABASE_URL");
        env::remove_var("DB_APP_USER");
    }
}
