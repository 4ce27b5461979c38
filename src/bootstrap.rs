use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

use crate::error::ProvisionError;

/// One Postgres schema per owning service, in provisioning order.
pub const NAMESPACES: [&str; 5] = ["auth", "profiles", "posts", "comments", "likes"];

/// uuid-ossp backs uuid_generate_v4(), pgcrypto backs gen_random_uuid();
/// both are needed for the uuid primary-key defaults.
const EXTENSIONS: [&str; 2] = ["uuid-ossp", "pgcrypto"];

/// Step 1: create the five service schemas, create-if-absent.
pub async fn create_namespaces(db: &DatabaseConnection) -> Result<(), ProvisionError> {
    for schema in NAMESPACES {
        db.execute_unprepared(&format!(r#"CREATE SCHEMA IF NOT EXISTS "{schema}";"#))
            .await?;
        info!("Schema {} ready", schema);
    }
    Ok(())
}

/// Step 2: enable the uuid/crypto extensions, create-if-absent.
pub async fn enable_extensions(db: &DatabaseConnection) -> Result<(), ProvisionError> {
    for ext in EXTENSIONS {
        db.execute_unprepared(&format!(r#"CREATE EXTENSION IF NOT EXISTS "{ext}";"#))
            .await?;
        info!("Extension {} ready", ext);
    }
    Ok(())
}

/// Step 3: grant each schema to the application principal. Re-granting an
/// already-granted privilege is a no-op in Postgres, never an error.
pub async fn grant_ownership(
    db: &DatabaseConnection,
    principal: &str,
) -> Result<(), ProvisionError> {
    for schema in NAMESPACES {
        db.execute_unprepared(&format!(
            r#"GRANT ALL PRIVILEGES ON SCHEMA "{schema}" TO "{principal}";"#
        ))
        .await?;
    }
    info!("Granted schema privileges to {}", principal);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn exec_ok(n: usize) -> Vec<MockExecResult> {
        (0..n)
            .map(|_| MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            })
            .collect()
    }

    #[tokio::test]
    async fn create_namespaces_emits_one_idempotent_statement_per_schema() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(exec_ok(5))
            .into_connection();

        create_namespaces(&db).await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 5);
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"CREATE SCHEMA IF NOT EXISTS "auth";"#,
                []
            )
        );
        assert_eq!(
            log[4],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"CREATE SCHEMA IF NOT EXISTS "likes";"#,
                []
            )
        );
    }

    #[tokio::test]
    async fn enable_extensions_covers_uuid_and_crypto() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(exec_ok(2))
            .into_connection();

        enable_extensions(&db).await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(
            log,
            [
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp";"#,
                    []
                ),
                Transaction::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto";"#,
                    []
                ),
            ]
        );
    }

    #[tokio::test]
    async fn grant_ownership_quotes_the_configured_principal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(exec_ok(5))
            .into_connection();

        grant_ownership(&db, "blog_app").await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 5);
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"GRANT ALL PRIVILEGES ON SCHEMA "auth" TO "blog_app";"#,
                []
            )
        );
    }

    #[tokio::test]
    async fn first_statement_failure_aborts_the_step() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([sea_orm::DbErr::Custom(
                "permission denied for database".to_string(),
            )])
            .into_connection();

        let result = create_namespaces(&db).await;

        assert!(result.is_err());
        // Only the failing statement was attempted
        assert_eq!(db.into_transaction_log().len(), 1);
    }
}
