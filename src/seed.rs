use entity::tag;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::info;

use crate::error::ProvisionError;

/// Fixed tag taxonomy guaranteed present after provisioning.
pub const SEED_TAGS: [(&str, &str); 5] = [
    ("Technology", "technology"),
    ("Programming", "programming"),
    ("Tutorial", "tutorial"),
    ("News", "news"),
    ("Opinion", "opinion"),
];

/// Step 6: insert the fixed tags with insert-once semantics. A name that is
/// already present is left exactly as it is, so re-runs never duplicate or
/// overwrite rows, and tags added by operators afterwards are untouched.
pub async fn seed_tags(db: &DatabaseConnection) -> Result<(), ProvisionError> {
    let rows = SEED_TAGS.iter().map(|(name, slug)| tag::ActiveModel {
        name: Set((*name).to_string()),
        slug: Set((*slug).to_string()),
        ..Default::default()
    });

    let inserted = tag::Entity::insert_many(rows)
        .on_conflict(OnConflict::column(tag::Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    info!("Tag seed complete ({} new rows)", inserted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction, Value};

    #[tokio::test]
    async fn seed_is_a_single_insert_once_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 5,
            }])
            .into_connection();

        seed_tags(&db).await.unwrap();

        // One statement, ids left to the column default, conflicting names
        // skipped instead of updated
        let values: Vec<Value> = SEED_TAGS
            .iter()
            .flat_map(|(name, slug)| [(*name).into(), (*slug).into()])
            .collect();
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO "posts"."tags" ("name", "slug") VALUES ($1, $2), ($3, $4), ($5, $6), ($7, $8), ($9, $10) ON CONFLICT ("name") DO NOTHING"#,
                values,
            )]
        );
    }

    #[tokio::test]
    async fn rerun_with_all_rows_present_is_not_an_error() {
        // Postgres reports zero affected rows when every name conflicts
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        assert!(seed_tags(&db).await.is_ok());
    }
}
