use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create likes.likes table
        //
        // post_id and user_id are soft references; unliking
        // deletes the row outright, there is no tombstone.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table((Alias::new("likes"), Likes::Table))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Likes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Likes::PostId).uuid().not_null())
                    .col(ColumnDef::new(Likes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Likes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One like per user per post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS uq_likes_post_id_user_id
                ON likes.likes (post_id, user_id);
                "#,
            )
            .await?;

        // Like count per post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_likes_post_id
                ON likes.likes (post_id);
                "#,
            )
            .await?;

        // Posts a user has liked
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_likes_user_id
                ON likes.likes (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS likes.uq_likes_post_id_user_id;
                DROP INDEX IF EXISTS likes.idx_likes_post_id;
                DROP INDEX IF EXISTS likes.idx_likes_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Alias::new("likes"), Likes::Table))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Likes {
    Table,
    Id,
    PostId,
    UserId,
    CreatedAt,
}
