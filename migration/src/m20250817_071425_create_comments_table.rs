use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create comments.comments table
        //
        // post_id and author_id are soft references into the
        // posts and auth schemas (no FK, same reasoning as
        // posts.author_id). parent_id threads replies within
        // this table; deleting a parent removes its subtree.
        // Nothing here requires a reply to share post_id with
        // its parent.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table((Alias::new("comments"), Comments::Table))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Comments::PostId).uuid().not_null())
                    .col(ColumnDef::new(Comments::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Comments::ParentId).uuid())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    // Tombstone instead of hard delete so descendant
                    // replies keep their place in the thread
                    .col(
                        ColumnDef::new(Comments::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Comments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Set only when the author edits the content,
                    // unlike updated_at which moves on any write
                    .col(ColumnDef::new(Comments::EditedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_parent_id")
                            .from((Alias::new("comments"), Comments::Table), Comments::ParentId)
                            .to((Alias::new("comments"), Comments::Table), Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Thread listing for a post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_comments_post_id
                ON comments.comments (post_id);
                "#,
            )
            .await?;

        // All comments by an author
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_comments_author_id
                ON comments.comments (author_id);
                "#,
            )
            .await?;

        // Reply expansion under a parent
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_comments_parent_id
                ON comments.comments (parent_id);
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
                DROP INDEX IF EXISTS comments.idx_comments_post_id;
                DROP INDEX IF EXISTS comments.idx_comments_author_id;
                DROP INDEX IF EXISTS comments.idx_comments_parent_id;
                "#,
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Alias::new("comments"), Comments::Table))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    AuthorId,
    ParentId,
    Content,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
    EditedAt,
}
