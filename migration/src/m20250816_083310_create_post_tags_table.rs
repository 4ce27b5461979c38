use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create posts.post_tags join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table((Alias::new("posts"), PostTags::Table))
                    .if_not_exists()
                    .col(ColumnDef::new(PostTags::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostTags::TagId).uuid().not_null())
                    // Composite primary key
                    .primary_key(Index::create().col(PostTags::PostId).col(PostTags::TagId))
                    // FK → posts
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tags_post_id")
                            .from((Alias::new("posts"), PostTags::Table), PostTags::PostId)
                            .to((Alias::new("posts"), Posts::Table), Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → tags
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tags_tag_id")
                            .from((Alias::new("posts"), PostTags::Table), PostTags::TagId)
                            .to((Alias::new("posts"), Tags::Table), Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all posts for a tag
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_post_tags_tag_id
                ON posts.post_tags (tag_id);
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
                DROP INDEX IF EXISTS posts.idx_post_tags_tag_id;
                "#,
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Alias::new("posts"), PostTags::Table))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum PostTags {
    Table,
    PostId,
    TagId,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
}
