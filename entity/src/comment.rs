use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Threaded comment. `post_id` and `author_id` are soft references into the
/// posts and auth schemas; only the parent pointer is a declared FK, so
/// deleting a parent removes the whole subtree while soft-deleted comments
/// keep their row as a tombstone for descendants.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "comments", table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub edited_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parent,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    /// `edited_at` only moves on a content edit, so its presence is the
    /// "edited" marker shown alongside the comment.
    pub fn edited(&self) -> bool {
        self.edited_at.is_some()
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment(parent_id: Option<Uuid>, edited_at: Option<DateTimeWithTimeZone>) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            parent_id,
            content: "hello".to_string(),
            is_deleted: false,
            created_at: now.into(),
            updated_at: now.into(),
            edited_at,
        }
    }

    #[test]
    fn top_level_comment_is_not_a_reply() {
        assert!(!comment(None, None).is_reply());
        assert!(comment(Some(Uuid::new_v4()), None).is_reply());
    }

    #[test]
    fn edited_flag_follows_edited_at() {
        assert!(!comment(None, None).edited());
        assert!(comment(None, Some(Utc::now().into())).edited());
    }
}
