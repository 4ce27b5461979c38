use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Opaque refresh token issued by the auth service. Rows are append-only
/// except for the revocation write into `revoked_at`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "auth", table_name = "refresh_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub token: String,
    pub expires_at: DateTimeWithTimeZone,
    pub revoked_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A token grants access only while unrevoked and unexpired.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at.with_timezone(&Utc) > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_at(expires_in: Duration, revoked: bool) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token: "opaque".to_string(),
            expires_at: (now + expires_in).into(),
            revoked_at: revoked.then(|| now.into()),
            created_at: now.into(),
        }
    }

    #[test]
    fn unrevoked_unexpired_token_is_valid() {
        assert!(token_at(Duration::hours(1), false).is_valid(Utc::now()));
    }

    #[test]
    fn expired_token_is_invalid() {
        assert!(!token_at(Duration::hours(-1), false).is_valid(Utc::now()));
    }

    #[test]
    fn revoked_token_is_invalid_even_before_expiry() {
        assert!(!token_at(Duration::hours(1), true).is_valid(Utc::now()));
    }
}
