pub mod prelude;

pub mod comment;
pub mod like;
pub mod post;
pub mod post_tag;
pub mod profile;
pub mod refresh_token;
pub mod tag;
pub mod user;

#[cfg(test)]
mod tests {
    use sea_orm::EntityName;

    #[test]
    fn entities_cover_the_provisioned_tables() {
        let surface: [(Option<&str>, &str); 8] = [
            (
                crate::user::Entity.schema_name(),
                crate::user::Entity.table_name(),
            ),
            (
                crate::refresh_token::Entity.schema_name(),
                crate::refresh_token::Entity.table_name(),
            ),
            (
                crate::profile::Entity.schema_name(),
                crate::profile::Entity.table_name(),
            ),
            (
                crate::post::Entity.schema_name(),
                crate::post::Entity.table_name(),
            ),
            (
                crate::tag::Entity.schema_name(),
                crate::tag::Entity.table_name(),
            ),
            (
                crate::post_tag::Entity.schema_name(),
                crate::post_tag::Entity.table_name(),
            ),
            (
                crate::comment::Entity.schema_name(),
                crate::comment::Entity.table_name(),
            ),
            (
                crate::like::Entity.schema_name(),
                crate::like::Entity.table_name(),
            ),
        ];

        assert_eq!(
            surface,
            [
                (Some("auth"), "users"),
                (Some("auth"), "refresh_tokens"),
                (Some("profiles"), "profiles"),
                (Some("posts"), "posts"),
                (Some("posts"), "tags"),
                (Some("posts"), "post_tags"),
                (Some("comments"), "comments"),
                (Some("likes"), "likes"),
            ]
        );
    }
}
