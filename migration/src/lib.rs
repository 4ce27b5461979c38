pub use sea_orm_migration::prelude::*;

mod m20250815_093012_create_users_table;
mod m20250815_094138_create_refresh_tokens_table;
mod m20250815_100502_create_profiles_table;
mod m20250816_081207_create_posts_table;
mod m20250816_082946_create_tags_table;
mod m20250816_083310_create_post_tags_table;
mod m20250817_071425_create_comments_table;
mod m20250817_072911_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250815_093012_create_users_table::Migration),
            Box::new(m20250815_094138_create_refresh_tokens_table::Migration),
            Box::new(m20250815_100502_create_profiles_table::Migration),
            Box::new(m20250816_081207_create_posts_table::Migration),
            Box::new(m20250816_082946_create_tags_table::Migration),
            Box::new(m20250816_083310_create_post_tags_table::Migration),
            Box::new(m20250817_071425_create_comments_table::Migration),
            Box::new(m20250817_072911_create_likes_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(names: &[String], needle: &str) -> usize {
        names
            .iter()
            .position(|n| n.contains(needle))
            .unwrap_or_else(|| panic!("missing migration for {}", needle))
    }

    #[test]
    fn every_table_has_exactly_one_migration() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(names.len(), 8);
        for table in [
            "users",
            "refresh_tokens",
            "profiles",
            "create_posts",
            "create_tags",
            "post_tags",
            "comments",
            "likes",
        ] {
            assert_eq!(
                names.iter().filter(|n| n.contains(table)).count(),
                1,
                "expected exactly one migration for {}",
                table
            );
        }
    }

    #[test]
    fn referenced_tables_are_created_before_their_dependents() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        // refresh_tokens and profiles both declare FKs to users
        assert!(position(&names, "create_users") < position(&names, "refresh_tokens"));
        assert!(position(&names, "create_users") < position(&names, "profiles"));
        // post_tags declares FKs to both posts and tags
        assert!(position(&names, "create_posts") < position(&names, "post_tags"));
        assert!(position(&names, "create_tags") < position(&names, "post_tags"));
    }
}
