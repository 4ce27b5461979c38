pub use super::comment::Entity as Comment;
pub use super::like::Entity as Like;
pub use super::post::Entity as Post;
pub use super::post_tag::Entity as PostTag;
pub use super::profile::Entity as Profile;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
