//! BSON document models and their conversions to/from domain entities.

mod post;
mod user;

pub use post::{CommentDocument, LikeDocument, PostDocument};
pub use user::UserDocument;
