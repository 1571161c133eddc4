pub mod entity_name;
pub mod file_plan;
pub mod post;

pub use crate::domain::DomainError;
pub use entity_name::EntityName;
pub use file_plan::{FilePlan, FileTarget};
pub use post::{Post, RemotePost, UploadedFile};
