// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stubgen.
//!
//! This module contains pure logic: no filesystem, no network, no console.
//! All I/O is reached through ports defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Planning, rendering and patching work on paths and strings
//! - **Few crates**: std, thiserror, serde, and regex for the provider patch
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod registration;
pub mod templates;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{EntityName, FilePlan, FileTarget, Post, RemotePost, UploadedFile};
pub use error::{DomainError, ErrorCategory};
pub use registration::{PatchOutcome, RegistrationPatch};
pub use value_objects::{FileRole, TemplateKind};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Plan → classify → render
    // ========================================================================

    #[test]
    fn every_planned_file_renders() {
        let name = EntityName::new("Invoice");
        let plan = FilePlan::for_entity(Path::new("app"), &name);

        for target in plan.iter() {
            let content = templates::render_opt(target.kind, &name);
            assert!(content.is_some(), "{} has no skeleton", target.relative.display());
        }
    }

    #[test]
    fn planned_class_names_match_rendered_classes() {
        let name = EntityName::new("Invoice");
        let plan = FilePlan::for_entity(Path::new("app"), &name);

        for target in plan.iter() {
            let class = target.role.class_name(&name);
            let content = templates::render_opt(target.kind, &name).unwrap();
            let declared = if target.role == FileRole::RepositoryInterface {
                format!("interface {class}")
            } else {
                format!("class {class}")
            };
            assert!(content.contains(&declared), "{declared} missing");
        }
    }

    #[test]
    fn file_stem_matches_class_name() {
        let name = EntityName::new("Customer");
        for role in FileRole::ALL {
            let path = role.relative_path(&name);
            assert_eq!(
                path.file_stem().and_then(|s| s.to_str()),
                Some(role.class_name(&name).as_str())
            );
        }
    }
}
