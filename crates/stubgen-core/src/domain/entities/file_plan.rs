use std::path::{Path, PathBuf};

use crate::domain::{
    entities::EntityName,
    value_objects::{FileRole, TemplateKind},
};

/// A file the generator intends to create.
///
/// Computed fresh on every run; existence is only ever checked against the
/// filesystem at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// Absolute (or caller-rooted) path the file is written to.
    pub path: PathBuf,
    /// Path below the application root, used for classification.
    pub relative: PathBuf,
    pub role: FileRole,
    /// `None` when the path matched no marker.
    pub kind: Option<TemplateKind>,
}

impl FileTarget {
    pub fn new(app_root: &Path, relative: PathBuf, role: FileRole) -> Self {
        let kind = TemplateKind::classify(&relative);
        Self {
            path: app_root.join(&relative),
            relative,
            role,
            kind,
        }
    }
}

/// The eight targets for one entity, in generation order.
#[derive(Debug, Clone)]
pub struct FilePlan {
    pub name: EntityName,
    pub targets: Vec<FileTarget>,
}

impl FilePlan {
    pub fn for_entity(app_root: &Path, name: &EntityName) -> Self {
        let targets = FileRole::ALL
            .iter()
            .map(|role| FileTarget::new(app_root, role.relative_path(name), *role))
            .collect();

        Self {
            name: name.clone(),
            targets,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileTarget> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_eight_rooted_targets() {
        let plan = FilePlan::for_entity(Path::new("/srv/app"), &EntityName::new("Order"));

        assert_eq!(plan.len(), 8);
        assert!(plan.iter().all(|t| t.path.starts_with("/srv/app")));
        assert!(plan.iter().all(|t| t.kind.is_some()));
        assert_eq!(
            plan.targets[3].path,
            PathBuf::from("/srv/app/Http/Controllers/OrderController.php")
        );
    }

    #[test]
    fn marker_in_app_root_is_ignored() {
        // The root itself contains "Services" and "Models".
        let plan = FilePlan::for_entity(
            Path::new("/home/Services/Models/app"),
            &EntityName::new("Order"),
        );

        let kinds: Vec<_> = plan.iter().filter_map(|t| t.kind).collect();
        assert_eq!(kinds.len(), 8);
        assert_eq!(kinds[3], TemplateKind::Controller);
        assert_eq!(kinds[6], TemplateKind::StoreRequest);
    }
}
