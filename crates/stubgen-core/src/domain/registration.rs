//! Interface-to-implementation binding for the service provider.
//!
//! The patch is plain text surgery on `AppServiceProvider.php`: a presence
//! check on literal substrings, an insertion after a fixed import line, and a
//! regex that finds the opening brace of `boot()`. It does not parse PHP. If
//! the provider drifts from the expected shape the anchors stop matching, and
//! [`PatchOutcome`] says which one went missing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{entities::EntityName, error::DomainError};

/// Import line the use statements are inserted after.
pub const USE_ANCHOR: &str = "use Illuminate\\Support\\ServiceProvider;";

/// Human-readable name of the boot anchor, for diagnostics.
pub const BOOT_ANCHOR: &str = "public function boot()";

// Signature through the first opening brace; tolerates `: void` and newlines.
static BOOT_OPENING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public function boot\(\)[^{]*\{").expect("boot anchor pattern is valid")
});

/// The two pieces of text one entity needs in the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPatch {
    pub use_statement: String,
    pub binding: String,
}

/// What [`RegistrationPatch::apply`] did to the provider text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Full provider text after patching; equal to the input when nothing
    /// was inserted.
    pub content: String,
    pub use_inserted: bool,
    pub binding_inserted: bool,
    /// Anchors that were needed but not found.
    pub missing_anchors: Vec<&'static str>,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.use_inserted || self.binding_inserted
    }

    /// `Err` for the first missing anchor, for callers that treat drift as
    /// fatal.
    pub fn require_anchors(&self) -> Result<(), DomainError> {
        match self.missing_anchors.first() {
            Some(&anchor) => Err(DomainError::AnchorNotFound { anchor }),
            None => Ok(()),
        }
    }
}

impl RegistrationPatch {
    pub fn for_entity(name: &EntityName) -> Self {
        Self {
            use_statement: format!(
                "use App\\Repositories\\Interface\\I{name};\n\
                 use App\\Repositories\\Implementation\\{name}Repository;"
            ),
            binding: format!("$this->app->bind(I{name}::class, {name}Repository::class);"),
        }
    }

    /// Whether both pieces are already present.
    pub fn is_applied(&self, content: &str) -> bool {
        content.contains(&self.use_statement) && content.contains(&self.binding)
    }

    /// Insert whatever is missing. Applying twice yields identical text.
    pub fn apply(&self, content: &str) -> PatchOutcome {
        let mut text = content.to_owned();
        let mut outcome = PatchOutcome {
            content: String::new(),
            use_inserted: false,
            binding_inserted: false,
            missing_anchors: Vec::new(),
        };

        if !text.contains(&self.use_statement) {
            if text.contains(USE_ANCHOR) {
                text = text.replacen(
                    USE_ANCHOR,
                    &format!("{USE_ANCHOR}\n{}", self.use_statement),
                    1,
                );
                outcome.use_inserted = true;
            } else {
                outcome.missing_anchors.push(USE_ANCHOR);
            }
        }

        if !text.contains(&self.binding) {
            match BOOT_OPENING.find(&text) {
                Some(m) => {
                    let insertion = format!("\n        {}", self.binding);
                    text.insert_str(m.end(), &insertion);
                    outcome.binding_inserted = true;
                }
                None => outcome.missing_anchors.push(BOOT_ANCHOR),
            }
        }

        outcome.content = text;
        outcome
    }
}
