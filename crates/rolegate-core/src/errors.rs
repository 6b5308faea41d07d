use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced by the RBAC core. All of them are recoverable and meant to be
/// shown to the caller, never to abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An unknown module or permission id was passed to a catalog lookup.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A portal value outside the closed portal table.
    #[error("invalid portal: {0}")]
    InvalidPortal(String),

    /// Field-level validation failure (e.g. a role without a name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Catalog data that does not partition permissions into modules.
    #[error("invalid permission catalog: {0}")]
    InvalidCatalog(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn invalid_portal(value: impl Into<String>) -> Self {
        Self::InvalidPortal(value.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Joins every field message into a single line, falling back to
/// `"<field> is invalid"` when a rule carries no message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(format_validation_errors(&errors))
    }
}
