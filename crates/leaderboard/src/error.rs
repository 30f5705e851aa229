use std::fmt::{self, Display};

/// Broad class of an [`Error`], surfaced to API clients as an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Configuration,
    Storage,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Storage => "STORAGE_ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    Fetch,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Fetch => "fetch",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot {action} {entity} because required property '{field}' is missing")]
    MissingField {
        action: Action,
        entity: &'static str,
        field: &'static str,
    },

    #[error("Cannot update {entity} because at least one property is required")]
    NothingToUpdate { entity: &'static str },

    #[error("The property '{field}' {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("{entity} not found for the id: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Category {id} has unknown scoring type {kind:?}")]
    UnknownScoringType { id: i32, kind: String },

    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Bucket(#[from] crate::bucket::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } | Self::NothingToUpdate { .. } | Self::InvalidField { .. } => {
                ErrorKind::Validation
            }
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::UnknownScoringType { .. } => ErrorKind::Configuration,
            Self::Database(_) | Self::Bucket(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn missing(action: Action, entity: &'static str, field: &'static str) -> Self {
        Self::MissingField {
            action,
            entity,
            field,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = Error::missing(Action::Create, "fisherman", "tournamentId");

        assert_eq!(
            err.to_string(),
            "Cannot create fisherman because required property 'tournamentId' is missing"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn storage_errors_surface_the_store_message() {
        let err = Error::from(sea_orm::DbErr::Custom("disk I/O error".to_string()));

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().contains("disk I/O error"));
    }

    #[test]
    fn unknown_scoring_type_is_a_configuration_error() {
        let err = Error::UnknownScoringType {
            id: 4,
            kind: "length".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.kind().code(), "CONFIGURATION_ERROR");
    }
}
