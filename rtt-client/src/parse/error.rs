//! Parse error types.

/// Error mapping a JSON value onto a model type.
///
/// Every variant except [`ParseError::Upstream`] means the response did
/// not have the expected structure. `entity` names the model type being
/// built when the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value for an entity was not a JSON object.
    #[error("{entity}: expected a JSON object")]
    NotAnObject { entity: &'static str },

    /// A mandatory key is absent.
    #[error("{entity}: missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A present, non-null value has the wrong JSON type.
    #[error("{entity}: field `{field}` should be {expected}")]
    WrongType {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// A value has the right type but breaks an entity invariant.
    #[error("{entity}: field `{field}` {reason}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        reason: &'static str,
    },

    /// A date field is not in `YYYY-MM-DD` form.
    #[error("{entity}: invalid date {value}, expected YYYY-MM-DD")]
    InvalidDate { entity: &'static str, value: String },

    /// The API answered successfully but reported an error in the body.
    #[error("upstream error: {message}")]
    Upstream { message: String },
}

impl ParseError {
    /// Whether the response itself was malformed (as opposed to an
    /// application error reported by the API).
    pub fn is_structural(&self) -> bool {
        !matches!(self, ParseError::Upstream { .. })
    }

    /// The message the API sent, for [`ParseError::Upstream`].
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            ParseError::Upstream { message } => Some(message),
            _ => None,
        }
    }
}
