use thiserror::Error;

pub type RotoResult<T> = Result<T, RotoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RotoError {
    /// A zero-length vector reached an operation that divides by its magnitude.
    #[error("{op}: vector has zero magnitude")]
    DegenerateVector { op: &'static str },
    /// A vector with an infinite or NaN component has no usable direction.
    #[error("{op}: vector has a non-finite magnitude")]
    NonFiniteVector { op: &'static str },
}

impl RotoError {
    pub fn degenerate(op: &'static str) -> Self {
        log::debug!("rejecting zero-magnitude vector in {op}");
        Self::DegenerateVector { op }
    }

    pub fn non_finite(op: &'static str) -> Self {
        log::debug!("rejecting non-finite vector in {op}");
        Self::NonFiniteVector { op }
    }

    /// Same failure, attributed to the calling operation.
    pub fn in_op(self, op: &'static str) -> Self {
        match self {
            Self::DegenerateVector { .. } => Self::DegenerateVector { op },
            Self::NonFiniteVector { .. } => Self::NonFiniteVector { op },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no point given, use -point X,Y,Z")]
    MissingPoint,
    #[error("option {0} expects a value")]
    MissingValue(String),
    #[error("invalid vector '{0}', expected X,Y,Z")]
    InvalidVector(String),
    #[error("invalid angle '{0}'")]
    InvalidAngle(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

#[test]
fn degenerate_message_names_operation() {
    let err = RotoError::degenerate("normalize");
    assert_eq!(err.to_string(), "normalize: vector has zero magnitude");
}
