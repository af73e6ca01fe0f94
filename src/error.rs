use thiserror::Error;

/// Raised only by the unchecked accessors ([`Optional::try_unwrap`] and
/// [`Optional::force_unwrap`]) when they are used on an absent value.
///
/// [`Optional::try_unwrap`]: crate::Optional::try_unwrap
/// [`Optional::force_unwrap`]: crate::Optional::force_unwrap
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbsentValueError {
    #[error("force unwrap of an absent optional of type `{type_name}`")]
    ForceUnwrap { type_name: &'static str },
}

impl AbsentValueError {
    pub(crate) fn force_unwrap<T>() -> Self {
        AbsentValueError::ForceUnwrap {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the type the caller expected to find.
    pub fn type_name(&self) -> &'static str {
        match self {
            AbsentValueError::ForceUnwrap { type_name } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_type() {
        let err = AbsentValueError::force_unwrap::<i32>();
        assert_eq!(err.type_name(), "i32");
        assert_eq!(
            err.to_string(),
            "force unwrap of an absent optional of type `i32`"
        );
    }
}
