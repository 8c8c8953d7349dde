use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("user count {got} is outside the supported range {min}..={max}")]
    UserCountOutOfRange { got: u32, min: u32, max: u32 },
    #[error("unsupported usage intensity `{0}` (expected low|normal|intensive)")]
    UnknownIntensity(String),
    #[error("unknown tier `{0}`")]
    UnknownTier(String),
}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn out_of_range_message_names_the_bounds() {
        let error = DomainError::UserCountOutOfRange { got: 250, min: 1, max: 200 };
        assert_eq!(
            error.to_string(),
            "user count 250 is outside the supported range 1..=200"
        );
    }

    #[test]
    fn unknown_intensity_message_lists_accepted_values() {
        let error = DomainError::UnknownIntensity("extreme".to_owned());
        assert!(error.to_string().contains("low|normal|intensive"));
    }
}
