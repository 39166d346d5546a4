/// Errors raised while decoding or editing anchor properties.
///
/// The per-frame step never fails; these only surface at load time and from
/// editor edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnchorDataError {
    #[error("unknown edge anchor value {0} (expected 0..=4)")]
    UnknownAnchor(u8),

    #[error("unknown anchor property `{0}`")]
    UnknownProperty(String),

    #[error("invalid value `{value}` for anchor property `{property}`")]
    InvalidValue { property: String, value: String },
}

impl AnchorDataError {
    pub fn invalid_value(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            value: value.into(),
        }
    }
}
