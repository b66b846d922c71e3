use crate::{
    Error,
    Result,
};

// =============================================================================
// Key
// =============================================================================

/// Case-insensitive form of a child name, used to index a folder's children.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Key(String);

// -----------------------------------------------------------------------------
// Key - Methods
// -----------------------------------------------------------------------------

impl Key {
    /// Lowercasing first folds context-dependent forms such as the final
    /// sigma before uppercasing.
    pub(crate) fn from_name(name: &str) -> Self {
        Self(name.to_lowercase().to_uppercase())
    }

    /// Validates `name` as a child name before keying it. Names that a path
    /// would read as a separator, `.` or `..` are refused.
    pub(crate) fn parse(name: &str) -> Result<Self> {
        if name.is_empty() || name.contains('/') || name == "." || name == ".." {
            return Err(Error::InvalidName {
                name: name.to_owned(),
            });
        }

        Ok(Self::from_name(name))
    }
}
