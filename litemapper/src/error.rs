//! Error types produced while configuring and running the mapper.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while configuring a mapping or mapping a value.
///
/// Missing source fields and mismatched leaf types are deliberately *not*
/// errors: the mapper is loose and best-effort, and such destination fields
/// are silently left at their default values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// The top-level source value was null. Nothing is constructed.
    #[error("source value is null")]
    NullSource,

    /// A value that should have been an object map was something else.
    #[error("`{type_name}` did not serialise to an object")]
    NotAnObject {
        /// Name of the type whose serialised form was not an object.
        type_name: &'static str,
    },

    /// A rule named a field the destination type does not expose.
    #[error("`{field}` is not a writable field of `{type_name}`")]
    UnknownField {
        /// The offending field selector.
        field: String,
        /// Name of the destination type the selector was checked against.
        type_name: &'static str,
    },

    /// A member transform failed on either side of the value bridge.
    #[error("transform for `{field}` failed: {source}")]
    Transform {
        /// Destination field the transform was registered for.
        field: String,
        /// Underlying serialisation or deserialisation failure.
        #[source]
        source: Box<serde_json::Error>,
    },

    /// The source value could not be serialised into the value layer.
    #[error("failed to serialise source value: {0}")]
    Serialize(#[source] Box<serde_json::Error>),

    /// The mapped value could not be deserialised into the destination type.
    #[error("failed to build destination value: {0}")]
    Deserialize(#[source] Box<serde_json::Error>),
}

impl MapError {
    /// Construct an [`MapError::UnknownField`] for a rejected field selector.
    #[must_use]
    pub fn unknown_field(field: &str, type_name: &'static str) -> Self {
        Self::UnknownField {
            field: field.to_owned(),
            type_name,
        }
    }

    /// Construct a [`MapError::NotAnObject`] for a non-object value.
    #[must_use]
    pub const fn not_an_object(type_name: &'static str) -> Self {
        Self::NotAnObject { type_name }
    }

    /// Construct a [`MapError::Transform`] attributed to one destination field.
    #[must_use]
    pub fn transform(field: &str, source: serde_json::Error) -> Self {
        Self::Transform {
            field: field.to_owned(),
            source: Box::new(source),
        }
    }

    /// Construct a [`MapError::Serialize`] from the value bridge.
    #[must_use]
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize(Box::new(source))
    }

    /// Construct a [`MapError::Deserialize`] from the value bridge.
    #[must_use]
    pub fn deserialize(source: serde_json::Error) -> Self {
        Self::Deserialize(Box::new(source))
    }
}
