use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{AffordanceError, invalid_argument};

/// Opaque semantic type handle attached to a property or payload.
///
/// The crate never inspects the handle beyond its names; renderers may use
/// it to pick input widgets or schema types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(Cow<'static, str>);

impl TypeDescriptor {
    /// Used when no type can be determined for a property.
    pub const ANY: TypeDescriptor = TypeDescriptor(Cow::Borrowed("any"));

    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn named(qualified_name: impl Into<String>) -> Self {
        Self(Cow::Owned(qualified_name.into()))
    }

    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// Last path segment with generic arguments stripped,
    /// e.g. `shop::orders::Order` -> `Order`.
    pub fn simple_name(&self) -> &str {
        let without_generics = match self.0.find('<') {
            Some(index) => &self.0[..index],
            None => &self.0,
        };
        without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics)
    }

    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A component identified by a stable, non-empty name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A value that can fold [`PropertyMetadata`] constraints into a new
/// instance of itself. Implementations must keep the receiver's name.
pub trait PropertyMetadataConfigured: Sized {
    fn apply(self, metadata: &PropertyMetadata) -> Self;
}

/// Target of payload projections: named and configurable by metadata.
pub trait ConfigurableProperty: Named + PropertyMetadataConfigured {}

impl<T> ConfigurableProperty for T where T: Named + PropertyMetadataConfigured {}

/// Description of one field of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyMetadata {
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    read_only: bool,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default, rename = "type")]
    type_descriptor: TypeDescriptor,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            read_only: false,
            pattern: None,
            type_descriptor: TypeDescriptor::ANY,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_type(mut self, type_descriptor: TypeDescriptor) -> Self {
        self.type_descriptor = type_descriptor;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the property carries the given name.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `name` is empty or blank.
    pub fn has_name(&self, name: &str) -> Result<bool, AffordanceError> {
        if name.trim().is_empty() {
            return Err(invalid_argument("property name must not be empty"));
        }

        Ok(self.name == name)
    }

    /// Must be present in every representation or submission.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Must never be supplied by a client modifying state.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }
}

impl Named for PropertyMetadata {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PropertyMetadataConfigured for PropertyMetadata {
    fn apply(self, metadata: &PropertyMetadata) -> Self {
        Self {
            name: self.name,
            required: metadata.required,
            read_only: metadata.read_only,
            pattern: metadata.pattern.clone(),
            type_descriptor: metadata.type_descriptor.clone(),
        }
    }
}
