use serde::{Deserialize, Serialize};

use crate::property::{Named, PropertyMetadata, PropertyMetadataConfigured};

/// Query parameter accepted by an affordance's target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParameter {
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    pattern: Option<String>,
}

impl QueryParameter {
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            pattern: None,
        }
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::optional(name)
        }
    }

    pub fn from_property(metadata: &PropertyMetadata) -> Self {
        Self::optional(metadata.name()).apply(metadata)
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

impl Named for QueryParameter {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PropertyMetadataConfigured for QueryParameter {
    fn apply(self, metadata: &PropertyMetadata) -> Self {
        Self {
            name: self.name,
            required: metadata.is_required(),
            pattern: metadata.pattern().map(str::to_string).or(self.pattern),
        }
    }
}
