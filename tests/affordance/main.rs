mod builder;
mod property;
mod set;

use affordance::{Named, PropertyMetadata, PropertyMetadataConfigured};

/// Minimal renderer-side property, the way a form renderer would hold one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProperty {
    pub name: String,
    pub required: bool,
    pub read_only: bool,
    pub pattern: Option<String>,
    pub value: Option<String>,
}

impl FormProperty {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            read_only: false,
            pattern: None,
            value: None,
        }
    }
}

impl Named for FormProperty {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PropertyMetadataConfigured for FormProperty {
    fn apply(self, metadata: &PropertyMetadata) -> Self {
        Self {
            required: metadata.is_required(),
            read_only: metadata.is_read_only(),
            pattern: metadata.pattern().map(str::to_string),
            ..self
        }
    }
}

pub fn create_form_property(metadata: &PropertyMetadata) -> FormProperty {
    FormProperty::named(metadata.name())
}
