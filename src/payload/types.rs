use serde::Serialize;

use crate::{
    error::AffordanceError,
    payload::{
        delegating::DelegatingInputPayloadMetadata,
        ports::{InputPayloadMetadata, PayloadMetadata, PropertyStream},
    },
    property::{ConfigurableProperty, Named, PropertyMetadata, TypeDescriptor},
};

/// Ordered property set; the generic [`PayloadMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PayloadProperties {
    properties: Vec<PropertyMetadata>,
}

impl PayloadProperties {
    /// Payload without any properties, e.g. for a body-less GET.
    pub const NONE: PayloadProperties = PayloadProperties {
        properties: Vec::new(),
    };

    pub fn new(properties: impl IntoIterator<Item = PropertyMetadata>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<PropertyMetadata> for PayloadProperties {
    fn from_iter<I: IntoIterator<Item = PropertyMetadata>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl PayloadMetadata for PayloadProperties {
    fn stream(&self) -> PropertyStream<'_> {
        Box::new(self.properties.iter())
    }
}

/// Input metadata derived from a domain type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypedInputPayloadMetadata {
    #[serde(rename = "type")]
    type_descriptor: TypeDescriptor,
    #[serde(flatten)]
    properties: PayloadProperties,
}

impl TypedInputPayloadMetadata {
    pub fn new(type_descriptor: TypeDescriptor, properties: PayloadProperties) -> Self {
        Self {
            type_descriptor,
            properties,
        }
    }

    pub fn of<T: ?Sized>(properties: PayloadProperties) -> Self {
        Self::new(TypeDescriptor::of::<T>(), properties)
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    pub fn properties(&self) -> &PayloadProperties {
        &self.properties
    }
}

impl PayloadMetadata for TypedInputPayloadMetadata {
    fn stream(&self) -> PropertyStream<'_> {
        self.properties.stream()
    }
}

impl InputPayloadMetadata for TypedInputPayloadMetadata {
    fn customize<T, F>(&self, target: T, customizer: F) -> Result<T, AffordanceError>
    where
        T: Named,
        F: FnOnce(&PropertyMetadata) -> T,
    {
        Ok(match self.property_metadata(target.name())? {
            Some(metadata) => customizer(metadata),
            None => target,
        })
    }

    fn i18n_codes(&self) -> Vec<String> {
        let qualified = self.type_descriptor.qualified_name();
        let simple = self.type_descriptor.simple_name();

        let mut codes = vec![qualified.to_string()];
        if simple != qualified {
            codes.push(simple.to_string());
        }
        codes
    }
}

/// Input metadata as stored on an affordance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputPayload {
    Delegating(DelegatingInputPayloadMetadata<PayloadProperties>),
    Typed(TypedInputPayloadMetadata),
}

impl InputPayload {
    /// No request body.
    pub const NONE: InputPayload =
        InputPayload::Delegating(DelegatingInputPayloadMetadata::of(PayloadProperties::NONE));

    /// Adapts any supported metadata; plain payload metadata is wrapped in
    /// [`DelegatingInputPayloadMetadata`], input metadata is kept as is.
    pub fn from_metadata(metadata: impl Into<InputPayload>) -> Self {
        metadata.into()
    }

    pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Delegating(_) => None,
            Self::Typed(typed) => Some(typed.type_descriptor()),
        }
    }
}

impl Default for InputPayload {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<PayloadProperties> for InputPayload {
    fn from(value: PayloadProperties) -> Self {
        Self::Delegating(DelegatingInputPayloadMetadata::of(value))
    }
}

impl From<DelegatingInputPayloadMetadata<PayloadProperties>> for InputPayload {
    fn from(value: DelegatingInputPayloadMetadata<PayloadProperties>) -> Self {
        Self::Delegating(value)
    }
}

impl From<TypedInputPayloadMetadata> for InputPayload {
    fn from(value: TypedInputPayloadMetadata) -> Self {
        Self::Typed(value)
    }
}

impl PayloadMetadata for InputPayload {
    fn stream(&self) -> PropertyStream<'_> {
        match self {
            Self::Delegating(delegating) => delegating.stream(),
            Self::Typed(typed) => typed.stream(),
        }
    }
}

impl InputPayloadMetadata for InputPayload {
    fn apply_to<T>(&self, target: T) -> Result<T, AffordanceError>
    where
        T: ConfigurableProperty,
    {
        match self {
            Self::Delegating(delegating) => delegating.apply_to(target),
            Self::Typed(typed) => typed.apply_to(target),
        }
    }

    fn customize<T, F>(&self, target: T, customizer: F) -> Result<T, AffordanceError>
    where
        T: Named,
        F: FnOnce(&PropertyMetadata) -> T,
    {
        match self {
            Self::Delegating(delegating) => delegating.customize(target, customizer),
            Self::Typed(typed) => typed.customize(target, customizer),
        }
    }

    fn i18n_codes(&self) -> Vec<String> {
        match self {
            Self::Delegating(delegating) => delegating.i18n_codes(),
            Self::Typed(typed) => typed.i18n_codes(),
        }
    }
}
