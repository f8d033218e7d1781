use serde::Serialize;

use crate::{
    error::AffordanceError,
    payload::{
        ports::{InputPayloadMetadata, PayloadMetadata, PropertyStream},
        types::PayloadProperties,
    },
    property::{ConfigurableProperty, Named, PropertyMetadata},
};

/// Input metadata over a plain [`PayloadMetadata`] that adds no
/// customization of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DelegatingInputPayloadMetadata<M = PayloadProperties> {
    #[serde(flatten)]
    metadata: M,
}

impl<M> DelegatingInputPayloadMetadata<M> {
    pub const fn of(metadata: M) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn into_inner(self) -> M {
        self.metadata
    }
}

impl<M: PayloadMetadata> PayloadMetadata for DelegatingInputPayloadMetadata<M> {
    fn stream(&self) -> PropertyStream<'_> {
        self.metadata.stream()
    }
}

impl<M: PayloadMetadata> InputPayloadMetadata for DelegatingInputPayloadMetadata<M> {
    fn apply_to<T>(&self, target: T) -> Result<T, AffordanceError>
    where
        T: ConfigurableProperty,
    {
        Ok(target)
    }

    fn customize<T, F>(&self, target: T, _customizer: F) -> Result<T, AffordanceError>
    where
        T: Named,
        F: FnOnce(&PropertyMetadata) -> T,
    {
        Ok(target)
    }

    fn i18n_codes(&self) -> Vec<String> {
        Vec::new()
    }
}
