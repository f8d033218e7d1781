use std::fmt;

use crate::{
    error::AffordanceError,
    property::{ConfigurableProperty, Named, PropertyMetadata},
};

/// Fresh, independent traversal over a payload's properties.
pub type PropertyStream<'a> = Box<dyn Iterator<Item = &'a PropertyMetadata> + 'a>;

/// Structural description of a request or response body.
pub trait PayloadMetadata: fmt::Debug + Send + Sync {
    /// Every call yields a new traversal; no cursor is shared between calls.
    fn stream(&self) -> PropertyStream<'_>;

    /// First property carrying `name`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `name` is empty or blank.
    fn property_metadata(&self, name: &str) -> Result<Option<&PropertyMetadata>, AffordanceError> {
        for property in self.stream() {
            if property.has_name(name)? {
                return Ok(Some(property));
            }
        }
        Ok(None)
    }
}

/// Payload metadata for incoming requests, able to project itself onto
/// caller-defined property types.
pub trait InputPayloadMetadata: PayloadMetadata {
    /// Creates one target per property. Metadata matched by name is applied
    /// to the creator's output before it is handed to `customizer`; targets
    /// without a match are kept as created.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when the creator yields a target
    /// with a blank name.
    fn create_properties<T, C, F>(
        &self,
        mut creator: C,
        mut customizer: F,
    ) -> Result<Vec<T>, AffordanceError>
    where
        T: ConfigurableProperty,
        C: FnMut(&PropertyMetadata) -> T,
        F: FnMut(T, &PropertyMetadata) -> T,
    {
        let mut properties = Vec::new();
        for property in self.stream() {
            let target = creator(property);
            let created = match self.property_metadata(target.name())? {
                Some(metadata) => customizer(target.apply(metadata), metadata),
                None => target,
            };
            properties.push(created);
        }

        tracing::debug!(
            target: "affordance",
            count = properties.len(),
            "payload_properties_created"
        );
        Ok(properties)
    }

    /// Applies the metadata named like `target`, if any.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when `target` has a blank name.
    fn apply_to<T>(&self, target: T) -> Result<T, AffordanceError>
    where
        T: ConfigurableProperty,
    {
        Ok(match self.property_metadata(target.name())? {
            Some(metadata) => target.apply(metadata),
            None => target,
        })
    }

    /// Implementation-specific customization of a single named target.
    ///
    /// # Errors
    ///
    /// Implementations that look up metadata by name fail on blank names.
    fn customize<T, F>(&self, target: T, customizer: F) -> Result<T, AffordanceError>
    where
        T: Named,
        F: FnOnce(&PropertyMetadata) -> T;

    /// Candidate keys for a human-readable payload label, most specific first.
    fn i18n_codes(&self) -> Vec<String>;
}
