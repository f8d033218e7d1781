use std::collections::HashSet;

use serde::Serialize;

use crate::{
    error::AffordanceError, http_method::HttpMethod, link::Expandable, model::AffordanceModel,
};

/// Insertion-ordered collection of affordances without structural duplicates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AffordanceSet {
    models: Vec<AffordanceModel>,
    #[serde(skip)]
    seen: HashSet<AffordanceModel>,
}

impl AffordanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an equal model is already present.
    pub fn insert(&mut self, model: AffordanceModel) -> bool {
        if self.seen.contains(&model) {
            tracing::warn!(
                target: "affordance",
                name = %model.name(),
                method = %model.http_method(),
                href = %model.link().href(),
                "duplicate_affordance_skipped"
            );
            return false;
        }

        self.seen.insert(model.clone());
        self.models.push(model);
        true
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AffordanceModel> {
        self.models.iter()
    }

    /// Models pointing to the same address as `link`.
    ///
    /// # Errors
    ///
    /// Propagates the first expansion failure.
    pub fn targeting<L>(&self, link: &L) -> Result<Vec<&AffordanceModel>, AffordanceError>
    where
        L: Expandable + ?Sized,
    {
        let mut matching = Vec::new();
        for model in &self.models {
            if model.points_to_target_of(link)? {
                matching.push(model);
            }
        }
        Ok(matching)
    }

    pub fn with_http_method(&self, method: HttpMethod) -> impl Iterator<Item = &AffordanceModel> {
        self.models
            .iter()
            .filter(move |model| model.has_http_method(method))
    }
}

impl Extend<AffordanceModel> for AffordanceSet {
    fn extend<I: IntoIterator<Item = AffordanceModel>>(&mut self, iter: I) {
        for model in iter {
            self.insert(model);
        }
    }
}

impl FromIterator<AffordanceModel> for AffordanceSet {
    fn from_iter<I: IntoIterator<Item = AffordanceModel>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a AffordanceSet {
    type Item = &'a AffordanceModel;
    type IntoIter = std::slice::Iter<'a, AffordanceModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
