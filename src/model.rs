use serde::Serialize;

use crate::{
    error::AffordanceError,
    http_method::HttpMethod,
    link::{Expandable, Link, Variables},
    payload::{InputPayload, PayloadProperties},
    query::QueryParameter,
};

/// Immutable description of one interaction a client may perform against a
/// resource.
///
/// Format-specific renderers hold an `AffordanceModel` rather than extend it;
/// equality and hashing only ever consider the six fields below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AffordanceModel {
    name: String,
    link: Link,
    http_method: HttpMethod,
    input: InputPayload,
    query_parameters: Vec<QueryParameter>,
    output: PayloadProperties,
}

impl AffordanceModel {
    pub fn new(
        name: impl Into<String>,
        link: Link,
        http_method: HttpMethod,
        input: impl Into<InputPayload>,
        query_parameters: impl IntoIterator<Item = QueryParameter>,
        output: PayloadProperties,
    ) -> Self {
        Self {
            name: name.into(),
            link,
            http_method,
            input: input.into(),
            query_parameters: query_parameters.into_iter().collect(),
            output,
        }
    }

    /// The link expanded without any variables.
    ///
    /// # Errors
    ///
    /// Propagates expansion failures, e.g. a required template variable.
    pub fn uri(&self) -> Result<String, AffordanceError> {
        self.link.expand_empty()
    }

    pub fn has_http_method(&self, method: HttpMethod) -> bool {
        self.http_method == method
    }

    /// Whether this affordance and `link` expand to the same address.
    ///
    /// # Errors
    ///
    /// Propagates expansion failures of either side.
    pub fn points_to_target_of<L>(&self, link: &L) -> Result<bool, AffordanceError>
    where
        L: Expandable + ?Sized,
    {
        Ok(self.uri()? == link.expand_empty()?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn input(&self) -> &InputPayload {
        &self.input
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        &self.query_parameters
    }

    pub fn output(&self) -> &PayloadProperties {
        &self.output
    }
}

impl Expandable for AffordanceModel {
    fn expand(&self, variables: &Variables) -> Result<String, AffordanceError> {
        self.link.expand(variables)
    }
}
