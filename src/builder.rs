use crate::{
    error::{AffordanceError, invalid_argument},
    http_method::HttpMethod,
    link::Link,
    model::AffordanceModel,
    payload::{InputPayload, PayloadMetadata, PayloadProperties},
    query::QueryParameter,
};

/// Entry point for declaring the affordances of one link.
///
/// ```
/// use affordance::{Affordances, HttpMethod, Link};
///
/// let models = Affordances::of(Link::new("/orders"))
///     .afford(HttpMethod::Get)
///     .and_afford(HttpMethod::Post)
///     .expect("default names are valid")
///     .into_models()
///     .expect("default names are valid");
/// assert_eq!(models[1].name(), "post");
/// ```
#[derive(Debug, Clone)]
pub struct Affordances {
    link: Link,
    models: Vec<AffordanceModel>,
}

impl Affordances {
    pub fn of(link: Link) -> Self {
        Self {
            link,
            models: Vec::new(),
        }
    }

    pub fn afford(self, http_method: HttpMethod) -> ConfigurableAffordance {
        ConfigurableAffordance {
            previous: self,
            http_method,
            name: None,
            input: InputPayload::NONE,
            query_parameters: Vec::new(),
            output: PayloadProperties::NONE,
        }
    }

    pub fn models(&self) -> &[AffordanceModel] {
        &self.models
    }
}

/// One affordance under construction.
#[derive(Debug, Clone)]
pub struct ConfigurableAffordance {
    previous: Affordances,
    http_method: HttpMethod,
    name: Option<String>,
    input: InputPayload,
    query_parameters: Vec<QueryParameter>,
    output: PayloadProperties,
}

impl ConfigurableAffordance {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<InputPayload>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: PayloadProperties) -> Self {
        self.output = output;
        self
    }

    pub fn with_query_parameters(
        mut self,
        query_parameters: impl IntoIterator<Item = QueryParameter>,
    ) -> Self {
        self.query_parameters = query_parameters.into_iter().collect();
        self
    }

    pub fn add_query_parameter(mut self, query_parameter: QueryParameter) -> Self {
        self.query_parameters.push(query_parameter);
        self
    }

    /// One query parameter per property of `payload`, constraints included.
    pub fn with_query_parameters_from<P>(self, payload: &P) -> Self
    where
        P: PayloadMetadata + ?Sized,
    {
        let parameters: Vec<_> = payload.stream().map(QueryParameter::from_property).collect();
        self.with_query_parameters(parameters)
    }

    /// Finishes this affordance and returns it alone.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` when an explicit name is blank.
    pub fn build(self) -> Result<AffordanceModel, AffordanceError> {
        let (_, model) = self.finish()?;
        Ok(model)
    }

    /// Finishes this affordance and starts another one on the same link.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigurableAffordance::build`].
    pub fn and_afford(
        self,
        http_method: HttpMethod,
    ) -> Result<ConfigurableAffordance, AffordanceError> {
        let (mut affordances, model) = self.finish()?;
        affordances.models.push(model);
        Ok(affordances.afford(http_method))
    }

    /// All affordances declared on the link, this one last.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigurableAffordance::build`].
    pub fn into_models(self) -> Result<Vec<AffordanceModel>, AffordanceError> {
        let (affordances, model) = self.finish()?;
        let mut models = affordances.models;
        models.push(model);
        Ok(models)
    }

    fn finish(self) -> Result<(Affordances, AffordanceModel), AffordanceError> {
        let name = match self.name {
            Some(name) if name.trim().is_empty() => {
                return Err(invalid_argument("affordance name must not be empty"));
            }
            Some(name) => name,
            None => default_name(self.http_method, &self.input),
        };

        tracing::debug!(
            target: "affordance",
            name = %name,
            method = %self.http_method,
            href = %self.previous.link.href(),
            "affordance_built"
        );

        let model = AffordanceModel::new(
            name,
            self.previous.link.clone(),
            self.http_method,
            self.input,
            self.query_parameters,
            self.output,
        );
        Ok((self.previous, model))
    }
}

/// Lower-case verb followed by the simple name of a typed input,
/// e.g. `postOrder`.
pub fn default_name(http_method: HttpMethod, input: &InputPayload) -> String {
    let verb = http_method.as_str().to_ascii_lowercase();
    match input.type_descriptor() {
        Some(type_descriptor) if !type_descriptor.is_any() => {
            format!("{verb}{}", type_descriptor.simple_name())
        }
        _ => verb,
    }
}
