use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    builder::Affordances,
    error::AffordanceError,
    http_method::HttpMethod,
    link::Link,
    model::AffordanceModel,
    payload::{InputPayload, PayloadProperties, TypedInputPayloadMetadata},
    property::{PropertyMetadata, TypeDescriptor},
    query::QueryParameter,
    set::AffordanceSet,
};

const SCHEMA_FILE_NAME: &str = "affordance.schema.json";
const BUNDLED_SCHEMA: &str = include_str!("../affordance.schema.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub affordances: Vec<AffordanceDeclaration>,
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_format() -> LoggingFormat {
    LoggingFormat::Pretty
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_format")]
    pub format: LoggingFormat,
    #[serde(default = "default_enabled_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_logging_filter(),
            format: default_logging_format(),
            ansi: true,
        }
    }
}

/// Declarative form of one [`AffordanceModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordanceDeclaration {
    #[serde(default)]
    pub name: Option<String>,
    pub link: Link,
    pub method: HttpMethod,
    #[serde(default)]
    pub input: Option<InputDeclaration>,
    #[serde(default)]
    pub query_parameters: Vec<QueryParameter>,
    #[serde(default)]
    pub output: Option<OutputDeclaration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDeclaration {
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDeclaration {
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
}

impl InputDeclaration {
    fn to_payload(&self) -> InputPayload {
        let properties = PayloadProperties::new(self.properties.iter().cloned());
        match &self.type_name {
            Some(type_name) => {
                TypedInputPayloadMetadata::new(TypeDescriptor::named(type_name.clone()), properties)
                    .into()
            }
            None => properties.into(),
        }
    }
}

impl AffordanceDeclaration {
    /// # Errors
    ///
    /// Fails with `InvalidArgument` when the declared name is blank.
    pub fn to_model(&self) -> Result<AffordanceModel, AffordanceError> {
        let mut affordance = Affordances::of(self.link.clone())
            .afford(self.method)
            .with_query_parameters(self.query_parameters.iter().cloned());

        if let Some(name) = &self.name {
            affordance = affordance.with_name(name.clone());
        }
        if let Some(input) = &self.input {
            affordance = affordance.with_input(input.to_payload());
        }
        if let Some(output) = &self.output {
            affordance =
                affordance.with_output(PayloadProperties::new(output.properties.iter().cloned()));
        }

        affordance.build()
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema = load_schema(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema)?;

        serde_json::from_value(config_value).context("failed to deserialize affordance config")
    }

    /// # Errors
    ///
    /// Fails on the first declaration that cannot be turned into a model.
    pub fn affordance_set(&self) -> Result<AffordanceSet, AffordanceError> {
        let mut set = AffordanceSet::new();
        for declaration in &self.affordances {
            set.insert(declaration.to_model()?);
        }
        Ok(set)
    }
}

fn load_schema(config_base: &Path, config_value: &Value) -> Result<Value> {
    let schema_content = match resolve_schema_path(config_base, config_value) {
        Some(schema_path) => fs::read_to_string(&schema_path)
            .with_context(|| format!("failed to read schema {}", schema_path.display()))?,
        None => BUNDLED_SCHEMA.to_string(),
    };

    serde_json::from_str(&schema_content).context("failed to parse affordance schema")
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Option<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Some(configured);
        }
        return Some(config_base.join(&configured));
    }

    let local_default = config_base.join(SCHEMA_FILE_NAME);
    local_default.exists().then_some(local_default)
}

fn validate_against_schema(config_value: &Value, schema: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
