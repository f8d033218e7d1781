use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AffordanceError, malformed_template, unresolved_template};

pub type Variables = BTreeMap<String, String>;

pub const SELF_REL: &str = "self";

/// Anything that can be expanded into a concrete address.
pub trait Expandable {
    /// # Errors
    ///
    /// Fails when a required template variable is missing from `variables`
    /// or the template itself cannot be parsed.
    fn expand(&self, variables: &Variables) -> Result<String, AffordanceError>;

    /// Expansion without any variables.
    ///
    /// # Errors
    ///
    /// Same as [`Expandable::expand`].
    fn expand_empty(&self) -> Result<String, AffordanceError> {
        self.expand(&Variables::new())
    }
}

fn default_rel() -> String {
    SELF_REL.to_string()
}

/// Target resource reference; `href` may be a URI template.
///
/// Supported expressions: `{var}` (required), `{?a,b}` and `{&a,b}`
/// (optional query parameters, dropped when not supplied).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    #[serde(default = "default_rel")]
    rel: String,
    href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self::with_rel(href, SELF_REL)
    }

    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_templated(&self) -> bool {
        parse_template(&self.href)
            .map(|segments| {
                segments
                    .iter()
                    .any(|segment| !matches!(segment, Segment::Literal(_)))
            })
            .unwrap_or(false)
    }

    /// Template variable names in order of appearance.
    ///
    /// # Errors
    ///
    /// Fails with `MalformedTemplate` on unbalanced braces.
    pub fn variable_names(&self) -> Result<Vec<&str>, AffordanceError> {
        let segments = parse_template(&self.href)?;
        Ok(segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Literal(_) => Vec::new(),
                Segment::Simple(names) | Segment::Query { names, .. } => names,
            })
            .collect())
    }
}

impl Expandable for Link {
    fn expand(&self, variables: &Variables) -> Result<String, AffordanceError> {
        let mut expanded = String::with_capacity(self.href.len());

        for segment in parse_template(&self.href)? {
            match segment {
                Segment::Literal(text) => expanded.push_str(text),
                Segment::Simple(names) => {
                    let mut values = Vec::with_capacity(names.len());
                    for name in names {
                        let value = variables.get(name).ok_or_else(|| {
                            unresolved_template(format!(
                                "template '{}' requires variable '{}'",
                                self.href, name
                            ))
                        })?;
                        values.push(urlencoding::encode(value).into_owned());
                    }
                    expanded.push_str(&values.join(","));
                }
                Segment::Query {
                    continuation,
                    names,
                } => {
                    let pairs: Vec<String> = names
                        .into_iter()
                        .filter_map(|name| {
                            variables
                                .get(name)
                                .map(|value| format!("{}={}", name, urlencoding::encode(value)))
                        })
                        .collect();
                    if !pairs.is_empty() {
                        expanded.push(if continuation { '&' } else { '?' });
                        expanded.push_str(&pairs.join("&"));
                    }
                }
            }
        }

        Ok(expanded)
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Simple(Vec<&'a str>),
    Query { continuation: bool, names: Vec<&'a str> },
}

fn parse_template(href: &str) -> Result<Vec<Segment<'_>>, AffordanceError> {
    let mut segments = Vec::new();
    let mut rest = href;

    while let Some(open) = rest.find(['{', '}']) {
        if rest[open..].starts_with('}') {
            return Err(malformed_template(format!(
                "unexpected '}}' in template '{href}'"
            )));
        }
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }

        let after_open = &rest[open + 1..];
        let close = after_open.find('}').ok_or_else(|| {
            malformed_template(format!("unclosed expression in template '{href}'"))
        })?;
        segments.push(parse_expression(href, &after_open[..close])?);
        rest = &after_open[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

fn parse_expression<'a>(href: &str, expression: &'a str) -> Result<Segment<'a>, AffordanceError> {
    let (segment_kind, body) = match expression.chars().next() {
        Some('?') => (Some(false), &expression[1..]),
        Some('&') => (Some(true), &expression[1..]),
        _ => (None, expression),
    };

    let names: Vec<&str> = body.split(',').map(str::trim).collect();
    if names
        .iter()
        .any(|name| name.is_empty() || !name.chars().all(is_variable_char))
    {
        return Err(malformed_template(format!(
            "unsupported expression '{{{expression}}}' in template '{href}'"
        )));
    }

    Ok(match segment_kind {
        Some(continuation) => Segment::Query {
            continuation,
            names,
        },
        None => Segment::Simple(names),
    })
}

fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}
