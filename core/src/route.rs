//! Declarative route descriptions and response decoding.
//!
//! # Design
//! A route is declared as a verb plus a path template such as
//! `/items/{id}`. [`RouteDescription::new`] compiles the declaration once,
//! checking it against the parameter list of the operation that exposes it.
//! After that, building a request only substitutes values, so a mismatch
//! between template and signature can only ever surface at construction.
//!
//! Responses are turned into the operation's return type through
//! [`FromResponse`]. Non-2xx statuses are rejected before decoding.

use std::collections::HashSet;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::ClientError;
use crate::http::{check_status, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path template: literal text interleaved with `{name}` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse `template`. The `Err` value is a human-readable reason.
    pub fn parse(template: &str) -> Result<Self, String> {
        if !template.starts_with('/') {
            return Err(format!("template {template:?} must start with `/`"));
        }

        let mut segments = Vec::new();
        let mut seen = HashSet::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(format!("nested `{{` in {template:?}")),
                            Some(c) => name.push(c),
                            None => return Err(format!("unclosed `{{` in {template:?}")),
                        }
                    }
                    if name.is_empty() {
                        return Err(format!("empty placeholder in {template:?}"));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(format!("placeholder {{{name}}} is not an identifier"));
                    }
                    if !seen.insert(name.clone()) {
                        return Err(format!("placeholder {{{name}}} appears twice"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(name));
                }
                '}' => return Err(format!("unmatched `}}` in {template:?}")),
                '?' | '#' => return Err(format!("`{c}` is not allowed in path template {template:?}")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute `args` into the template. Returns the name of the first
    /// placeholder without a value on failure.
    pub fn render(&self, args: &[(&str, &dyn Display)]) -> Result<String, String> {
        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let (_, value) = args
                        .iter()
                        .find(|(arg, _)| *arg == name.as_str())
                        .ok_or_else(|| name.clone())?;
                    path.push_str(&value.to_string());
                }
            }
        }
        Ok(path)
    }
}

/// One compiled operation: its name, method and template.
#[derive(Debug, Clone)]
pub struct RouteDescription {
    operation: &'static str,
    method: HttpMethod,
    template: RouteTemplate,
}

impl RouteDescription {
    /// Compile `verb template` for the operation `operation(params...)`.
    ///
    /// Fails with `MalformedRoute` when the verb is unknown, the template does
    /// not parse, or its placeholders differ from `params`.
    pub fn new(
        operation: &'static str,
        verb: &str,
        template: &str,
        params: &[&str],
    ) -> Result<Self, ClientError> {
        let method = HttpMethod::from_verb(verb)
            .ok_or_else(|| ClientError::malformed_route(operation, format!("unknown HTTP verb `{verb}`")))?;
        let template = RouteTemplate::parse(template).map_err(|reason| ClientError::malformed_route(operation, reason))?;

        let placeholders: HashSet<&str> = template.params().collect();
        for param in params {
            if !placeholders.contains(param) {
                return Err(ClientError::malformed_route(
                    operation,
                    format!("parameter `{param}` has no placeholder in {:?}", template.as_str()),
                ));
            }
        }
        if let Some(missing) = template.params().find(|name| !params.contains(name)) {
            return Err(ClientError::malformed_route(
                operation,
                format!("placeholder {{{missing}}} is not a parameter"),
            ));
        }

        trace!(operation, method = method.as_str(), template = template.as_str(), "route compiled");
        Ok(Self {
            operation,
            method,
            template,
        })
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    /// Build the request for one invocation of the operation.
    pub fn build(&self, args: &[(&str, &dyn Display)]) -> Result<HttpRequest, ClientError> {
        let path = self.template.render(args).map_err(|missing| {
            ClientError::malformed_route(self.operation, format!("no value for placeholder {{{missing}}}"))
        })?;
        Ok(HttpRequest {
            method: self.method,
            path,
        })
    }
}

/// Conversion from a successful response into an operation's return type.
pub trait FromResponse: Sized {
    fn from_response(response: HttpResponse) -> Result<Self, ClientError>;
}

/// The body as text, verbatim.
impl FromResponse for String {
    fn from_response(response: HttpResponse) -> Result<Self, ClientError> {
        Ok(response.body)
    }
}

/// Discards the body.
impl FromResponse for () {
    fn from_response(_: HttpResponse) -> Result<Self, ClientError> {
        Ok(())
    }
}

/// A JSON body deserialized into `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FromResponse for Json<T> {
    fn from_response(response: HttpResponse) -> Result<Self, ClientError> {
        serde_json::from_str(&response.body)
            .map(Json)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Reject non-2xx statuses, then decode into `R`.
pub fn decode_response<R: FromResponse>(response: HttpResponse) -> Result<R, ClientError> {
    check_status(&response)?;
    R::from_response(response)
}
