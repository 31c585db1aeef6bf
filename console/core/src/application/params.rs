// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Inbound proxy parameters.
//!
//! Query strings and JSON bodies are merged into one map. A field counts as
//! present only when it is non-null, not `false` and not the empty string.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Every inbound field a proxy action may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TenantId,
    BrandId,
    SourceId,
    PromptId,
    WorkerId,
    GenerationId,
    ApiKey,
    Name,
    Description,
    OutputType,
    Prompt,
    Context,
}

impl Field {
    /// Accepted inbound keys, canonical name first.
    pub fn inbound_keys(&self) -> &'static [&'static str] {
        match self {
            Field::TenantId => &["tenantId"],
            Field::BrandId => &["brandId"],
            Field::SourceId => &["sourceId"],
            Field::PromptId => &["promptId"],
            Field::WorkerId => &["workerId"],
            Field::GenerationId => &["generationId"],
            Field::ApiKey => &["apiKey"],
            Field::Name => &["name"],
            Field::Description => &["description"],
            Field::OutputType => &["output_type", "outputType"],
            Field::Prompt => &["prompt"],
            Field::Context => &["context"],
        }
    }

    /// Key used in outbound backend bodies.
    pub fn backend_key(&self) -> &'static str {
        match self {
            Field::OutputType => "output_type",
            other => other.inbound_keys()[0],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inbound_keys()[0])
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProxyParams {
    values: Map<String, Value>,
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

impl ProxyParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_query(query: HashMap<String, String>) -> Self {
        Self {
            values: query
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        }
    }

    /// Merge a raw JSON body over the query parameters. Anything that is not
    /// a JSON object contributes no fields.
    pub fn merge_body(mut self, body: &[u8]) -> Self {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return self;
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => self.values.extend(map),
            Ok(_) => tracing::debug!("Ignoring non-object request body"),
            Err(e) => tracing::debug!("Ignoring malformed request body: {}", e),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn value(&self, field: Field) -> Option<&Value> {
        field
            .inbound_keys()
            .iter()
            .filter_map(|key| self.values.get(*key))
            .find(|value| is_present(value))
    }

    /// Text form of a field, used for path segments and credentials.
    pub fn text(&self, field: Field) -> Option<Cow<'_, str>> {
        self.value(field).map(|value| match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    pub fn missing(&self, required: &[Field]) -> Vec<Field> {
        required
            .iter()
            .copied()
            .filter(|field| self.value(*field).is_none())
            .collect()
    }
}
