//! OpenAPI document generation.
//!
//! The document is built from the static route table rather than from the
//! router itself. Routes whose path matches one of the skip patterns are
//! framework-internal (MCP tool management, evaluation sets and results) and
//! are left out of the document.

use std::collections::BTreeMap;

use schemars::r#gen::{SchemaGenerator, SchemaSettings};
use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use crate::http::monitoring::{HealthResponse, InfoResponse};

/// Path fragments excluded from the document.
pub const SKIPPED_PATH_PATTERNS: &[&str] = &[
    "/tools/mcp",
    "/eval-sets",
    "/eval_sets",
    "/eval-results",
    "/eval_results",
    "/eval-cases",
    "/eval_cases",
];

const OPENAPI_VERSION: &str = "3.0.2";
const API_TITLE: &str = "AgentGate Multi-Agent System API";

/// Body returned by a route, for schema purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Health,
    Info,
    Json,
    NoContent,
}

/// One documented route.
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub operation_id: &'static str,
    pub tag: &'static str,
    /// Optional query parameters as `(name, json type)`.
    pub query: &'static [(&'static str, &'static str)],
    pub response: ResponseKind,
}

/// Builds the filtered OpenAPI document.
pub struct OpenApiBuilder {
    title: String,
    version: String,
    description: String,
    skip_patterns: Vec<String>,
}

impl OpenApiBuilder {
    pub fn new() -> Self {
        Self {
            title: API_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "HTTP host for multi-agent workflows with session management \
                          and artifact storage."
                .to_string(),
            skip_patterns: SKIPPED_PATH_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Append an "Available Agents" section to the description.
    pub fn with_agents(mut self, agents: &BTreeMap<String, String>) -> Self {
        if !agents.is_empty() {
            self.description.push_str("\n\n## Available Agents\n");
            for (name, description) in agents {
                self.description
                    .push_str(&format!("- **{}**: {}\n", name, description));
            }
        }
        self
    }

    pub fn with_skip_patterns(mut self, patterns: Vec<String>) -> Self {
        self.skip_patterns = patterns;
        self
    }

    pub fn is_skipped(&self, path: &str) -> bool {
        self.skip_patterns.iter().any(|p| path.contains(p.as_str()))
    }

    /// Split routes into (documented, skipped).
    pub fn partition<'a>(&self, routes: &'a [RouteSpec]) -> (Vec<&'a RouteSpec>, Vec<&'a RouteSpec>) {
        routes.iter().partition(|route| !self.is_skipped(route.path))
    }

    /// Build the document, falling back to a minimal one on failure.
    pub fn document(&self, routes: &[RouteSpec]) -> Value {
        match self.build(routes) {
            Ok(document) => {
                info!("OpenAPI schema generated successfully");
                document
            }
            Err(e) => {
                error!(error = %e, "OpenAPI schema generation failed, serving minimal schema");
                self.fallback_document()
            }
        }
    }

    /// Build the full document from the documented routes.
    pub fn build(&self, routes: &[RouteSpec]) -> Result<Value, serde_json::Error> {
        info!(total = routes.len(), "Analyzing routes for OpenAPI schema generation");
        debug!(routes = ?routes.iter().map(|r| r.path).collect::<Vec<_>>(), "Routes");

        let (included, skipped) = self.partition(routes);
        let skipped_paths: Vec<&str> = skipped.iter().map(|r| r.path).collect();
        info!(count = included.len(), "Including routes in schema");
        info!(count = skipped.len(), skipped = ?skipped_paths, "Skipping routes");

        let mut generator = SchemaSettings::openapi3().into_generator();
        let health_schema = serde_json::to_value(generator.subschema_for::<HealthResponse>())?;
        let info_schema = serde_json::to_value(generator.subschema_for::<InfoResponse>())?;

        let mut paths: BTreeMap<&str, Map<String, Value>> = BTreeMap::new();
        for route in included {
            let schema = match route.response {
                ResponseKind::Health => Some(health_schema.clone()),
                ResponseKind::Info => Some(info_schema.clone()),
                ResponseKind::Json => Some(json!({ "type": "object" })),
                ResponseKind::NoContent => None,
            };
            paths
                .entry(route.path)
                .or_default()
                .insert(route.method.to_lowercase(), operation(route, schema));
        }

        Ok(json!({
            "openapi": OPENAPI_VERSION,
            "info": {
                "title": self.title,
                "version": self.version,
                "description": self.description,
            },
            "servers": [{ "url": "/", "description": "Current server" }],
            "paths": paths,
            "components": { "schemas": definitions(&generator)? },
        }))
    }

    /// Minimal document covering only the informational endpoints.
    pub fn fallback_document(&self) -> Value {
        json!({
            "openapi": OPENAPI_VERSION,
            "info": {
                "title": self.title,
                "version": self.version,
                "description": "API schema generation partially limited",
            },
            "paths": {
                "/health": {
                    "get": {
                        "summary": "Health Check",
                        "operationId": "health_check",
                        "responses": {
                            "200": {
                                "description": "Successful Response",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "environment": { "type": "string" },
                                                "version": { "type": "string" },
                                                "agents": {
                                                    "type": "array",
                                                    "items": { "type": "string" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        "tags": ["monitoring"]
                    }
                },
                "/info": {
                    "get": {
                        "summary": "Service Information",
                        "operationId": "get_info",
                        "responses": {
                            "200": {
                                "description": "Successful Response",
                                "content": {
                                    "application/json": { "schema": { "type": "object" } }
                                }
                            }
                        },
                        "tags": ["information"]
                    }
                }
            }
        })
    }
}

impl Default for OpenApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn operation(route: &RouteSpec, schema: Option<Value>) -> Value {
    let mut parameters: Vec<Value> = path_parameters(route.path)
        .into_iter()
        .map(|name| {
            json!({
                "name": name,
                "in": "path",
                "required": true,
                "schema": { "type": "string" }
            })
        })
        .collect();
    parameters.extend(route.query.iter().map(|(name, kind)| {
        json!({
            "name": name,
            "in": "query",
            "required": false,
            "schema": { "type": kind }
        })
    }));

    let responses = match schema {
        Some(schema) => json!({
            "200": {
                "description": "Successful Response",
                "content": { "application/json": { "schema": schema } }
            }
        }),
        None => json!({ "204": { "description": "No Content" } }),
    };

    let mut op = json!({
        "summary": route.summary,
        "operationId": route.operation_id,
        "tags": [route.tag],
        "responses": responses,
    });
    if !parameters.is_empty() {
        op["parameters"] = Value::Array(parameters);
    }
    op
}

/// Names of `{param}` segments in a route path.
fn path_parameters(path: &str) -> Vec<&str> {
    path.split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
        .collect()
}

fn definitions(generator: &SchemaGenerator) -> Result<Value, serde_json::Error> {
    serde_json::to_value(generator.definitions())
}

#[cfg(test)]
#[path = "openapi_tests.rs"]
mod tests;
