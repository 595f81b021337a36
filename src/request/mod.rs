//! Inbound request context.
//!
//! The HTTP framework owns parsing; we only see the already-split pieces:
//! host and scheme, the raw path, the three router segments below the server,
//! the collapsed parameter map and a bag of environment values.
//!
//! Fixture JSON shape (everything except `host` is optional):
//! {
//!   "host": "localhost:8075",
//!   "scheme": "http",
//!   "path": "/poliblogs/lda/TopTerms",
//!   "application": "poliblogs",
//!   "controller": "lda",
//!   "function": "TopTerms",
//!   "vars": { "format": "json", "limit": "10" },
//!   "env": { "SERVER_PORT": 8075, "wsgi.input": { "$opaque": "file" } }
//! }

pub mod format;
pub mod params;

pub use format::{Format, FormatFlags};
pub use params::{Params, Parsed};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Single-valued parameter map (query and body merged by the framework).
pub type Vars = BTreeMap<String, String>;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub host: String,

    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default)]
    pub path: String,

    /// First router segment (dataset).
    #[serde(default)]
    pub application: Option<String>,

    /// Second router segment (model).
    #[serde(default)]
    pub controller: Option<String>,

    /// Third router segment (attribute).
    #[serde(default)]
    pub function: Option<String>,

    #[serde(default)]
    pub vars: Vars,

    #[serde(default)]
    pub get_vars: Vars,

    #[serde(default)]
    pub post_vars: Vars,

    #[serde(default)]
    pub cookies: BTreeMap<String, String>,

    #[serde(default)]
    pub env: BTreeMap<String, EnvValue>,

    #[serde(default)]
    pub folder: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub extension: String,

    #[serde(default = "now_local")]
    pub now: NaiveDateTime,
}

/// An environment entry as handed over by the framework.
///
/// Most entries are plain JSON values. Framework internals (stream handles,
/// callables) arrive as `Opaque` and are never serialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Opaque(OpaqueValue),
    Json(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpaqueValue {
    #[serde(rename = "$opaque")]
    pub type_name: String,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl Request {
    pub fn new(host: impl Into<String>, scheme: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: scheme.into(),
            path: path.into(),
            application: None,
            controller: None,
            function: None,
            vars: Vars::new(),
            get_vars: Vars::new(),
            post_vars: Vars::new(),
            cookies: BTreeMap::new(),
            env: BTreeMap::new(),
            folder: String::new(),
            args: Vec::new(),
            extension: String::new(),
            now: now_local(),
        }
    }

    /// Set the three router segments below the server.
    pub fn with_segments(mut self, application: &str, controller: &str, function: &str) -> Self {
        self.application = Some(application.to_string());
        self.controller = Some(controller.to_string());
        self.function = Some(function.to_string());
        self
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn params(&self) -> Params<'_> {
        Params::new(&self.vars)
    }

    pub fn format_flags(&self) -> FormatFlags {
        FormatFlags::detect(&self.vars)
    }

    /// `origin` parameter, echoed verbatim into the CORS header by machine formats.
    pub fn allowed_origin(&self) -> Option<&str> {
        self.vars.get("origin").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixture_defaults_fill_missing_fields() {
        let req: Request = serde_json::from_str(r#"{ "host": "localhost:8075" }"#).unwrap();
        assert_eq!(req.scheme, "http");
        assert_eq!(req.path, "");
        assert_eq!(req.application, None);
        assert!(req.vars.is_empty());
    }

    #[test]
    fn env_values_separate_opaque_from_json() {
        let req: Request = serde_json::from_str(
            r#"{
                "host": "h",
                "env": {
                    "SERVER_PORT": 8075,
                    "wsgi.input": { "$opaque": "file" },
                    "nested": { "$opaque": "x", "other": 1 }
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(req.env["SERVER_PORT"], EnvValue::Json(Value::Number(_))));
        assert!(matches!(&req.env["wsgi.input"], EnvValue::Opaque(o) if o.type_name == "file"));
        // Extra keys mean this is an ordinary object, not an opaque marker.
        assert!(matches!(req.env["nested"], EnvValue::Json(Value::Object(_))));
    }

    #[test]
    fn origin_is_echoed_verbatim() {
        let req = Request::new("h", "http", "/").with_var("origin", "http://Example.com");
        assert_eq!(req.allowed_origin(), Some("http://Example.com"));
        assert_eq!(Request::new("h", "http", "/").allowed_origin(), None);
    }
}
