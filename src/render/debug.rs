//! `?debug` snapshot of everything the request carried.

use super::Content;
use crate::request::{EnvValue, Request};
use chrono::{NaiveDateTime, Timelike};
use serde_json::{Value, json};

pub const NOT_SERIALIZABLE: &str = "Value not JSON-serializable";

/// Request environment, request pieces, configs and params, overlaid by content.
pub fn snapshot(req: &Request, configs: &Content, params: &Content, content: &Content) -> Content {
    let mut data = Content::new();
    data.insert("env".into(), Value::Object(env_json(req).into_iter().collect()));
    data.insert("cookies".into(), json!(req.cookies));
    data.insert("vars".into(), json!(req.vars));
    data.insert("get_vars".into(), json!(req.get_vars));
    data.insert("post_vars".into(), json!(req.post_vars));
    data.insert("folder".into(), json!(req.folder));
    data.insert("application".into(), json!(req.application));
    data.insert("controller".into(), json!(req.controller));
    data.insert("function".into(), json!(req.function));
    data.insert("args".into(), json!(req.args));
    data.insert("extension".into(), json!(req.extension));
    data.insert("now".into(), json!(timestamp(&req.now)));
    data.insert("configs".into(), json!(configs));
    data.insert("params".into(), json!(params));
    data.extend(content.iter().map(|(k, v)| (k.clone(), v.clone())));
    data
}

fn env_json(req: &Request) -> Content {
    req.env
        .iter()
        .map(|(key, value)| {
            let value = match value {
                EnvValue::Json(v) => v.clone(),
                EnvValue::Opaque(o) => {
                    tracing::debug!(key = %key, type_name = %o.type_name, "env value replaced in debug output");
                    Value::String(NOT_SERIALIZABLE.to_string())
                }
            };
            (key.clone(), value)
        })
        .collect()
}

/// `2026-10-18 07:21:00`, with `.ffffff` appended when sub-second time is set.
fn timestamp(now: &NaiveDateTime) -> String {
    if now.nanosecond() / 1_000 == 0 {
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::OpaqueValue;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(h: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_micro_opt(h, 21, 0, micro))
            .unwrap()
    }

    #[test]
    fn timestamp_matches_wsgi_style() {
        assert_eq!(timestamp(&at(7, 0)), "2026-10-18 07:21:00");
        assert_eq!(timestamp(&at(7, 1500)), "2026-10-18 07:21:00.001500");
    }

    #[test]
    fn opaque_env_values_get_placeholder() {
        let mut req = Request::new("h", "http", "/").with_segments("poliblogs", "lda", "Vocab");
        req.now = at(9, 0);
        req.env.insert("SERVER_PORT".into(), EnvValue::Json(json!(8075)));
        req.env.insert(
            "wsgi.input".into(),
            EnvValue::Opaque(OpaqueValue { type_name: "file".into() }),
        );

        let data = snapshot(&req, &Content::new(), &Content::new(), &Content::new());
        assert_eq!(data["env"], json!({ "SERVER_PORT": 8075, "wsgi.input": NOT_SERIALIZABLE }));
        assert_eq!(data["application"], json!("poliblogs"));
        assert_eq!(data["now"], json!("2026-10-18 09:21:00"));
    }

    #[test]
    fn content_overrides_snapshot_keys() {
        let req = Request::new("h", "http", "/");
        let mut content = Content::new();
        content.insert("folder".into(), json!("from handler"));
        content.insert("TopTerms".into(), json!([]));

        let data = snapshot(&req, &Content::new(), &Content::new(), &content);
        assert_eq!(data["folder"], json!("from handler"));
        assert_eq!(data["TopTerms"], json!([]));
        assert_eq!(data["application"], Value::Null);
    }
}
