//! Response rendering: pick exactly one branch from the format flags and
//! serialize the request's buffers accordingly.
//!
//! Branch order: debug, json, csv, tsv, then the page bag for everything
//! else (including `format=graph`).

pub mod debug;
pub mod html;
pub mod json;
pub mod table;

pub use html::{EmbeddedPage, PageBag, PageRenderer};
pub use table::{Column, Record, Table};

use crate::error::Result;
use crate::request::{FormatFlags, Request};
use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use http::HeaderValue;
use serde_json::Value;
use std::collections::BTreeMap;

/// Named results (and configs/params); always serialized with sorted keys.
pub type Content = BTreeMap<String, Value>;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_CSV: &str = "text/csv; charset=utf-8";
pub const CONTENT_TYPE_TSV: &str = "text/tab-separated-values; charset=utf-8";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Bytes(Vec<u8>),
    /// Still to be turned into HTML by a `PageRenderer`.
    Page(PageBag),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub content_type: &'static str,
    pub allow_origin: Option<String>,
    pub body: Body,
}

impl Rendered {
    fn bytes(content_type: &'static str, allow_origin: Option<String>, body: Vec<u8>) -> Self {
        Self {
            content_type,
            allow_origin,
            body: Body::Bytes(body),
        }
    }

    /// Final HTTP response; page bags go through `pages`.
    pub fn into_http(self, pages: &dyn PageRenderer) -> Result<http::Response<Vec<u8>>> {
        let body = match self.body {
            Body::Bytes(bytes) => bytes,
            Body::Page(bag) => pages.render_page(&bag)?.into_bytes(),
        };

        let mut response = http::Response::new(body);
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        if let Some(origin) = self.allow_origin {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_str(&origin)?);
        }
        Ok(response)
    }
}

/// Everything a response is rendered from.
pub struct RenderInput<'a> {
    pub request: &'a Request,
    pub flags: FormatFlags,
    pub configs: &'a Content,
    pub menus: &'a Value,
    pub params: &'a Content,
    pub content: &'a Content,
    pub table: &'a Table,
}

pub fn render(input: &RenderInput<'_>) -> Result<Rendered> {
    let flags = input.flags;
    let origin = input.request.allowed_origin().map(str::to_string);

    if flags.is_debug() {
        let data = debug::snapshot(input.request, input.configs, input.params, input.content);
        let body = json::to_sorted_pretty(&data)?;
        return Ok(Rendered::bytes(CONTENT_TYPE_JSON, None, body.into_bytes()));
    }

    if flags.is_json() {
        // The body carries the content mapping only; configs stay out of it.
        tracing::debug!(content_keys = input.content.len(), "rendering json without configs");
        let body = json::to_sorted_pretty(input.content)?;
        return Ok(Rendered::bytes(CONTENT_TYPE_JSON, origin, body.into_bytes()));
    }

    if flags.is_csv() {
        let body = input.table.to_csv()?;
        return Ok(Rendered::bytes(CONTENT_TYPE_CSV, origin, body));
    }

    if flags.is_tsv() {
        let body = input.table.to_tsv()?;
        return Ok(Rendered::bytes(CONTENT_TYPE_TSV, origin, body));
    }

    Ok(Rendered {
        content_type: CONTENT_TYPE_HTML,
        allow_origin: None,
        body: Body::Page(page_bag(input)?),
    })
}

fn page_bag(input: &RenderInput<'_>) -> Result<PageBag> {
    let mut bag = PageBag::new();
    bag.insert("configs".into(), serde_json::to_value(input.configs)?);
    bag.insert("menus".into(), input.menus.clone());
    bag.insert("params".into(), serde_json::to_value(input.params)?);
    bag.extend(input.content.iter().map(|(k, v)| (k.clone(), v.clone())));
    bag.insert(
        "content".into(),
        Value::String(json::to_sorted_pretty(input.content)?),
    );
    Ok(bag)
}
