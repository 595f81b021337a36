//! Output format negotiation from the `format` and `debug` parameters.

use super::Vars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Interactive page (default, also used for unknown `format` values).
    Text,
    Graph,
    Json,
    Csv,
    Tsv,
}

impl Format {
    /// Classify a raw `format` value, case-insensitively.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("graph") => Format::Graph,
            Some("json") => Format::Json,
            Some("csv") => Format::Csv,
            Some("tsv") => Format::Tsv,
            _ => Format::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlags {
    pub format: Format,
    pub debug: bool,
}

impl FormatFlags {
    pub fn detect(vars: &Vars) -> Self {
        Self {
            format: Format::from_param(vars.get("format").map(String::as_str)),
            debug: vars.contains_key("debug"),
        }
    }

    pub fn is_text(&self) -> bool {
        self.format == Format::Text
    }

    pub fn is_graph(&self) -> bool {
        self.format == Format::Graph
    }

    pub fn is_json(&self) -> bool {
        self.format == Format::Json
    }

    pub fn is_csv(&self) -> bool {
        self.format == Format::Csv
    }

    pub fn is_tsv(&self) -> bool {
        self.format == Format::Tsv
    }

    pub fn is_machine(&self) -> bool {
        !self.is_text()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}
