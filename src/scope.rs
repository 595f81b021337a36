//! Per-request state: resolved address, format, menus and the result buffers
//! handlers fill before rendering.

use crate::address::Address;
use crate::error::Result;
use crate::menu::{MenuBuilder, Publish};
use crate::render::{self, Content, RenderInput, Rendered, Table};
use crate::request::{FormatFlags, Params, Request};
use serde_json::{Value, json};

pub struct RequestScope<'r> {
    request: &'r Request,
    address: Address,
    flags: FormatFlags,
    configs: Content,
    menus: Value,

    /// Parameter values the handler settled on, echoed to pages and debug output.
    pub params: Content,
    /// Named results of the handler.
    pub content: Content,
    /// Primary tabular result, used by csv/tsv.
    pub table: Table,
}

impl<'r> RequestScope<'r> {
    pub fn open(request: &'r Request, menus: &MenuBuilder<'_>) -> Result<Self> {
        let address = Address::resolve(request);
        let flags = request.format_flags();
        let mut configs = configs(&address, &flags);
        let mut content = Content::new();

        let built = menus.build(&address)?;
        for (publish, value) in built.publications()? {
            match publish {
                Publish::Configs(key) => configs.insert(key.to_string(), value),
                Publish::Content(key) => content.insert(key.to_string(), value),
            };
        }

        Ok(Self {
            request,
            menus: built.to_value(&address),
            address,
            flags,
            configs,
            params: Content::new(),
            content,
            table: Table::default(),
        })
    }

    pub fn request(&self) -> &Request {
        self.request
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn configs(&self) -> &Content {
        &self.configs
    }

    pub fn menus(&self) -> &Value {
        &self.menus
    }

    /// Typed access to the raw request parameters.
    pub fn vars(&self) -> Params<'r> {
        self.request.params()
    }

    pub fn render(&self) -> Result<Rendered> {
        render::render(&RenderInput {
            request: self.request,
            flags: self.flags,
            configs: &self.configs,
            menus: &self.menus,
            params: &self.params,
            content: &self.content,
            table: &self.table,
        })
    }
}

fn configs(address: &Address, flags: &FormatFlags) -> Content {
    let mut configs = Content::new();
    configs.insert("server".into(), json!(address.server));
    configs.insert("dataset".into(), json!(address.dataset_wire()));
    configs.insert("model".into(), json!(address.model_wire()));
    configs.insert("attribute".into(), json!(address.attribute_wire()));
    configs.insert("url".into(), json!(address.url));
    configs.insert("is_text".into(), json!(flags.is_text()));
    configs.insert("is_graph".into(), json!(flags.is_graph()));
    configs.insert("is_json".into(), json!(flags.is_json()));
    configs.insert("is_csv".into(), json!(flags.is_csv()));
    configs.insert("is_tsv".into(), json!(flags.is_tsv()));
    configs
}
