//! Navigation menus for the current address.
//!
//! Every listing is returned together with an optional publication: the key
//! under which the caller should also expose it to machine clients, and
//! whether it belongs in `configs` or `content`. The builder itself never
//! writes into either bag.

pub mod attributes;
pub mod catalog;
pub mod exclude;

pub use catalog::{CatalogSession, DirectoryLister, FsLister, ModelCatalog, ModelRow, StaticCatalog};

use crate::address::Address;
use crate::error::Result;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;

pub const AVAILABLE_DATASETS: &str = "AvailableDatasets";
pub const AVAILABLE_MODELS: &str = "AvailableModels";
pub const AVAILABLE_ATTRIBUTES: &str = "AvailableAttributes";
pub const AVAILABLE_OPERATIONS: &str = "AvailableOperations";
pub const AVAILABLE_VISUALIZATIONS: &str = "AvailableVisualizations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub name: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// Which bag a listing should additionally be published into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    Configs(&'static str),
    Content(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub publish: Option<Publish>,
}

impl<T: Serialize> Listing<T> {
    fn new(items: Vec<T>, publish: Option<Publish>) -> Self {
        Self { items, publish }
    }

    /// The publication instruction paired with the listing as JSON.
    pub fn publication(&self) -> Result<Option<(Publish, Value)>> {
        match self.publish {
            Some(p) => Ok(Some((p, serde_json::to_value(&self.items)?))),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menus {
    pub datasets: Listing<String>,
    pub operations: Listing<Choice>,
    pub views: Listing<Choice>,
    pub models: Listing<Choice>,
    pub attributes: Listing<String>,
}

impl Menus {
    /// All publication instructions, in menu order.
    pub fn publications(&self) -> Result<Vec<(Publish, Value)>> {
        let all = [
            self.operations.publication()?,
            self.datasets.publication()?,
            self.views.publication()?,
            self.models.publication()?,
            self.attributes.publication()?,
        ];
        Ok(all.into_iter().flatten().collect())
    }

    /// Menu object handed to page templates, echoing the address it was built for.
    pub fn to_value(&self, address: &Address) -> Value {
        json!({
            "server": address.server,
            "dataset": address.dataset_wire(),
            "model": address.model_wire(),
            "attribute": address.attribute_wire(),
            "datasets": self.datasets.items,
            "operations": self.operations.items,
            "models": self.models.items,
            "views": self.views.items,
            "attributes": self.attributes.items,
        })
    }
}

pub struct MenuBuilder<'a> {
    lister: &'a dyn DirectoryLister,
    catalog: &'a dyn ModelCatalog,
    /// Parent of the `applications/` folder holding one folder per dataset.
    applications_parent: &'a Path,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(
        lister: &'a dyn DirectoryLister,
        catalog: &'a dyn ModelCatalog,
        applications_parent: &'a Path,
    ) -> Self {
        Self {
            lister,
            catalog,
            applications_parent,
        }
    }

    pub fn build(&self, address: &Address) -> Result<Menus> {
        Ok(Menus {
            operations: operations(),
            datasets: self.datasets(address)?,
            views: views(),
            models: self.models(address)?,
            attributes: available_attributes(address),
        })
    }

    fn datasets(&self, address: &Address) -> Result<Listing<String>> {
        let root = self.applications_parent.join("applications");
        let mut folders: Vec<String> = self
            .lister
            .list_entries(&root)?
            .into_iter()
            .filter(|name| !exclude::is_excluded(name))
            .filter(|name| self.lister.is_dir(&root.join(name)))
            .collect();
        folders.sort();
        tracing::debug!(root = %root.display(), count = folders.len(), "listed datasets");

        let publish = address
            .dataset
            .is_unselected()
            .then_some(Publish::Content(AVAILABLE_DATASETS));
        Ok(Listing::new(folders, publish))
    }

    fn models(&self, address: &Address) -> Result<Listing<Choice>> {
        if exclude::is_excluded_segment(&address.dataset) {
            return Ok(Listing::new(Vec::new(), None));
        }

        let rows = {
            let mut session = self.catalog.open_session()?;
            session.models()?
        };
        let models: Vec<Choice> = rows
            .into_iter()
            .map(|row| Choice::new(row.model_key, row.model_desc))
            .collect();
        tracing::debug!(dataset = address.dataset_wire(), count = models.len(), "loaded models");

        let publish = address
            .model
            .is_unselected()
            .then_some(Publish::Content(AVAILABLE_MODELS));
        Ok(Listing::new(models, publish))
    }
}

fn operations() -> Listing<Choice> {
    Listing::new(
        vec![Choice::new("dataset", "Upload a new dataset")],
        Some(Publish::Configs(AVAILABLE_OPERATIONS)),
    )
}

// No visualizations are registered yet; the key is still published so
// clients can rely on it.
fn views() -> Listing<Choice> {
    Listing::new(Vec::new(), Some(Publish::Configs(AVAILABLE_VISUALIZATIONS)))
}

fn available_attributes(address: &Address) -> Listing<String> {
    if exclude::is_excluded_segment(&address.dataset) {
        return Listing::new(Vec::new(), None);
    }
    let Some(model) = address.model.selected() else {
        return Listing::new(Vec::new(), None);
    };

    let items = attributes::for_model(model)
        .iter()
        .map(|s| s.to_string())
        .collect();
    let publish = address
        .attribute
        .is_unselected()
        .then_some(Publish::Content(AVAILABLE_ATTRIBUTES));
    Listing::new(items, publish)
}
