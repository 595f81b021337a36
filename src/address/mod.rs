//! Request address: server → dataset → model → attribute.
//!
//! Example: GET http://localhost:8075/poliblogs/lda/TopTerms
//!   =>  server "localhost:8075", dataset "poliblogs", model "lda",
//!       attribute "TopTerms", url "http://localhost:8075/poliblogs/lda/TopTerms"

pub mod segment;

pub use segment::{Level, Segment};

use crate::request::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub server: String,
    pub dataset: Segment,
    pub model: Segment,
    pub attribute: Segment,
    pub url: String,
}

impl Address {
    /// Extract the address from an already-routed request. Never fails.
    pub fn resolve(req: &Request) -> Self {
        let address = Self {
            server: req.host.clone(),
            dataset: Segment::resolve(Level::Dataset, req.application.as_deref()),
            model: Segment::resolve(Level::Model, req.controller.as_deref()),
            attribute: Segment::resolve(Level::Attribute, req.function.as_deref()),
            url: format!("{}://{}{}", req.scheme, req.host, req.path),
        };
        tracing::debug!(
            server = %address.server,
            dataset = address.dataset_wire(),
            model = address.model_wire(),
            attribute = address.attribute_wire(),
            "resolved request address"
        );
        address
    }

    pub fn dataset_wire(&self) -> &str {
        self.dataset.wire(Level::Dataset)
    }

    pub fn model_wire(&self) -> &str {
        self.model.wire(Level::Model)
    }

    pub fn attribute_wire(&self) -> &str {
        self.attribute.wire(Level::Attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_segments_and_url() {
        let req = Request::new("localhost:8075", "https", "/poliblogs/lda/TopTerms")
            .with_segments("poliblogs", "lda", "TopTerms");
        let addr = Address::resolve(&req);

        assert_eq!(addr.server, "localhost:8075");
        assert_eq!(addr.dataset, Segment::Selected("poliblogs".into()));
        assert_eq!(addr.model, Segment::Selected("lda".into()));
        assert_eq!(addr.attribute, Segment::Selected("TopTerms".into()));
        assert_eq!(addr.url, "https://localhost:8075/poliblogs/lda/TopTerms");
    }

    #[test]
    fn landing_address_is_unselected_everywhere() {
        let req = Request::new("h", "http", "/init/default/index")
            .with_segments("init", "default", "index");
        let addr = Address::resolve(&req);

        assert!(addr.dataset.is_unselected());
        assert!(addr.model.is_unselected());
        assert!(addr.attribute.is_unselected());
        assert_eq!(
            (addr.dataset_wire(), addr.model_wire(), addr.attribute_wire()),
            ("init", "default", "index")
        );
    }

    #[test]
    fn missing_segments_do_not_fail() {
        let addr = Address::resolve(&Request::new("", "http", ""));
        assert_eq!(addr.url, "http://");
        assert!(addr.dataset.is_unselected());
    }
}
