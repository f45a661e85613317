//! Graph nodes: provider domains and their typed attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::distribution::LicenseDistribution;

/// A content provider/domain in the provenance graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub attributes: NodeAttributes,
}

/// Typed node attributes. Absent or mistyped attributes are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licenses_qty: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_licenses: Option<LicenseDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_qty: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_size: Option<u64>,
    /// Attributes outside the typed schema, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeAttributes {
    /// The node's license histogram, if it has a non-empty one.
    pub fn license_distribution(&self) -> Option<&LicenseDistribution> {
        self.cc_licenses.as_ref().filter(|d| !d.is_empty())
    }

    /// Fold a later record for the same node into this one. Typed fields
    /// take the later value only when it is present; extra attributes are
    /// overwritten key by key.
    pub fn merge(&mut self, later: NodeAttributes) {
        let NodeAttributes {
            licenses_qty,
            cc_licenses,
            provider_domain,
            images,
            links_qty,
            node_size,
            extra,
        } = later;
        if licenses_qty.is_some() {
            self.licenses_qty = licenses_qty;
        }
        if cc_licenses.is_some() {
            self.cc_licenses = cc_licenses;
        }
        if provider_domain.is_some() {
            self.provider_domain = provider_domain;
        }
        if images.is_some() {
            self.images = images;
        }
        if links_qty.is_some() {
            self.links_qty = links_qty;
        }
        if node_size.is_some() {
            self.node_size = node_size;
        }
        self.extra.extend(extra);
    }
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: NodeAttributes::default(),
        }
    }

    pub fn with_licenses(mut self, licenses: LicenseDistribution) -> Self {
        self.attributes.cc_licenses = Some(licenses);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.attributes.provider_domain = Some(domain.into());
        self
    }

    /// Shorthand for [`NodeAttributes::license_distribution`].
    pub fn licenses(&self) -> Option<&LicenseDistribution> {
        self.attributes.license_distribution()
    }
}
