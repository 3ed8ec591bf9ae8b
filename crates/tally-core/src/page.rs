//! Paginated envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};

use crate::wire::WireModel;

/// One page of a list endpoint.
///
/// `has_more` is the only continuation signal. The server may return short
/// pages, so `items.len() < limit` says nothing about whether more exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub has_more: bool,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: WireModel> WireModel for Page<T> {
    const ENTITY: &'static str = "page";
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
