//! Small requests that carry no client side validation.

use proxima_wire::{CollectionName, GetDocumentRequest, GetVersionRequest, ListCondition};

/// Narrows `list_collections`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Only collections synchronized from the named repository
    ByRepo(String),
}

impl ListFilter {
    pub fn by_repo(name: impl Into<String>) -> Self {
        ListFilter::ByRepo(name.into())
    }
}

pub fn collection_name(name: &str) -> CollectionName {
    CollectionName {
        collection_name: name.to_string(),
    }
}

/// Fold filters into a list condition, the last repository filter wins
pub fn build_list_condition(filters: &[ListFilter]) -> ListCondition {
    let mut condition = ListCondition::default();
    for filter in filters {
        match filter {
            ListFilter::ByRepo(name) => condition.repository_name = name.clone(),
        }
    }
    condition
}

pub fn build_get_document_request(collection: &str, primary_key: u64) -> GetDocumentRequest {
    GetDocumentRequest {
        collection_name: collection.to_string(),
        primary_key,
        debug_mode: false,
    }
}

pub fn build_version_request() -> GetVersionRequest {
    GetVersionRequest {}
}
