//! Predicate composition for list views.
//!
//! A list filter is a free-text query ANDed with zero or more categorical
//! selectors. A selector is `Option<T>`: `None` places no constraint on
//! that field. Filtering never reorders records.

use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::ServiceError;
use crate::models::{
    ClientRecord, ClientStatus, InventoryItem, MaterialCategory, MaterialRecord, StockStatus,
};

/// Raw selector value that means "no constraint".
pub const ALL_SELECTOR: &str = "All";

/// Records that expose a fixed set of fields to free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for MaterialRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_ref()]
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_ref()]
    }
}

impl Searchable for ClientRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.company.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Case-insensitive substring query. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            needle: raw.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches_text(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// True when any searchable field contains the query.
    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .into_iter()
                .any(|field| self.matches_text(field))
    }
}

/// `None` matches every value; `Some(v)` requires equality.
pub fn selector_matches<T: PartialEq>(selector: Option<&T>, value: &T) -> bool {
    selector.map_or(true, |wanted| wanted == value)
}

/// Parses a raw selector from the UI boundary.
///
/// Absent, blank, or `All` (any case) mean no constraint. Anything else must
/// name a member of `T`.
pub fn parse_selector<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, ServiceError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SELECTOR) {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| ServiceError::InvalidInput(format!("unknown selector value '{}'", raw)))
}

/// A composed inclusion predicate over one record type.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;

    /// Order-preserving filter over a collection.
    fn apply<'a, I>(&self, records: I) -> Vec<&'a R>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Materials catalog: text + category.
#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    pub query: SearchQuery,
    pub category: Option<MaterialCategory>,
}

impl MaterialFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = SearchQuery::new(query);
        self
    }

    pub fn with_category(mut self, category: Option<MaterialCategory>) -> Self {
        self.category = category;
        self
    }
}

impl RecordFilter<MaterialRecord> for MaterialFilter {
    fn matches(&self, record: &MaterialRecord) -> bool {
        self.query.matches(record) && selector_matches(self.category.as_ref(), &record.category)
    }
}

/// Inventory: text + category + derived stock status.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub query: SearchQuery,
    pub category: Option<MaterialCategory>,
    pub status: Option<StockStatus>,
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = SearchQuery::new(query);
        self
    }

    pub fn with_category(mut self, category: Option<MaterialCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: Option<StockStatus>) -> Self {
        self.status = status;
        self
    }
}

impl RecordFilter<InventoryItem> for InventoryFilter {
    fn matches(&self, item: &InventoryItem) -> bool {
        self.query.matches(item)
            && selector_matches(self.category.as_ref(), &item.category)
            && selector_matches(self.status.as_ref(), &item.status())
    }
}

/// Client directory: text + account status.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub query: SearchQuery,
    pub status: Option<ClientStatus>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = SearchQuery::new(query);
        self
    }

    pub fn with_status(mut self, status: Option<ClientStatus>) -> Self {
        self.status = status;
        self
    }
}

impl RecordFilter<ClientRecord> for ClientFilter {
    fn matches(&self, client: &ClientRecord) -> bool {
        self.query.matches(client) && selector_matches(self.status.as_ref(), &client.status)
    }
}

/// Query-string shape shared by the list endpoints and the CLI.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Free-text search
    pub search: Option<String>,
    /// Category selector, or `All`
    pub category: Option<String>,
    /// Status selector, or `All`
    pub status: Option<String>,
}

impl ListParams {
    fn query(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    pub fn material_filter(&self) -> Result<MaterialFilter, ServiceError> {
        Ok(MaterialFilter::new()
            .with_query(self.query())
            .with_category(parse_selector(self.category.as_deref())?))
    }

    pub fn inventory_filter(&self) -> Result<InventoryFilter, ServiceError> {
        Ok(InventoryFilter::new()
            .with_query(self.query())
            .with_category(parse_selector(self.category.as_deref())?)
            .with_status(parse_selector(self.status.as_deref())?))
    }

    /// Clients have no category, so anything but `All` is rejected.
    pub fn client_filter(&self) -> Result<ClientFilter, ServiceError> {
        if let Some(raw) = self.category.as_deref().map(str::trim) {
            if !raw.is_empty() && !raw.eq_ignore_ascii_case(ALL_SELECTOR) {
                return Err(ServiceError::InvalidInput(format!(
                    "clients cannot be filtered by category '{}'",
                    raw
                )));
            }
        }
        Ok(ClientFilter::new()
            .with_query(self.query())
            .with_status(parse_selector(self.status.as_deref())?))
    }
}
