//! Query filters and pagination for list operations.
//!
//! Filters are passed verbatim as query parameters; the server is the source
//! of truth for which filters a resource supports. Pagination follows the
//! `next` link embedded in list bodies, page by page, until the link is null.

use std::collections::BTreeMap;

use url::Url;

use crate::client::ApiClient;
use crate::resource::errors::ResourceError;
use crate::resource::schema::ResourceSchema;

/// A set of query filters for a list operation.
///
/// Keys and values are sent verbatim as query parameters with no local
/// validation. The set is ordered, so request URLs are deterministic.
///
/// # Example
///
/// ```rust
/// use inventree_client::FilterSet;
///
/// let filters = FilterSet::new()
///     .with("category", 7)
///     .with("active", true);
///
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds a filter, consuming and returning the set for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Adds a filter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Returns `true` if no filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the filters as query parameters.
    pub(crate) const fn as_query(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Consumes the set into query parameters.
    pub(crate) fn into_query(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for FilterSet {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut filters = Self::new();
        for (key, value) in pairs {
            filters.insert(key, value);
        }
        filters
    }
}

impl FromIterator<(String, String)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One page of a list response.
#[derive(Debug)]
struct Page {
    items: Vec<serde_json::Value>,
    next: Option<Url>,
}

/// Sequential page walker for a list operation.
///
/// Starts by requesting the resource's list endpoint with the given filters,
/// then follows the `next` link from each page body until it is null. Pages
/// are fetched one at a time because each fetch depends on the previous
/// page's link; items are yielded in server order with no re-ordering or
/// de-duplication.
pub(crate) struct Paginator<'a> {
    client: &'a ApiClient,
    schema: ResourceSchema,
    state: PageState,
}

enum PageState {
    Start(BTreeMap<String, String>),
    Next(Url),
    Done,
}

impl<'a> Paginator<'a> {
    pub(crate) fn new(client: &'a ApiClient, schema: ResourceSchema, filters: FilterSet) -> Self {
        Self {
            client,
            schema,
            state: PageState::Start(filters.into_query()),
        }
    }

    /// Fetches the next page, or `None` once the last page has been seen.
    pub(crate) async fn next_page(&mut self) -> Result<Option<Vec<serde_json::Value>>, ResourceError> {
        let response = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return Ok(None),
            PageState::Start(query) => {
                self.client.get(&self.schema.list_path(), &query).await?
            }
            PageState::Next(url) => self.client.get_url(url).await?,
        };

        if !response.is_ok() {
            return Err(ResourceError::from_response(self.schema, &response, None));
        }

        let page = parse_page(self.schema, response.body)?;
        if let Some(next) = page.next {
            self.state = PageState::Next(next);
        }
        Ok(Some(page.items))
    }

    /// Fetches every remaining page and flattens the items in server order.
    pub(crate) async fn collect_all(mut self) -> Result<Vec<serde_json::Value>, ResourceError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }
}

/// Parses a list body into items and the optional `next` link.
///
/// The server returns either a bare array (pagination disabled) or an object
/// of the form `{"count": N, "next": url|null, "previous": url|null,
/// "results": [...]}`.
fn parse_page(schema: ResourceSchema, body: serde_json::Value) -> Result<Page, ResourceError> {
    match body {
        serde_json::Value::Array(items) => Ok(Page { items, next: None }),
        serde_json::Value::Object(mut map) => {
            let results = map.remove("results").ok_or(ResourceError::UnexpectedBody {
                resource: schema.name,
                detail: "list body has no 'results' field".to_string(),
            })?;
            let serde_json::Value::Array(items) = results else {
                return Err(ResourceError::UnexpectedBody {
                    resource: schema.name,
                    detail: "'results' is not an array".to_string(),
                });
            };

            let next = match map.get("next") {
                Some(serde_json::Value::String(link)) => {
                    Some(Url::parse(link).map_err(|_| ResourceError::UnexpectedBody {
                        resource: schema.name,
                        detail: format!("invalid 'next' link: {link}"),
                    })?)
                }
                _ => None,
            };

            Ok(Page { items, next })
        }
        other => Err(ResourceError::UnexpectedBody {
            resource: schema.name,
            detail: format!("expected a list body, got: {other}"),
        }),
    }
}
