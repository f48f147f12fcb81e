//! Resource data gateway
//!
//! Stateless translation between UI-level query state and the backend's
//! REST paging convention. Pages are 1-based on this side of the boundary
//! and 0-based on the wire; the sort parameter is `"<field>,<asc|desc>"`
//! and is omitted entirely when no sort is set.

use std::marker::PhantomData;

use shared::{PageResult, Paginated, Pagination, ResultEnvelope, Sorting};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::resource::{Envelope, FilterParams, ResourceSpec};

/// Gateway to one backend REST resource
pub struct ResourceGateway<R: ResourceSpec> {
    http: HttpClient,
    _resource: PhantomData<R>,
}

impl<R: ResourceSpec> Clone for ResourceGateway<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: ResourceSpec> std::fmt::Debug for ResourceGateway<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceGateway")
            .field("path", &R::PATH)
            .finish_non_exhaustive()
    }
}

impl<R: ResourceSpec> ResourceGateway<R> {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    /// Fetch one page of records
    pub async fn list(
        &self,
        filters: &R::Filters,
        pagination: &Pagination,
        sorting: &Sorting,
    ) -> ClientResult<Paginated<R::Record>> {
        let mut query = filters.query_pairs();
        query.push(("page", pagination.zero_based_page().to_string()));
        query.push(("size", pagination.per_page.to_string()));
        if let Some(sort) = sorting.to_param() {
            query.push(("sort", sort));
        }

        tracing::debug!(resource = R::PATH, page = pagination.page, "listing");

        let page: PageResult<R::Record> = match R::ENVELOPE {
            Envelope::Wrapped => {
                self.http
                    .get::<ResultEnvelope<PageResult<R::Record>>>(R::PATH, &query)
                    .await?
                    .result
            }
            Envelope::Bare => self.http.get::<PageResult<R::Record>>(R::PATH, &query).await?,
        };

        Ok(page.into())
    }

    /// Create a record; returns the server's canonical version
    pub async fn create(&self, record: &R::Record) -> ClientResult<R::Record> {
        tracing::debug!(resource = R::PATH, "creating record");
        match R::ENVELOPE {
            Envelope::Wrapped => Ok(self
                .http
                .post::<ResultEnvelope<R::Record>, _>(R::PATH, record)
                .await?
                .result),
            Envelope::Bare => self.http.post::<R::Record, _>(R::PATH, record).await,
        }
    }

    /// Update a record in full; returns the server's canonical version
    pub async fn update(&self, record: &R::Record) -> ClientResult<R::Record> {
        tracing::debug!(resource = R::PATH, "updating record");
        match R::ENVELOPE {
            Envelope::Wrapped => Ok(self
                .http
                .put::<ResultEnvelope<R::Record>, _>(R::PATH, record)
                .await?
                .result),
            Envelope::Bare => self.http.put::<R::Record, _>(R::PATH, record).await,
        }
    }

    /// Delete a record by its server-assigned identifier
    pub async fn remove(&self, record: &R::Record) -> ClientResult<()> {
        let id = R::record_id(record).ok_or_else(|| {
            ClientError::Validation("cannot delete a record without an id".to_string())
        })?;
        tracing::debug!(resource = R::PATH, id, "deleting record");
        self.http.delete(&format!("{}/{}", R::PATH, id)).await
    }
}
