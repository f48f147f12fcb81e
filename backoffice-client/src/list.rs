//! List controller
//!
//! Stateful orchestrator binding one resource's filter/sort/page state to
//! its [`ResourceGateway`]. State changes go through the `set_*` methods,
//! which are the only fetch triggers; the pagination write-back after a
//! fetch writes state directly and therefore cannot re-enter the fetch.
//!
//! Every fetch carries a generation number. When fetches overlap (two
//! handles of the same controller racing), a response whose generation is
//! no longer current is discarded, so the last *request* wins rather than
//! the last response to arrive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use shared::{Paginated, Pagination, Sorting};

use crate::error::ClientResult;
use crate::gateway::ResourceGateway;
use crate::resource::ResourceSpec;

struct ListState<R: ResourceSpec> {
    is_loading: bool,
    items: Vec<R::Record>,
    filters: R::Filters,
    sorting: Sorting,
    pagination: Pagination,
}

/// Stateful list view over one backend resource
///
/// Cheap to clone; clones share the same state. Constructed through
/// [`ListController::builder`], which performs the initial fetch.
pub struct ListController<R: ResourceSpec> {
    gateway: ResourceGateway<R>,
    state: Arc<RwLock<ListState<R>>>,
    generation: Arc<AtomicU64>,
}

impl<R: ResourceSpec> Clone for ListController<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}

/// Builder for [`ListController`] with optional state overrides
pub struct ListControllerBuilder<R: ResourceSpec> {
    gateway: ResourceGateway<R>,
    filters: R::Filters,
    sorting: Sorting,
    pagination: Pagination,
}

impl<R: ResourceSpec> ListControllerBuilder<R> {
    pub fn filters(mut self, filters: R::Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Build the controller and perform the initial fetch
    pub async fn init(self) -> ClientResult<ListController<R>> {
        let controller = ListController {
            gateway: self.gateway,
            state: Arc::new(RwLock::new(ListState {
                is_loading: false,
                items: Vec::new(),
                filters: self.filters,
                sorting: self.sorting,
                pagination: self.pagination,
            })),
            generation: Arc::new(AtomicU64::new(0)),
        };
        controller.refresh().await?;
        Ok(controller)
    }
}

impl<R: ResourceSpec> ListController<R> {
    /// Start building a controller over the given gateway
    ///
    /// Defaults: resource default filters, sort by `id` ascending,
    /// page 1 of 10.
    pub fn builder(gateway: ResourceGateway<R>) -> ListControllerBuilder<R> {
        ListControllerBuilder {
            gateway,
            filters: R::Filters::default(),
            sorting: Sorting::default(),
            pagination: Pagination::default(),
        }
    }

    /// Re-fetch the current page from the server
    ///
    /// The loading flag is settled on every exit path, success or error. A
    /// refresh that was superseded by a newer one returns `Ok(())` without
    /// touching any state.
    pub async fn refresh(&self) -> ClientResult<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (filters, sorting, pagination) = {
            let mut state = self.lock_state();
            state.is_loading = true;
            (state.filters.clone(), state.sorting.clone(), state.pagination)
        };

        let result = self.gateway.list(&filters, &pagination, &sorting).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer fetch owns the state and the loading flag now.
            tracing::debug!(resource = R::PATH, generation, "discarding superseded page");
            return Ok(());
        }

        state.is_loading = false;
        let page: Paginated<R::Record> = result?;
        state.items = page.items;
        // Write-back bypasses set_page/set_per_page, so the server values
        // land without triggering another fetch.
        state.pagination = page.pagination;
        Ok(())
    }

    /// Replace the filter set, reset to page 1 and re-fetch
    pub async fn set_filters(&self, filters: R::Filters) -> ClientResult<()> {
        {
            let mut state = self.lock_state();
            state.filters = filters;
            state.pagination.page = 1;
        }
        self.refresh().await
    }

    /// Move to the given 1-based page and re-fetch
    pub async fn set_page(&self, page: u32) -> ClientResult<()> {
        self.lock_state().pagination.page = page;
        self.refresh().await
    }

    /// Change the page size and re-fetch
    pub async fn set_per_page(&self, per_page: u32) -> ClientResult<()> {
        self.lock_state().pagination.per_page = per_page;
        self.refresh().await
    }

    /// Change the sort order and re-fetch
    pub async fn set_sorting(&self, sorting: Sorting) -> ClientResult<()> {
        self.lock_state().sorting = sorting;
        self.refresh().await
    }

    /// Create a record, then re-fetch the authoritative page
    ///
    /// The list is never patched locally; after any mutation the page is
    /// re-read from the server so the displayed items cannot diverge from
    /// server truth.
    pub async fn add(&self, record: R::Record) -> ClientResult<R::Record> {
        self.lock_state().is_loading = true;
        let created = match self.gateway.create(&record).await {
            Ok(created) => created,
            Err(e) => {
                self.lock_state().is_loading = false;
                return Err(e);
            }
        };
        self.refresh().await?;
        Ok(created)
    }

    /// Update a record, then re-fetch the authoritative page
    pub async fn update(&self, record: R::Record) -> ClientResult<R::Record> {
        self.lock_state().is_loading = true;
        let updated = match self.gateway.update(&record).await {
            Ok(updated) => updated,
            Err(e) => {
                self.lock_state().is_loading = false;
                return Err(e);
            }
        };
        self.refresh().await?;
        Ok(updated)
    }

    /// Delete a record, then re-fetch the authoritative page
    pub async fn remove(&self, record: R::Record) -> ClientResult<()> {
        self.lock_state().is_loading = true;
        if let Err(e) = self.gateway.remove(&record).await {
            self.lock_state().is_loading = false;
            return Err(e);
        }
        self.refresh().await
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().is_loading
    }

    pub fn items(&self) -> Vec<R::Record> {
        self.read_state().items.clone()
    }

    pub fn filters(&self) -> R::Filters {
        self.read_state().filters.clone()
    }

    pub fn sorting(&self) -> Sorting {
        self.read_state().sorting.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.read_state().pagination
    }

    pub fn gateway(&self) -> &ResourceGateway<R> {
        &self.gateway
    }

    fn lock_state(&self) -> std::sync::RwLockWriteGuard<'_, ListState<R>> {
        self.state.write().expect("list state lock poisoned")
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ListState<R>> {
        self.state.read().expect("list state lock poisoned")
    }
}
