// src/services/catalog_controller.rs
//
// Paginated catalog feed (popular titles or search results)
//
// STATE MACHINE:
//   idle --dispatch--> loading --response--> idle (list updated)
//                              \--failure--> idle (error set, list kept)
//
// CONCURRENCY:
// - Every dispatch takes a ticket; only the response carrying the latest
//   ticket may touch the state. Older responses are dropped as stale.
// - `start_browse` and `search` always dispatch and supersede anything in flight.
// - `load_more` is refused while a fetch is in flight.
// - The state lock is never held across an await.
// - A fetch dropped before its response arrives leaves the catalog idle.

use std::sync::{Arc, RwLock};

use log::{debug, error, info};

use crate::domain::{validate_catalog, CatalogMode, CatalogState, MergeMode, MoviePage};
use crate::error::AppResult;
use crate::events::{CatalogFetchFailed, CatalogLoaded, EventBus};
use crate::integrations::tmdb::MovieApi;

/// What happened to a dispatched fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the catalog
    Applied,
    /// The fetch failed; the error is in the catalog state
    Failed,
    /// A newer fetch was dispatched meanwhile; the response was dropped
    Stale,
    /// Nothing was dispatched
    Skipped,
}

struct CatalogInner {
    state: CatalogState,
    /// Ticket of the most recent dispatch
    latest_ticket: u64,
}

/// A fetch that has been dispatched but not yet answered
struct PendingFetch {
    ticket: u64,
    mode: CatalogMode,
    page: u32,
    merge: MergeMode,
}

/// Returns the catalog to idle if the owning fetch is dropped mid-await
struct InFlight<'a> {
    inner: &'a RwLock<CatalogInner>,
    ticket: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.latest_ticket == self.ticket {
            debug!("Catalog fetch #{} abandoned before completion", self.ticket);
            inner.state.abandon_fetch();
        }
    }
}

pub struct CatalogController {
    api: Arc<dyn MovieApi>,
    event_bus: Arc<EventBus>,
    inner: RwLock<CatalogInner>,
}

impl CatalogController {
    pub fn new(api: Arc<dyn MovieApi>, event_bus: Arc<EventBus>) -> Self {
        Self {
            api,
            event_bus,
            inner: RwLock::new(CatalogInner {
                state: CatalogState::default(),
                latest_ticket: 0,
            }),
        }
    }

    /// Show the first page of popular titles
    pub async fn start_browse(&self) -> FetchOutcome {
        let pending = self.dispatch(CatalogMode::Popular, 1, MergeMode::Replace);
        self.run(pending).await
    }

    /// Show page `page` of results for `query`.
    ///
    /// A blank query browses popular titles. Page 1 replaces the list,
    /// later pages append. Asking for a later page of a query other than
    /// the active one restarts that query at page 1.
    pub async fn search(&self, query: &str, page: u32) -> FetchOutcome {
        let mode = CatalogMode::from_query(query);
        if mode == CatalogMode::Popular {
            return self.start_browse().await;
        }

        let pending = {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            let (page, merge) = if page > 1 && inner.state.mode == mode {
                (page, MergeMode::Append)
            } else {
                if page > 1 {
                    debug!(
                        "Page {} requested for \"{}\" while showing \"{}\"; restarting at page 1",
                        page,
                        mode.query(),
                        inner.state.query()
                    );
                }
                (1, MergeMode::Replace)
            };
            Self::dispatch_locked(&mut inner, mode, page, merge)
        };

        self.run(pending).await
    }

    /// Append the next page of the active feed
    pub async fn load_more(&self) -> FetchOutcome {
        let pending = {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());

            if inner.state.loading {
                debug!("load_more ignored: a fetch is already in flight");
                return FetchOutcome::Skipped;
            }
            if !inner.state.has_more() {
                debug!(
                    "load_more ignored: page {} of {}",
                    inner.state.current_page, inner.state.total_pages
                );
                return FetchOutcome::Skipped;
            }

            let mode = inner.state.mode.clone();
            let next_page = inner.state.current_page + 1;
            Self::dispatch_locked(&mut inner, mode, next_page, MergeMode::Append)
        };

        self.run(pending).await
    }

    /// Copy of the current state for read-only consumers
    pub fn snapshot(&self) -> CatalogState {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .state
            .clone()
    }

    pub fn has_more(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .state
            .has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .state
            .loading
    }

    // ========================================================================
    // DISPATCH / COMPLETION
    // ========================================================================

    fn dispatch(&self, mode: CatalogMode, page: u32, merge: MergeMode) -> PendingFetch {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        Self::dispatch_locked(&mut inner, mode, page, merge)
    }

    fn dispatch_locked(
        inner: &mut CatalogInner,
        mode: CatalogMode,
        page: u32,
        merge: MergeMode,
    ) -> PendingFetch {
        inner.latest_ticket += 1;
        inner.state.begin_fetch();

        debug!(
            "Catalog fetch #{} dispatched ({:?}, page {}, {:?})",
            inner.latest_ticket, mode, page, merge
        );

        PendingFetch {
            ticket: inner.latest_ticket,
            mode,
            page,
            merge,
        }
    }

    async fn run(&self, pending: PendingFetch) -> FetchOutcome {
        let mut in_flight = InFlight {
            inner: &self.inner,
            ticket: pending.ticket,
            armed: true,
        };

        let result = match &pending.mode {
            CatalogMode::Popular => self.api.fetch_popular(pending.page).await,
            CatalogMode::Search(query) => self.api.search_movies(query, pending.page).await,
        };

        in_flight.armed = false;
        self.complete(pending, result)
    }

    fn complete(&self, pending: PendingFetch, result: AppResult<MoviePage>) -> FetchOutcome {
        let query = pending.mode.query().to_string();

        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());

        if pending.ticket != inner.latest_ticket {
            debug!(
                "Dropping stale catalog response #{} (latest is #{})",
                pending.ticket, inner.latest_ticket
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                inner.state.apply_page(page, pending.merge, pending.mode);

                if let Err(e) = validate_catalog(&inner.state) {
                    error!("Catalog state inconsistent after fetch: {}", e);
                }

                let event = CatalogLoaded::new(
                    query,
                    inner.state.current_page,
                    inner.state.total_pages,
                    inner.state.movies.len(),
                );
                drop(inner);

                info!(
                    "Catalog loaded: page {} of {} ({} movies shown)",
                    event.page, event.total_pages, event.movie_count
                );
                self.event_bus.emit(event);
                FetchOutcome::Applied
            }
            Err(e) => {
                let message = e.list_fetch_message();
                inner.state.fail(message.clone());
                drop(inner);

                error!("Catalog fetch failed (page {}): {}", pending.page, e);
                self.event_bus
                    .emit(CatalogFetchFailed::new(query, pending.page, message));
                FetchOutcome::Failed
            }
        }
    }
}
