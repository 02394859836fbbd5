// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react (re-render, diagnostics)
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CollectionKind, Membership, MovieId};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted after a favorites/watchlist mutation has been applied and persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: CollectionKind,
    pub movie_id: MovieId,
    pub change: Membership,
    pub size: usize,
}

impl CollectionChanged {
    pub fn new(kind: CollectionKind, movie_id: MovieId, change: Membership, size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            movie_id,
            change,
            size,
        }
    }
}

impl DomainEvent for CollectionChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CollectionChanged" }
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a fetched page has been applied to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub movie_count: usize,
}

impl CatalogLoaded {
    pub fn new(query: String, page: u32, total_pages: u32, movie_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
            page,
            total_pages,
            movie_count,
        }
    }
}

impl DomainEvent for CatalogLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoaded" }
}

/// Emitted when the latest catalog fetch failed; the list was left untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
    pub page: u32,
    pub message: String,
}

impl CatalogFetchFailed {
    pub fn new(query: String, page: u32, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
            page,
            message,
        }
    }
}

impl DomainEvent for CatalogFetchFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogFetchFailed" }
}

// ============================================================================
// DETAIL EVENTS
// ============================================================================

/// Diagnostic: a secondary section of a detail bundle degraded to empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieBundleDegraded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub section: String, // "credits", "videos", "similar"
    pub reason: String,
}

impl MovieBundleDegraded {
    pub fn new(movie_id: MovieId, section: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            section,
            reason,
        }
    }
}

impl DomainEvent for MovieBundleDegraded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieBundleDegraded" }
}
