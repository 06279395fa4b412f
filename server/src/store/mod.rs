//! In-memory event store.
//!
//! [`Store`] owns every collection. Read-only queries live in `query`,
//! in-place mutations in `mutation` and dashboard aggregates in `reports`.
//! The server shares one store behind a single [`tokio::sync::RwLock`] so
//! each call runs atomically with respect to the others.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Event, Notification, Registration, User};

mod mutation;
mod query;
mod reports;

const SEED_FIXTURES: &str = include_str!("../../fixtures/seed.json");

pub type SharedStore = Arc<RwLock<Store>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Event,
    Registration,
    Notification,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Event => "Event",
            Resource::Registration => "Registration",
            Resource::Notification => "Notification",
            Resource::User => "User",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{resource} with id '{id}' was not found")]
    NotFound { resource: Resource, id: String },

    #[error("registration '{registration_id}' references missing event '{event_id}'")]
    IntegrityFault {
        registration_id: String,
        event_id: String,
    },
}

impl StoreError {
    pub(crate) fn not_found(resource: Resource, id: &str) -> Self {
        StoreError::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Fixtures {
    events: Vec<Event>,
    registrations: Vec<Registration>,
    notifications: Vec<Notification>,
    users: Vec<User>,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    events: Vec<Event>,
    registrations: Vec<Registration>,
    notifications: Vec<Notification>,
    users: Vec<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the bundled campus fixtures.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        let fixtures: Fixtures = serde_json::from_str(SEED_FIXTURES)?;
        tracing::debug!(
            events = fixtures.events.len(),
            registrations = fixtures.registrations.len(),
            notifications = fixtures.notifications.len(),
            users = fixtures.users.len(),
            "Loaded seed fixtures"
        );

        Ok(Self {
            events: fixtures.events,
            registrations: fixtures.registrations,
            notifications: fixtures.notifications,
            users: fixtures.users,
        })
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
