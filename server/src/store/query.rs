use super::{Resource, Store, StoreError};
use crate::models::{Event, EventFilter, Notification, Registration, RegistrationWithEvent, User};

impl Store {
    /// Events matching `filter`, in insertion order.
    pub fn list_events(&self, filter: &EventFilter) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn user(&self, id: &str) -> Result<&User, StoreError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::User, id))
    }

    /// Registrations of `user_id`, each joined with its event. A dangling
    /// event reference fails the whole listing.
    pub fn user_registrations(
        &self,
        user_id: &str,
    ) -> Result<Vec<RegistrationWithEvent>, StoreError> {
        self.registrations
            .iter()
            .filter(|registration| registration.user_id == user_id)
            .map(|registration| self.join(registration))
            .collect()
    }

    pub fn user_notifications(&self, user_id: &str) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|notification| notification.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Saved events of a user in collection order. Ids that no longer
    /// resolve are dropped.
    pub fn saved_events(&self, user_id: &str) -> Result<Vec<Event>, StoreError> {
        let user = self.user(user_id)?;
        Ok(self
            .events
            .iter()
            .filter(|event| user.saved_events.contains(&event.id))
            .cloned()
            .collect())
    }

    /// Admin event table. An empty search returns every event; otherwise
    /// title, category or department must contain it, ignoring case.
    pub fn admin_events(&self, search: Option<&str>) -> Vec<Event> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();
        self.events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&needle)
                    || event.category.as_str().contains(&needle)
                    || event.department.as_str().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Every registration joined with its event, optionally narrowed to
    /// those whose event title or status contains `search`.
    pub fn participants(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<RegistrationWithEvent>, StoreError> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();
        let mut rows = Vec::new();
        for registration in &self.registrations {
            let row = self.join(registration)?;
            if row.event.title.to_lowercase().contains(&needle)
                || row.registration.status.as_str().contains(&needle)
            {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn join(&self, registration: &Registration) -> Result<RegistrationWithEvent, StoreError> {
        match self.event(&registration.event_id) {
            Some(event) => Ok(RegistrationWithEvent {
                registration: registration.clone(),
                event: event.clone(),
            }),
            None => {
                tracing::warn!(
                    registration_id = %registration.id,
                    event_id = %registration.event_id,
                    "Registration references a missing event"
                );
                Err(StoreError::IntegrityFault {
                    registration_id: registration.id.clone(),
                    event_id: registration.event_id.clone(),
                })
            }
        }
    }
}
