use chrono::Utc;

use super::{generate_id, Resource, Store, StoreError};
use crate::models::{
    Event, EventPatch, Feedback, NewEvent, Registration, RegistrationStatus, StatusChange, User,
};

impl Store {
    /// Appends a new event. Field values are taken as given.
    pub fn create_event(&mut self, data: NewEvent) -> Event {
        let event = data.into_event(generate_id("event"), Utc::now());
        tracing::info!(event_id = %event.id, title = %event.title, "Event created");
        self.events.push(event.clone());
        event
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> Result<Event, StoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::Event, id))?;

        patch.apply(event);
        event.updated_at = Utc::now();
        tracing::info!(event_id = %id, "Event updated");
        Ok(event.clone())
    }

    /// Removes an event. Registrations and notifications pointing at it are
    /// left in place.
    pub fn delete_event(&mut self, id: &str) -> Result<Event, StoreError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::Event, id))?;

        let removed = self.events.remove(index);
        tracing::info!(event_id = %id, "Event deleted");
        Ok(removed)
    }

    /// Records a pending registration. Capacity, the open flag and earlier
    /// registrations of the same user are not consulted, and the event's
    /// `registered` count is left alone.
    pub fn register_for_event(&mut self, event_id: &str, user_id: &str) -> Registration {
        let now = Utc::now();
        let registration = Registration {
            id: generate_id("reg"),
            event_id: event_id.to_string(),
            user_id: user_id.to_string(),
            registration_date: now.date_naive(),
            status: RegistrationStatus::Pending,
            qr_code: generate_id("qr-code-data"),
            check_in_time: None,
            feedback: None,
        };
        tracing::info!(
            registration_id = %registration.id,
            event_id,
            user_id,
            "Registration created"
        );
        self.registrations.push(registration.clone());
        registration
    }

    pub fn update_registration_status(
        &mut self,
        id: &str,
        change: StatusChange,
    ) -> Result<Registration, StoreError> {
        let registration = self.registration_mut(id)?;
        let status = RegistrationStatus::from(change);

        registration.status = status;
        if status == RegistrationStatus::Attended {
            registration.check_in_time = Some(Utc::now());
        }
        tracing::info!(registration_id = %id, %status, "Registration status changed");
        Ok(registration.clone())
    }

    pub fn submit_feedback(
        &mut self,
        id: &str,
        rating: i32,
        comment: String,
    ) -> Result<Registration, StoreError> {
        let registration = self.registration_mut(id)?;
        registration.feedback = Some(Feedback {
            rating,
            comment,
            submitted_at: Utc::now(),
        });
        tracing::info!(registration_id = %id, rating, "Feedback submitted");
        Ok(registration.clone())
    }

    pub fn mark_notification_read(&mut self, id: &str) -> Result<(), StoreError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::Notification, id))?;

        notification.read = true;
        tracing::info!(notification_id = %id, "Notification marked read");
        Ok(())
    }

    /// Marks all of a user's notifications read and returns how many were
    /// unread.
    pub fn mark_all_notifications_read(&mut self, user_id: &str) -> usize {
        let mut flipped = 0;
        for notification in self
            .notifications
            .iter_mut()
            .filter(|notification| notification.user_id == user_id && !notification.read)
        {
            notification.read = true;
            flipped += 1;
        }
        tracing::info!(user_id, flipped, "Notifications marked read");
        flipped
    }

    pub fn toggle_saved_event(&mut self, user_id: &str, event_id: &str) -> Result<User, StoreError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| StoreError::not_found(Resource::User, user_id))?;

        let saved = user.toggle_saved(event_id);
        tracing::info!(user_id, event_id, saved, "Saved event toggled");
        Ok(user.clone())
    }

    fn registration_mut(&mut self, id: &str) -> Result<&mut Registration, StoreError> {
        self.registrations
            .iter_mut()
            .find(|registration| registration.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::Registration, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Department, EventFilter};
    use chrono::NaiveDate;

    fn store() -> Store {
        Store::seeded().expect("fixtures should parse")
    }

    fn new_event() -> NewEvent {
        NewEvent {
            title: "AI Workshop".to_string(),
            description: "Intro to neural networks".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            time: "10:00 AM - 12:00 PM".to_string(),
            location: "Lab 1".to_string(),
            category: Category::Workshop,
            department: Department::ComputerScience,
            organizer: "AI Club".to_string(),
            capacity: 40,
            registered: 0,
            image: "https://example.edu/ai.png".to_string(),
            is_registration_open: true,
            is_featured: false,
            tags: vec!["ai".to_string()],
            venue: None,
            contact_email: None,
            website: None,
            speakers: Vec::new(),
            sponsors: Vec::new(),
        }
    }

    #[test]
    fn test_create_then_get_returns_input_plus_generated_fields() {
        let mut store = store();
        let input = new_event();
        let created = store.create_event(input.clone());

        let fetched = store.event(&created.id).cloned().expect("created event");
        assert_eq!(fetched, created);
        assert_eq!(fetched.created_at, fetched.updated_at);

        let expected = input.into_event(created.id.clone(), created.created_at);
        assert_eq!(fetched, expected);
        assert_eq!(store.events().last().map(|e| e.id.as_str()), Some(created.id.as_str()));
    }

    #[test]
    fn test_update_title_only_changes_title_and_stamp() {
        let mut store = store();
        let before = store.event("2").cloned().unwrap();
        let updated = store
            .update_event(
                "2",
                EventPatch {
                    title: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "X");
        assert!(updated.updated_at > before.updated_at);

        let mut normalized = updated.clone();
        normalized.title = before.title.clone();
        normalized.updated_at = before.updated_at;
        assert_eq!(normalized, before);

        // Position is preserved.
        assert_eq!(store.events()[1].title, "X");
    }

    #[test]
    fn test_update_missing_event_is_not_found() {
        let mut store = store();
        let err = store.update_event("missing", EventPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::not_found(Resource::Event, "missing"));
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let mut store = store();
        let removed = store.delete_event("5").unwrap();
        assert_eq!(removed.title, "Research Symposium");
        assert!(store.event("5").is_none());
        assert_eq!(store.events().len(), 9);

        // Dangling registration reg5 is kept.
        assert!(store.registrations().iter().any(|r| r.event_id == "5"));
        assert!(store.delete_event("5").is_err());
    }

    #[test]
    fn test_register_twice_creates_two_pending_records() {
        let mut store = store();
        let first = store.register_for_event("6", "user2");
        let second = store.register_for_event("6", "user2");

        assert_eq!(first.status, RegistrationStatus::Pending);
        assert_eq!(second.status, RegistrationStatus::Pending);
        assert_ne!(first.id, second.id);
        assert_ne!(first.qr_code, second.qr_code);
        assert!(first.check_in_time.is_none());
        assert_eq!(store.registrations().len(), 9);
    }

    #[test]
    fn test_register_for_full_event_does_not_touch_event() {
        let mut store = store();
        let event = store.event("4").cloned().unwrap();
        assert_eq!((event.capacity, event.registered), (30, 30));
        assert!(!event.is_registration_open);

        let registration = store.register_for_event("4", "user1");
        assert_eq!(registration.event_id, "4");
        assert_eq!(store.event("4"), Some(&event));
    }

    #[test]
    fn test_attended_sets_check_in_time_and_approved_does_not() {
        let mut store = store();
        let registration = store.register_for_event("1", "user2");

        let approved = store
            .update_registration_status(&registration.id, StatusChange::Approved)
            .unwrap();
        assert_eq!(approved.status, RegistrationStatus::Approved);
        assert!(approved.check_in_time.is_none());

        let attended = store
            .update_registration_status(&registration.id, StatusChange::Attended)
            .unwrap();
        assert_eq!(attended.status, RegistrationStatus::Attended);
        assert!(attended.check_in_time.is_some());
    }

    #[test]
    fn test_rejected_can_move_to_attended() {
        let mut store = store();
        let attended = store
            .update_registration_status("reg5", StatusChange::Attended)
            .unwrap();
        assert_eq!(attended.status, RegistrationStatus::Attended);
    }

    #[test]
    fn test_status_change_on_missing_registration() {
        let mut store = store();
        assert!(matches!(
            store.update_registration_status("nope", StatusChange::Approved),
            Err(StoreError::NotFound {
                resource: Resource::Registration,
                ..
            })
        ));
    }

    #[test]
    fn test_feedback_overwrites_previous() {
        let mut store = store();
        let updated = store
            .submit_feedback("reg1", 9, "Changed my mind".to_string())
            .unwrap();
        let feedback = updated.feedback.unwrap();
        assert_eq!(feedback.rating, 9);
        assert_eq!(feedback.comment, "Changed my mind");
        assert!(store.submit_feedback("nope", 1, String::new()).is_err());
    }

    #[test]
    fn test_feedback_rating_is_not_range_checked() {
        let mut store = store();
        for rating in [-1, 0, 300] {
            let updated = store
                .submit_feedback("reg2", rating, String::new())
                .unwrap();
            assert_eq!(updated.feedback.unwrap().rating, rating);
        }
    }

    #[test]
    fn test_mark_notification_read() {
        let mut store = store();
        store.mark_notification_read("notif1").unwrap();
        store.mark_notification_read("notif1").unwrap();
        assert!(store.notifications().iter().find(|n| n.id == "notif1").unwrap().read);

        assert_eq!(
            store.mark_notification_read("notif99"),
            Err(StoreError::not_found(Resource::Notification, "notif99"))
        );
    }

    #[test]
    fn test_mark_all_notifications_read_counts_unread() {
        let mut store = store();
        assert_eq!(store.mark_all_notifications_read("user1"), 4);
        assert_eq!(store.mark_all_notifications_read("user1"), 0);
        assert!(store.user_notifications("user1").iter().all(|n| n.read));
        assert_eq!(store.mark_all_notifications_read("ghost"), 0);
    }

    #[test]
    fn test_toggle_saved_event_twice_restores_set() {
        let mut store = store();
        let original = store.user("user1").unwrap().saved_events.clone();

        let once = store.toggle_saved_event("user1", "3").unwrap();
        assert_eq!(once.saved_events, ["1", "7", "8", "3"]);
        let twice = store.toggle_saved_event("user1", "3").unwrap();
        assert_eq!(twice.saved_events, original);

        let removed = store.toggle_saved_event("user1", "7").unwrap();
        assert_eq!(removed.saved_events, ["1", "8"]);
        let restored = store.toggle_saved_event("user1", "7").unwrap();
        assert_eq!(restored.saved_events, ["1", "8", "7"]);
    }

    #[test]
    fn test_toggle_for_unknown_user_is_not_found() {
        let mut store = store();
        assert_eq!(
            store.toggle_saved_event("ghost", "1"),
            Err(StoreError::not_found(Resource::User, "ghost"))
        );
    }

    #[test]
    fn test_created_event_is_listed_by_filters() {
        let mut store = store();
        let created = store.create_event(new_event());
        let filter = EventFilter {
            search: Some("neural".to_string()),
            ..Default::default()
        };
        let found = store.list_events(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
    }
}
