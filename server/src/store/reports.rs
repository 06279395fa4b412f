use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use super::{Store, StoreError};
use crate::models::event::rounded_percentage;
use crate::models::{
    CategorySummary, CountEntry, DashboardStats, Event, PopularEvent, RegistrationStatus,
    TicketBuckets,
};

const POPULAR_EVENTS_LIMIT: usize = 5;

/// Counts keys in first-seen order, then sorts by count descending. The sort
/// is stable so ties keep first-seen order.
fn tally<K: PartialEq>(keys: impl IntoIterator<Item = K>) -> Vec<CountEntry<K>> {
    let mut entries: Vec<CountEntry<K>> = Vec::new();
    for key in keys {
        match entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.count += 1,
            None => entries.push(CountEntry { key, count: 1 }),
        }
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

impl Store {
    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let total_capacity: u64 = self.events.iter().map(|e| u64::from(e.capacity)).sum();
        let total_registered: u64 = self.events.iter().map(|e| u64::from(e.registered)).sum();
        let utilization_percentage = rounded_percentage(total_registered, total_capacity);

        let registrations_by_status = RegistrationStatus::ALL
            .iter()
            .map(|status| CountEntry {
                key: status.as_str().to_string(),
                count: self
                    .registrations
                    .iter()
                    .filter(|registration| registration.status == *status)
                    .count(),
            })
            .collect();

        let mut popular_events: Vec<PopularEvent> = self
            .events
            .iter()
            .map(|event| PopularEvent {
                id: event.id.clone(),
                title: event.title.clone(),
                registered: event.registered,
                capacity: event.capacity,
                percentage: event.fill_percentage(),
            })
            .collect();
        popular_events.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        popular_events.truncate(POPULAR_EVENTS_LIMIT);

        DashboardStats {
            total_events: self.events.len(),
            upcoming_events: self.events.iter().filter(|e| e.date > today).count(),
            total_registrations: self.registrations.len(),
            approved_registrations: self
                .registrations
                .iter()
                .filter(|r| r.status == RegistrationStatus::Approved)
                .count(),
            total_capacity,
            total_registered,
            utilization_percentage,
            events_by_category: tally(self.events.iter().map(|e| e.category.to_string())),
            events_by_department: tally(self.events.iter().map(|e| e.department.to_string())),
            registrations_by_status,
            popular_events,
        }
    }

    pub fn category_summary(&self) -> Vec<CategorySummary> {
        tally(self.events.iter().map(|event| event.category))
            .into_iter()
            .filter_map(|entry| {
                let first = self.events.iter().find(|e| e.category == entry.key)?;
                Some(CategorySummary {
                    category: entry.key,
                    count: entry.count,
                    image: first.image.clone(),
                })
            })
            .collect()
    }

    /// Events dated within the given month, grouped by day.
    pub fn event_calendar(&self, year: i32, month: u32) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in self
            .events
            .iter()
            .filter(|event| event.date.year() == year && event.date.month() == month)
        {
            days.entry(event.date).or_default().push(event.clone());
        }
        days
    }

    /// Splits a user's tickets into upcoming and past. Events dated `today`
    /// have already started and count as past. Attended tickets for later
    /// events land in neither bucket.
    pub fn user_tickets(&self, user_id: &str, today: NaiveDate) -> Result<TicketBuckets, StoreError> {
        let mut buckets = TicketBuckets::default();
        for row in self.user_registrations(user_id)? {
            let status = row.registration.status;
            let is_upcoming = row.event.date > today
                && matches!(
                    status,
                    RegistrationStatus::Approved | RegistrationStatus::Pending
                );
            let is_past = row.event.date <= today || status == RegistrationStatus::Rejected;

            if is_upcoming {
                buckets.upcoming.push(row.clone());
            }
            if is_past {
                buckets.past.push(row);
            }
        }
        Ok(buckets)
    }
}
