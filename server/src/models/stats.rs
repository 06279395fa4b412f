use serde::Serialize;

use super::event::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry<K> {
    pub key: K,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularEvent {
    pub id: String,
    pub title: String,
    pub registered: u32,
    pub capacity: u32,
    pub percentage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_registrations: usize,
    pub approved_registrations: usize,
    pub total_capacity: u64,
    pub total_registered: u64,
    pub utilization_percentage: u64,
    pub events_by_category: Vec<CountEntry<String>>,
    pub events_by_department: Vec<CountEntry<String>>,
    pub registrations_by_status: Vec<CountEntry<String>>,
    pub popular_events: Vec<PopularEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    /// Image of the first event in the category.
    pub image: String,
}
