use serde::{Deserialize, Serialize};

use super::event::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    Organizer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Bookmarked event ids, kept in insertion order.
    #[serde(default)]
    pub saved_events: Vec<String>,
}

impl User {
    /// Removes `event_id` if saved, appends it otherwise. Returns whether it
    /// is saved afterwards.
    pub fn toggle_saved(&mut self, event_id: &str) -> bool {
        match self.saved_events.iter().position(|id| id == event_id) {
            Some(index) => {
                self.saved_events.remove(index);
                false
            }
            None => {
                self.saved_events.push(event_id.to_string());
                true
            }
        }
    }
}
