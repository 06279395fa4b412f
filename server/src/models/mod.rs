pub mod event;
pub mod notification;
pub mod registration;
pub mod stats;
pub mod user;

pub use event::{
    Category, Department, Event, EventFilter, EventPatch, NewEvent, Scope, Speaker, Sponsor, Venue,
};
pub use notification::{Notification, NotificationKind};
pub use registration::{
    Feedback, Registration, RegistrationStatus, RegistrationWithEvent, StatusChange, TicketBuckets,
};
pub use stats::{CategorySummary, CountEntry, DashboardStats, PopularEvent};
pub use user::{Role, User};
