use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Academic,
    Cultural,
    Sports,
    Workshop,
    Seminar,
    Competition,
    Hackathon,
    Conference,
    Social,
    Career,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Cultural => "cultural",
            Category::Sports => "sports",
            Category::Workshop => "workshop",
            Category::Seminar => "seminar",
            Category::Competition => "competition",
            Category::Hackathon => "hackathon",
            Category::Conference => "conference",
            Category::Social => "social",
            Category::Career => "career",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owning department. `All` marks a campus-wide event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    ComputerScience,
    Engineering,
    Business,
    Arts,
    Science,
    Medicine,
    All,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::ComputerScience => "computer-science",
            Department::Engineering => "engineering",
            Department::Business => "business",
            Department::Arts => "arts",
            Department::Science => "science",
            Department::Medicine => "medicine",
            Department::All => "all",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-text range such as `"09:00 AM - 05:00 PM"`.
    pub time: String,
    pub location: String,
    pub category: Category,
    pub department: Department,
    pub organizer: String,
    pub capacity: u32,
    /// Seat count as maintained by admins. Never touched by registration.
    pub registered: u32,
    pub image: String,
    pub is_registration_open: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speakers: Vec<Speaker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sponsors: Vec<Sponsor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Fill ratio as a whole percentage, rounded half up.
    pub fn fill_percentage(&self) -> u64 {
        rounded_percentage(u64::from(self.registered), u64::from(self.capacity))
    }

    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.organizer.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// `part / whole * 100` rounded half up, or 0 for an empty whole. Parts larger
/// than the whole yield percentages above 100.
pub fn rounded_percentage(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u128::from(part), u128::from(whole));
    u64::try_from((part * 200 + whole) / (whole * 2)).unwrap_or(u64::MAX)
}

/// Admin create-form payload: an event without id or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub department: Department,
    pub organizer: String,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
    pub image: String,
    pub is_registration_open: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
}

impl NewEvent {
    pub fn into_event(self, id: String, now: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            department: self.department,
            organizer: self.organizer,
            capacity: self.capacity,
            registered: self.registered,
            image: self.image,
            is_registration_open: self.is_registration_open,
            is_featured: self.is_featured,
            tags: self.tags,
            venue: self.venue,
            contact_email: self.contact_email,
            website: self.website,
            speakers: self.speakers,
            sponsors: self.sponsors,
            created_at: now,
            updated_at: now,
        }
    }

    /// Names of required text fields that are blank, in form order.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("time", &self.time),
            ("location", &self.location),
            ("organizer", &self.organizer),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Partial update for an event. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub department: Option<Department>,
    pub organizer: Option<String>,
    pub capacity: Option<u32>,
    pub registered: Option<u32>,
    pub image: Option<String>,
    pub is_registration_open: Option<bool>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub venue: Option<Venue>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
    pub speakers: Option<Vec<Speaker>>,
    pub sponsors: Option<Vec<Sponsor>>,
}

impl EventPatch {
    pub fn apply(self, event: &mut Event) {
        let EventPatch {
            title,
            description,
            date,
            time,
            location,
            category,
            department,
            organizer,
            capacity,
            registered,
            image,
            is_registration_open,
            is_featured,
            tags,
            venue,
            contact_email,
            website,
            speakers,
            sponsors,
        } = self;

        macro_rules! merge {
            ($target:ident; $($field:ident),* $(,)?) => {
                $(if let Some(value) = $field {
                    $target.$field = value;
                })*
            };
        }

        merge!(
            event;
            title,
            description,
            date,
            time,
            location,
            category,
            department,
            organizer,
            capacity,
            registered,
            image,
            is_registration_open,
            is_featured,
            tags,
            speakers,
            sponsors,
        );

        if venue.is_some() {
            event.venue = venue;
        }
        if contact_email.is_some() {
            event.contact_email = contact_email;
        }
        if website.is_some() {
            event.website = website;
        }
    }
}

/// Filter value that is either the `"all"` sentinel or a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Scope<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(expected) => expected == value,
        }
    }
}

impl<'de, T> Deserialize<'de> for Scope<T>
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::IntoDeserializer;

        let raw = String::deserialize(deserializer)?;
        if raw == "all" {
            return Ok(Scope::All);
        }
        let inner: serde::de::value::StringDeserializer<D::Error> = raw.into_deserializer();
        T::deserialize(inner).map(Scope::Only)
    }
}

/// Query-string field where an empty value means the filter is absent.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    use serde::de::IntoDeserializer;

    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => {
            let inner: serde::de::value::StringDeserializer<D::Error> = raw.into_deserializer();
            T::deserialize(inner).map(Some)
        }
        _ => Ok(None),
    }
}

fn blank_flag_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<Scope<Category>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub department: Option<Scope<Department>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_flag_as_none")]
    pub featured: Option<bool>,
}

impl EventFilter {
    /// Category, department, date and featured reject first. When a search
    /// term is present its result is final.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = &self.category {
            if !category.admits(&event.category) {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if !department.admits(&event.department) {
                return false;
            }
        }
        if let Some(date) = self.date {
            if event.date != date {
                return false;
            }
        }
        if self.featured == Some(true) && !event.is_featured {
            return false;
        }
        match self.search.as_deref() {
            Some(term) if !term.is_empty() => event.matches_search(term),
            _ => true,
        }
    }
}
