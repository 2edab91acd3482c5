//! A page of events, as returned by a calendar listing

use serde_json::{json, Value};

use crate::codec::{CodecError, FieldPath, FromTree, ObjectReader, ToTree};
use crate::Event;

const FIELDS: &[&str] = &[
    "kind", "etag", "summary", "description", "updated", "timeZone", "accessRole",
    "nextPageToken", "nextSyncToken", "defaultReminders", "items",
];

/// A reminder that applies to every event of a calendar, unless overridden
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reminder {
    /// E.g. `email` or `popup`
    pub method: String,
    /// How long before the event the reminder fires
    pub minutes: i64,
}

impl Reminder {
    pub fn new(method: String, minutes: i64) -> Self {
        Self { method, minutes }
    }
}

impl FromTree for Reminder {
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError> {
        let reader = ObjectReader::new(value, path, &["method", "minutes"])?;
        Ok(Self {
            method: reader.string("method")?,
            minutes: reader.integer("minutes")?,
        })
    }
}

impl ToTree for Reminder {
    fn to_tree(&self) -> Value {
        json!({
            "method": self.method,
            "minutes": self.minutes,
        })
    }
}


/// A list of events, along with metadata about the calendar they belong to.
///
/// Events are kept in the order they were received or pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventList {
    pub kind: String,
    pub etag: String,
    /// The title of the calendar
    pub summary: String,
    pub description: String,
    pub updated: String,
    pub time_zone: String,
    pub access_role: String,
    /// Token of the next page. `None` when this is the last page.
    /// Note that `Some("")` is a distinct value
    pub next_page_token: Option<String>,
    pub next_sync_token: String,
    pub default_reminders: Vec<Reminder>,
    items: Vec<Event>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Event] {
        &self.items
    }

    /// Mutable access to every event. Events cannot be added or removed this way
    pub fn items_mut(&mut self) -> &mut [Event] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an event at the end of the list
    pub fn push(&mut self, event: Event) {
        self.items.push(event);
    }

    /// Returns the first event that has this ID
    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.items.iter().find(|event| event.id() == id)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }

    pub fn all_day_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.items.iter().filter(|event| event.is_all_day())
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromTree for EventList {
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError> {
        let reader = ObjectReader::new(value, path, FIELDS)?;
        let list = Self {
            kind: reader.string("kind")?,
            etag: reader.string("etag")?,
            summary: reader.string("summary")?,
            description: reader.string("description")?,
            updated: reader.string("updated")?,
            time_zone: reader.string("timeZone")?,
            access_role: reader.string("accessRole")?,
            next_page_token: reader.optional_string("nextPageToken")?,
            next_sync_token: reader.string("nextSyncToken")?,
            default_reminders: reader.sequence("defaultReminders")?,
            items: reader.sequence("items")?,
        };
        log::debug!("Decoded event list {:?} with {} events", list.summary, list.items.len());
        Ok(list)
    }
}

impl ToTree for EventList {
    fn to_tree(&self) -> Value {
        json!({
            "kind": self.kind,
            "etag": self.etag,
            "summary": self.summary,
            "description": self.description,
            "updated": self.updated,
            "timeZone": self.time_zone,
            "accessRole": self.access_role,
            "nextPageToken": self.next_page_token,
            "nextSyncToken": self.next_sync_token,
            "defaultReminders": self.default_reminders.iter().map(ToTree::to_tree).collect::<Vec<_>>(),
            "items": self.items.iter().map(ToTree::to_tree).collect::<Vec<_>>(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimePoint;

    #[test]
    fn test_reminders() {
        let value = json!({
            "defaultReminders": [
                { "method": "popup", "minutes": 10 },
                { "method": "email" },
            ],
        });
        let list = EventList::from_tree(&value, &FieldPath::root()).unwrap();
        assert_eq!(list.default_reminders, vec![
            Reminder::new("popup".to_string(), 10),
            Reminder::new("email".to_string(), 0),
        ]);

        let value = json!({ "defaultReminders": [{ "method": "popup", "minutes": "10" }] });
        let err = EventList::from_tree(&value, &FieldPath::root()).unwrap_err();
        assert_eq!(err.field_path(), Some("defaultReminders[0].minutes"));
    }

    #[test]
    fn test_next_page_token() {
        let mut list = EventList::new();
        assert!(list.has_next_page() == false);
        assert_eq!(list.to_tree()["nextPageToken"], Value::Null);

        list.next_page_token = Some(String::new());
        assert!(list.has_next_page());
        let decoded = EventList::from_tree(&list.to_tree(), &FieldPath::root()).unwrap();
        assert_eq!(decoded.next_page_token, Some(String::new()));
    }

    #[test]
    fn test_accessors() {
        let mut list = EventList::new();
        assert!(list.is_empty());

        let mut holiday = Event::new();
        holiday.set_id("holiday".to_string());
        holiday.set_start(TimePoint::from_date("2021-12-25".to_string()));
        holiday.set_end(TimePoint::from_date("2021-12-26".to_string()));

        let mut call = Event::new();
        call.set_id("call".to_string());
        call.set_start(TimePoint::from_date_time("2021-12-24T18:00:00Z".to_string(), String::new()));
        call.set_end(TimePoint::from_date_time("2021-12-24T19:00:00Z".to_string(), String::new()));

        list.push(call);
        list.push(holiday);
        assert_eq!(list.len(), 2);
        assert_eq!(list.event_by_id("holiday").map(|e| e.id()), Some("holiday"));
        assert!(list.event_by_id("nope").is_none());

        let all_day: Vec<&str> = list.all_day_events().map(|e| e.id()).collect();
        assert_eq!(all_day, vec!["holiday"]);

        for event in list.items_mut() {
            event.set_status("cancelled".to_string());
        }
        assert!((&list).into_iter().all(|e| e.status() == "cancelled"));
    }
}
