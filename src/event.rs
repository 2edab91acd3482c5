//! Calendar events

use serde_json::{json, Value};

use crate::codec::{CodecError, FieldPath, FromTree, ObjectReader, ToTree};
use crate::item::Item;
use crate::{Person, TimePoint};

const FIELDS: &[&str] = &[
    "id", "status", "htmlLink", "created", "updated", "summary", "description",
    "creator", "organizer", "start", "end",
];

/// A calendar event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    id: String,
    /// E.g. `confirmed`, `tentative` or `cancelled`
    status: String,
    /// Link to this event in a web UI
    html_link: String,
    /// Creation time, as received
    created: String,
    /// Last modification time, as received
    updated: String,
    /// The title of this event
    summary: String,
    description: String,

    creator: Person,
    organizer: Person,

    start: TimePoint,
    end: TimePoint,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// Create an event whose fields are all empty
    pub fn new() -> Self {
        Self {
            id: String::new(),
            status: String::new(),
            html_link: String::new(),
            created: String::new(),
            updated: String::new(),
            summary: String::new(),
            description: String::new(),
            creator: Person::default(),
            organizer: Person::default(),
            start: TimePoint::default(),
            end: TimePoint::default(),
        }
    }

    /// Create an event with a given ID, title and time span
    pub fn new_with_parameters(id: String, summary: String, start: TimePoint, end: TimePoint) -> Self {
        Self {
            id,
            summary,
            start,
            end,
            ..Self::new()
        }
    }

    /// The base attribute of this variant, see [`Item::label`]
    pub fn label(&self) -> &'static str   { crate::item::DEFAULT_LABEL }
    pub fn id(&self) -> &str              { &self.id          }
    pub fn status(&self) -> &str          { &self.status      }
    pub fn html_link(&self) -> &str       { &self.html_link   }
    pub fn created(&self) -> &str         { &self.created     }
    pub fn updated(&self) -> &str         { &self.updated     }
    pub fn summary(&self) -> &str         { &self.summary     }
    pub fn description(&self) -> &str     { &self.description }
    pub fn creator(&self) -> &Person      { &self.creator     }
    pub fn organizer(&self) -> &Person    { &self.organizer   }
    pub fn start(&self) -> &TimePoint     { &self.start       }
    pub fn end(&self) -> &TimePoint       { &self.end         }

    pub fn set_id(&mut self, id: String)                    { self.id = id;                   }
    pub fn set_status(&mut self, status: String)            { self.status = status;           }
    pub fn set_html_link(&mut self, html_link: String)      { self.html_link = html_link;     }
    pub fn set_created(&mut self, created: String)          { self.created = created;         }
    pub fn set_updated(&mut self, updated: String)          { self.updated = updated;         }
    pub fn set_summary(&mut self, summary: String)          { self.summary = summary;         }
    pub fn set_description(&mut self, description: String) { self.description = description; }
    pub fn set_creator(&mut self, creator: Person)          { self.creator = creator;         }
    pub fn set_organizer(&mut self, organizer: Person)      { self.organizer = organizer;     }
    pub fn set_start(&mut self, start: TimePoint)           { self.start = start;             }
    pub fn set_end(&mut self, end: TimePoint)               { self.end = end;                 }

    pub fn creator_mut(&mut self) -> &mut Person      { &mut self.creator   }
    pub fn organizer_mut(&mut self) -> &mut Person    { &mut self.organizer }
    pub fn start_mut(&mut self) -> &mut TimePoint     { &mut self.start     }
    pub fn end_mut(&mut self) -> &mut TimePoint       { &mut self.end       }

    /// Whether neither the start nor the end of this event has a time of day.
    /// This is computed from the current values every time it is called
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day() && self.end.is_all_day()
    }

    /// Returns an independent copy of this event, only known as an [`Item`].
    ///
    /// Use [`Item::as_event_mut`] to modify it as an `Event` again
    pub fn clone_as_item(&self) -> Item {
        Item::Event(self.clone())
    }
}

impl FromTree for Event {
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError> {
        let reader = ObjectReader::new(value, path, FIELDS)?;
        Ok(Self {
            id: reader.string("id")?,
            status: reader.string("status")?,
            html_link: reader.string("htmlLink")?,
            created: reader.string("created")?,
            updated: reader.string("updated")?,
            summary: reader.string("summary")?,
            description: reader.string("description")?,
            creator: reader.nested("creator")?,
            organizer: reader.nested("organizer")?,
            start: reader.nested("start")?,
            end: reader.nested("end")?,
        })
    }
}

impl ToTree for Event {
    fn to_tree(&self) -> Value {
        json!({
            "id": self.id,
            "status": self.status,
            "htmlLink": self.html_link,
            "created": self.created,
            "updated": self.updated,
            "summary": self.summary,
            "description": self.description,
            "creator": self.creator.to_tree(),
            "organizer": self.organizer.to_tree(),
            "start": self.start.to_tree(),
            "end": self.end.to_tree(),
        })
    }
}
