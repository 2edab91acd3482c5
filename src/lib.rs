//! This crate models Google Calendar events, and pages of events as returned by an events listing.
//!
//! The model can be built from, and turned back into, a JSON tree (a [`serde_json::Value`]) with the [`codec`] module. \
//! This conversion is lossless for every field the model declares: absent fields (or `null` ones) get a documented default,
//! unknown fields are ignored, and fields of the wrong kind make the whole decoding fail with the path of the offending field.
//!
//! Every kind of calendar entry is a variant of [`Item`]. Only [`Event`]s exist for now. \
//! An event can be copied into an independent `Item` with [`Event::clone_as_item`], and an `Item` can be turned back into an `Event` with the fallible [`Item::as_event`] family.
//!
//! None of this is internally synchronized. An [`EventList`] can be read from several threads at once, but mutating a shared instance requires external locking.
//! Clone it to get an independently mutable copy instead.

pub mod codec;

mod person;
pub use person::Person;
mod time_point;
pub use time_point::TimePoint;
mod event;
pub use event::Event;
mod item;
pub use item::{Item, DEFAULT_LABEL};
mod event_list;
pub use event_list::{EventList, Reminder};
