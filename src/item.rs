//! Calendar items, i.e. every kind of entry a calendar can hold
//!
//! [`Item`] is the closed set of variants. Only events exist for now.

use crate::event::Event;

/// The base attribute every item variant carries. It is not part of the JSON format
pub const DEFAULT_LABEL: &str = "calendar item";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Event(Event),
}

/// Returns `event.$property_name`, or the same property of any other variant
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Item::Event(e) => e.$property_name(),
            }
        }
    }
}

impl Item {
    synthetise_common_getter!(label, &str);
    synthetise_common_getter!(id, &str);
    synthetise_common_getter!(summary, &str);

    pub fn is_event(&self) -> bool {
        matches!(self, Item::Event(_))
    }

    /// Returns a reference to the inner Event, or `None` if this item is another variant
    #[allow(unreachable_patterns)]
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Item::Event(e) => Some(e),
            _ => None,
        }
    }

    /// Returns a mutable reference to the inner Event, or `None` if this item is another variant
    #[allow(unreachable_patterns)]
    pub fn as_event_mut(&mut self) -> Option<&mut Event> {
        match self {
            Item::Event(e) => Some(e),
            _ => None,
        }
    }

    /// Turns this item into its inner Event, or gives it back if it is another variant
    #[allow(unreachable_patterns)]
    pub fn into_event(self) -> Result<Event, Item> {
        match self {
            Item::Event(e) => Ok(e),
            other => Err(other),
        }
    }

    /// Returns a reference to the inner Event
    ///
    /// # Panics
    /// Panics if the inner item is not an Event
    pub fn unwrap_event(&self) -> &Event {
        match self.as_event() {
            Some(e) => e,
            None => panic!("Not an event"),
        }
    }

    /// Returns a mutable reference to the inner Event
    ///
    /// # Panics
    /// Panics if the inner item is not an Event
    pub fn unwrap_event_mut(&mut self) -> &mut Event {
        match self.as_event_mut() {
            Some(e) => e,
            None => panic!("Not an event"),
        }
    }
}

impl From<Event> for Item {
    fn from(event: Event) -> Self {
        Item::Event(event)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_through_item() {
        let mut event = Event::new();
        event.set_id("event1".to_string());
        let item = Item::from(event);

        let mut copy = item.clone();
        assert_eq!(copy, item);
        assert!(copy.is_event());

        copy.unwrap_event_mut().set_id("event2".to_string());
        assert_eq!(item.id(), "event1");
        assert_eq!(copy.id(), "event2");
        assert_eq!(item.label(), DEFAULT_LABEL);
        assert_eq!(copy.label(), DEFAULT_LABEL);

        let event = copy.into_event().unwrap();
        assert_eq!(event.id(), "event2");
    }
}
