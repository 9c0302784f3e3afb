//! Defines the `Event` an advisability decision is made for.

use crate::error::AdvisorError;
use bon::bon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Latest hour of the day an event may start at.
pub const LAST_START_HOUR: u8 = 23;

/// Details about a planned event that may be influenced by the weather.
///
/// Events are immutable once built. Create one with [`Event::builder`]:
///
/// ```rust
/// use weather_advisor::Event;
///
/// # fn main() -> Result<(), weather_advisor::AdvisorError> {
/// let party = Event::builder()
///     .name("Party")
///     .outdoors(true)
///     .start_hour(12)
///     .build()?;
/// assert_eq!(party.to_string(), "Event(Party @ 12, true, false)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventFields")]
pub struct Event {
    name: String,
    outdoors: bool,
    cover_available: bool,
    start_hour: u8,
}

/// Unchecked shape of a serialized [`Event`], validated through [`Event::new`].
#[derive(Deserialize)]
struct EventFields {
    name: String,
    #[serde(default)]
    outdoors: bool,
    #[serde(default)]
    cover_available: bool,
    start_hour: u8,
}

impl TryFrom<EventFields> for Event {
    type Error = AdvisorError;

    fn try_from(fields: EventFields) -> Result<Self, Self::Error> {
        Event::builder()
            .name(fields.name)
            .outdoors(fields.outdoors)
            .cover_available(fields.cover_available)
            .start_hour(fields.start_hour)
            .build()
    }
}

#[bon]
impl Event {
    /// Builds an event, rejecting start hours past 23.
    ///
    /// `outdoors` and `cover_available` default to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::InvalidStartHour`] if `start_hour > 23`.
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        #[builder(default)] outdoors: bool,
        #[builder(default)] cover_available: bool,
        start_hour: u8,
    ) -> Result<Self, AdvisorError> {
        if start_hour > LAST_START_HOUR {
            return Err(AdvisorError::InvalidStartHour(start_hour));
        }
        Ok(Self {
            name,
            outdoors,
            cover_available,
            start_hour,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outdoors(&self) -> bool {
        self.outdoors
    }

    pub fn cover_available(&self) -> bool {
        self.cover_available
    }

    /// Hour of the day (0-23) closest to the start of the event.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event({} @ {}, {}, {})",
            self.name, self.start_hour, self.outdoors, self.cover_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() -> Result<(), AdvisorError> {
        let event = Event::builder()
            .name("Picnic")
            .outdoors(true)
            .cover_available(true)
            .start_hour(9)
            .build()?;
        assert_eq!(event.to_string(), "Event(Picnic @ 9, true, true)");
        Ok(())
    }

    #[test]
    fn test_event_defaults_to_indoors_without_cover() -> Result<(), AdvisorError> {
        let event = Event::builder().name("Dinner").start_hour(19).build()?;
        assert!(!event.outdoors());
        assert!(!event.cover_available());
        assert_eq!(event.name(), "Dinner");
        assert_eq!(event.start_hour(), 19);
        Ok(())
    }

    #[test]
    fn test_event_rejects_hour_past_midnight() {
        let result = Event::builder().name("Late").start_hour(24).build();
        assert!(matches!(result, Err(AdvisorError::InvalidStartHour(24))));
    }

    #[test]
    fn test_events_compare_by_fields() -> Result<(), AdvisorError> {
        let a = Event::builder().name("Gala").start_hour(20).build()?;
        let b = Event::builder().name("Gala").start_hour(20).build()?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_deserialize_validates_start_hour() -> Result<(), Box<dyn std::error::Error>> {
        let late = serde_json::from_str::<Event>(
            r#"{"name":"Late","outdoors":true,"cover_available":false,"start_hour":99}"#,
        );
        let message = late.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("Event start hour 99 is outside 0..=23"));

        let fair = Event::builder().name("Fair").outdoors(true).start_hour(10).build()?;
        let restored: Event = serde_json::from_str(&serde_json::to_string(&fair)?)?;
        assert_eq!(restored, fair);

        let brief: Event = serde_json::from_str(r#"{"name":"Brief","start_hour":8}"#)?;
        assert!(!brief.outdoors());
        Ok(())
    }
}
