//! Event entity with its passes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Festival,
    Party,
    Workshop,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Festival => "FESTIVAL",
            EventType::Party => "PARTY",
            EventType::Workshop => "WORKSHOP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FESTIVAL" => Some(EventType::Festival),
            "PARTY" => Some(EventType::Party),
            "WORKSHOP" => Some(EventType::Workshop),
            _ => None,
        }
    }
}

/// Ticket type for an event. A `quantity_available` of -1 means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPass {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub event_id: Uuid,
    pub name: String,
    /// Minor currency units.
    pub price_cents: i64,
    pub quantity_available: i32,
}

impl EventPass {
    pub const UNLIMITED: i32 = -1;

    pub fn is_unlimited(&self) -> bool {
        self.quantity_available == Self::UNLIMITED
    }

    pub fn is_sold_out(&self) -> bool {
        !self.is_unlimited() && self.quantity_available <= 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_name: String,
    #[serde(rename = "node")]
    pub node_id: Uuid,
    pub image: Option<String>,
    pub passes: Vec<EventPass>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Event {
    pub fn new(
        name: String,
        slug: String,
        event_type: EventType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        node_id: Uuid,
    ) -> Result<Self, DomainError> {
        if !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", slug)));
        }
        if end_date < start_date {
            return Err(DomainError::ValidationError(format!("Event {} ends before it starts", slug)));
        }
        Ok(Self {
            id: new_id(),
            name,
            slug,
            event_type,
            description: String::new(),
            start_date,
            end_date,
            location_name: String::new(),
            node_id,
            image: None,
            passes: Vec::new(),
            timestamps: Timestamps::now(),
        })
    }

    pub fn add_pass(&mut self, name: String, price_cents: i64, quantity_available: i32) -> Result<(), DomainError> {
        if price_cents < 0 {
            return Err(DomainError::ValidationError(format!("Negative pass price: {}", price_cents)));
        }
        if quantity_available < EventPass::UNLIMITED {
            return Err(DomainError::ValidationError(format!("Invalid pass quantity: {}", quantity_available)));
        }
        self.passes.push(EventPass { id: new_id(), event_id: self.id, name, price_cents, quantity_available });
        Ok(())
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.end_date >= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(quantity: i32) -> EventPass {
        EventPass {
            id: Uuid::new_v4(),
            event_id: Uuid::nil(),
            name: "Full Pass".to_string(),
            price_cents: 12_000,
            quantity_available: quantity,
        }
    }

    #[test]
    fn test_pass_availability() {
        assert!(pass(EventPass::UNLIMITED).is_unlimited());
        assert!(!pass(EventPass::UNLIMITED).is_sold_out());
        assert!(pass(0).is_sold_out());
        assert!(!pass(12).is_sold_out());
    }

    #[test]
    fn test_add_pass_links_event() {
        let start = Utc::now();
        let mut event = Event::new(
            "Bachata Vibe Festival".into(),
            "bachata-vibe-festival".into(),
            EventType::Festival,
            start,
            start + chrono::Duration::days(3),
            Uuid::new_v4(),
        )
        .unwrap();

        event.add_pass("Full Pass Early Bird".into(), 8_900, 50).unwrap();
        assert_eq!(event.passes[0].event_id, event.id);
        assert!(event.add_pass("Broken".into(), -1, 10).is_err());
        assert!(event.add_pass("Broken".into(), 100, -2).is_err());
    }

    #[test]
    fn test_event_must_end_after_start() {
        let start = Utc::now();
        let result = Event::new(
            "Party".into(),
            "party".into(),
            EventType::Party,
            start,
            start - chrono::Duration::hours(1),
            Uuid::new_v4(),
        );
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_event_type_strings() {
        assert_eq!(EventType::from_str("PARTY"), Some(EventType::Party));
        assert_eq!(EventType::Workshop.as_str(), "WORKSHOP");
        assert_eq!(EventType::from_str("party"), None);
    }
}
