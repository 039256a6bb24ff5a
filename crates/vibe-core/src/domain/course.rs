//! Course entity with its weekly schedule

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vibe_shared::types::{new_id, Timestamps};
use vibe_shared::utils::is_valid_slug;

use crate::error::DomainError;

const DAY_LABELS: [&str; 7] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"];

/// A weekly time slot. `day_of_week` runs 0 (Monday) to 6 (Sunday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub course_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location_name: String,
}

impl Schedule {
    pub fn new(
        course_id: Uuid,
        day_of_week: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location_name: String,
    ) -> Result<Self, DomainError> {
        if !(0..=6).contains(&day_of_week) {
            return Err(DomainError::ValidationError(format!("Invalid day of week: {}", day_of_week)));
        }
        if end_time <= start_time {
            return Err(DomainError::ValidationError(format!(
                "Schedule ends before it starts: {} - {}",
                start_time, end_time
            )));
        }
        Ok(Self { id: new_id(), course_id, day_of_week, start_time, end_time, location_name })
    }

    pub fn day_label(&self) -> Option<&'static str> {
        usize::try_from(self.day_of_week).ok().and_then(|day| DAY_LABELS.get(day).copied())
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Day then start time.
    pub fn sort(schedules: &mut [Schedule]) {
        schedules.sort_by(|a, b| {
            a.day_of_week
                .cmp(&b.day_of_week)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "style")]
    pub style_id: Uuid,
    #[serde(rename = "level")]
    pub level_id: Uuid,
    #[serde(rename = "node")]
    pub node_id: Uuid,
    pub is_active: bool,
    pub image: Option<String>,
    pub schedules: Vec<Schedule>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Course {
    /// Active, with no schedule yet.
    pub fn new(
        name: String,
        slug: String,
        style_id: Uuid,
        level_id: Uuid,
        node_id: Uuid,
    ) -> Result<Self, DomainError> {
        if !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(format!("Invalid slug: {}", slug)));
        }
        Ok(Self {
            id: new_id(),
            name,
            slug,
            description: String::new(),
            style_id,
            level_id,
            node_id,
            is_active: true,
            image: None,
            schedules: Vec::new(),
            timestamps: Timestamps::now(),
        })
    }

    pub fn add_schedule(
        &mut self,
        day_of_week: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location_name: String,
    ) -> Result<(), DomainError> {
        let slot = Schedule::new(self.id, day_of_week, start_time, end_time, location_name)?;
        self.schedules.push(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: i16, hour: u32) -> Schedule {
        Schedule {
            id: Uuid::new_v4(),
            course_id: Uuid::nil(),
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 30, 0).unwrap(),
            location_name: "Studio A".to_string(),
        }
    }

    #[test]
    fn test_day_label_and_duration() {
        assert_eq!(slot(0, 19).day_label(), Some("Lundi"));
        assert_eq!(slot(6, 19).day_label(), Some("Dimanche"));
        assert_eq!(slot(7, 19).day_label(), None);
        assert_eq!(slot(2, 19).duration_minutes(), 90);
    }

    #[test]
    fn test_add_schedule_validates_slot() {
        let ids = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut course = Course::new("Bachata Débutant".into(), "bachata-debutant".into(), ids.0, ids.1, ids.2).unwrap();
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

        course.add_schedule(0, at(19, 30), at(20, 30), "Studio Vibe".into()).unwrap();
        assert_eq!(course.schedules[0].course_id, course.id);
        assert!(course.add_schedule(7, at(19, 30), at(20, 30), String::new()).is_err());
        assert!(course.add_schedule(2, at(21, 0), at(20, 0), String::new()).is_err());
        assert_eq!(course.schedules.len(), 1);
    }

    #[test]
    fn test_sort_by_day_then_start() {
        let mut slots = vec![slot(3, 20), slot(1, 21), slot(1, 19)];
        Schedule::sort(&mut slots);
        let keys: Vec<(i16, u32)> = slots
            .iter()
            .map(|s| (s.day_of_week, chrono::Timelike::hour(&s.start_time)))
            .collect();
        assert_eq!(keys, vec![(1, 19), (1, 21), (3, 20)]);
    }
}
