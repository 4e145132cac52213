//! Summary values and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the formulas stay free of presentation concerns
//! - output changes are localized (the text line is matched verbatim by tests)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{OutputFormat, WorkoutKind};
use crate::error::AppError;

/// Displayable statistics of one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// The summary line, every number rounded to three decimals.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render a batch of summaries in the requested format.
///
/// Text output is one line per summary with no trailing newline.
pub fn format_summaries(messages: &[InfoMessage], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(messages
            .iter()
            .map(InfoMessage::message)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(messages)
            .map_err(|e| AppError::new(4, format!("Failed to serialize summaries: {e}"))),
    }
}

/// Table of known workout tags and the values each one expects.
pub fn format_kinds() -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<5} {:<14} {}\n", "TAG", "WORKOUT", "VALUES"));
    for kind in WorkoutKind::ALL {
        out.push_str(&format!(
            "{:<5} {:<14} {}\n",
            kind.tag(),
            kind.display_name(),
            kind.fields().join(" ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 797.805,
        }
    }

    #[test]
    fn message_matches_template() {
        assert_eq!(
            running().message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
        assert_eq!(running().to_string(), running().message());
    }

    #[test]
    fn message_rounds_to_three_decimals() {
        let info = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.25,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0004,
        };
        let msg = info.message();
        assert!(msg.contains("Длительность: 1.250 ч."));
        assert!(msg.contains("Дистанция: 0.994 км"));
        assert!(msg.ends_with("Потрачено ккал: 336.000."));
    }

    #[test]
    fn text_format_joins_lines() {
        let out = format_summaries(&[running(), running()], OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn json_format_keeps_raw_fields() {
        let out = format_summaries(&[running()], OutputFormat::Json).unwrap();
        let parsed: Vec<InfoMessage> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![running()]);
        assert!(out.contains("\"training_type\": \"Running\""));
    }

    #[test]
    fn kinds_table_lists_every_tag() {
        let table = format_kinds();
        for kind in WorkoutKind::ALL {
            assert!(table.contains(kind.tag()));
        }
        assert!(table.contains("length_pool count_pool"));
    }
}
