//! Processing (lavorazione) - graphic or finishing work attached to an order.

use super::ProcessDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Production stage a processing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Graphic / pre-press work.
    Pre,
    /// Finishing after printing (cutting, binding, ...).
    Post,
}

/// Timestamped free-text note on a processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Graphic or finishing work on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Processing {
    pub process_definition: Option<ProcessDefinition>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_hours: Option<f64>,
    pub setup_hours: Option<f64>,
    pub working_hours: Option<f64>,
    pub expected_quantity: Option<i64>,
    pub actual_quantity: Option<i64>,
    pub notes: Option<Vec<Note>>,
}

impl Processing {
    /// Create a processing from its definition.
    pub fn new(definition: ProcessDefinition) -> Self {
        Self {
            process_definition: Some(definition),
            ..Default::default()
        }
    }

    /// Stage of this processing; no definition means post-press.
    pub fn stage(&self) -> Stage {
        if self.is_pre() {
            Stage::Pre
        } else {
            Stage::Post
        }
    }

    pub fn is_pre(&self) -> bool {
        self.process_definition
            .as_ref()
            .is_some_and(ProcessDefinition::is_pre)
    }

    pub fn is_special(&self) -> bool {
        self.process_definition
            .as_ref()
            .is_some_and(ProcessDefinition::is_special)
    }

    /// Name shown in reports: own name, else the definition's name.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.process_definition
                    .as_ref()
                    .map(|d| d.name.as_str())
            })
            .unwrap_or("")
    }

    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours.unwrap_or(0.0).max(0.0)
    }

    pub fn setup_hours(&self) -> f64 {
        self.setup_hours.unwrap_or(0.0).max(0.0)
    }

    pub fn working_hours(&self) -> f64 {
        self.working_hours.unwrap_or(0.0).max(0.0)
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.as_deref().unwrap_or_default()
    }

    /// Append a note and return its index.
    pub fn add_note(&mut self, description: impl Into<String>, at: Option<DateTime<Utc>>) -> usize {
        let notes = self.notes.get_or_insert_with(Vec::new);
        notes.push(Note {
            description: description.into(),
            created_at: at,
        });
        notes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stage_without_definition_is_post() {
        assert_eq!(Processing::default().stage(), Stage::Post);
    }

    #[test]
    fn test_stage_from_definition() {
        let pre = Processing::new(ProcessDefinition::new(1, "Grafica", true, false));
        assert_eq!(pre.stage(), Stage::Pre);
        let post = Processing::new(ProcessDefinition::new(2, "Taglio", false, false));
        assert_eq!(post.stage(), Stage::Post);

        let null_flag: Processing =
            serde_json::from_str(r#"{"process_definition": {"id": 3, "name": "Piega", "pre": null}}"#)
                .unwrap();
        assert_eq!(null_flag.stage(), Stage::Post);
    }

    #[test]
    fn test_display_name_falls_back_to_definition() {
        let mut p = Processing::new(ProcessDefinition::new(2, "Taglio", false, false));
        assert_eq!(p.display_name(), "Taglio");
        p.name = Some(String::from("  "));
        assert_eq!(p.display_name(), "Taglio");
        p.name = Some(String::from("Taglio al vivo"));
        assert_eq!(p.display_name(), "Taglio al vivo");
        assert_eq!(Processing::default().display_name(), "");
    }

    #[test]
    fn test_add_note_keeps_order() {
        let mut p = Processing::default();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(p.add_note("Bozza inviata", Some(at)), 0);
        assert_eq!(p.add_note("Bozza approvata", None), 1);
        let notes: Vec<_> = p.notes().iter().map(|n| n.description.as_str()).collect();
        assert_eq!(notes, vec!["Bozza inviata", "Bozza approvata"]);
        assert_eq!(p.notes()[0].created_at, Some(at));
    }

    #[test]
    fn test_hours_default_to_zero() {
        let p: Processing = serde_json::from_str(r#"{"estimated_hours": 2.5}"#).unwrap();
        assert_eq!(p.estimated_hours(), 2.5);
        assert_eq!(p.setup_hours(), 0.0);
        assert_eq!(p.working_hours(), 0.0);
        assert!(p.notes().is_empty());
    }
}
