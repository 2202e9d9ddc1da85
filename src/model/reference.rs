//! Reference tables: paper, varnish, run types and process definitions.

use serde::{Deserialize, Serialize};

/// Kind of press a run goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    /// Offset press (plates, sheets derived from yield).
    Offset,
    /// Digital press (sheet count recorded directly).
    #[serde(alias = "digitale")]
    Digital,
}

impl std::fmt::Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunKind::Offset => write!(f, "offset"),
            RunKind::Digital => write!(f, "digitale"),
        }
    }
}

/// Run type (tipo avviamento), e.g. "Bianca", "Volta", "Digitale 4+0".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunType {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub kind: RunKind,
}

impl RunType {
    /// Create a run type.
    pub fn new(id: i64, name: impl Into<String>, kind: RunKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Check if this is the backing pass that shares sheets with its front pass.
    ///
    /// The name must match exactly; "volta" or " Volta " are ordinary passes.
    pub fn is_volta(&self) -> bool {
        self.name == crate::config::VOLTA_RUN_TYPE
    }
}

/// Paper stock (carta).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Grammage in g/m².
    pub weight: Option<f64>,
    /// Sheet format, e.g. "70x100".
    pub format: Option<String>,
    /// Grain orientation, e.g. "fibra lunga".
    pub orientation: Option<String>,
}

impl Paper {
    /// Label used in reports: name, weight and format when known.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if let Some(weight) = self.weight {
            label.push_str(&format!(" {}g", crate::config::format_it::decimal(weight)));
        }
        if let Some(format) = self.format.as_deref().filter(|f| !f.trim().is_empty()) {
            label.push_str(&format!(" {}", format.trim()));
        }
        label
    }
}

/// Varnish definition (vernice).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Varnish {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Whether applying this varnish needs its own plate.
    pub add_plate: Option<bool>,
}

impl Varnish {
    /// Create a varnish definition.
    pub fn new(id: i64, name: impl Into<String>, add_plate: bool) -> Self {
        Self {
            id,
            name: name.into(),
            add_plate: Some(add_plate),
        }
    }

    /// Whether this varnish consumes a plate.
    pub fn adds_plate(&self) -> bool {
        self.add_plate.unwrap_or(false)
    }
}

/// Process definition (lavorazione a listino).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Graphic / pre-press work.
    pub pre: Option<bool>,
    /// Derived from a press run rather than entered by hand.
    pub special: Option<bool>,
}

impl ProcessDefinition {
    /// Create a process definition.
    pub fn new(id: i64, name: impl Into<String>, pre: bool, special: bool) -> Self {
        Self {
            id,
            name: name.into(),
            pre: Some(pre),
            special: Some(special),
        }
    }

    pub fn is_pre(&self) -> bool {
        self.pre.unwrap_or(false)
    }

    pub fn is_special(&self) -> bool {
        self.special.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_kind_deserialize() {
        let kind: RunKind = serde_json::from_str("\"offset\"").unwrap();
        assert_eq!(kind, RunKind::Offset);
        let kind: RunKind = serde_json::from_str("\"digitale\"").unwrap();
        assert_eq!(kind, RunKind::Digital);
    }

    #[test]
    fn test_is_volta() {
        assert!(RunType::new(1, "Volta", RunKind::Offset).is_volta());
        assert!(!RunType::new(1, " volta ", RunKind::Offset).is_volta());
        assert!(!RunType::new(1, "VOLTA", RunKind::Offset).is_volta());
        assert!(!RunType::new(2, "Bianca", RunKind::Offset).is_volta());
        assert!(!RunType::new(3, "Bianca e volta", RunKind::Offset).is_volta());
    }

    #[test]
    fn test_varnish_defaults_to_no_plate() {
        let varnish: Varnish = serde_json::from_str(r#"{"id": 3, "name": "Lucida"}"#).unwrap();
        assert!(!varnish.adds_plate());
        let varnish: Varnish =
            serde_json::from_str(r#"{"id": 4, "name": "UV serigrafica", "add_plate": true}"#)
                .unwrap();
        assert!(varnish.adds_plate());
    }

    #[test]
    fn test_process_definition_flags() {
        let def: ProcessDefinition =
            serde_json::from_str(r#"{"id": 1, "name": "Impaginazione", "pre": null}"#).unwrap();
        assert!(!def.is_pre());
        assert!(!def.is_special());
        assert!(ProcessDefinition::new(2, "Grafica", true, false).is_pre());
    }

    #[test]
    fn test_paper_label() {
        let paper = Paper {
            id: 1,
            name: String::from("Patinata opaca"),
            weight: Some(150.0),
            format: Some(String::from("70x100")),
            orientation: None,
        };
        assert_eq!(paper.label(), "Patinata opaca 150g 70x100");
        assert_eq!(Paper::default().label(), "");
    }
}
