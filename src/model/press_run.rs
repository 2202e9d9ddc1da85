//! Press run (avviamento) - one pass of an order through a press.

use super::{Paper, RunKind, RunType, Varnish};
use crate::config::MIN_YIELD;
use crate::error::{CommessaError, Result};
use serde::{Deserialize, Serialize};

/// Process-color ink channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChannel {
    #[serde(alias = "c")]
    Cyan,
    #[serde(alias = "m")]
    Magenta,
    #[serde(alias = "y")]
    Yellow,
    #[serde(alias = "k", alias = "black")]
    Key,
}

impl ColorChannel {
    /// Single-letter code used in reports.
    pub fn code(&self) -> char {
        match self {
            ColorChannel::Cyan => 'C',
            ColorChannel::Magenta => 'M',
            ColorChannel::Yellow => 'Y',
            ColorChannel::Key => 'K',
        }
    }
}

/// Pantone spot color, accepted as a plain string or as `{ "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PantoneRepr", into = "String")]
pub struct Pantone {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PantoneRepr {
    Name(String),
    Object { name: Option<String> },
}

impl From<PantoneRepr> for Pantone {
    fn from(repr: PantoneRepr) -> Self {
        let name = match repr {
            PantoneRepr::Name(name) => name,
            PantoneRepr::Object { name } => name.unwrap_or_default(),
        };
        Pantone { name }
    }
}

impl From<Pantone> for String {
    fn from(pantone: Pantone) -> Self {
        pantone.name
    }
}

impl Pantone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether the name is empty once trimmed.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// One pass through a press for an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressRun {
    pub run_type: Option<RunType>,
    pub paper: Option<Paper>,
    pub description: Option<String>,
    /// Sheets obtainable per unit run (resa).
    #[serde(rename = "yield")]
    pub run_yield: Option<i64>,
    pub colors: Option<Vec<ColorChannel>>,
    pub pantones: Option<Vec<Pantone>>,
    pub varnish: Option<Varnish>,
    /// Hours recorded after execution.
    pub working_hours: Option<f64>,
    /// Sheets consumed, recorded after execution.
    pub sheets_used: Option<i64>,
    /// Sheet count entered directly on digital runs.
    pub sheets: Option<i64>,
}

impl PressRun {
    /// Create an offset run with the given yield.
    pub fn offset(run_type: RunType, run_yield: i64) -> Self {
        Self {
            run_type: Some(run_type),
            run_yield: Some(run_yield),
            ..Default::default()
        }
    }

    /// Create a digital run with a directly recorded sheet count.
    pub fn digital(run_type: RunType, sheets: Option<i64>) -> Self {
        Self {
            run_type: Some(run_type),
            sheets,
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, colors: &[ColorChannel]) -> Self {
        self.set_colors(colors);
        self
    }

    pub fn with_pantone(mut self, name: impl Into<String>) -> Self {
        self.add_pantone(name);
        self
    }

    pub fn with_varnish(mut self, varnish: Varnish) -> Self {
        self.varnish = Some(varnish);
        self
    }

    pub fn with_paper(mut self, paper: Paper) -> Self {
        self.paper = Some(paper);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // === Accessors (defaulting policy in `model`) ===

    /// Press kind, if the run type is known.
    pub fn kind(&self) -> Option<RunKind> {
        self.run_type.as_ref().map(|t| t.kind)
    }

    pub fn run_type_name(&self) -> Option<&str> {
        self.run_type.as_ref().map(|t| t.name.as_str())
    }

    /// Check if this run is a Volta pass.
    pub fn is_volta(&self) -> bool {
        self.run_type.as_ref().is_some_and(RunType::is_volta)
    }

    pub fn colors(&self) -> &[ColorChannel] {
        self.colors.as_deref().unwrap_or_default()
    }

    pub fn has_colors(&self) -> bool {
        !self.colors().is_empty()
    }

    /// Pantone names, in entry order. Every entry counts, blank or not.
    pub fn pantone_names(&self) -> impl Iterator<Item = &str> {
        self.pantones
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|p| p.name.trim())
    }

    pub fn has_blank_pantone(&self) -> bool {
        self.pantones
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(Pantone::is_blank)
    }

    pub fn pantone_count(&self) -> usize {
        self.pantone_names().count()
    }

    pub fn adds_varnish_plate(&self) -> bool {
        self.varnish.as_ref().is_some_and(Varnish::adds_plate)
    }

    pub fn working_hours(&self) -> f64 {
        self.working_hours.unwrap_or(0.0).max(0.0)
    }

    pub fn sheets_used(&self) -> u64 {
        clamp_count(self.sheets_used)
    }

    /// Directly recorded sheets (digital runs).
    pub fn recorded_sheets(&self) -> u64 {
        clamp_count(self.sheets)
    }

    /// Color channels as letters, e.g. `"CMYK"`.
    pub fn color_codes(&self) -> String {
        self.colors().iter().map(ColorChannel::code).collect()
    }

    // === Edit operations ===

    /// Replace the color selection, dropping duplicate channels.
    pub fn set_colors(&mut self, colors: &[ColorChannel]) {
        let mut selected: Vec<ColorChannel> = Vec::with_capacity(colors.len());
        for color in colors {
            if !selected.contains(color) {
                selected.push(*color);
            }
        }
        self.colors = Some(selected);
    }

    /// Append a pantone and return its index.
    pub fn add_pantone(&mut self, name: impl Into<String>) -> usize {
        let pantones = self.pantones.get_or_insert_with(Vec::new);
        pantones.push(Pantone::new(name));
        pantones.len() - 1
    }

    /// Remove the pantone at `index`.
    pub fn remove_pantone(&mut self, index: usize) -> Result<Pantone> {
        let pantones = self.pantones.get_or_insert_with(Vec::new);
        if index >= pantones.len() {
            return Err(CommessaError::IndexOutOfRange {
                collection: "pantones",
                index,
                len: pantones.len(),
            });
        }
        Ok(pantones.remove(index))
    }

    /// Check the yield as required at entry time.
    ///
    /// Offset runs need a yield of at least 1. Other runs may omit it, but a
    /// value that is present must still be at least 1.
    pub fn check_yield(&self, run: usize) -> Result<()> {
        match self.run_yield {
            Some(y) if y < MIN_YIELD => Err(CommessaError::InvalidYield { run }),
            None if self.kind() == Some(RunKind::Offset) => {
                Err(CommessaError::InvalidYield { run })
            }
            _ => Ok(()),
        }
    }
}

fn clamp_count(value: Option<i64>) -> u64 {
    value.map_or(0, |v| v.max(0) as u64)
}
