//! Hour totals for press runs and processings.

use crate::model::{PressRun, Processing};
use serde::Serialize;

/// Hour totals over a group of processings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProcessingHours {
    pub estimated: f64,
    pub setup: f64,
    pub working: f64,
}

impl ProcessingHours {
    /// Planned hours: estimate plus setup.
    pub fn total_planned(&self) -> f64 {
        self.estimated + self.setup
    }

    /// Worked hours minus planned hours; positive means over plan.
    pub fn deviation(&self) -> f64 {
        self.working - self.total_planned()
    }
}

impl std::ops::Add for ProcessingHours {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            estimated: self.estimated + other.estimated,
            setup: self.setup + other.setup,
            working: self.working + other.working,
        }
    }
}

/// Sum hours over processings.
pub fn processing_hours<'a>(processings: impl IntoIterator<Item = &'a Processing>) -> ProcessingHours {
    processings
        .into_iter()
        .fold(ProcessingHours::default(), |acc, p| {
            acc + ProcessingHours {
                estimated: p.estimated_hours(),
                setup: p.setup_hours(),
                working: p.working_hours(),
            }
        })
}

/// Sum recorded working hours over press runs.
pub fn run_hours<'a>(runs: impl IntoIterator<Item = &'a PressRun>) -> f64 {
    runs.into_iter().map(PressRun::working_hours).sum()
}

/// Sum recorded consumed sheets over press runs.
pub fn sheets_used<'a>(runs: impl IntoIterator<Item = &'a PressRun>) -> u64 {
    runs.into_iter()
        .map(PressRun::sheets_used)
        .fold(0, u64::saturating_add)
}
