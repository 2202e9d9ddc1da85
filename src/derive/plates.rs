//! Printing plate count for offset runs.

use crate::model::PressRun;

/// Plates one offset run consumes.
///
/// One plate for any non-empty color selection (not one per channel), one per
/// pantone entry, one if the varnish adds a plate.
pub fn run_plates(run: &PressRun) -> u64 {
    let process = u64::from(run.has_colors());
    let pantones = run.pantone_count() as u64;
    let varnish = u64::from(run.adds_varnish_plate());
    process + pantones + varnish
}

/// Plates consumed across offset runs.
pub fn plates_required<'a>(runs: impl IntoIterator<Item = &'a PressRun>) -> u64 {
    runs.into_iter().map(run_plates).fold(0, u64::saturating_add)
}
