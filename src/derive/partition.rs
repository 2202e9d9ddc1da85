//! Grouping of press runs by press kind and of processings by stage.

use crate::model::{PressRun, Processing, RunKind, Stage};
use serde::Serialize;

/// Press runs split by press kind, each group in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByKind<T> {
    pub offset: Vec<T>,
    pub digital: Vec<T>,
}

/// Processings split by stage, each group in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByStage<T> {
    pub pre: Vec<T>,
    pub post: Vec<T>,
}

/// Positions of offset and digital runs. Runs without a run type are in neither.
pub fn partition_positions_by_kind(runs: &[PressRun]) -> ByKind<usize> {
    ByKind {
        offset: get_run_indices(runs, RunKind::Offset),
        digital: get_run_indices(runs, RunKind::Digital),
    }
}

/// Get indices of runs of one kind.
fn get_run_indices(runs: &[PressRun], kind: RunKind) -> Vec<usize> {
    runs.iter()
        .enumerate()
        .filter(|(_, r)| r.kind() == Some(kind))
        .map(|(i, _)| i)
        .collect()
}

/// Split press runs into offset and digital runs.
pub fn partition_by_kind(runs: &[PressRun]) -> ByKind<&PressRun> {
    let positions = partition_positions_by_kind(runs);
    ByKind {
        offset: positions.offset.iter().map(|&i| &runs[i]).collect(),
        digital: positions.digital.iter().map(|&i| &runs[i]).collect(),
    }
}

/// Positions of pre-press and post-press processings.
pub fn partition_positions_by_stage(processings: &[Processing]) -> ByStage<usize> {
    let (pre, post): (Vec<usize>, Vec<usize>) =
        (0..processings.len()).partition(|&i| processings[i].stage() == Stage::Pre);
    ByStage { pre, post }
}

/// Split processings into pre-press and post-press work.
pub fn partition_processings_by_stage(processings: &[Processing]) -> ByStage<&Processing> {
    let positions = partition_positions_by_stage(processings);
    ByStage {
        pre: positions.pre.iter().map(|&i| &processings[i]).collect(),
        post: positions.post.iter().map(|&i| &processings[i]).collect(),
    }
}
