use crate::error::{Result, ScoreError};
use crate::layout::Layout;
use crate::scorer::ReachabilityScores;
use log::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Per-object scores keyed by the object names of the benchmark scenes.
pub type ObjectScores = BTreeMap<String, f64>;

/// Per-object scores produced outside the reachability test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    GraspQuality,
    /// Binary, 1.0 for a successful grasp.
    GraspSuccess,
    /// Binary, 1.0 for a graspable object.
    Graspability,
    /// Grasp robustness along the trajectory.
    Robustness,
}

/// Anything able to supply per-object scores for the report, e.g. a reader
/// for the grasping test result files.
pub trait ObjectScoreSource {
    fn object_scores(&self) -> Result<ObjectScores>;
}

impl ObjectScoreSource for ObjectScores {
    fn object_scores(&self) -> Result<ObjectScores> {
        Ok(self.clone())
    }
}

/// Everything scored for one reached-pose document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub layout: Layout,
    pub reachability: ReachabilityScores,
    pub grasp_quality: ObjectScores,
    pub grasp_success: ObjectScores,
    pub graspability: ObjectScores,
    pub robustness: ObjectScores,
}

impl ScoreReport {
    pub fn new(layout: Layout, reachability: ReachabilityScores) -> Self {
        Self {
            layout,
            reachability,
            grasp_quality: ObjectScores::new(),
            grasp_success: ObjectScores::new(),
            graspability: ObjectScores::new(),
            robustness: ObjectScores::new(),
        }
    }

    pub fn scores(&self, kind: ScoreKind) -> &ObjectScores {
        match kind {
            ScoreKind::GraspQuality => &self.grasp_quality,
            ScoreKind::GraspSuccess => &self.grasp_success,
            ScoreKind::Graspability => &self.graspability,
            ScoreKind::Robustness => &self.robustness,
        }
    }

    fn scores_mut(&mut self, kind: ScoreKind) -> &mut ObjectScores {
        match kind {
            ScoreKind::GraspQuality => &mut self.grasp_quality,
            ScoreKind::GraspSuccess => &mut self.grasp_success,
            ScoreKind::Graspability => &mut self.graspability,
            ScoreKind::Robustness => &mut self.robustness,
        }
    }

    /// Adds the scores of `source` to the `kind` dictionary, replacing
    /// existing entries for the same object.
    pub fn merge(&mut self, kind: ScoreKind, source: &dyn ObjectScoreSource) -> Result<()> {
        let scores = source.object_scores()?;
        debug!("Merging {} {:?} scores", scores.len(), kind);
        self.scores_mut(kind).extend(scores);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ScoreError::from)
    }
}

fn write_object_scores(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    scores: &ObjectScores,
) -> fmt::Result {
    if scores.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    for (object, score) in scores {
        writeln!(f, "|| {:<8}: {}", object, score)?;
    }
    Ok(())
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reachability scores:")?;
        for score in self.reachability.regions.iter() {
            writeln!(f, "|| s0_{}    : {}", score.region, score.average_error)?;
        }
        write_object_scores(f, "Grasp quality", &self.grasp_quality)?;
        write_object_scores(f, "Grasp success", &self.grasp_success)?;
        write_object_scores(f, "Graspability", &self.graspability)?;
        write_object_scores(f, "Grasp robustness", &self.robustness)
    }
}
