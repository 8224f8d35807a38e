//! Reachability scoring.
//!
//! Pairs every desired pose with the reached pose of the same name, buckets
//! it into the regions its desired position falls in and averages the
//! reaching error per region.

use crate::data::PoseSet;
use crate::error::{Result, ScoreError};
use crate::layout::{Layout, ScorerConfig};
use crate::metric::reaching_error;
use crate::region::{classify, REGIONS};
use crate::report::ScoreReport;
use crate::scene::load_scene;
use log::*;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionScore {
    pub region: usize,
    pub average_error: f64,
    pub poses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachabilityScores {
    pub regions: [RegionScore; 3],
}

impl ReachabilityScores {
    /// Score of the one based `region`.
    pub fn region(&self, region: usize) -> Option<&RegionScore> {
        self.regions.iter().find(|score| score.region == region)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    poses: usize,
}

impl Accumulator {
    fn add(&mut self, error: f64) {
        self.sum += error;
        self.poses += 1;
    }

    fn average(&self, region: usize) -> Result<RegionScore> {
        if self.poses == 0 {
            return Err(ScoreError::NoData { region });
        }
        Ok(RegionScore {
            region,
            average_error: self.sum / self.poses as f64,
            poses: self.poses,
        })
    }
}

pub fn score_pose_sets(desired: &PoseSet, reached: &PoseSet) -> Result<ReachabilityScores> {
    let mut accumulators = [Accumulator::default(); 3];

    for (name, desired_pose) in desired {
        let reached_pose = reached
            .get(name)
            .ok_or_else(|| ScoreError::Correspondence { pose: name.clone() })?;
        let error = reaching_error(desired_pose, reached_pose);
        trace!(
            "{} position error: {} orientation error: {}",
            name,
            error.position,
            error.orientation
        );
        let mut matched = false;
        for region in classify(&desired_pose.position) {
            accumulators[region.index - 1].add(error.total());
            matched = true;
        }
        if !matched {
            debug!("{} lies outside every region", name);
        }
    }

    for name in reached.keys().filter(|name| !desired.contains_key(*name)) {
        debug!("Ignoring reached pose {} with no desired counterpart", name);
    }

    Ok(ReachabilityScores {
        regions: [
            accumulators[0].average(REGIONS[0].index)?,
            accumulators[1].average(REGIONS[1].index)?,
            accumulators[2].average(REGIONS[2].index)?,
        ],
    })
}

pub fn compute_reachability_score(
    reached_poses_file: &Path,
    config: &ScorerConfig,
) -> Result<ScoreReport> {
    let reached = load_scene(reached_poses_file)?;
    let layout_name = reached
        .layout_name()
        .map_err(|source| ScoreError::Parse {
            path: reached_poses_file.to_owned(),
            source,
        })?;
    let layout: Layout = layout_name.parse()?;
    info!("Scoring reachability for {}", layout);

    let reference = config.reference_scene_path(layout);
    let desired = load_scene(&reference)?;

    let scores = score_pose_sets(&desired.poses, &reached.poses)?;
    for score in scores.regions.iter() {
        info!(
            "Region {}: average error {} over {} poses",
            score.region, score.average_error, score.poses
        );
    }
    Ok(ScoreReport::new(layout, scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pose;
    use crate::scene::tests::{object_xml, scene_xml};
    use nalgebra as na;

    fn pose_at(x: f64, y: f64, z: f64) -> Pose {
        Pose::new(na::Vector3::new(x, y, z), na::Rotation3::identity())
    }

    fn set(poses: &[(&str, Pose)]) -> PoseSet {
        poses
            .iter()
            .map(|(name, pose)| (name.to_string(), pose.clone()))
            .collect()
    }

    #[test]
    fn averages_per_region() {
        let desired = set(&[
            ("Reachable_frame00", pose_at(0.0, 10.0, 0.0)),
            ("Reachable_frame01", pose_at(0.0, 20.0, 0.0)),
            ("Reachable_frame10", pose_at(0.0, 150.0, 0.0)),
            ("Reachable_frame20", pose_at(0.0, 300.0, 0.0)),
        ]);
        let reached = set(&[
            ("Reachable_frame00", pose_at(1.0, 10.0, 0.0)),
            ("Reachable_frame01", pose_at(0.0, 20.0, 3.0)),
            ("Reachable_frame10", pose_at(0.0, 152.0, 0.0)),
            ("Reachable_frame20", pose_at(0.0, 300.0, 0.0)),
        ]);
        let scores = score_pose_sets(&desired, &reached).unwrap();
        let region_1 = scores.region(1).unwrap();
        assert!((region_1.average_error - 2.0).abs() < 1e-12);
        assert_eq!(region_1.poses, 2);
        assert!((scores.region(2).unwrap().average_error - 2.0).abs() < 1e-12);
        assert_eq!(scores.region(3).unwrap().average_error, 0.0);
        assert!(scores.region(4).is_none());
    }

    #[test]
    fn boundary_pose_counts_in_both_regions() {
        let desired = set(&[
            ("Reachable_frame00", pose_at(0.0, 123.33, 0.0)),
            ("Reachable_frame10", pose_at(0.0, 200.0, 0.0)),
            ("Reachable_frame20", pose_at(0.0, 300.0, 0.0)),
        ]);
        let mut reached = desired.clone();
        reached.insert("Reachable_frame00".to_owned(), pose_at(0.0, 123.33, 4.0));
        let scores = score_pose_sets(&desired, &reached).unwrap();
        assert_eq!(scores.region(1).unwrap().poses, 1);
        assert_eq!(scores.region(2).unwrap().poses, 2);
        assert!((scores.region(1).unwrap().average_error - 4.0).abs() < 1e-12);
        assert!((scores.region(2).unwrap().average_error - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_reached_pose_is_a_correspondence_error() {
        let desired = set(&[
            ("Reachable_frame00", pose_at(0.0, 10.0, 0.0)),
            ("Reachable_frame11", pose_at(0.0, 200.0, 0.0)),
        ]);
        let reached = set(&[("Reachable_frame00", pose_at(0.0, 10.0, 0.0))]);
        match score_pose_sets(&desired, &reached) {
            Err(ScoreError::Correspondence { pose }) => assert_eq!(pose, "Reachable_frame11"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn empty_region_is_a_no_data_error() {
        let desired = set(&[
            ("Reachable_frame00", pose_at(0.0, 10.0, 0.0)),
            ("Reachable_frame20", pose_at(0.0, 300.0, 0.0)),
        ]);
        let reached = desired.clone();
        match score_pose_sets(&desired, &reached) {
            Err(ScoreError::NoData { region }) => assert_eq!(region, 2),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn extra_reached_poses_are_ignored() {
        let desired = set(&[
            ("Reachable_frame00", pose_at(0.0, 10.0, 0.0)),
            ("Reachable_frame10", pose_at(0.0, 200.0, 0.0)),
            ("Reachable_frame20", pose_at(0.0, 300.0, 0.0)),
        ]);
        let mut reached = desired.clone();
        reached.insert("Reachable_frame33".to_owned(), pose_at(50.0, 50.0, 50.0));
        let scores = score_pose_sets(&desired, &reached).unwrap();
        for score in scores.regions.iter() {
            assert_eq!(score.average_error, 0.0);
        }
    }

    fn write_scenes(dir: &Path, layout: &str, reference_file: &str) -> std::path::PathBuf {
        let depths = [
            ("Reachable_frame00", 10.0),
            ("Reachable_frame01", 60.0),
            ("Reachable_frame02", 110.0),
            ("Reachable_frame10", 150.0),
            ("Reachable_frame11", 190.0),
            ("Reachable_frame12", 230.0),
            ("Reachable_frame20", 260.0),
            ("Reachable_frame21", 300.0),
            ("Reachable_frame22", 350.0),
        ];
        let desired: Vec<String> = depths
            .iter()
            .map(|(name, y)| object_xml(name, [-200.0, *y, 40.0]))
            .collect();
        let reached: Vec<String> = depths
            .iter()
            .map(|(name, y)| object_xml(name, [-200.0, *y, 41.0]))
            .collect();
        std::fs::write(
            dir.join(reference_file),
            scene_xml("Reachability_Scene", &desired),
        )
        .unwrap();
        let reached_path = dir.join("reached.xml");
        std::fs::write(&reached_path, scene_xml(layout, &reached)).unwrap();
        reached_path
    }

    #[test]
    fn end_to_end_unit_offset_scores_one_per_region() {
        let dir = tempfile::tempdir().unwrap();
        let reached_path =
            write_scenes(dir.path(), "Benchmark_Layout_0", "reachability_scene_1.xml");
        let config = ScorerConfig::with_data_dir(dir.path());

        let report = compute_reachability_score(&reached_path, &config).unwrap();
        assert_eq!(report.layout, Layout::BenchmarkLayout0);
        for score in report.reachability.regions.iter() {
            assert_eq!(score.average_error, 1.0);
            assert_eq!(score.poses, 3);
        }
    }

    #[test]
    fn end_to_end_layout_two_uses_second_scene() {
        let dir = tempfile::tempdir().unwrap();
        let reached_path =
            write_scenes(dir.path(), "Benchmark_Layout_2", "reachability_scene_2.xml");
        let config = ScorerConfig::with_data_dir(dir.path());

        let report = compute_reachability_score(&reached_path, &config).unwrap();
        assert_eq!(report.layout, Layout::BenchmarkLayout2);
    }

    #[test]
    fn end_to_end_unknown_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let reached_path =
            write_scenes(dir.path(), "Custom_Layout", "reachability_scene_1.xml");
        let config = ScorerConfig::with_data_dir(dir.path());

        assert!(matches!(
            compute_reachability_score(&reached_path, &config),
            Err(ScoreError::Configuration { .. })
        ));
    }

    #[test]
    fn end_to_end_missing_reference_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let reached_path =
            write_scenes(dir.path(), "Benchmark_Layout_1", "reachability_scene_1.xml");
        let config = ScorerConfig::with_data_dir(dir.path());

        match compute_reachability_score(&reached_path, &config) {
            Err(ScoreError::Io { path, .. }) => {
                assert_eq!(path, dir.path().join("reachability_scene_2.xml"))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
