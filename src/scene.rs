//! Scene document parsing.
//!
//! A scene document is XML whose root element carries the layout name and
//! which contains `ManipulationObject` elements. Each object holds three
//! row elements (`row1`..`row3`) with attributes `c1`..`c4`, one row of a
//! 3x4 pose matrix each.

use crate::data::{Pose, PoseSet};
use crate::error::{ParseError, ScoreError};
use log::*;
use std::path::Path;

/// Frames the benchmark scores, one per cell of a 4x4 grid.
pub const REACHABLE_FRAMES: [&str; 16] = [
    "Reachable_frame00",
    "Reachable_frame01",
    "Reachable_frame02",
    "Reachable_frame03",
    "Reachable_frame10",
    "Reachable_frame11",
    "Reachable_frame12",
    "Reachable_frame13",
    "Reachable_frame20",
    "Reachable_frame21",
    "Reachable_frame22",
    "Reachable_frame23",
    "Reachable_frame30",
    "Reachable_frame31",
    "Reachable_frame32",
    "Reachable_frame33",
];

const OBJECT_TAG: &str = "ManipulationObject";
const ROWS: [&str; 3] = ["row1", "row2", "row3"];
const COLUMNS: [&str; 4] = ["c1", "c2", "c3", "c4"];

pub fn is_reachable_frame(name: &str) -> bool {
    REACHABLE_FRAMES.contains(&name)
}

#[derive(Debug, Clone)]
pub struct SceneDocument {
    pub layout_name: Option<String>,
    pub poses: PoseSet,
}

impl SceneDocument {
    pub fn layout_name(&self) -> Result<&str, ParseError> {
        self.layout_name
            .as_deref()
            .ok_or(ParseError::MissingLayoutName)
    }
}

pub fn parse_scene(text: &str) -> Result<SceneDocument, ParseError> {
    let document = roxmltree::Document::parse(text)?;
    let root = document.root_element();
    let layout_name = root.attribute("name").map(str::to_owned);

    let mut poses = PoseSet::new();
    for object in root
        .descendants()
        .filter(|node| node.has_tag_name(OBJECT_TAG))
    {
        let name = match object.attribute("name") {
            Some(name) if is_reachable_frame(name) => name,
            Some(name) => {
                debug!("Skipping object {}", name);
                continue;
            }
            None => {
                debug!("Skipping unnamed object");
                continue;
            }
        };
        let pose = parse_pose(name, object)?;
        debug!(
            "Parsed {} position: {:?} rotation: {:?}",
            name,
            pose.position.as_slice(),
            pose.orientation.matrix().as_slice()
        );
        if poses.insert(name.to_owned(), pose).is_some() {
            warn!("Pose {} defined more than once, keeping the last one", name);
        }
    }
    Ok(SceneDocument { layout_name, poses })
}

fn parse_pose(name: &str, object: roxmltree::Node) -> Result<Pose, ParseError> {
    let mut matrix = [[0.0; 4]; 3];
    for (row_values, row) in matrix.iter_mut().zip(ROWS.iter().copied()) {
        let row_node = object
            .descendants()
            .filter(|node| node.has_tag_name(row))
            .last()
            .ok_or_else(|| ParseError::MissingRow {
                pose: name.to_owned(),
                row,
            })?;
        for (value, column) in row_values.iter_mut().zip(COLUMNS.iter().copied()) {
            let raw = row_node
                .attribute(column)
                .ok_or_else(|| ParseError::MissingAttribute {
                    pose: name.to_owned(),
                    row,
                    attribute: column,
                })?;
            *value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    pose: name.to_owned(),
                    row,
                    attribute: column,
                    value: raw.to_owned(),
                })?;
        }
    }
    Ok(Pose::from_matrix(&matrix))
}

pub fn load_scene(path: &Path) -> Result<SceneDocument, ScoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScoreError::Io {
        path: path.to_owned(),
        source,
    })?;
    let scene = parse_scene(&text).map_err(|source| ScoreError::Parse {
        path: path.to_owned(),
        source,
    })?;
    info!("Loaded {} poses from {}", scene.poses.len(), path.display());
    Ok(scene)
}
