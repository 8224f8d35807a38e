pub mod data;
pub mod error;
pub mod layout;
pub mod metric;
pub mod region;
pub mod report;
pub mod scene;
pub mod scorer;

pub use error::{ParseError, ScoreError};
pub use layout::{Layout, ScorerConfig};
pub use report::ScoreReport;
pub use scorer::{compute_reachability_score, score_pose_sets};
