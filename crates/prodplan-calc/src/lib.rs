//! # Production Planning Calculation
//!
//! 可行性檢查與計劃統計

pub mod evaluator;
pub mod statistics;

// Re-export 主要類型
pub use evaluator::FeasibilityEvaluator;
pub use statistics::{PlanStatistics, ResourceUtilization};
