//! # Production Planning Session
//!
//! 模型所有權、錄入狀態追蹤與計算入口

pub mod dirty_tracking;
pub mod session;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use session::Session;

use prodplan_core::{ModelError, ModelField};
use prodplan_optimizer::PlanError;

/// 工作階段錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("模型錯誤: {0}")]
    Model(#[from] ModelError),

    #[error("計劃錯誤: {0}")]
    Plan(#[from] PlanError),

    #[error("以下欄位在維度變更後尚未重新錄入: {fields:?}")]
    StaleInput { fields: Vec<ModelField> },
}

pub type Result<T> = std::result::Result<T, SessionError>;
