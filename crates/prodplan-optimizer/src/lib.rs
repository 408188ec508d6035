//! # Production Planning Optimizer
//!
//! 準則驅動的貪婪生產計劃（兩階段資源分配）

pub mod allocation;
pub mod criteria;

// Re-export 主要類型
pub use allocation::RemainingStock;
pub use criteria::CriteriaPlanner;

/// 計劃錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("準則數量 ({actual}) 與產品數量 ({expected}) 不符")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("資源不足：無法生產產品 {item}，資源 {resource} 需要 {required}，庫存 {available}")]
    InfeasibleItem {
        item: usize,
        resource: usize,
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
