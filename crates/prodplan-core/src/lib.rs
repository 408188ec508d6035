//! # Production Planning Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod input;
pub mod model;
pub mod result;

// Re-export 主要類型
pub use config::PlannerConfig;
pub use input::{parse_dimension, parse_row};
pub use model::{ModelField, ProductionModel};
pub use result::{EvaluationResult, PlanResult};

/// 模型錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("{field} 維度不符：預期 {expected}，實際 {actual}")]
    ShapeMismatch {
        field: ModelField,
        expected: usize,
        actual: usize,
    },

    #[error("{field} 第 {row} 列長度不符：預期 {expected}，實際 {actual}")]
    RowLengthMismatch {
        field: ModelField,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{field} 含有負值：索引 {index}，數值 {value}")]
    NegativeValue {
        field: ModelField,
        index: usize,
        value: rust_decimal::Decimal,
    },

    #[error("消耗矩陣含有負值：資源 {resource}，產品 {item}，數值 {value}")]
    NegativeConsumption {
        resource: usize,
        item: usize,
        value: rust_decimal::Decimal,
    },

    #[error("無效的維度: {0}")]
    InvalidDimension(String),

    #[error("解析錯誤: {0}")]
    Parse(String),

    #[error("JSON 錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
