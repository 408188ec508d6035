//! # Production Planning Engine
//!
//! 資源約束下的生產計劃：可行性檢查與準則驅動的貪婪計劃器
//!
//! ```
//! use prodplan::{CriteriaPlanner, ProductionModel};
//! use rust_decimal::Decimal;
//!
//! let model = ProductionModel::from_parts(
//!     vec![vec![Decimal::from(2), Decimal::from(1)]],
//!     vec![Decimal::from(10)],
//! )
//! .unwrap();
//!
//! let plan = CriteriaPlanner::default()
//!     .plan(&model, &[Decimal::from(1), Decimal::from(5)])
//!     .unwrap();
//! assert_eq!(plan.quantities, vec![Decimal::ZERO, Decimal::from(10)]);
//! ```

pub use prodplan_calc::{FeasibilityEvaluator, PlanStatistics, ResourceUtilization};
pub use prodplan_core::{
    parse_dimension, parse_row, EvaluationResult, ModelError, ModelField, PlanResult, PlannerConfig,
    ProductionModel,
};
pub use prodplan_optimizer::{CriteriaPlanner, PlanError, RemainingStock};
pub use prodplan_session::{DirtyTracker, Session, SessionError};

/// 檢查模型中的計劃向量是否可行
pub fn evaluate(model: &ProductionModel) -> EvaluationResult {
    FeasibilityEvaluator::evaluate(model)
}

/// 以預設配置依準則產生生產計劃
pub fn plan(
    model: &ProductionModel,
    criteria: &[rust_decimal::Decimal],
) -> Result<PlanResult, PlanError> {
    CriteriaPlanner::default().plan(model, criteria)
}
