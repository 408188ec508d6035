//! 工作階段：擁有單一模型，串接錄入與計算

use prodplan_calc::{FeasibilityEvaluator, PlanStatistics};
use prodplan_core::{
    parse_dimension, parse_row, EvaluationResult, ModelError, ModelField, PlanResult, PlannerConfig,
    ProductionModel,
};
use prodplan_optimizer::CriteriaPlanner;
use rust_decimal::Decimal;
use std::path::Path;
use uuid::Uuid;

use crate::{DirtyTracker, Result, SessionError};

/// 工作階段
///
/// 每個工作階段擁有獨立的模型；所有讀寫經由 `&self` / `&mut self` 串行化。
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    model: ProductionModel,
    tracker: DirtyTracker,
    planner: CriteriaPlanner,
}

impl Session {
    /// 創建空的工作階段，所有欄位待錄入
    pub fn new(config: PlannerConfig) -> Self {
        let mut tracker = DirtyTracker::new();
        tracker.mark_all_dirty();
        Self {
            id: Uuid::new_v4(),
            model: ProductionModel::new(),
            tracker,
            planner: CriteriaPlanner::new(config),
        }
    }

    /// 以已驗證的模型創建工作階段
    pub fn with_model(model: ProductionModel, config: PlannerConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            model,
            tracker: DirtyTracker::new(),
            planner: CriteriaPlanner::new(config),
        }
    }

    /// 從 JSON 檔案載入模型並創建工作階段
    pub fn load<P: AsRef<Path>>(path: P, config: PlannerConfig) -> Result<Self> {
        let model = ProductionModel::load(path)?;
        Ok(Self::with_model(model, config))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> &ProductionModel {
        &self.model
    }

    pub fn config(&self) -> &PlannerConfig {
        self.planner.config()
    }

    /// 設定維度，矩陣與向量全部標記為待重新錄入
    pub fn set_dimensions(&mut self, resource_count: usize, item_count: usize) {
        tracing::debug!(session = %self.id, "設定維度: 資源 {}，產品 {}", resource_count, item_count);
        self.model.set_dimensions(resource_count, item_count);
        self.tracker.mark_all_dirty();
    }

    pub fn set_consumption(&mut self, consumption: Vec<Vec<Decimal>>) -> Result<()> {
        self.model.set_consumption(consumption)?;
        self.tracker.mark_clean(ModelField::Consumption);
        Ok(())
    }

    pub fn set_stock(&mut self, stock: Vec<Decimal>) -> Result<()> {
        self.model.set_stock(stock)?;
        self.tracker.mark_clean(ModelField::Stock);
        Ok(())
    }

    pub fn set_plan(&mut self, plan: Vec<Decimal>) -> Result<()> {
        self.model.set_plan(plan)?;
        self.tracker.mark_clean(ModelField::Plan);
        Ok(())
    }

    /// 由文字輸入設定維度（兩者皆須為正整數）
    pub fn input_dimensions(&mut self, resources: &str, items: &str) -> Result<()> {
        let resource_count = parse_dimension(resources)?;
        let item_count = parse_dimension(items)?;
        self.set_dimensions(resource_count, item_count);
        Ok(())
    }

    /// 由逐列文字輸入設定消耗矩陣
    pub fn input_consumption<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<()> {
        let item_count = self.model.item_count();
        let consumption = rows
            .iter()
            .map(|row| parse_row(row.as_ref(), item_count))
            .collect::<prodplan_core::Result<Vec<_>>>()?;
        self.set_consumption(consumption)
    }

    /// 由文字輸入設定庫存或計劃向量
    pub fn input_vector(&mut self, field: ModelField, input: &str) -> Result<()> {
        match field {
            ModelField::Stock => {
                let stock = parse_row(input, self.model.resource_count())?;
                self.set_stock(stock)
            }
            ModelField::Plan => {
                let plan = parse_row(input, self.model.item_count())?;
                self.set_plan(plan)
            }
            ModelField::Consumption => Err(ModelError::Parse("消耗矩陣需逐列輸入".to_string()).into()),
        }
    }

    /// 待重新錄入的欄位
    pub fn stale_fields(&self) -> Vec<ModelField> {
        self.tracker.get_dirty_fields()
    }

    /// 所有欄位皆已錄入
    pub fn is_ready(&self) -> bool {
        self.stale_fields().is_empty()
    }

    /// 檢查模型中的計劃向量是否可行
    pub fn evaluate(&self) -> Result<EvaluationResult> {
        let span = tracing::info_span!("session", id = %self.id);
        let _enter = span.enter();

        self.require_fresh(&ModelField::ALL)?;
        Ok(FeasibilityEvaluator::evaluate(&self.model))
    }

    /// 依準則產生生產計劃
    pub fn plan(&self, criteria: &[Decimal]) -> Result<PlanResult> {
        let span = tracing::info_span!("session", id = %self.id);
        let _enter = span.enter();

        self.require_fresh(&[ModelField::Consumption, ModelField::Stock])?;
        Ok(self.planner.plan(&self.model, criteria)?)
    }

    /// 依準則產生生產計劃並附帶統計資料
    pub fn plan_with_statistics(&self, criteria: &[Decimal]) -> Result<(PlanResult, Option<PlanStatistics>)> {
        let span = tracing::info_span!("session", id = %self.id);
        let _enter = span.enter();

        self.require_fresh(&[ModelField::Consumption, ModelField::Stock])?;
        Ok(self.planner.plan_with_statistics(&self.model, criteria)?)
    }

    fn require_fresh(&self, fields: &[ModelField]) -> Result<()> {
        let stale = self.tracker.dirty_among(fields);
        if !stale.is_empty() {
            tracing::warn!("欄位尚未錄入: {:?}", stale);
            return Err(SessionError::StaleInput { fields: stale });
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
