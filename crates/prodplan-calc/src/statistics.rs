//! 計劃統計（資源使用率與目標函數值）

use prodplan_core::{PlanResult, ProductionModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::FeasibilityEvaluator;

/// 單一資源的使用情況
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    /// 資源索引
    pub resource: usize,

    /// 已使用數量
    pub used: Decimal,

    /// 庫存數量
    pub available: Decimal,

    /// 使用率（%），庫存為 0 時無意義
    pub utilization_percent: Option<Decimal>,
}

impl ResourceUtilization {
    /// 剩餘數量（使用量已飽和時不再下溢）
    pub fn remaining(&self) -> Decimal {
        self.available.saturating_sub(self.used)
    }
}

/// 計劃統計資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStatistics {
    /// 各資源使用情況
    pub utilization: Vec<ResourceUtilization>,

    /// 目標函數值：Σ 準則[j] × 數量[j]，超出範圍時飽和
    pub objective_value: Decimal,
}

impl PlanStatistics {
    /// 由最終計劃計算統計資料
    ///
    /// `criteria` 與計劃依索引配對，多出的項目不計入目標函數值。
    pub fn from_plan(model: &ProductionModel, criteria: &[Decimal], plan: &PlanResult) -> Self {
        let utilization = model
            .consumption()
            .iter()
            .zip(model.stock())
            .enumerate()
            .map(|(resource, (row, &available))| {
                let used = FeasibilityEvaluator::resource_usage(row, &plan.quantities);
                let utilization_percent = used
                    .checked_div(available)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
                ResourceUtilization {
                    resource,
                    used,
                    available,
                    utilization_percent,
                }
            })
            .collect();

        let objective_value = criteria
            .iter()
            .zip(&plan.quantities)
            .fold(Decimal::ZERO, |acc, (w, q)| acc.saturating_add(w.saturating_mul(*q)));

        Self {
            utilization,
            objective_value,
        }
    }

    /// 是否所有資源使用量都在庫存範圍內
    pub fn within_stock(&self) -> bool {
        self.utilization.iter().all(|u| u.used <= u.available)
    }
}
