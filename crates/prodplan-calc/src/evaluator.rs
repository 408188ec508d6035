//! 計劃可行性檢查

use prodplan_core::{EvaluationResult, ProductionModel};
use rust_decimal::Decimal;

/// 可行性檢查器
pub struct FeasibilityEvaluator;

impl FeasibilityEvaluator {
    /// 檢查模型中的計劃向量是否在資源庫存範圍內
    ///
    /// 每個資源的使用量 = Σ 消耗[i][j] × 計劃[j]；
    /// 使用量超過庫存時記錄缺口並標記為不可行。
    pub fn evaluate(model: &ProductionModel) -> EvaluationResult {
        let mut result = EvaluationResult::new(model.resource_count());

        for (resource, row) in model.consumption().iter().enumerate() {
            let usage = Self::resource_usage(row, model.plan());
            result.usage[resource] = usage;

            let available = model.stock()[resource];
            if usage > available {
                tracing::debug!(
                    "資源 {} 不足：使用 {}，庫存 {}，缺口 {}",
                    resource,
                    usage,
                    available,
                    usage.saturating_sub(available)
                );
                result.add_deficit(resource, usage.saturating_sub(available));
            }
        }

        tracing::info!(
            "可行性檢查完成：資源 {} 項，缺口 {} 項",
            model.resource_count(),
            result.deficits.len()
        );

        result
    }

    /// 單一資源的使用量（消耗列與數量向量的內積）
    ///
    /// 超出 `Decimal` 可表示範圍時飽和於 `Decimal::MAX` / `Decimal::MIN`，
    /// 飽和後的使用量必然大於任何庫存，因此會被記為缺口。
    pub fn resource_usage(row: &[Decimal], quantities: &[Decimal]) -> Decimal {
        row.iter()
            .zip(quantities)
            .fold(Decimal::ZERO, |acc, (c, q)| acc.saturating_add(c.saturating_mul(*q)))
    }
}
