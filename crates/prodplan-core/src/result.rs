//! 計算結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 可行性檢查結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// 各資源的使用量
    pub usage: Vec<Decimal>,

    /// 資源索引 → 缺口數量（僅包含使用量超過庫存的資源）
    pub deficits: BTreeMap<usize, Decimal>,

    /// 計劃是否可行
    pub is_feasible: bool,
}

impl EvaluationResult {
    /// 創建可行的空結果
    pub fn new(resource_count: usize) -> Self {
        Self {
            usage: vec![Decimal::ZERO; resource_count],
            deficits: BTreeMap::new(),
            is_feasible: true,
        }
    }

    /// 記錄資源缺口
    pub fn add_deficit(&mut self, resource: usize, amount: Decimal) {
        self.deficits.insert(resource, amount);
        self.is_feasible = false;
    }

    /// 獲取資源缺口
    pub fn deficit(&self, resource: usize) -> Option<Decimal> {
        self.deficits.get(&resource).copied()
    }

    /// 缺口總量（溢位時飽和於 `Decimal::MAX`）
    pub fn total_deficit(&self) -> Decimal {
        self.deficits
            .values()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }
}

/// 生產計劃結果（整數單位，以 Decimal 表示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// 各產品的生產數量
    pub quantities: Vec<Decimal>,
}

impl PlanResult {
    /// 創建全為 0 的計劃
    pub fn new(item_count: usize) -> Self {
        Self {
            quantities: vec![Decimal::ZERO; item_count],
        }
    }

    /// 獲取產品生產數量
    pub fn quantity(&self, item: usize) -> Decimal {
        self.quantities[item]
    }

    /// 累加產品生產數量
    pub fn add_units(&mut self, item: usize, units: Decimal) {
        self.quantities[item] = self.quantities[item].saturating_add(units);
    }

    /// 總生產單位數（溢位時飽和於 `Decimal::MAX`）
    pub fn total_units(&self) -> Decimal {
        self.quantities
            .iter()
            .fold(Decimal::ZERO, |acc, q| acc.saturating_add(*q))
    }

    /// 檢查產品是否尚未分配
    pub fn is_unassigned(&self, item: usize) -> bool {
        self.quantities[item].is_zero()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
