//! 剩餘庫存追蹤與可生產單位數計算

use prodplan_core::ProductionModel;
use rust_decimal::Decimal;

/// 計劃過程中的剩餘資源庫存
///
/// 初始值等於模型庫存，各階段共用並逐步扣減。
#[derive(Debug, Clone)]
pub struct RemainingStock<'a> {
    model: &'a ProductionModel,
    remaining: Vec<Decimal>,
}

impl<'a> RemainingStock<'a> {
    /// 以模型的完整庫存初始化
    pub fn new(model: &'a ProductionModel) -> Self {
        Self {
            model,
            remaining: model.stock().to_vec(),
        }
    }

    /// 以目前剩餘庫存計算產品最多可生產的整數單位數
    ///
    /// 只有消耗量大於 0 的資源構成約束；若產品不消耗任何資源，
    /// 回傳 `None`（無上界）。上界以 `Decimal` 表示，不受整數型別寬度限制。
    pub fn max_units(&self, item: usize) -> Option<Decimal> {
        self.model
            .consumption()
            .iter()
            .zip(&self.remaining)
            .filter(|(row, _)| row[item] > Decimal::ZERO)
            .map(|(row, &remaining)| whole_units(remaining, row[item]))
            .min()
    }

    /// 剩餘庫存是否足夠再生產一單位
    pub fn can_cover_one(&self, item: usize) -> bool {
        self.model
            .consumption()
            .iter()
            .zip(&self.remaining)
            .all(|(row, &remaining)| row[item] <= remaining)
    }

    /// 扣減生產 `units` 單位產品所消耗的資源
    pub fn consume(&mut self, item: usize, units: Decimal) {
        for (row, remaining) in self.model.consumption().iter().zip(self.remaining.iter_mut()) {
            *remaining = remaining.saturating_sub(row[item].saturating_mul(units));
        }
    }

    /// 剩餘庫存
    pub fn remaining(&self) -> &[Decimal] {
        &self.remaining
    }
}

/// floor(remaining / per_unit)，per_unit 必須大於 0
///
/// 商超出範圍時飽和於 `Decimal::MAX`。除法結果會在 28 位有效數字處捨入，
/// 若捨入後的單位數實際消耗超過剩餘庫存則退回一單位。
fn whole_units(remaining: Decimal, per_unit: Decimal) -> Decimal {
    if remaining <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let units = remaining
        .checked_div(per_unit)
        .map(|ratio| ratio.floor())
        .unwrap_or(Decimal::MAX);
    match units.checked_mul(per_unit) {
        Some(required) if required <= remaining => units,
        _ if units > Decimal::ZERO => units - Decimal::ONE,
        _ => units,
    }
}
