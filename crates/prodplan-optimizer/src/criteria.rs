//! 準則計劃器

use prodplan_calc::PlanStatistics;
use prodplan_core::{PlanResult, PlannerConfig, ProductionModel};
use rust_decimal::Decimal;

use crate::{PlanError, RemainingStock, Result};

/// 準則計劃器
///
/// 依每個產品的準則（優先權重）貪婪分配資源，產生整數單位的生產計劃：
/// 1. 檢查準則數量與產品數量一致
/// 2. 檢查每個產品至少可單獨生產一單位
/// 3. 準則總和為 0 時，依索引順序每個產品最多生產一單位
/// 4. 否則依準則由高到低，盡可能多生產（準則 ≤ 0 的產品跳過）
/// 5. 依準則由低到高，以剩餘庫存補足第 4 步未分配到的產品
///
/// 排序為穩定排序，準則相同時維持原索引順序。此為啟發式方法，不保證全域最佳解。
#[derive(Debug, Clone, Default)]
pub struct CriteriaPlanner {
    config: PlannerConfig,
}

impl CriteriaPlanner {
    /// 創建新的準則計劃器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 主計劃入口
    pub fn plan(&self, model: &ProductionModel, criteria: &[Decimal]) -> Result<PlanResult> {
        tracing::info!(
            "開始準則計劃：資源 {} 項，產品 {} 項",
            model.resource_count(),
            model.item_count()
        );
        let start_time = std::time::Instant::now();

        // Step 1: 維度檢查
        Self::check_dimensions(model, criteria)?;

        // Step 2: 單位可行性檢查（在任何分配之前）
        Self::check_viability(model)?;
        tracing::debug!("模型可行：每個產品皆可單獨生產一單位");

        let mut remaining = RemainingStock::new(model);

        // Step 3: 準則總和為 0，每個產品最多生產一單位
        if sums_to_zero(criteria) {
            tracing::debug!("準則總和為 0，每個產品生產一單位");
            let result = Self::uniform_pass(model, &mut remaining);
            tracing::info!("準則計劃完成（均等模式），耗時 {:?}", start_time.elapsed());
            return Ok(result);
        }

        let mut result = PlanResult::new(model.item_count());

        // Step 4: 依準則由高到低分配
        tracing::debug!("依準則優先順序分配資源");
        self.priority_pass(criteria, &mut remaining, &mut result);

        // Step 5: 以剩餘庫存補足未分配的產品
        tracing::debug!("以剩餘資源分配低優先產品");
        self.residual_pass(criteria, &mut remaining, &mut result);

        tracing::info!(
            "準則計劃完成，總生產 {} 單位，耗時 {:?}",
            result.total_units(),
            start_time.elapsed()
        );

        Ok(result)
    }

    /// 計劃並依配置附帶統計資料
    pub fn plan_with_statistics(
        &self,
        model: &ProductionModel,
        criteria: &[Decimal],
    ) -> Result<(PlanResult, Option<PlanStatistics>)> {
        let result = self.plan(model, criteria)?;

        let statistics = self
            .config
            .compute_statistics
            .then(|| PlanStatistics::from_plan(model, criteria, &result));

        if let Some(stats) = &statistics {
            tracing::debug!("目標函數值: {}", stats.objective_value);
        }

        Ok((result, statistics))
    }

    fn check_dimensions(model: &ProductionModel, criteria: &[Decimal]) -> Result<()> {
        if criteria.len() != model.item_count() {
            return Err(PlanError::DimensionMismatch {
                expected: model.item_count(),
                actual: criteria.len(),
            });
        }
        Ok(())
    }

    /// 每個產品單獨生產一單位時，不得超過任何資源的庫存
    fn check_viability(model: &ProductionModel) -> Result<()> {
        for item in 0..model.item_count() {
            for resource in 0..model.resource_count() {
                let required = model.consumption_of(resource, item);
                let available = model.stock()[resource];
                if required > available {
                    tracing::debug!("產品 {} 無法生產：資源 {} 不足", item, resource);
                    return Err(PlanError::InfeasibleItem {
                        item,
                        resource,
                        required,
                        available,
                    });
                }
            }
        }
        Ok(())
    }

    /// 均等模式：依索引順序，剩餘庫存足夠時生產一單位
    fn uniform_pass(model: &ProductionModel, remaining: &mut RemainingStock<'_>) -> PlanResult {
        let mut result = PlanResult::new(model.item_count());

        for item in 0..model.item_count() {
            if remaining.can_cover_one(item) {
                result.add_units(item, Decimal::ONE);
                remaining.consume(item, Decimal::ONE);
            } else {
                tracing::debug!("產品 {}: 剩餘資源不足，跳過", item);
            }
        }

        result
    }

    /// 依準則由高到低，盡可能多生產
    fn priority_pass(&self, criteria: &[Decimal], remaining: &mut RemainingStock<'_>, result: &mut PlanResult) {
        for item in order_by_criteria(criteria, Direction::Descending) {
            if criteria[item] <= Decimal::ZERO {
                continue;
            }

            let units = self.resolve_bound(remaining.max_units(item));
            if units > Decimal::ZERO {
                result.add_units(item, units);
                remaining.consume(item, units);
                tracing::debug!("產品 {}: 生產 {} 單位（準則 {}）", item, units, criteria[item]);
            }
        }
    }

    /// 依準則由低到高，只處理上一階段未分配到的產品
    ///
    /// 先處理者優先取得剩餘庫存。
    fn residual_pass(&self, criteria: &[Decimal], remaining: &mut RemainingStock<'_>, result: &mut PlanResult) {
        for item in order_by_criteria(criteria, Direction::Ascending) {
            if !result.is_unassigned(item) || criteria[item] <= Decimal::ZERO {
                continue;
            }

            let units = self.resolve_bound(remaining.max_units(item));
            if units > Decimal::ZERO {
                result.add_units(item, units);
                remaining.consume(item, units);
                tracing::debug!("產品 {}: 以剩餘資源追加 {} 單位", item, units);
            }
        }
    }

    /// 無上界（不消耗任何資源）時改用配置的上限
    fn resolve_bound(&self, bound: Option<Decimal>) -> Decimal {
        bound.unwrap_or_else(|| {
            self.config
                .unbounded_item_cap
                .map(Decimal::from)
                .unwrap_or(Decimal::ZERO)
        })
    }
}

/// 準則總和是否恰為 0
///
/// 部分和非負時取負值、為負時取正值累加，部分和始終在單一準則的範圍內；
/// 只有剩下同號的值時才可能溢位，此時總和必不為 0。
fn sums_to_zero(criteria: &[Decimal]) -> bool {
    let (mut positive, mut negative): (Vec<Decimal>, Vec<Decimal>) = criteria
        .iter()
        .copied()
        .filter(|c| !c.is_zero())
        .partition(|c| c.is_sign_positive());

    let mut total = Decimal::ZERO;
    loop {
        let next = if total >= Decimal::ZERO {
            negative.pop().or_else(|| positive.pop())
        } else {
            positive.pop().or_else(|| negative.pop())
        };
        match next {
            Some(value) => match total.checked_add(value) {
                Some(sum) => total = sum,
                None => return false,
            },
            None => return total.is_zero(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Ascending,
    Descending,
}

/// 依準則排序產品索引（穩定排序，準則相同時維持索引順序）
fn order_by_criteria(criteria: &[Decimal], direction: Direction) -> Vec<usize> {
    let mut order: Vec<usize> = (0..criteria.len()).collect();
    match direction {
        Direction::Ascending => order.sort_by(|&a, &b| criteria[a].cmp(&criteria[b])),
        Direction::Descending => order.sort_by(|&a, &b| criteria[b].cmp(&criteria[a])),
    }
    order
}
