//! 簡單準則計劃示例

use prodplan::{evaluate, plan, ProductionModel};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 簡單準則計劃示例 ===\n");

    // 1 種資源、2 種產品
    let model = ProductionModel::from_parts(
        vec![vec![Decimal::from(2), Decimal::from(1)]],
        vec![Decimal::from(10)],
    )?
    .with_plan(vec![Decimal::from(3), Decimal::from(5)])?;

    println!("{}\n", model.summary());

    let evaluation = evaluate(&model);
    println!("計劃使用量: {:?}，可行: {}", evaluation.usage, evaluation.is_feasible);

    for criteria in [[1, 5], [0, 0]] {
        let criteria: Vec<Decimal> = criteria.iter().map(|&c| Decimal::from(c)).collect();
        let result = plan(&model, &criteria)?;
        println!("準則 {:?} → 計劃 {:?}", criteria, result.quantities);
    }

    Ok(())
}
