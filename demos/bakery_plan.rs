//! 麵包店生產計劃完整範例
//!
//! 展示從錄入模型、可行性檢查到準則計劃與統計的完整流程

use prodplan::{ModelField, PlannerConfig, Session};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("===== Bakery Production Plan Example =====\n");

    // 步驟 1: 建立工作階段
    let mut session = Session::new(PlannerConfig::new().with_unbounded_item_cap(0));
    println!("[1] Session {}\n", session.id());

    // 步驟 2: 錄入模型（資源：麵粉、糖、雞蛋；產品：麵包、蛋糕、餅乾）
    println!("[2] Input Model");
    session.input_dimensions("3", "3")?;
    session.input_consumption(&["2 1 1", "0 2 1", "1 3 0"])?;
    session.input_vector(ModelField::Stock, "20 12 15")?;
    session.input_vector(ModelField::Plan, "6 4 4")?;
    println!("{}\n", session.model().summary());

    // 步驟 3: 可行性檢查
    println!("[3] Evaluate Plan");
    let evaluation = session.evaluate()?;
    for (resource, used) in evaluation.usage.iter().enumerate() {
        match evaluation.deficit(resource) {
            Some(deficit) => println!("    Resource {}: {} (deficit {})", resource + 1, used, deficit),
            None => println!("    Resource {}: {}", resource + 1, used),
        }
    }
    println!("    Feasible: {}\n", evaluation.is_feasible);

    // 步驟 4: 準則計劃
    println!("[4] Plan With Criteria");
    let criteria = vec![Decimal::from(3), Decimal::from(5), Decimal::from(1)];
    let (result, statistics) = session.plan_with_statistics(&criteria)?;
    for (item, quantity) in result.quantities.iter().enumerate() {
        println!("    Item {}: {} units (criteria {})", item + 1, quantity, criteria[item]);
    }

    if let Some(stats) = statistics {
        println!("\n    Resource utilization:");
        for u in &stats.utilization {
            let percent = u
                .utilization_percent
                .map(|p| format!("{:.1}%", p))
                .unwrap_or_else(|| "-".to_string());
            println!("      Resource {}: {:.1}/{:.1} ({})", u.resource + 1, u.used, u.available, percent);
        }
        println!("\n    Objective value: {:.2}", stats.objective_value);
    }

    Ok(())
}
