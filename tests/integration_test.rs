//! 集成測試

use prodplan::*;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;

fn d(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

fn usage_of(model: &ProductionModel, plan: &PlanResult) -> Vec<Decimal> {
    model
        .consumption()
        .iter()
        .map(|row| FeasibilityEvaluator::resource_usage(row, &plan.quantities))
        .collect()
}

#[rstest]
#[case(d(&[1, 5]), d(&[0, 10]))]
#[case(d(&[0, 0]), d(&[1, 1]))]
#[case(d(&[5, 1]), d(&[5, 0]))]
#[case(d(&[-1, 2]), d(&[0, 10]))]
fn test_single_resource_scenarios(#[case] criteria: Vec<Decimal>, #[case] expected: Vec<Decimal>) {
    // 1 種資源、2 種產品：consumption = [[2, 1]]，stock = [10]
    let model = ProductionModel::from_parts(vec![d(&[2, 1])], d(&[10])).unwrap();

    let result = plan(&model, &criteria).unwrap();

    assert_eq!(result.quantities, expected);
}

#[test]
fn test_infeasible_single_unit() {
    let model = ProductionModel::from_parts(vec![d(&[5])], d(&[3])).unwrap();

    for criteria in [d(&[0]), d(&[1]), d(&[-4])] {
        let err = plan(&model, &criteria).unwrap_err();
        assert!(matches!(err, PlanError::InfeasibleItem { item: 0, resource: 0, .. }));
    }
}

#[test]
fn test_bakery_session_flow() {
    // 場景：麵包店
    //   資源：麵粉、糖、雞蛋
    //   產品：麵包、蛋糕、餅乾
    let mut session = Session::default();
    session.input_dimensions("3", "3").unwrap();
    session
        .input_consumption(&["2 1 1", "0 2 1", "1 3 0"])
        .unwrap();
    session.input_vector(ModelField::Stock, "20 12 15").unwrap();
    session.input_vector(ModelField::Plan, "5 3 4").unwrap();
    assert!(session.is_ready());

    // 可行性檢查：麵粉 10+3+4=17，糖 0+6+4=10，雞蛋 5+9+0=14
    let evaluation = session.evaluate().unwrap();
    assert_eq!(evaluation.usage, d(&[17, 10, 14]));
    assert!(evaluation.is_feasible);

    // 加量後雞蛋不足
    session.input_vector(ModelField::Plan, "6 4 4").unwrap();
    let evaluation = session.evaluate().unwrap();
    assert_eq!(evaluation.usage, d(&[20, 12, 18]));
    assert_eq!(evaluation.deficit(2), Some(Decimal::from(3)));
    assert_eq!(evaluation.deficits.len(), 1);
    assert!(!evaluation.is_feasible);

    // 準則：蛋糕 > 麵包 > 餅乾
    let (result, stats) = session.plan_with_statistics(&d(&[3, 5, 1])).unwrap();
    // 蛋糕: min(20/1, 12/2, 15/3) = 5，剩餘 [15, 2, 0]
    // 麵包: 雞蛋 0 → 0
    // 餅乾: min(15/1, 2/1) = 2，剩餘 [13, 0, 0]
    assert_eq!(result.quantities, d(&[0, 5, 2]));

    let stats = stats.unwrap();
    assert_eq!(stats.objective_value, Decimal::from(27));
    assert_eq!(stats.utilization[1].utilization_percent, Some(Decimal::from(100)));
    assert!(stats.within_stock());
}

#[test]
fn test_dimension_change_requires_reentry() {
    let mut session = Session::default();
    session.set_dimensions(1, 2);
    session.set_consumption(vec![d(&[2, 1])]).unwrap();
    session.set_stock(d(&[10])).unwrap();
    session.set_plan(d(&[1, 1])).unwrap();
    assert!(session.evaluate().is_ok());

    session.set_dimensions(1, 3);

    assert!(matches!(session.evaluate(), Err(SessionError::StaleInput { .. })));
    assert_eq!(session.model().plan(), d(&[0, 0, 0]).as_slice());
}

#[test]
fn test_model_from_json_and_statistics() {
    let model = ProductionModel::from_json_str(
        r#"{
            "consumption": [[2, 1], [1, 2]],
            "stock": [100, 80],
            "plan": [30, 20]
        }"#,
    )
    .unwrap();

    let evaluation = evaluate(&model);
    assert_eq!(evaluation.usage, d(&[80, 70]));
    assert!(evaluation.is_feasible);

    let planner = CriteriaPlanner::new(PlannerConfig::from_json_str(r#"{ "compute_statistics": true }"#).unwrap());
    let (result, stats) = planner.plan_with_statistics(&model, &d(&[40, 30])).unwrap();
    assert_eq!(result.quantities, d(&[50, 0]));

    let stats = stats.unwrap();
    assert_eq!(stats.objective_value, Decimal::from(2000));
    assert_eq!(stats.utilization[0].used, Decimal::from(100));
    assert_eq!(stats.utilization[1].used, Decimal::from(50));

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("quantities").is_some());
}

#[test]
fn test_session_load_missing_file() {
    let err = Session::load("/nonexistent/model.json", PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::Model(ModelError::Io(_))));
}

#[test]
fn test_overflowing_plan_vector_is_infeasible() {
    // 1e15 × 1e15 超出 Decimal 範圍，使用量飽和為 Decimal::MAX
    let model = ProductionModel::from_json_str(
        r#"{ "consumption": [[1000000000000000]], "stock": [1], "plan": [1000000000000000] }"#,
    )
    .unwrap();

    let evaluation = evaluate(&model);

    assert_eq!(evaluation.usage[0], Decimal::MAX);
    assert!(evaluation.deficit(0).is_some());
    assert!(!evaluation.is_feasible);
}

#[test]
fn test_near_max_criteria_session_flow() {
    let mut session = Session::default();
    session.input_dimensions("1", "2").unwrap();
    session.input_consumption(&["1 1"]).unwrap();
    session.input_vector(ModelField::Stock, "10").unwrap();

    // 5e28 + 5e28 超出範圍，總和不為 0，走優先順序分配
    let criteria = parse_row("5e28 5e28", 2).unwrap();
    let (result, stats) = session.plan_with_statistics(&criteria).unwrap();

    assert_eq!(result.quantities, d(&[10, 0]));
    assert_eq!(stats.unwrap().objective_value, Decimal::MAX);
}

#[test]
fn test_tiny_consumption_large_stock() {
    // 每單位 1e-9，庫存 1e14 → 1e23 單位（超過 u64 範圍）
    let mut session = Session::default();
    session.input_dimensions("1", "1").unwrap();
    session.input_consumption(&["1e-9"]).unwrap();
    session.input_vector(ModelField::Stock, "1e14").unwrap();

    let (result, stats) = session.plan_with_statistics(&d(&[1])).unwrap();

    assert_eq!(result.quantities, parse_row("1e23", 1).unwrap());
    let stats = stats.unwrap();
    assert_eq!(stats.utilization[0].used, Decimal::from(100_000_000_000_000i64));
    assert_eq!(stats.utilization[0].utilization_percent, Some(Decimal::ONE_HUNDRED));
    assert!(stats.within_stock());
}

/// 隨機產生可行模型：消耗 0..10，庫存 10..100（每個產品至少可單獨生產一單位）
fn scenario() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>, Vec<i64>, Vec<i64>)> {
    (1usize..4, 1usize..6).prop_flat_map(|(resources, items)| {
        (
            prop::collection::vec(prop::collection::vec(0i64..10, items), resources),
            prop::collection::vec(10i64..100, resources),
            prop::collection::vec(-5i64..10, items),
            prop::collection::vec(0i64..20, items),
        )
    })
}

/// 大範圍數值：有效位數至 i64，放大 10^0..10^9 或縮小至 20 位小數
fn wide_decimal(signed: bool) -> impl Strategy<Value = Decimal> {
    let mantissa = if signed { i64::MIN + 1..i64::MAX } else { 0..i64::MAX };
    (mantissa, 0u32..10, 0u32..21).prop_map(|(mantissa, exponent, scale)| {
        Decimal::from_i128_with_scale(mantissa as i128 * 10i128.pow(exponent), scale)
    })
}

/// 隨機產生數量級差異極大的模型（不保證單位可行）
fn wide_scenario() -> impl Strategy<Value = (Vec<Vec<Decimal>>, Vec<Decimal>, Vec<Decimal>, Vec<Decimal>)> {
    (1usize..4, 1usize..5).prop_flat_map(|(resources, items)| {
        (
            prop::collection::vec(prop::collection::vec(wide_decimal(false), items), resources),
            prop::collection::vec(wide_decimal(false), resources),
            prop::collection::vec(wide_decimal(true), items),
            prop::collection::vec(wide_decimal(false), items),
        )
    })
}

fn build_model(consumption: &[Vec<i64>], stock: &[i64], plan_vector: &[i64]) -> ProductionModel {
    ProductionModel::from_parts(consumption.iter().map(|row| d(row)).collect(), d(stock))
        .unwrap()
        .with_plan(d(plan_vector))
        .unwrap()
}

proptest! {
    #[test]
    fn prop_plan_never_exceeds_stock((consumption, stock, criteria, plan_vector) in scenario()) {
        let model = build_model(&consumption, &stock, &plan_vector);

        let result = plan(&model, &d(&criteria)).unwrap();

        for (used, available) in usage_of(&model, &result).iter().zip(model.stock()) {
            prop_assert!(used <= available);
        }
        for quantity in &result.quantities {
            prop_assert!(*quantity >= Decimal::ZERO);
            prop_assert!(quantity.fract().is_zero());
        }
    }

    #[test]
    fn prop_zero_sum_criteria_at_most_one_unit((consumption, stock, _criteria, plan_vector) in scenario()) {
        let model = build_model(&consumption, &stock, &plan_vector);
        let zeros = vec![Decimal::ZERO; model.item_count()];

        let result = plan(&model, &zeros).unwrap();

        prop_assert!(result.quantities.iter().all(|q| *q <= Decimal::ONE));
        // 第一個產品一定可以生產（單位可行性已通過）
        prop_assert_eq!(result.quantities[0], Decimal::ONE);
    }

    #[test]
    fn prop_evaluation_is_dot_product((consumption, stock, _criteria, plan_vector) in scenario()) {
        let model = build_model(&consumption, &stock, &plan_vector);

        let evaluation = evaluate(&model);

        for (i, row) in consumption.iter().enumerate() {
            let expected: i64 = row.iter().zip(&plan_vector).map(|(c, q)| c * q).sum();
            prop_assert_eq!(evaluation.usage[i], Decimal::from(expected));
            prop_assert_eq!(evaluation.deficit(i).is_some(), expected > stock[i]);
        }
        prop_assert_eq!(evaluation.is_feasible, evaluation.deficits.is_empty());
    }

    #[test]
    fn prop_wrong_criteria_length_rejected((consumption, stock, criteria, plan_vector) in scenario(), extra in 1usize..3) {
        let model = build_model(&consumption, &stock, &plan_vector);
        let mut longer = d(&criteria);
        longer.extend(std::iter::repeat(Decimal::ONE).take(extra));

        let err = plan(&model, &longer).unwrap_err();

        prop_assert_eq!(err, PlanError::DimensionMismatch { expected: criteria.len(), actual: criteria.len() + extra });
    }

    #[test]
    fn prop_wide_values_never_panic((consumption, stock, criteria, plan_vector) in wide_scenario()) {
        let model = ProductionModel::from_parts(consumption, stock)
            .unwrap()
            .with_plan(plan_vector)
            .unwrap();

        let evaluation = evaluate(&model);
        prop_assert_eq!(evaluation.is_feasible, evaluation.deficits.is_empty());
        prop_assert!(evaluation.deficits.values().all(|deficit| *deficit > Decimal::ZERO));

        match plan(&model, &criteria) {
            Ok(result) => {
                for quantity in &result.quantities {
                    prop_assert!(*quantity >= Decimal::ZERO);
                    prop_assert!(quantity.fract().is_zero());
                }
                let stats = PlanStatistics::from_plan(&model, &criteria, &result);
                prop_assert_eq!(stats.utilization.len(), model.resource_count());
            }
            Err(err) => prop_assert!(matches!(err, PlanError::InfeasibleItem { .. }), "unexpected error: {:?}", err),
        }
    }
}
