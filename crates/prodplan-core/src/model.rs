//! 生產模型（資源消耗矩陣、庫存向量、計劃向量）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::{ModelError, Result};

/// 模型中可由輸入端重新錄入的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelField {
    /// 消耗矩陣（每單位產品消耗的資源量）
    Consumption,
    /// 資源庫存向量
    Stock,
    /// 生產計劃向量（僅用於可行性檢查）
    Plan,
}

impl ModelField {
    /// 全部欄位，依錄入順序
    pub const ALL: [ModelField; 3] = [ModelField::Consumption, ModelField::Stock, ModelField::Plan];
}

impl fmt::Display for ModelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelField::Consumption => write!(f, "消耗矩陣"),
            ModelField::Stock => write!(f, "庫存向量"),
            ModelField::Plan => write!(f, "計劃向量"),
        }
    }
}

/// 生產模型
///
/// 欄位為私有，以保證以下不變量：
/// - `consumption` 有 `resource_count` 列，每列長度為 `item_count`
/// - `stock` 長度為 `resource_count`，`plan` 長度為 `item_count`
/// - 消耗與庫存皆不為負
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductionModel {
    /// 資源數量（A 維度）
    resource_count: usize,

    /// 產品數量（B 維度）
    item_count: usize,

    /// 消耗矩陣：`consumption[i][j]` 為生產一單位產品 j 消耗的資源 i
    consumption: Vec<Vec<Decimal>>,

    /// 資源庫存
    stock: Vec<Decimal>,

    /// 目標生產計劃
    plan: Vec<Decimal>,
}

/// 反序列化用的原始結構，載入後再驗證
#[derive(Deserialize)]
struct RawModel {
    consumption: Vec<Vec<Decimal>>,
    stock: Vec<Decimal>,
    #[serde(default)]
    plan: Option<Vec<Decimal>>,
    #[serde(default)]
    item_count: Option<usize>,
}

impl ProductionModel {
    /// 創建空模型（0 × 0）
    pub fn new() -> Self {
        Self::default()
    }

    /// 創建指定維度的模型，矩陣與向量皆以 0 填充
    pub fn with_dimensions(resource_count: usize, item_count: usize) -> Self {
        let mut model = Self::new();
        model.set_dimensions(resource_count, item_count);
        model
    }

    /// 由消耗矩陣與庫存向量建立模型，計劃向量以 0 填充
    ///
    /// 產品數量取自矩陣第一列的長度。
    pub fn from_parts(consumption: Vec<Vec<Decimal>>, stock: Vec<Decimal>) -> Result<Self> {
        let item_count = consumption.first().map(Vec::len).unwrap_or(0);
        let mut model = Self::with_dimensions(stock.len(), item_count);
        model.set_consumption(consumption)?;
        model.set_stock(stock)?;
        Ok(model)
    }

    /// 建構器模式：設置計劃向量
    pub fn with_plan(mut self, plan: Vec<Decimal>) -> Result<Self> {
        self.set_plan(plan)?;
        Ok(self)
    }

    /// 重設維度
    ///
    /// 維度改變後，矩陣與向量會被重設為新尺寸的 0 值，必須重新錄入。
    pub fn set_dimensions(&mut self, resource_count: usize, item_count: usize) {
        self.resource_count = resource_count;
        self.item_count = item_count;
        self.consumption = vec![vec![Decimal::ZERO; item_count]; resource_count];
        self.stock = vec![Decimal::ZERO; resource_count];
        self.plan = vec![Decimal::ZERO; item_count];
    }

    /// 整體覆寫消耗矩陣
    pub fn set_consumption(&mut self, consumption: Vec<Vec<Decimal>>) -> Result<()> {
        if consumption.len() != self.resource_count {
            return Err(ModelError::ShapeMismatch {
                field: ModelField::Consumption,
                expected: self.resource_count,
                actual: consumption.len(),
            });
        }

        for (resource, row) in consumption.iter().enumerate() {
            if row.len() != self.item_count {
                return Err(ModelError::RowLengthMismatch {
                    field: ModelField::Consumption,
                    row: resource,
                    expected: self.item_count,
                    actual: row.len(),
                });
            }
            if let Some((item, &value)) = row.iter().enumerate().find(|(_, v)| **v < Decimal::ZERO) {
                return Err(ModelError::NegativeConsumption { resource, item, value });
            }
        }

        self.consumption = consumption;
        Ok(())
    }

    /// 整體覆寫庫存向量
    pub fn set_stock(&mut self, stock: Vec<Decimal>) -> Result<()> {
        check_length(ModelField::Stock, self.resource_count, stock.len())?;
        check_non_negative(ModelField::Stock, &stock)?;
        self.stock = stock;
        Ok(())
    }

    /// 整體覆寫計劃向量
    pub fn set_plan(&mut self, plan: Vec<Decimal>) -> Result<()> {
        check_length(ModelField::Plan, self.item_count, plan.len())?;
        self.plan = plan;
        Ok(())
    }

    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn consumption(&self) -> &[Vec<Decimal>] {
        &self.consumption
    }

    pub fn stock(&self) -> &[Decimal] {
        &self.stock
    }

    pub fn plan(&self) -> &[Decimal] {
        &self.plan
    }

    /// 生產一單位產品 `item` 所消耗的資源 `resource`
    pub fn consumption_of(&self, resource: usize, item: usize) -> Decimal {
        self.consumption[resource][item]
    }

    /// 檢查模型是否為空
    pub fn is_empty(&self) -> bool {
        self.resource_count == 0 && self.item_count == 0
    }

    /// 從 JSON 字串載入模型
    ///
    /// `item_count` 可省略，預設取自矩陣第一列；`plan` 可省略，預設為 0。
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawModel = serde_json::from_str(json)?;
        let item_count = raw
            .item_count
            .unwrap_or_else(|| raw.consumption.first().map(Vec::len).unwrap_or(0));

        let mut model = Self::with_dimensions(raw.stock.len(), item_count);
        model.set_consumption(raw.consumption)?;
        model.set_stock(raw.stock)?;
        if let Some(plan) = raw.plan {
            model.set_plan(plan)?;
        }
        Ok(model)
    }

    /// 從 JSON 檔案載入模型
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 序列化為 JSON 字串
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 產生模型內容的文字摘要
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "ModelData: resources = {}, items = {}",
            self.resource_count, self.item_count
        )];

        lines.push("Matrix (consumption):".to_string());
        if self.consumption.is_empty() || self.item_count == 0 {
            lines.push("  <empty>".to_string());
        } else {
            for (i, row) in self.consumption.iter().enumerate() {
                lines.push(format!("Row {}: {}", i, format_values(row)));
            }
        }

        lines.push("Vector stock (resources):".to_string());
        lines.push(format_vector(&self.stock));

        lines.push("Vector plan:".to_string());
        lines.push(format_vector(&self.plan));

        lines.join("\n")
    }
}

fn check_length(field: ModelField, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ModelError::ShapeMismatch { field, expected, actual });
    }
    Ok(())
}

fn check_non_negative(field: ModelField, values: &[Decimal]) -> Result<()> {
    match values.iter().position(|v| *v < Decimal::ZERO) {
        Some(index) => Err(ModelError::NegativeValue {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn format_values(values: &[Decimal]) -> String {
    values
        .iter()
        .map(|v| format!("{:>10}", format!("{:.2}", v)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_vector(values: &[Decimal]) -> String {
    if values.is_empty() {
        "  <empty>".to_string()
    } else {
        format!("  {}", format_values(values))
    }
}
