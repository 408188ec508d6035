//! 計劃器配置

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// 準則計劃器參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 不消耗任何資源的產品可分配的單位數上限
    ///
    /// 此類產品沒有資源約束，數量本質上無上界：
    /// - `None`: 不額外分配（數量為 0，預設）
    /// - `Some(n)`: 分配 n 單位
    pub unbounded_item_cap: Option<u64>,

    /// 是否在計劃完成後計算統計資料（資源使用率、目標函數值）
    pub compute_statistics: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unbounded_item_cap: None,
            compute_statistics: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置無約束產品的數量上限
    ///
    /// # 範例
    /// ```
    /// # use prodplan_core::PlannerConfig;
    /// let config = PlannerConfig::new().with_unbounded_item_cap(100);
    /// assert_eq!(config.unbounded_item_cap, Some(100));
    /// ```
    pub fn with_unbounded_item_cap(mut self, cap: u64) -> Self {
        self.unbounded_item_cap = Some(cap);
        self
    }

    /// 建構器模式：設置是否計算統計資料
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.compute_statistics = enabled;
        self
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從 JSON 檔案載入配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
