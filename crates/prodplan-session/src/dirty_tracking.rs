//! 髒標記追蹤（需要重新錄入的模型欄位）

use prodplan_core::ModelField;
use std::collections::BTreeSet;

/// 髒標記追蹤器
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    stale_fields: BTreeSet<ModelField>,
}

impl DirtyTracker {
    /// 創建新的追蹤器（無髒標記）
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記欄位為髒
    pub fn mark_dirty(&mut self, field: ModelField) {
        self.stale_fields.insert(field);
    }

    /// 標記所有欄位為髒
    pub fn mark_all_dirty(&mut self) {
        self.stale_fields.extend(ModelField::ALL);
    }

    /// 清除欄位的髒標記
    pub fn mark_clean(&mut self, field: ModelField) {
        self.stale_fields.remove(&field);
    }

    /// 檢查欄位是否為髒
    pub fn is_dirty(&self, field: ModelField) -> bool {
        self.stale_fields.contains(&field)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.stale_fields.clear();
    }

    /// 獲取所有髒欄位（依錄入順序）
    pub fn get_dirty_fields(&self) -> Vec<ModelField> {
        self.stale_fields.iter().copied().collect()
    }

    /// 獲取指定欄位中為髒者
    pub fn dirty_among(&self, fields: &[ModelField]) -> Vec<ModelField> {
        fields.iter().copied().filter(|f| self.is_dirty(*f)).collect()
    }
}
