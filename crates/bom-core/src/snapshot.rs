//! BOM 快照模型（匯出/匯入格式）

use serde::{Deserialize, Serialize};

use crate::{Item, Relationship};

/// 完整 BOM 快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomSnapshot {
    /// 物料清單
    pub items: Vec<Item>,

    /// 關係清單
    pub relationships: Vec<Relationship>,
}

impl BomSnapshot {
    /// 創建空快照
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// 檢查快照是否為空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.relationships.is_empty()
    }
}

/// 匯入結果統計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// 實際新建的物料數（名稱已存在者不計入）
    #[serde(rename = "itemsCount")]
    pub items_count: usize,

    /// 附加的關係數
    #[serde(rename = "relationshipsCount")]
    pub relationships_count: usize,
}
