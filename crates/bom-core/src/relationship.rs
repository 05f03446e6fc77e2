//! BOM 關係模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BOM 關係（父件 → 子件的加權邊）
///
/// 語義：一單位 `parent_item_id` 需要 `quantity` 單位的 `child_item_id`。
/// 同一 (parent, child) 配對重複建立不會被拒絕，展開時會重複累計，
/// 這是既有資料模型的已知缺口。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// 關係ID（由儲存層配發）
    pub id: u64,

    /// 父件ID
    pub parent_item_id: u64,

    /// 子件ID
    pub child_item_id: u64,

    /// 每單位父件需要的子件用量（>= 1）
    pub quantity: Decimal,
}

impl Relationship {
    /// 創建新的關係
    pub fn new(id: u64, parent_item_id: u64, child_item_id: u64, quantity: Decimal) -> Self {
        Self {
            id,
            parent_item_id,
            child_item_id,
            quantity,
        }
    }
}
