//! 原物料需求模型（展開結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一原物料的總需求
///
/// 展開結果中每個可達的葉物料名稱各有一筆，跨路徑加總。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    /// 原物料名稱
    pub material_name: String,

    /// 總需求量
    pub total_quantity: Decimal,
}

impl MaterialRequirement {
    /// 創建新的需求記錄
    pub fn new(material_name: String, total_quantity: Decimal) -> Self {
        Self {
            material_name,
            total_quantity,
        }
    }
}
