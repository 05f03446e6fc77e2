//! 物料模型

use serde::{Deserialize, Serialize};

/// 物料類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// 組裝件（由其他物料組成）
    Assembly,
    /// 原物料（不再分解的葉物料）
    RawMaterial,
}

/// BOM 物料
///
/// `name` 為全域唯一鍵；生產記錄的 `product_code` 以名稱對應物料。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 物料ID（由儲存層配發）
    pub id: u64,

    /// 物料名稱（全域唯一）
    pub name: String,

    /// 物料類型
    ///
    /// 注意：解析器的葉判定是結構性的（無子關係即為葉），
    /// 與此欄位宣告無關。
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// 描述
    pub description: Option<String>,
}

impl Item {
    /// 創建新的物料
    pub fn new(id: u64, name: String, kind: ItemKind) -> Self {
        Self {
            id,
            name,
            kind,
            description: None,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// 檢查是否宣告為組裝件
    pub fn is_assembly(&self) -> bool {
        self.kind == ItemKind::Assembly
    }

    /// 檢查是否宣告為原物料
    pub fn is_raw_material(&self) -> bool {
        self.kind == ItemKind::RawMaterial
    }
}
