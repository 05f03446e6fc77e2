//! 生產記錄模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 班別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// 早班
    Morning,
    /// 午班
    Afternoon,
    /// 夜班
    Night,
}

/// 生產記錄
///
/// `product_code` 以名稱對應 BOM 物料；允許引用尚未登錄的產品，
/// 期間耗用統計會跳過這類記錄。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionEntry {
    /// 記錄ID
    pub id: Uuid,

    /// 機台名稱
    pub machine_name: String,

    /// 產品代碼（對應 BOM 物料名稱）
    pub product_code: String,

    /// 良品數量
    pub quantity_produced: i64,

    /// 不良品數量
    pub quantity_rejected: i64,

    /// 操作員
    pub operator_name: String,

    /// 班別
    pub shift: Shift,

    /// 記錄時間
    pub timestamp: DateTime<Utc>,
}

/// 新增生產記錄的輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductionEntry {
    pub machine_name: String,
    pub product_code: String,
    pub quantity_produced: i64,
    pub quantity_rejected: i64,
    pub operator_name: String,
    pub shift: Shift,

    /// 未提供時以建立當下時間為準
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// 生產記錄的部分更新
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionEntryPatch {
    pub machine_name: Option<String>,
    pub product_code: Option<String>,
    pub quantity_produced: Option<i64>,
    pub quantity_rejected: Option<i64>,
    pub operator_name: Option<String>,
    pub shift: Option<Shift>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewProductionEntry {
    /// 創建新的輸入記錄
    pub fn new(
        machine_name: String,
        product_code: String,
        quantity_produced: i64,
        quantity_rejected: i64,
        operator_name: String,
        shift: Shift,
    ) -> Self {
        Self {
            machine_name,
            product_code,
            quantity_produced,
            quantity_rejected,
            operator_name,
            shift,
            timestamp: None,
        }
    }

    /// 建構器模式：設置記錄時間
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
