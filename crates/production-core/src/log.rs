//! 生產記錄簿（記憶體）

use chrono::Utc;
use uuid::Uuid;

use crate::entry::{NewProductionEntry, ProductionEntry, ProductionEntryPatch};
use crate::{ProductionError, Result};

/// 生產記錄簿（僅存活於行程生命週期）
#[derive(Debug, Clone, Default)]
pub struct ProductionLog {
    entries: Vec<ProductionEntry>,
}

impl ProductionLog {
    /// 創建空的記錄簿
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 列出所有記錄（時間新到舊）
    pub fn entries(&self) -> Vec<ProductionEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// 新增記錄
    ///
    /// 未提供時間時以當下時間為準。
    pub fn create(&mut self, input: NewProductionEntry) -> Result<ProductionEntry> {
        validate_quantities(input.quantity_produced, input.quantity_rejected)?;

        let entry = ProductionEntry {
            id: Uuid::new_v4(),
            machine_name: input.machine_name,
            product_code: input.product_code,
            quantity_produced: input.quantity_produced,
            quantity_rejected: input.quantity_rejected,
            operator_name: input.operator_name,
            shift: input.shift,
            timestamp: input.timestamp.unwrap_or_else(Utc::now),
        };

        tracing::debug!(
            "新增生產記錄 {}: {} x{}",
            entry.id,
            entry.product_code,
            entry.quantity_produced
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// 部分更新記錄
    pub fn update(&mut self, id: Uuid, patch: ProductionEntryPatch) -> Result<ProductionEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(ProductionError::NotFound(id))?;

        let produced = patch.quantity_produced.unwrap_or(entry.quantity_produced);
        let rejected = patch.quantity_rejected.unwrap_or(entry.quantity_rejected);
        validate_quantities(produced, rejected)?;

        if let Some(machine_name) = patch.machine_name {
            entry.machine_name = machine_name;
        }
        if let Some(product_code) = patch.product_code {
            entry.product_code = product_code;
        }
        entry.quantity_produced = produced;
        entry.quantity_rejected = rejected;
        if let Some(operator_name) = patch.operator_name {
            entry.operator_name = operator_name;
        }
        if let Some(shift) = patch.shift {
            entry.shift = shift;
        }
        if let Some(timestamp) = patch.timestamp {
            entry.timestamp = timestamp;
        }

        Ok(entry.clone())
    }

    /// 刪除記錄（不存在時視為已刪除）
    pub fn delete(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// 批次匯入，回傳成功筆數
    pub fn import_entries(&mut self, inputs: Vec<NewProductionEntry>) -> Result<usize> {
        let mut count = 0;
        for input in inputs {
            self.create(input)?;
            count += 1;
        }
        tracing::info!("生產記錄匯入完成：{} 筆", count);
        Ok(count)
    }
}

fn validate_quantities(produced: i64, rejected: i64) -> Result<()> {
    if produced < 0 {
        return Err(ProductionError::Validation(format!(
            "良品數量不可為負: {produced}"
        )));
    }
    if rejected < 0 {
        return Err(ProductionError::Validation(format!(
            "不良品數量不可為負: {rejected}"
        )));
    }
    Ok(())
}
