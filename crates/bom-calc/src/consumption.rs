//! 期間耗用統計（依生產記錄彙整原物料耗用）

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use bom_core::{MaterialRequirement, Result};
use bom_graph::BomStore;
use chrono::{DateTime, Utc};
use production_core::ProductionEntry;
use rust_decimal::Decimal;

use crate::resolver::RequirementResolver;

/// 耗用計算器
///
/// 對每筆生產記錄以 `product_code` 查找根物料（依名稱），
/// 以良品數量為乘數各做一次展開，再把所有結果加總成單一映射。
pub struct ConsumptionCalculator<'a, S: BomStore> {
    resolver: RequirementResolver<'a, S>,
}

impl<'a, S: BomStore> ConsumptionCalculator<'a, S> {
    /// 創建新的計算器
    pub fn new(store: &'a S) -> Self {
        Self {
            resolver: RequirementResolver::new(store),
        }
    }

    /// 建構器模式：設置單次展開的節點預算
    pub fn with_visit_budget(mut self, visit_budget: usize) -> Self {
        self.resolver = self.resolver.with_visit_budget(visit_budget);
        self
    }

    /// 彙整一批生產記錄的原物料耗用
    ///
    /// `product_code` 未登錄 BOM 的記錄跳過（生產記錄允許先於 BOM 存在，
    /// 不視為錯誤）；循環或超出預算則中止整批計算。
    pub fn materials_consumed(
        &self,
        entries: &[ProductionEntry],
    ) -> Result<Vec<MaterialRequirement>> {
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for entry in entries {
            let Some(root) = self.resolver.store().item_by_name(&entry.product_code) else {
                tracing::debug!("產品 {} 未登錄 BOM，跳過", entry.product_code);
                continue;
            };

            let requirements = self
                .resolver
                .resolve(root.id, Decimal::from(entry.quantity_produced))?;

            for req in requirements {
                match totals.entry(req.material_name.clone()) {
                    Entry::Occupied(mut slot) => {
                        *slot.get_mut() += req.total_quantity;
                    }
                    Entry::Vacant(slot) => {
                        first_seen.push(req.material_name.clone());
                        slot.insert(req.total_quantity);
                    }
                }
            }
        }

        Ok(first_seen
            .into_iter()
            .map(|name| {
                let total = totals.remove(&name).unwrap_or(Decimal::ZERO);
                MaterialRequirement::new(name, total)
            })
            .collect())
    }

    /// 彙整 `cutoff` 之後（含）的生產記錄耗用
    pub fn materials_consumed_since(
        &self,
        entries: &[ProductionEntry],
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<MaterialRequirement>> {
        let windowed: Vec<ProductionEntry> = entries
            .iter()
            .filter(|entry| entry.timestamp >= cutoff)
            .cloned()
            .collect();
        self.materials_consumed(&windowed)
    }

    /// 彙整今日（UTC 午夜起）的生產記錄耗用
    pub fn materials_consumed_today(
        &self,
        entries: &[ProductionEntry],
    ) -> Result<Vec<MaterialRequirement>> {
        self.materials_consumed_since(entries, start_of_today())
    }
}

/// 今日 UTC 午夜
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now()
        .date_naive()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}
