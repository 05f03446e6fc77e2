//! 記憶體儲存實作

use bom_core::{BomError, Item, ItemKind, Relationship, Result};
use rust_decimal::Decimal;

use crate::store::BomStore;

/// 記憶體 BOM 儲存（僅存活於行程生命週期）
///
/// ID 自 1 起單調遞增；物料不提供刪除，因此 ID 恆為連續。
#[derive(Debug, Clone)]
pub struct MemoryBomStore {
    items: Vec<Item>,
    relationships: Vec<Relationship>,
    next_item_id: u64,
    next_relationship_id: u64,
}

impl MemoryBomStore {
    /// 創建空的儲存
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            relationships: Vec::new(),
            next_item_id: 1,
            next_relationship_id: 1,
        }
    }

    fn has_item(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

impl Default for MemoryBomStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BomStore for MemoryBomStore {
    fn create_item(
        &mut self,
        name: &str,
        kind: ItemKind,
        description: Option<String>,
    ) -> Result<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BomError::Validation("物料名稱不可為空".to_string()));
        }
        if self.item_by_name(name).is_some() {
            return Err(BomError::Conflict(name.to_string()));
        }

        let id = self.next_item_id;
        self.next_item_id += 1;

        let mut item = Item::new(id, name.to_string(), kind);
        item.description = description;
        self.items.push(item.clone());

        tracing::debug!("登錄物料 #{}: {}", item.id, item.name);
        Ok(item)
    }

    fn item(&self, id: u64) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn item_by_name(&self, name: &str) -> Option<Item> {
        self.items.iter().find(|item| item.name == name).cloned()
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn create_relationship(
        &mut self,
        parent_item_id: u64,
        child_item_id: u64,
        quantity: Decimal,
    ) -> Result<Relationship> {
        if quantity < Decimal::ONE {
            return Err(BomError::InvalidQuantity(quantity));
        }
        if !self.has_item(parent_item_id) {
            return Err(BomError::InvalidReference(parent_item_id));
        }
        if !self.has_item(child_item_id) {
            return Err(BomError::InvalidReference(child_item_id));
        }

        let id = self.next_relationship_id;
        self.next_relationship_id += 1;

        let rel = Relationship::new(id, parent_item_id, child_item_id, quantity);
        self.relationships.push(rel.clone());

        tracing::debug!(
            "登錄關係 #{}: {} → {} (用量 {})",
            rel.id,
            rel.parent_item_id,
            rel.child_item_id,
            rel.quantity
        );
        Ok(rel)
    }

    fn relationships(&self) -> Vec<Relationship> {
        self.relationships.clone()
    }

    fn children(&self, parent_item_id: u64) -> Vec<Relationship> {
        self.relationships
            .iter()
            .filter(|rel| rel.parent_item_id == parent_item_id)
            .cloned()
            .collect()
    }
}
