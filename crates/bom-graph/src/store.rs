//! BOM 儲存契約

use bom_core::{Item, ItemKind, Relationship, Result};
use rust_decimal::Decimal;

/// BOM 儲存介面
///
/// 解析器對儲存技術不感知：任何提供
/// {建立、依ID查、依名稱查、列表、依父件查子關係} 的後端都可替換。
/// 單寫者、逐請求序列化的執行模型下不需要鎖。
pub trait BomStore {
    /// 登錄物料
    ///
    /// 名稱重複時回傳 `Conflict`。
    fn create_item(
        &mut self,
        name: &str,
        kind: ItemKind,
        description: Option<String>,
    ) -> Result<Item>;

    /// 依 ID 查詢物料
    fn item(&self, id: u64) -> Option<Item>;

    /// 依名稱查詢物料
    fn item_by_name(&self, name: &str) -> Option<Item>;

    /// 列出所有物料（登錄順序）
    fn items(&self) -> Vec<Item>;

    /// 登錄關係
    ///
    /// 任一端點 ID 不存在時回傳 `InvalidReference`；
    /// `quantity < 1` 時回傳 `InvalidQuantity`。
    fn create_relationship(
        &mut self,
        parent_item_id: u64,
        child_item_id: u64,
        quantity: Decimal,
    ) -> Result<Relationship>;

    /// 列出所有關係（登錄順序）
    fn relationships(&self) -> Vec<Relationship>;

    /// 依父件 ID 查詢子關係
    ///
    /// 這是解析器唯一的遍歷原語；回傳空集合者在結構上即為葉物料，
    /// 與其宣告的 `kind` 無關。
    fn children(&self, parent_item_id: u64) -> Vec<Relationship>;
}
