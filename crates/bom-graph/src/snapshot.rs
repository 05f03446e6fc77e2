//! 快照匯出/匯入

use bom_core::{BomSnapshot, ImportSummary, Result};

use crate::store::BomStore;

/// 匯出完整 BOM 快照
pub fn export<S: BomStore>(store: &S) -> BomSnapshot {
    BomSnapshot {
        items: store.items(),
        relationships: store.relationships(),
    }
}

/// 匯入 BOM 快照
///
/// 名稱已存在的物料跳過（不做 upsert，既有物料的 ID 與描述不變，
/// 亦不計入 `items_count`）；關係一律附加、不去重，重複匯入會複製邊。
/// 物料以新配發的 ID 重建；由於物料不提供刪除、ID 恆為連續，
/// 將匯出快照重播進空儲存時關係端點 ID 仍然對齊。
/// 端點 ID 驗證由 `create_relationship` 承擔，引用不存在的物料會使匯入失敗。
pub fn import<S: BomStore>(store: &mut S, snapshot: &BomSnapshot) -> Result<ImportSummary> {
    let mut items_count = 0;
    for item in &snapshot.items {
        if store.item_by_name(&item.name).is_none() {
            store.create_item(&item.name, item.kind, item.description.clone())?;
            items_count += 1;
        }
    }

    let mut relationships_count = 0;
    for rel in &snapshot.relationships {
        store.create_relationship(rel.parent_item_id, rel.child_item_id, rel.quantity)?;
        relationships_count += 1;
    }

    tracing::info!(
        "BOM 匯入完成：新建物料 {} 筆，附加關係 {} 筆",
        items_count,
        relationships_count
    );

    Ok(ImportSummary {
        items_count,
        relationships_count,
    })
}
