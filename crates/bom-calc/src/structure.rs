//! BOM 結構樹（逐層展開，供樹狀檢視使用）

use std::collections::HashSet;

use bom_core::{BomError, Item, Relationship, Result};
use bom_graph::BomStore;
use rust_decimal::Decimal;
use serde::Serialize;

/// BOM 結構樹節點
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BomNode {
    #[serde(flatten)]
    pub item: Item,

    /// 每單位直接父件需要的數量（根節點為 1）
    pub quantity_required: Decimal,

    pub children: Vec<BomNode>,
}

/// 建構中的節點：子關係逐一消化，子樹完成後折疊回父框架
struct NodeFrame {
    item: Item,
    quantity_required: Decimal,
    pending: std::vec::IntoIter<Relationship>,
    children: Vec<BomNode>,
}

/// 建立以 `root_item_id` 為根的結構樹
///
/// 與解析器同一套遍歷紀律：顯式框架堆疊（深度不耗呼叫堆疊），
/// 路徑上重複出現的物料回報 `CycleDetected`。
pub fn structure<S: BomStore>(store: &S, root_item_id: u64) -> Result<BomNode> {
    let root = store
        .item(root_item_id)
        .ok_or_else(|| BomError::NotFound(format!("物料 ID {root_item_id}")))?;

    let mut on_path: HashSet<u64> = HashSet::new();
    on_path.insert(root.id);

    let mut frames = vec![NodeFrame {
        pending: store.children(root.id).into_iter(),
        item: root,
        quantity_required: Decimal::ONE,
        children: Vec::new(),
    }];

    loop {
        let next = match frames.last_mut() {
            Some(frame) => frame.pending.next(),
            None => break,
        };

        match next {
            Some(rel) => {
                // 子件記錄缺失時略過該分支（與解析器的葉缺失行為一致）
                let Some(child) = store.item(rel.child_item_id) else {
                    continue;
                };
                if !on_path.insert(child.id) {
                    return Err(BomError::CycleDetected(child.id));
                }
                frames.push(NodeFrame {
                    pending: store.children(child.id).into_iter(),
                    item: child,
                    quantity_required: rel.quantity,
                    children: Vec::new(),
                });
            }
            None => {
                let Some(done) = frames.pop() else { break };
                on_path.remove(&done.item.id);
                let node = BomNode {
                    item: done.item,
                    quantity_required: done.quantity_required,
                    children: done.children,
                };
                match frames.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return Ok(node),
                }
            }
        }
    }

    Err(BomError::Internal("結構樹建構狀態不一致".to_string()))
}
