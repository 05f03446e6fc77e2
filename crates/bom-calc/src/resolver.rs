//! 需求解析器（BOM 展開）

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use bom_core::{BomError, MaterialRequirement, Result};
use bom_graph::BomStore;
use rust_decimal::Decimal;

/// 預設展開節點預算
///
/// DAG 上同一物料可經多條路徑重複展開，最壞情況節點數對深度呈指數。
/// 預算用來界定單次解析的最長延遲。
pub const DEFAULT_VISIT_BUDGET: usize = 1_000_000;

/// 需求解析器
///
/// 給定根物料與需求數量，沿 BOM 圖做深度優先乘法展開：
/// 乘數沿根到葉的路徑相乘，同一葉物料跨路徑的貢獻相加。
/// 葉判定是結構性的（無子關係即為葉），與物料宣告的 `kind` 無關。
pub struct RequirementResolver<'a, S: BomStore> {
    store: &'a S,
    visit_budget: usize,
}

/// 遍歷工作項：以顯式堆疊取代呼叫堆疊遞迴，
/// `Leave` 負責把節點自當前路徑集合移除
enum Frame {
    Enter(u64, Decimal),
    Leave(u64),
}

impl<'a, S: BomStore> RequirementResolver<'a, S> {
    /// 創建新的解析器
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            visit_budget: DEFAULT_VISIT_BUDGET,
        }
    }

    /// 建構器模式：設置展開節點預算
    pub fn with_visit_budget(mut self, visit_budget: usize) -> Self {
        self.visit_budget = visit_budget;
        self
    }

    /// 依產品代碼解析（生產記錄以名稱對應物料）
    pub fn resolve_by_code(
        &self,
        product_code: &str,
        quantity: Decimal,
    ) -> Result<Vec<MaterialRequirement>> {
        let root = self
            .store
            .item_by_name(product_code)
            .ok_or_else(|| BomError::NotFound(product_code.to_string()))?;
        self.resolve(root.id, quantity)
    }

    /// 依物料 ID 解析
    ///
    /// 回傳每個可達葉物料的總需求，順序為首次觸及順序（確定性）。
    /// `quantity` 不做正值檢查：零與負值照乘法傳播，結果等比縮放。
    pub fn resolve(
        &self,
        root_item_id: u64,
        quantity: Decimal,
    ) -> Result<Vec<MaterialRequirement>> {
        let root = self
            .store
            .item(root_item_id)
            .ok_or_else(|| BomError::NotFound(format!("物料 ID {root_item_id}")))?;

        tracing::info!("開始 BOM 展開：根物料 {}，數量 {}", root.name, quantity);
        let start_time = std::time::Instant::now();

        let mut totals: HashMap<String, Decimal> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();
        let mut on_path: HashSet<u64> = HashSet::new();
        let mut stack = vec![Frame::Enter(root_item_id, quantity)];
        let mut visited = 0usize;

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Leave(item_id) => {
                    on_path.remove(&item_id);
                }
                Frame::Enter(item_id, multiplier) => {
                    if on_path.contains(&item_id) {
                        tracing::warn!("偵測到 BOM 循環：物料 ID {}", item_id);
                        return Err(BomError::CycleDetected(item_id));
                    }

                    visited += 1;
                    if visited > self.visit_budget {
                        return Err(BomError::BudgetExceeded(self.visit_budget));
                    }

                    let children = self.store.children(item_id);
                    if children.is_empty() {
                        // 結構上的葉即原物料；物料記錄缺失時該葉不貢獻（沿用既有行為）
                        if let Some(item) = self.store.item(item_id) {
                            match totals.entry(item.name.clone()) {
                                Entry::Occupied(mut entry) => {
                                    *entry.get_mut() += multiplier;
                                }
                                Entry::Vacant(entry) => {
                                    first_seen.push(item.name.clone());
                                    entry.insert(multiplier);
                                }
                            }
                        }
                        continue;
                    }

                    on_path.insert(item_id);
                    stack.push(Frame::Leave(item_id));
                    // 反序入堆疊，使子件以登錄順序展開
                    for rel in children.iter().rev() {
                        stack.push(Frame::Enter(rel.child_item_id, multiplier * rel.quantity));
                    }
                }
            }
        }

        let requirements = first_seen
            .into_iter()
            .map(|name| {
                let total = totals.remove(&name).unwrap_or(Decimal::ZERO);
                MaterialRequirement::new(name, total)
            })
            .collect::<Vec<_>>();

        tracing::info!(
            "BOM 展開完成：{} 種原物料，展開 {} 節點，耗時 {:?}",
            requirements.len(),
            visited,
            start_time.elapsed()
        );
        Ok(requirements)
    }

    /// 列出宣告為組裝件卻沒有任何子關係的物料
    ///
    /// 結構葉判定下這些物料會被當成原物料累計；此檢查只回報、不拒絕。
    pub fn flag_childless_assemblies(&self) -> Vec<bom_core::Item> {
        self.store
            .items()
            .into_iter()
            .filter(|item| item.is_assembly() && self.store.children(item.id).is_empty())
            .collect()
    }

    pub(crate) fn store(&self) -> &'a S {
        self.store
    }
}
