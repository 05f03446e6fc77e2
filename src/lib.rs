//! # ProdTrack
//!
//! 工廠生產記錄追蹤與 BOM 需求引擎
//!
//! - [`bom_core`]：物料、關係與需求的資料模型
//! - [`bom_graph`]：儲存契約、記憶體儲存與快照匯出/匯入
//! - [`bom_calc`]：需求解析（BOM 展開）、結構樹、期間耗用統計
//! - [`production_core`]：生產記錄簿與統計

pub use bom_calc::{structure, BomNode, ConsumptionCalculator, RequirementResolver};
pub use bom_core::{
    BomError, BomSnapshot, ImportSummary, Item, ItemKind, MaterialRequirement, Relationship,
};
pub use bom_graph::{export, import, BomStore, MemoryBomStore};
pub use production_core::{
    NewProductionEntry, ProductionEntry, ProductionEntryPatch, ProductionLog, ProductionStats,
    Shift,
};
