//! # BOM Graph
//!
//! 物料登錄與關係圖的儲存層：儲存契約、記憶體實作、快照匯出/匯入

pub mod memory;
pub mod snapshot;
pub mod store;

// Re-export 主要類型
pub use memory::MemoryBomStore;
pub use snapshot::{export, import};
pub use store::BomStore;
