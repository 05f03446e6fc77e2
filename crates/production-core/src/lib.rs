//! # Production Core
//!
//! 生產記錄模型、記錄簿與統計

pub mod entry;
pub mod log;
pub mod stats;

// Re-export 主要類型
pub use entry::{NewProductionEntry, ProductionEntry, ProductionEntryPatch, Shift};
pub use log::ProductionLog;
pub use stats::{MachineStats, ProductionStats};

/// 生產模組錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProductionError {
    #[error("輸入驗證失敗: {0}")]
    Validation(String),

    #[error("找不到生產記錄: {0}")]
    NotFound(uuid::Uuid),
}

pub type Result<T> = std::result::Result<T, ProductionError>;
