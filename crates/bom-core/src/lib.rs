//! # BOM Core
//!
//! 核心資料模型與類型定義

pub mod item;
pub mod relationship;
pub mod requirement;
pub mod snapshot;

// Re-export 主要類型
pub use item::{Item, ItemKind};
pub use relationship::Relationship;
pub use requirement::MaterialRequirement;
pub use snapshot::{BomSnapshot, ImportSummary};

/// BOM 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("輸入驗證失敗: {0}")]
    Validation(String),

    #[error("無效的用量: {0}，每單位用量必須 >= 1")]
    InvalidQuantity(rust_decimal::Decimal),

    #[error("關係引用了不存在的物料 ID: {0}")]
    InvalidReference(u64),

    #[error("找不到物料: {0}")]
    NotFound(String),

    #[error("物料名稱重複: {0}")]
    Conflict(String),

    #[error("BOM 圖中存在循環，物料 ID {0} 已在展開路徑上")]
    CycleDetected(u64),

    #[error("展開節點數超出預算: {0}")]
    BudgetExceeded(usize),

    #[error("內部錯誤: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, BomError>;
