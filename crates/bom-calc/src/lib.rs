//! # BOM Calculation Engine
//!
//! 核心需求解析引擎：BOM 展開、結構樹、期間耗用統計

pub mod consumption;
pub mod resolver;
pub mod structure;

// Re-export 主要類型
pub use consumption::{start_of_today, ConsumptionCalculator};
pub use resolver::{RequirementResolver, DEFAULT_VISIT_BUDGET};
pub use structure::{structure, BomNode};
