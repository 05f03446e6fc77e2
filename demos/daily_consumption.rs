//! 當日原物料耗用示例

use bom_calc::ConsumptionCalculator;
use bom_core::ItemKind;
use bom_graph::{BomStore, MemoryBomStore};
use production_core::{NewProductionEntry, ProductionLog, ProductionStats, Shift};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 當日耗用示例 ===\n");

    // 簡化 BOM：一套成品耗 3 片 Gasket
    let mut store = MemoryBomStore::new();
    let set = store.create_item("Gland Packing Set", ItemKind::Assembly, None)?;
    let gasket = store.create_item("Gasket", ItemKind::RawMaterial, None)?;
    store.create_relationship(set.id, gasket.id, Decimal::from(3))?;

    // 當日生產記錄
    let mut log = ProductionLog::new();
    log.create(NewProductionEntry::new(
        "Press-01".to_string(),
        "Gland Packing Set".to_string(),
        120,
        4,
        "Lin".to_string(),
        Shift::Morning,
    ))?;
    log.create(NewProductionEntry::new(
        "Press-02".to_string(),
        "Gland Packing Set".to_string(),
        80,
        2,
        "Wu".to_string(),
        Shift::Afternoon,
    ))?;
    // 尚未登錄 BOM 的產品：耗用統計會跳過
    log.create(NewProductionEntry::new(
        "Press-03".to_string(),
        "Prototype-X".to_string(),
        5,
        0,
        "Chen".to_string(),
        Shift::Night,
    ))?;

    let entries = log.entries();

    let stats = ProductionStats::from_entries(&entries);
    println!(
        "良品 {}，不良 {}，不良率 {:.2}%",
        stats.total_output, stats.total_rejected, stats.rejection_rate
    );

    let calc = ConsumptionCalculator::new(&store);
    let consumed = calc.materials_consumed_today(&entries)?;

    println!("\n今日原物料耗用:");
    for req in &consumed {
        println!("  - {}: {}", req.material_name, req.total_quantity);
    }

    Ok(())
}
