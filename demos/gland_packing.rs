//! BOM 展開示例：Gland Packing Set

use bom_calc::{structure, RequirementResolver};
use bom_core::ItemKind;
use bom_graph::{BomStore, MemoryBomStore};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== BOM 展開示例 ===\n");

    // 建立 BOM：
    // "Gland Packing Set" = 5x PTFE Ring + 2x Metal Washer + 1x Gasket
    // "PTFE Ring" = 50x PTFE Raw Material + 2x Lubricant
    let mut store = MemoryBomStore::new();

    let set = store.create_item(
        "Gland Packing Set",
        ItemKind::Assembly,
        Some("Finished Product".to_string()),
    )?;
    let ring = store.create_item(
        "PTFE Ring",
        ItemKind::Assembly,
        Some("Sub-assembly".to_string()),
    )?;
    let washer = store.create_item("Metal Washer", ItemKind::RawMaterial, None)?;
    let gasket = store.create_item("Gasket", ItemKind::RawMaterial, None)?;
    let ptfe_raw = store.create_item("PTFE Raw Material", ItemKind::RawMaterial, None)?;
    let lubricant = store.create_item("Lubricant", ItemKind::RawMaterial, None)?;

    store.create_relationship(set.id, ring.id, Decimal::from(5))?;
    store.create_relationship(set.id, washer.id, Decimal::from(2))?;
    store.create_relationship(set.id, gasket.id, Decimal::from(1))?;
    store.create_relationship(ring.id, ptfe_raw.id, Decimal::from(50))?;
    store.create_relationship(ring.id, lubricant.id, Decimal::from(2))?;

    // 結構樹
    let tree = structure(&store, set.id)?;
    println!("結構樹:");
    println!("{}", serde_json::to_string_pretty(&tree)?);

    // 需求展開：生產 10 套
    let resolver = RequirementResolver::new(&store);
    let requirements = resolver.resolve_by_code("Gland Packing Set", Decimal::from(10))?;

    println!("\n生產 10 套所需原物料:");
    for req in &requirements {
        println!("  - {}: {}", req.material_name, req.total_quantity);
    }

    Ok(())
}
