//! 集成測試

use bom_calc::{structure, ConsumptionCalculator, RequirementResolver};
use bom_core::{BomError, ItemKind, MaterialRequirement};
use bom_graph::{export, import, BomStore, MemoryBomStore};
use chrono::{Duration, Utc};
use production_core::{NewProductionEntry, ProductionLog, ProductionStats, Shift};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// 建立示例 BOM：
///   Gland Packing Set
///     ├── PTFE Ring x5
///     │     ├── PTFE Raw Material x50
///     │     └── Lubricant x2
///     ├── Metal Washer x2
///     └── Gasket x1
fn gland_packing_store() -> MemoryBomStore {
    let mut store = MemoryBomStore::new();

    let set = store
        .create_item(
            "Gland Packing Set",
            ItemKind::Assembly,
            Some("Finished Product".to_string()),
        )
        .unwrap();
    let ring = store
        .create_item(
            "PTFE Ring",
            ItemKind::Assembly,
            Some("Sub-assembly".to_string()),
        )
        .unwrap();
    let washer = store
        .create_item("Metal Washer", ItemKind::RawMaterial, None)
        .unwrap();
    let gasket = store
        .create_item("Gasket", ItemKind::RawMaterial, None)
        .unwrap();
    let ptfe_raw = store
        .create_item("PTFE Raw Material", ItemKind::RawMaterial, None)
        .unwrap();
    let lubricant = store
        .create_item("Lubricant", ItemKind::RawMaterial, None)
        .unwrap();

    store
        .create_relationship(set.id, ring.id, Decimal::from(5))
        .unwrap();
    store
        .create_relationship(set.id, washer.id, Decimal::from(2))
        .unwrap();
    store
        .create_relationship(set.id, gasket.id, Decimal::from(1))
        .unwrap();
    store
        .create_relationship(ring.id, ptfe_raw.id, Decimal::from(50))
        .unwrap();
    store
        .create_relationship(ring.id, lubricant.id, Decimal::from(2))
        .unwrap();

    store
}

fn totals(requirements: &[MaterialRequirement]) -> HashMap<String, Decimal> {
    requirements
        .iter()
        .map(|r| (r.material_name.clone(), r.total_quantity))
        .collect()
}

#[test]
fn test_gland_packing_requirements() {
    let store = gland_packing_store();
    let resolver = RequirementResolver::new(&store);

    let result = resolver
        .resolve_by_code("Gland Packing Set", Decimal::ONE)
        .unwrap();
    let by_name = totals(&result);

    assert_eq!(by_name["PTFE Raw Material"], Decimal::from(250));
    assert_eq!(by_name["Lubricant"], Decimal::from(10));
    assert_eq!(by_name["Metal Washer"], Decimal::from(2));
    assert_eq!(by_name["Gasket"], Decimal::from(1));
}

#[rstest]
#[case(10, 2500, 100, 20, 10)]
#[case(3, 750, 30, 6, 3)]
#[case(0, 0, 0, 0, 0)]
fn test_requirements_scale_with_quantity(
    #[case] quantity: i64,
    #[case] ptfe_raw: i64,
    #[case] lubricant: i64,
    #[case] washer: i64,
    #[case] gasket: i64,
) {
    let store = gland_packing_store();
    let resolver = RequirementResolver::new(&store);

    let result = resolver
        .resolve_by_code("Gland Packing Set", Decimal::from(quantity))
        .unwrap();
    let by_name = totals(&result);

    assert_eq!(by_name["PTFE Raw Material"], Decimal::from(ptfe_raw));
    assert_eq!(by_name["Lubricant"], Decimal::from(lubricant));
    assert_eq!(by_name["Metal Washer"], Decimal::from(washer));
    assert_eq!(by_name["Gasket"], Decimal::from(gasket));
}

proptest! {
    /// 縮放律：resolve(root, k*n) 的每項總量等於 k * resolve(root, n)
    #[test]
    fn prop_scaling_law(n in 1i64..1_000, k in 1i64..100) {
        let store = gland_packing_store();
        let resolver = RequirementResolver::new(&store);

        let base = resolver
            .resolve_by_code("Gland Packing Set", Decimal::from(n))
            .unwrap();
        let scaled = resolver
            .resolve_by_code("Gland Packing Set", Decimal::from(k * n))
            .unwrap();

        let base = totals(&base);
        let scaled = totals(&scaled);
        prop_assert_eq!(base.len(), scaled.len());
        for (name, total) in &base {
            prop_assert_eq!(scaled[name], total * Decimal::from(k));
        }
    }
}

#[test]
fn test_unknown_product_is_not_found() {
    let store = gland_packing_store();
    let resolver = RequirementResolver::new(&store);

    let err = resolver
        .resolve_by_code("Missing Product", Decimal::ONE)
        .unwrap_err();
    assert!(matches!(err, BomError::NotFound(_)));
}

#[test]
fn test_structure_tree_matches_graph() {
    let store = gland_packing_store();
    let root = store.item_by_name("Gland Packing Set").unwrap();

    let tree = structure(&store, root.id).unwrap();

    assert_eq!(tree.children.len(), 3);
    let ring = &tree.children[0];
    assert_eq!(ring.item.name, "PTFE Ring");
    assert_eq!(ring.quantity_required, Decimal::from(5));
    assert_eq!(ring.children.len(), 2);
}

#[test]
fn test_snapshot_export_import_round_trip() {
    let source = gland_packing_store();
    let snapshot = export(&source);

    let mut target = MemoryBomStore::new();
    let summary = import(&mut target, &snapshot).unwrap();

    assert_eq!(summary.items_count, 6);
    assert_eq!(summary.relationships_count, 5);

    // 重播後解析結果一致
    let resolver = RequirementResolver::new(&target);
    let result = resolver
        .resolve_by_code("Gland Packing Set", Decimal::ONE)
        .unwrap();
    assert_eq!(totals(&result)["PTFE Raw Material"], Decimal::from(250));
}

#[test]
fn test_import_skip_preserves_existing_item() {
    let snapshot = export(&gland_packing_store());

    let mut target = MemoryBomStore::new();
    // 先佔用一個名稱，匯入時應跳過且不覆寫
    target
        .create_item(
            "Gasket",
            ItemKind::RawMaterial,
            Some("pre-existing".to_string()),
        )
        .unwrap();

    let summary = import(&mut target, &snapshot).unwrap();
    assert_eq!(summary.items_count, 5);

    let kept = target.item_by_name("Gasket").unwrap();
    assert_eq!(kept.id, 1);
    assert_eq!(kept.description, Some("pre-existing".to_string()));
}

#[test]
fn test_materials_consumed_today_end_to_end() {
    let store = gland_packing_store();
    let now = Utc::now();

    let mut log = ProductionLog::new();
    // 今日兩筆已登錄產品
    log.create(
        NewProductionEntry::new(
            "Press-01".to_string(),
            "Gland Packing Set".to_string(),
            10,
            1,
            "Lin".to_string(),
            Shift::Morning,
        )
        .with_timestamp(now),
    )
    .unwrap();
    log.create(
        NewProductionEntry::new(
            "Press-02".to_string(),
            "Gland Packing Set".to_string(),
            5,
            0,
            "Wu".to_string(),
            Shift::Afternoon,
        )
        .with_timestamp(now),
    )
    .unwrap();
    // 未登錄 BOM 的產品：跳過
    log.create(
        NewProductionEntry::new(
            "Press-03".to_string(),
            "Prototype-X".to_string(),
            999,
            0,
            "Chen".to_string(),
            Shift::Night,
        )
        .with_timestamp(now),
    )
    .unwrap();
    // 兩天前的記錄：不在視窗內
    log.create(
        NewProductionEntry::new(
            "Press-01".to_string(),
            "Gland Packing Set".to_string(),
            100,
            0,
            "Lin".to_string(),
            Shift::Morning,
        )
        .with_timestamp(now - Duration::days(2)),
    )
    .unwrap();

    let calc = ConsumptionCalculator::new(&store);
    let consumed = calc
        .materials_consumed_since(&log.entries(), now - Duration::hours(1))
        .unwrap();
    let by_name = totals(&consumed);

    // (10 + 5) 單位成品
    assert_eq!(by_name["PTFE Raw Material"], Decimal::from(3750));
    assert_eq!(by_name["Lubricant"], Decimal::from(150));
    assert_eq!(by_name["Metal Washer"], Decimal::from(30));
    assert_eq!(by_name["Gasket"], Decimal::from(15));
}

#[test]
fn test_entry_ids_are_unique() {
    let mut log = ProductionLog::new();
    let first = log
        .create(NewProductionEntry::new(
            "Press-01".to_string(),
            "Gland Packing Set".to_string(),
            10,
            0,
            "Lin".to_string(),
            Shift::Morning,
        ))
        .unwrap();
    let second = log
        .create(NewProductionEntry::new(
            "Press-01".to_string(),
            "Gland Packing Set".to_string(),
            10,
            0,
            "Lin".to_string(),
            Shift::Morning,
        ))
        .unwrap();

    // 記錄 ID 隨機配發，彼此不同且非 nil
    assert_ne!(first.id, second.id);
    assert_ne!(first.id, Uuid::nil());

    // 依 ID 更新與刪除各自命中正確記錄
    log.delete(first.id);
    let remaining = log.entries();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[test]
fn test_production_stats_over_log() {
    let mut log = ProductionLog::new();
    log.create(NewProductionEntry::new(
        "Press-01".to_string(),
        "Gland Packing Set".to_string(),
        120,
        6,
        "Lin".to_string(),
        Shift::Morning,
    ))
    .unwrap();
    log.create(NewProductionEntry::new(
        "Press-01".to_string(),
        "Gland Packing Set".to_string(),
        80,
        2,
        "Wu".to_string(),
        Shift::Night,
    ))
    .unwrap();

    let stats = ProductionStats::from_entries(&log.entries());

    assert_eq!(stats.total_output, 200);
    assert_eq!(stats.total_rejected, 8);
    assert_eq!(stats.by_shift[&Shift::Morning], 120);
    assert_eq!(stats.by_machine.len(), 1);
    assert_eq!(stats.by_machine[0].output, 200);
}
