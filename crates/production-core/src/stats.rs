//! 生產統計

use std::collections::HashMap;

use serde::Serialize;

use crate::entry::{ProductionEntry, Shift};

/// 單一機台的統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineStats {
    pub name: String,
    pub output: i64,
    pub rejected: i64,
}

/// 生產統計彙總
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStats {
    /// 總良品產量
    pub total_output: i64,

    /// 總不良品數
    pub total_rejected: i64,

    /// 不良率（百分比）：rejected / (output + rejected) * 100，無產量時為 0
    pub rejection_rate: f64,

    /// 各班別良品產量
    pub by_shift: HashMap<Shift, i64>,

    /// 各機台統計（首次出現順序）
    pub by_machine: Vec<MachineStats>,
}

impl ProductionStats {
    /// 以簡單加總彙整生產記錄
    pub fn from_entries(entries: &[ProductionEntry]) -> Self {
        let mut total_output = 0;
        let mut total_rejected = 0;
        let mut by_shift: HashMap<Shift, i64> = HashMap::new();
        let mut by_machine: Vec<MachineStats> = Vec::new();

        for entry in entries {
            total_output += entry.quantity_produced;
            total_rejected += entry.quantity_rejected;

            *by_shift.entry(entry.shift).or_insert(0) += entry.quantity_produced;

            match by_machine
                .iter_mut()
                .find(|m| m.name == entry.machine_name)
            {
                Some(machine) => {
                    machine.output += entry.quantity_produced;
                    machine.rejected += entry.quantity_rejected;
                }
                None => by_machine.push(MachineStats {
                    name: entry.machine_name.clone(),
                    output: entry.quantity_produced,
                    rejected: entry.quantity_rejected,
                }),
            }
        }

        let rejection_rate = if total_output > 0 {
            (total_rejected as f64 / (total_output + total_rejected) as f64) * 100.0
        } else {
            0.0
        };

        Self {
            total_output,
            total_rejected,
            rejection_rate,
            by_shift,
            by_machine,
        }
    }
}
