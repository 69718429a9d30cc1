//! Inventory summaries over local-shape lists

use crate::models::{FilamentType, Spool, UNKNOWN};
use std::collections::BTreeMap;

/// Spools sharing a key, with their summed remaining weight
#[derive(Debug, Default)]
pub struct SpoolGroup<'a> {
    pub count: usize,
    /// Grams
    pub total_weight: f64,
    pub spools: Vec<&'a Spool>,
}

impl<'a> SpoolGroup<'a> {
    fn push(&mut self, spool: &'a Spool) {
        self.count += 1;
        self.total_weight += spool.remaining_weight.unwrap_or(0.0);
        self.spools.push(spool);
    }
}

fn key_or_unknown(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Grams left across all spools
pub fn total_remaining_weight(spools: &[Spool]) -> f64 {
    spools.iter().filter_map(|s| s.remaining_weight).sum()
}

pub fn active_spools(spools: &[Spool]) -> Vec<&Spool> {
    spools.iter().filter(|s| !s.is_empty).collect()
}

pub fn empty_spools(spools: &[Spool]) -> Vec<&Spool> {
    spools.iter().filter(|s| s.is_empty).collect()
}

pub fn spools_by_filament_type(spools: &[Spool]) -> BTreeMap<Option<i64>, SpoolGroup<'_>> {
    let mut groups: BTreeMap<Option<i64>, SpoolGroup<'_>> = BTreeMap::new();
    for spool in spools {
        groups.entry(spool.filament_type_id).or_default().push(spool);
    }
    groups
}

/// Spools without a location are grouped under "Unknown"
pub fn spools_by_location(spools: &[Spool]) -> BTreeMap<String, Vec<&Spool>> {
    let mut groups: BTreeMap<String, Vec<&Spool>> = BTreeMap::new();
    for spool in spools {
        groups
            .entry(key_or_unknown(spool.location.as_deref()))
            .or_default()
            .push(spool);
    }
    groups
}

/// Needs the included filament type; spools without one count as "Unknown"
pub fn spools_by_material(spools: &[Spool]) -> BTreeMap<String, SpoolGroup<'_>> {
    let mut groups: BTreeMap<String, SpoolGroup<'_>> = BTreeMap::new();
    for spool in spools {
        let material = spool.filament_type.as_ref().map(|ft| ft.material.as_str());
        groups.entry(key_or_unknown(material)).or_default().push(spool);
    }
    groups
}

pub fn types_by_material(types: &[FilamentType]) -> BTreeMap<String, Vec<&FilamentType>> {
    let mut groups: BTreeMap<String, Vec<&FilamentType>> = BTreeMap::new();
    for filament_type in types {
        groups
            .entry(key_or_unknown(Some(filament_type.material.as_str())))
            .or_default()
            .push(filament_type);
    }
    groups
}

pub fn types_by_manufacturer(types: &[FilamentType]) -> BTreeMap<String, Vec<&FilamentType>> {
    let mut groups: BTreeMap<String, Vec<&FilamentType>> = BTreeMap::new();
    for filament_type in types {
        groups
            .entry(key_or_unknown(Some(filament_type.manufacturer.as_str())))
            .or_default()
            .push(filament_type);
    }
    groups
}
