use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JokerEffect {
    None,
    FlatChips(i64),
    FlatMult(f64),
    TimesMult(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherEffect {
    None,
    AddJokerSlots(u8),
    AddHands(u8),
    AddDiscards(u8),
    ShopDiscountPercent(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_cost: i64,
    pub prerequisites: Vec<String>,
    pub effect: JokerEffect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_cost: i64,
    pub prerequisites: Vec<String>,
    pub effect: VoucherEffect,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id {0}")]
    DuplicateId(String),
    #[error("{id} names unknown prerequisite {prerequisite}")]
    UnknownPrerequisite { id: String, prerequisite: String },
    #[error("cyclic prerequisites involving {0}")]
    CyclicPrerequisites(String),
}

/// Static registries of joker and voucher definitions. Lookup only; the
/// catalog holds no mutable run state.
#[derive(Debug, Clone)]
pub struct Catalog {
    jokers: Vec<JokerDef>,
    vouchers: Vec<VoucherDef>,
    joker_index: HashMap<String, usize>,
    voucher_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn joker(&self, id: &str) -> Option<&JokerDef> {
        self.joker_index.get(id).map(|idx| &self.jokers[*idx])
    }

    pub fn voucher(&self, id: &str) -> Option<&VoucherDef> {
        self.voucher_index.get(id).map(|idx| &self.vouchers[*idx])
    }

    /// All jokers in registration order.
    pub fn jokers(&self) -> &[JokerDef] {
        &self.jokers
    }

    /// All vouchers in registration order.
    pub fn vouchers(&self) -> &[VoucherDef] {
        &self.vouchers
    }

    pub fn joker_index(&self, id: &str) -> Option<usize> {
        self.joker_index.get(id).copied()
    }

    pub fn voucher_index(&self, id: &str) -> Option<usize> {
        self.voucher_index.get(id).copied()
    }

    pub fn prerequisites_satisfied(prerequisites: &[String], owned: &HashSet<String>) -> bool {
        prerequisites.iter().all(|id| owned.contains(id))
    }

    /// Cost after the best shop discount among owned vouchers, floored at zero.
    pub fn effective_cost(&self, base_cost: i64, owned_vouchers: &[String]) -> i64 {
        let discount = owned_vouchers
            .iter()
            .filter_map(|id| self.voucher(id))
            .filter_map(|voucher| match voucher.effect {
                VoucherEffect::ShopDiscountPercent(pct) => Some(pct as i64),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        let cost = base_cost - base_cost * discount / 100;
        cost.max(0)
    }

    pub fn builtin() -> Catalog {
        builtin_catalog().build().expect("builtin catalog is valid")
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    jokers: Vec<JokerDef>,
    vouchers: Vec<VoucherDef>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_joker(mut self, def: JokerDef) -> Self {
        self.jokers.push(def);
        self
    }

    pub fn register_voucher(mut self, def: VoucherDef) -> Self {
        self.vouchers.push(def);
        self
    }

    /// Validates ids and prerequisite graphs. Prerequisites may only name
    /// already-registered items of the same kind and must form a DAG.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let joker_index = index_of(self.jokers.iter().map(|def| def.id.as_str()))?;
        let voucher_index = index_of(self.vouchers.iter().map(|def| def.id.as_str()))?;

        check_graph(
            &joker_index,
            self.jokers
                .iter()
                .map(|def| (def.id.as_str(), def.prerequisites.as_slice())),
        )?;
        check_graph(
            &voucher_index,
            self.vouchers
                .iter()
                .map(|def| (def.id.as_str(), def.prerequisites.as_slice())),
        )?;

        Ok(Catalog {
            jokers: self.jokers,
            vouchers: self.vouchers,
            joker_index,
            voucher_index,
        })
    }
}

fn index_of<'a>(ids: impl Iterator<Item = &'a str>) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(index)
}

/// Kahn's algorithm over the prerequisite edges; leftover nodes mean a cycle.
fn check_graph<'a>(
    index: &HashMap<String, usize>,
    entries: impl Iterator<Item = (&'a str, &'a [String])> + Clone,
) -> Result<(), CatalogError> {
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    for (id, prerequisites) in entries.clone() {
        in_degree.entry(id).or_insert(0);
        for prerequisite in prerequisites {
            if !index.contains_key(prerequisite.as_str()) {
                return Err(CatalogError::UnknownPrerequisite {
                    id: id.to_string(),
                    prerequisite: prerequisite.clone(),
                });
            }
            *in_degree.entry(id).or_insert(0) += 1;
            dependents
                .entry(prerequisite.as_str())
                .or_default()
                .push(id);
        }
    }

    let mut ready: Vec<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| *id)
        .collect();
    let mut resolved = 0usize;
    while let Some(id) = ready.pop() {
        resolved += 1;
        for dependent in dependents.get(id).into_iter().flatten() {
            let degree = in_degree.get_mut(dependent).expect("known node");
            *degree -= 1;
            if *degree == 0 {
                ready.push(dependent);
            }
        }
    }

    if resolved != in_degree.len() {
        let stuck = in_degree
            .iter()
            .find(|(_, degree)| **degree > 0)
            .map(|(id, _)| id.to_string())
            .unwrap_or_default();
        return Err(CatalogError::CyclicPrerequisites(stuck));
    }
    Ok(())
}

fn joker(
    id: &str,
    name: &str,
    description: &str,
    base_cost: i64,
    prerequisites: &[&str],
    effect: JokerEffect,
) -> JokerDef {
    JokerDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_cost,
        prerequisites: prerequisites.iter().map(|id| id.to_string()).collect(),
        effect,
    }
}

fn voucher(
    id: &str,
    name: &str,
    description: &str,
    base_cost: i64,
    prerequisites: &[&str],
    effect: VoucherEffect,
) -> VoucherDef {
    VoucherDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_cost,
        prerequisites: prerequisites.iter().map(|id| id.to_string()).collect(),
        effect,
    }
}

pub fn builtin_catalog() -> CatalogBuilder {
    CatalogBuilder::new()
        .register_joker(joker(
            "joker",
            "Joker",
            "+4 mult",
            2,
            &[],
            JokerEffect::FlatMult(4.0),
        ))
        .register_joker(joker(
            "sly_joker",
            "Sly Joker",
            "+50 chips",
            3,
            &[],
            JokerEffect::FlatChips(50),
        ))
        .register_joker(joker(
            "banner",
            "Banner",
            "+30 chips",
            5,
            &[],
            JokerEffect::FlatChips(30),
        ))
        .register_joker(joker(
            "abstract_joker",
            "Abstract Joker",
            "+3 mult",
            4,
            &[],
            JokerEffect::FlatMult(3.0),
        ))
        .register_joker(joker(
            "gros_michel",
            "Gros Michel",
            "+15 mult",
            5,
            &[],
            JokerEffect::FlatMult(15.0),
        ))
        .register_joker(joker(
            "cavendish",
            "Cavendish",
            "x3 mult",
            4,
            &["gros_michel"],
            JokerEffect::TimesMult(3.0),
        ))
        .register_voucher(voucher(
            "clearance_sale",
            "Clearance Sale",
            "shop items 25% off",
            10,
            &[],
            VoucherEffect::ShopDiscountPercent(25),
        ))
        .register_voucher(voucher(
            "liquidation",
            "Liquidation",
            "shop items 50% off",
            10,
            &["clearance_sale"],
            VoucherEffect::ShopDiscountPercent(50),
        ))
        .register_voucher(voucher(
            "grabber",
            "Grabber",
            "+1 hand each round",
            10,
            &[],
            VoucherEffect::AddHands(1),
        ))
        .register_voucher(voucher(
            "nacho_tong",
            "Nacho Tong",
            "+1 hand each round",
            10,
            &["grabber"],
            VoucherEffect::AddHands(1),
        ))
        .register_voucher(voucher(
            "wasteful",
            "Wasteful",
            "+1 discard each round",
            10,
            &[],
            VoucherEffect::AddDiscards(1),
        ))
        .register_voucher(voucher(
            "recyclomancy",
            "Recyclomancy",
            "+1 discard each round",
            10,
            &["wasteful"],
            VoucherEffect::AddDiscards(1),
        ))
        .register_voucher(voucher(
            "blank",
            "Blank",
            "no direct effect",
            10,
            &[],
            VoucherEffect::None,
        ))
        .register_voucher(voucher(
            "antimatter",
            "Antimatter",
            "+1 joker slot",
            10,
            &["blank"],
            VoucherEffect::AddJokerSlots(1),
        ))
}
