//! Parameter descriptors published by the externally compiled DSP unit.
//!
//! The DSP node exposes its controls as a list of records; only the address,
//! label and numeric range are read here. Extra fields on each record (type,
//! step, init, index) are ignored when deserializing. Buttons and checkboxes
//! carry no range; they are kept in the table but never clamp.

use crate::mapping::ParamRange;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ParamDescriptor {
    pub address: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub min: Option<f32>,
    #[serde(default)]
    pub max: Option<f32>,
}

impl ParamDescriptor {
    /// Declared range, if the control has one.
    #[inline]
    pub fn range(&self) -> Option<ParamRange> {
        Some(ParamRange::new(self.min?, self.max?))
    }
}

/// Metadata returned alongside the DSP node by the factory.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DspMeta {
    #[serde(default)]
    pub name: String,
}

/// Read-only view over the descriptor list, keyed by address.
#[derive(Debug, Default)]
pub struct DescriptorTable {
    entries: Vec<ParamDescriptor>,
    warned: RefCell<BTreeSet<String>>,
}

impl DescriptorTable {
    pub fn new(entries: Vec<ParamDescriptor>) -> Self {
        Self {
            entries,
            warned: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, address: &str) -> Option<&ParamDescriptor> {
        self.entries.iter().find(|d| d.address == address)
    }

    /// Clamp `value` to the declared range for `address`. Unknown addresses
    /// and controls without a range pass through unchanged and are reported
    /// once.
    pub fn clamp(&self, address: &str, value: f32) -> f32 {
        match self.get(address).and_then(ParamDescriptor::range) {
            Some(range) => range.clamp(value),
            None => {
                if self.warned.borrow_mut().insert(address.to_string()) {
                    log::warn!("no declared range for {}; writing unclamped", address);
                }
                value
            }
        }
    }

    pub fn log_ranges(&self) {
        for d in &self.entries {
            match d.range() {
                Some(ParamRange { min, max }) => log::info!(
                    "Configuring {} with range [{}, {}] at {}",
                    d.label,
                    min,
                    max,
                    d.address
                ),
                None => log::debug!("{} at {} has no range", d.label, d.address),
            }
        }
    }
}
