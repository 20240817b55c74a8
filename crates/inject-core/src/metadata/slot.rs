//! Slot de metadata adjunta a un callable.

use log::warn;
use once_cell::sync::OnceCell;

use crate::model::ParamDescriptors;

/// Se escribe una sola vez; a partir de ahí es inmutable.
#[derive(Debug, Default)]
pub struct MetadataSlot {
    cell: OnceCell<ParamDescriptors>,
}

impl MetadataSlot {
    /// Registra `descriptors`. Devuelve `true` si quedó registrada esa misma
    /// secuencia (primera escritura, o una repetición idéntica).
    pub fn attach(&self, descriptors: ParamDescriptors) -> bool {
        match self.cell.try_insert(descriptors) {
            Ok(_) => true,
            Err((current, rejected)) => {
                if *current == rejected {
                    true
                } else {
                    warn!("metadata slot already holds {} descriptors; ignoring a different list of {}",
                          current.len(),
                          rejected.len());
                    false
                }
            }
        }
    }

    pub fn get(&self) -> Option<&ParamDescriptors> {
        self.cell.get()
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}
