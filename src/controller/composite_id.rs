use std::fmt;
use std::str::FromStr;

use crate::errors::ControllerError;
use crate::ledger::{EntryKind, EntryRef};

/// Row identifier shared with the presentation layer, e.g. `exp-7` or `inc-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeId(pub EntryRef);

impl CompositeId {
    pub fn new(kind: EntryKind, id: u32) -> Self {
        Self(EntryRef::new(kind, id))
    }

    pub fn entry_ref(self) -> EntryRef {
        self.0
    }
}

impl From<EntryRef> for CompositeId {
    fn from(entry_ref: EntryRef) -> Self {
        Self(entry_ref)
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.kind.tag(), self.0.id)
    }
}

impl FromStr for CompositeId {
    type Err = ControllerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ControllerError::InvalidCompositeId(value.to_string());
        let (tag, id) = value.split_once('-').ok_or_else(invalid)?;
        let kind = match tag {
            "exp" => EntryKind::Expense,
            "inc" => EntryKind::Income,
            _ => return Err(invalid()),
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = id.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(kind, id))
    }
}
