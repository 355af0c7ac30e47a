//! Token Events for ActionPoints
//!
//! Events are emitted alongside every state change and can be indexed
//! off-chain. Each variant has a fixed field set.

use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use crate::types::{Address, Amount};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    Transfer = 0x01,
    Approval = 0x02,
    APTokensAllocated = 0x10,
    OwnershipTransferred = 0x20,
}

/// Main event enum containing all token events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum ApEvent {
    /// Emitted on transfer and on mint (`from` is the zero address)
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },

    /// Emitted when an allowance is set
    Approval {
        owner: Address,
        spender: Address,
        value: Amount,
    },

    /// Emitted when the owner allocates supply; carries the cumulative total
    APTokensAllocated {
        currently_allocated: Amount,
    },

    /// Emitted on ownership transfer and renounce (`new_owner` is the zero
    /// address after a renounce)
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
}

impl ApEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Transfer { .. } => EventType::Transfer,
            Self::Approval { .. } => EventType::Approval,
            Self::APTokensAllocated { .. } => EventType::APTokensAllocated,
            Self::OwnershipTransferred { .. } => EventType::OwnershipTransferred,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting events during execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<ApEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (append to log)
    pub fn emit(&mut self, event: ApEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[ApEvent] {
        &self.events
    }

    /// Most recently emitted event
    pub fn last(&self) -> Option<&ApEvent> {
        self.events.last()
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<ApEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&ApEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
