// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Power state ids of the T210 and the rule a PSCI coordination engine uses
//! to tell retention states from powerdown states.
//!
//! The engine never looks up individual ids. It compares an id against
//! [`MAX_RETENTION_STATE`] and [`MAX_POWERDOWN_STATE`], so every id defined
//! here must sit strictly between the two thresholds and in ascending order
//! of depth. The assertions at the bottom of this file fail the build if a
//! new id breaks that ordering.

use static_assertions::const_assert;

use crate::c_enum;
use crate::utils::is_strictly_ascending;

pub const LEVEL_CORE: usize = 0;
pub const LEVEL_CLUSTER: usize = 1;
pub const LEVEL_SYSTEM: usize = 2;

c_enum! {
    /// Local power state id of a core, a cluster, or the whole SoC.
    pub struct PowerStateId(u32);
    {
        /// A single core is powered down.
        CORE_POWERDOWN = 7;
        /// The cluster is idle. Its context is retained by hardware but
        /// the id still falls in the powerdown class.
        CLUSTER_IDLE = 16;
        /// The cluster is powered down and loses its context.
        CLUSTER_POWERDOWN = 17;
        /// The whole SoC is powered down.
        SOC_POWERDOWN = 27;
    }
    unlisted {
        /// Local state of a power domain that is running.
        RUN = 0;
    }
}

/// Any id less than or equal to this is a standby/retention state.
pub const MAX_RETENTION_STATE: PowerStateId = PowerStateId::new(1);

/// Upper boundary of the powerdown class, one past the deepest state.
pub const MAX_POWERDOWN_STATE: PowerStateId =
    PowerStateId::new(PowerStateId::SOC_POWERDOWN.raw() + 1);

/// Used as the `state-id` of a `SYSTEM_SUSPEND` call.
pub const SYSTEM_SUSPEND_STATE_ID: PowerStateId = PowerStateId::SOC_POWERDOWN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    /// Context is preserved by hardware.
    Retention,
    /// Context is lost and must be saved and restored by software.
    PowerDown,
    /// Beyond the deepest state of the platform.
    Invalid,
}

impl PowerStateId {
    pub const fn is_retention(self) -> bool {
        self.0 <= MAX_RETENTION_STATE.0
    }

    pub const fn is_powerdown(self) -> bool {
        self.0 > MAX_RETENTION_STATE.0 && self.0 < MAX_POWERDOWN_STATE.0
    }

    pub const fn state_type(self) -> StateType {
        if self.is_retention() {
            StateType::Retention
        } else if self.is_powerdown() {
            StateType::PowerDown
        } else {
            StateType::Invalid
        }
    }

    /// The affinity level a named state applies to.
    pub const fn level(self) -> Option<usize> {
        match self {
            Self::CORE_POWERDOWN => Some(LEVEL_CORE),
            Self::CLUSTER_IDLE | Self::CLUSTER_POWERDOWN => Some(LEVEL_CLUSTER),
            Self::SOC_POWERDOWN => Some(LEVEL_SYSTEM),
            _ => None,
        }
    }
}

pub fn is_retention_state(id: impl Into<PowerStateId>) -> bool {
    id.into().is_retention()
}

pub fn is_powerdown_state(id: impl Into<PowerStateId>) -> bool {
    id.into().is_powerdown()
}

pub fn classify(id: impl Into<PowerStateId>) -> StateType {
    id.into().state_type()
}

pub const fn system_suspend_state_id() -> PowerStateId {
    SYSTEM_SUSPEND_STATE_ID
}

const fn all_named_ids_are_powerdown() -> bool {
    let mut i = 0;
    while i < PowerStateId::ALL.len() {
        let id = PowerStateId::ALL[i];
        if !id.is_powerdown() || id.level().is_none() {
            return false;
        }
        i += 1;
    }
    true
}

const_assert!(is_strictly_ascending(&[
    MAX_RETENTION_STATE.raw(),
    PowerStateId::CORE_POWERDOWN.raw(),
    PowerStateId::CLUSTER_IDLE.raw(),
    PowerStateId::CLUSTER_POWERDOWN.raw(),
    PowerStateId::SOC_POWERDOWN.raw(),
    MAX_POWERDOWN_STATE.raw(),
]));
const_assert!(all_named_ids_are_powerdown());
const_assert!(SYSTEM_SUSPEND_STATE_ID.is_powerdown());
const_assert!(PowerStateId::RUN.raw() < PowerStateId::CORE_POWERDOWN.raw());

#[cfg(test)]
#[path = "pstate_test.rs"]
mod tests;
