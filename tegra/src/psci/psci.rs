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

use bitfield::bitfield;
use snafu::{Snafu, ensure};

use crate::c_enum;
use crate::pstate::{
    LEVEL_CLUSTER, LEVEL_CORE, LEVEL_SYSTEM, PowerStateId, StateType, SYSTEM_SUSPEND_STATE_ID,
};

pub const PLAT_MAX_PWR_LVL: usize = LEVEL_SYSTEM;
pub const NUM_PWR_LVLS: usize = PLAT_MAX_PWR_LVL + 1;

c_enum! {
    /// https://developer.arm.com/documentation/den0022/latest/
    pub struct PsciFunc(u32);
    {
        CPU_SUSPEND_32 = 0x8400_0001;
        CPU_SUSPEND_64 = 0xc400_0001;
        SYSTEM_SUSPEND_32 = 0x8400_000e;
        SYSTEM_SUSPEND_64 = 0xc400_000e;
    }
}

const PSTATE_VALID_MASK: u32 = 0x0301_ffff;

bitfield! {
    /// The `power_state` parameter of `CPU_SUSPEND`, PSCI original (non-extended) format.
    #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
    pub struct PsciPowerState(u32);
    impl Debug;
    pub u16, state_id, set_state_id: 15, 0;
    pub state_type, set_state_type: 16;
    pub u8, power_level, set_power_level: 25, 24;
}

impl PsciPowerState {
    /// Returns `None` if `id` or `level` does not fit its field.
    pub fn compose(id: PowerStateId, powerdown: bool, level: usize) -> Option<Self> {
        let state_id = u16::try_from(id.raw()).ok()?;
        if level > PLAT_MAX_PWR_LVL {
            return None;
        }
        let mut power_state = PsciPowerState(0);
        power_state.set_state_id(state_id);
        power_state.set_state_type(powerdown);
        power_state.set_power_level(level as u8);
        Some(power_state)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PsciPowerState {
    fn from(value: u32) -> Self {
        PsciPowerState(value)
    }
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Power state {power_state:#x} has reserved bits set"))]
    ReservedBits { power_state: u32 },
    #[snafu(display("Power level {level} is beyond the system level"))]
    InvalidPowerLevel { level: u8 },
    #[snafu(display("Unsupported state id {id}"))]
    UnsupportedStateId { id: u32 },
    #[snafu(display("{id:?} applies to level {expected}, but level {level} was requested"))]
    LevelMismatch {
        id: PowerStateId,
        level: u8,
        expected: usize,
    },
    #[snafu(display("{id:?} cannot be entered as a {requested:?} state"))]
    StateTypeMismatch {
        id: PowerStateId,
        requested: StateType,
    },
    #[snafu(display("{func:?} is not a suspend request"))]
    NotSuspend { func: PsciFunc },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One local power state per affinity level, core first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositePowerState([PowerStateId; NUM_PWR_LVLS]);

impl Default for CompositePowerState {
    fn default() -> Self {
        CompositePowerState([PowerStateId::RUN; NUM_PWR_LVLS])
    }
}

impl CompositePowerState {
    pub const fn new(states: [PowerStateId; NUM_PWR_LVLS]) -> Self {
        CompositePowerState(states)
    }

    pub fn states(&self) -> &[PowerStateId; NUM_PWR_LVLS] {
        &self.0
    }

    pub fn local_state(&self, level: usize) -> Option<PowerStateId> {
        self.0.get(level).copied()
    }

    /// The highest level that leaves the run state.
    pub fn target_level(&self) -> Option<usize> {
        self.0.iter().rposition(|s| *s != PowerStateId::RUN)
    }

    pub fn is_powerdown(&self) -> bool {
        self.target_level()
            .is_some_and(|level| self.0[level].is_powerdown())
    }

    /// Rebuilds the `CPU_SUSPEND` parameter that requests this state.
    ///
    /// Returns `None` if no parameter decodes back to exactly this state,
    /// e.g. the system suspend state, which only `SYSTEM_SUSPEND` enters.
    pub fn encode(&self) -> Option<PsciPowerState> {
        let level = self.target_level()?;
        let id = self.0[level];
        let power_state = PsciPowerState::compose(id, id.is_powerdown(), level)?;
        match decode_power_state(power_state) {
            Ok(composite) if composite == *self => Some(power_state),
            _ => None,
        }
    }
}

pub fn validate_power_state(power_state: PsciPowerState) -> Result<CompositePowerState> {
    log::trace!("validating {power_state:?}");
    match decode_power_state(power_state) {
        Ok(composite) => {
            log::debug!("{power_state:?} requests {composite:?}");
            Ok(composite)
        }
        Err(e) => {
            log::error!("rejected {power_state:?}: {e}");
            Err(e)
        }
    }
}

fn decode_power_state(power_state: PsciPowerState) -> Result<CompositePowerState> {
    ensure!(
        power_state.raw() & !PSTATE_VALID_MASK == 0,
        error::ReservedBits {
            power_state: power_state.raw()
        }
    );
    let level = power_state.power_level();
    ensure!(
        level as usize <= PLAT_MAX_PWR_LVL,
        error::InvalidPowerLevel { level }
    );

    let id = PowerStateId::new(power_state.state_id() as u32);
    let mut states = [PowerStateId::RUN; NUM_PWR_LVLS];
    let expected = match id {
        PowerStateId::CORE_POWERDOWN => {
            states[LEVEL_CORE] = id;
            LEVEL_CORE
        }
        PowerStateId::CLUSTER_IDLE | PowerStateId::CLUSTER_POWERDOWN => {
            states[LEVEL_CORE] = PowerStateId::CORE_POWERDOWN;
            states[LEVEL_CLUSTER] = id;
            LEVEL_CLUSTER
        }
        PowerStateId::SOC_POWERDOWN => {
            states[LEVEL_CORE] = PowerStateId::CORE_POWERDOWN;
            states[LEVEL_CLUSTER] = PowerStateId::CLUSTER_POWERDOWN;
            states[LEVEL_SYSTEM] = id;
            LEVEL_SYSTEM
        }
        _ => return error::UnsupportedStateId { id: id.raw() }.fail(),
    };
    ensure!(
        level as usize == expected,
        error::LevelMismatch {
            id,
            level,
            expected
        }
    );

    let requested = if power_state.state_type() {
        StateType::PowerDown
    } else {
        StateType::Retention
    };
    ensure!(
        id.state_type() == requested,
        error::StateTypeMismatch { id, requested }
    );

    Ok(CompositePowerState(states))
}

/// Every level enters the system suspend state.
pub const fn system_suspend_power_state() -> CompositePowerState {
    CompositePowerState([SYSTEM_SUSPEND_STATE_ID; NUM_PWR_LVLS])
}

/// Resolves the target state of a `CPU_SUSPEND` or `SYSTEM_SUSPEND` call.
pub fn suspend_request(func: PsciFunc, power_state: u32) -> Result<CompositePowerState> {
    match func {
        PsciFunc::CPU_SUSPEND_32 | PsciFunc::CPU_SUSPEND_64 => {
            validate_power_state(PsciPowerState::from(power_state))
        }
        PsciFunc::SYSTEM_SUSPEND_32 | PsciFunc::SYSTEM_SUSPEND_64 => {
            Ok(system_suspend_power_state())
        }
        _ => error::NotSuspend { func }.fail(),
    }
}

#[cfg(test)]
#[path = "psci_test.rs"]
mod tests;
