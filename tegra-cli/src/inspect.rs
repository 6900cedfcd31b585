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

use std::fmt::Write;

use anyhow::{Context, Result, anyhow};
use tegra::layout::{self, ADDRESS_MAP, MemRegion, Peripheral};
use tegra::psci::{self, CompositePowerState, PsciPowerState};
use tegra::pstate::{PowerStateId, classify};

const LEVEL_NAMES: [&str; psci::NUM_PWR_LVLS] = ["core", "cluster", "system"];

/// Parses a decimal or `0x` prefixed hexadecimal number.
pub fn parse_num<T>(s: &str) -> Result<T>
where
    T: TryFrom<u64>,
{
    let s = s.trim();
    let val = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(&hex.replace('_', ""), 16)
    } else {
        s.replace('_', "").parse::<u64>()
    }
    .with_context(|| format!("invalid number {s:?}"))?;
    T::try_from(val).map_err(|_| anyhow!("{s} is out of range"))
}

pub fn show_state(raw: u32) -> Result<String> {
    let id = PowerStateId::new(raw);
    let mut out = String::new();
    writeln!(out, "{id:?}")?;
    writeln!(out, "  type: {:?}", classify(id))?;
    match id.level() {
        Some(level) => writeln!(out, "  level: {level} ({})", LEVEL_NAMES[level])?,
        None => writeln!(out, "  level: -")?,
    }
    Ok(out)
}

fn write_composite(out: &mut String, composite: &CompositePowerState) -> Result<()> {
    for (level, state) in composite.states().iter().enumerate() {
        writeln!(out, "  {:<8} {state:?}", LEVEL_NAMES[level])?;
    }
    if let Some(target) = composite.target_level() {
        writeln!(out, "  target level: {target}")?;
    }
    Ok(())
}

pub fn show_power_state(raw: u32) -> Result<String> {
    let power_state = PsciPowerState::from(raw);
    let composite = psci::validate_power_state(power_state)?;
    let mut out = String::new();
    writeln!(out, "{power_state:?}")?;
    write_composite(&mut out, &composite)?;
    Ok(out)
}

pub fn show_suspend() -> Result<String> {
    let composite = psci::system_suspend_power_state();
    let mut out = String::new();
    writeln!(out, "SYSTEM_SUSPEND")?;
    write_composite(&mut out, &composite)?;
    Ok(out)
}

fn write_region(out: &mut String, peripheral: Peripheral, region: &MemRegion) -> Result<()> {
    write!(out, "{:<10} {:#012x}", peripheral.name(), region.base)?;
    match region.size {
        Some(size) => writeln!(out, " size {size:#x}")?,
        None => writeln!(out)?,
    }
    Ok(())
}

pub fn show_map(name: Option<&str>) -> Result<String> {
    let mut out = String::new();
    match name {
        Some(name) => {
            let (peripheral, region) = layout::lookup(name)?;
            write_region(&mut out, peripheral, &region)?;
        }
        None => {
            for (peripheral, region) in ADDRESS_MAP {
                write_region(&mut out, *peripheral, region)?;
            }
        }
    }
    Ok(out)
}

pub fn show_addr(addr: u64) -> Result<String> {
    let (peripheral, region) =
        layout::find_by_addr(addr).ok_or_else(|| anyhow!("no peripheral at {addr:#x}"))?;
    let mut out = String::new();
    write_region(&mut out, peripheral, &region)?;
    Ok(out)
}

#[cfg(test)]
#[path = "inspect_test.rs"]
mod tests;
