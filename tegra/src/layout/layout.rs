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

//! Physical address map of the T210 peripherals used by the secure world.

use bitflags::bitflags;
use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::StrDeserializer;
use snafu::{ResultExt, Snafu};
use static_assertions::const_assert;

use crate::c_enum;

pub const GICD_BASE: u64 = 0x5004_1000;
pub const GICC_BASE: u64 = 0x5004_2000;

pub const MSELECT_BASE: u64 = 0x5006_0000;
pub const MSELECT_CONFIG: u64 = 0x0;

pub const TMRUS_BASE: u64 = 0x6000_5010;
pub const TMRUS_SIZE: u64 = 0x1000; // 4 KiB

pub const CAR_RESET_BASE: u64 = 0x6000_6000;
pub const FLOWCTRL_BASE: u64 = 0x6000_7000;
pub const SB_BASE: u64 = 0x6000_c200;
pub const EVP_BASE: u64 = 0x6000_f000;

pub const MISC_BASE: u64 = 0x7000_0000;
pub const HARDWARE_REVISION_OFFSET: u64 = 0x804;

pub const UARTA_BASE: u64 = 0x7000_6000;
pub const UARTB_BASE: u64 = 0x7000_6040;
pub const UARTC_BASE: u64 = 0x7000_6200;
pub const UARTD_BASE: u64 = 0x7000_6300;
pub const UARTE_BASE: u64 = 0x7000_6400;

pub const PMC_BASE: u64 = 0x7000_e400;
pub const MC_BASE: u64 = 0x7001_9000;

pub const TZRAM_BASE: u64 = 0x7c01_0000;
pub const TZRAM_SIZE: u64 = 0x1_0000; // 64 KiB

bitflags! {
    /// Bits of the MSELECT_CONFIG register.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MselectConfig: u32 {
        const UNSUPPORTED_TX_ERR_MASTER1 = 1 << 24;
        const UNSUPPORTED_TX_ERR_MASTER2 = 1 << 25;
        const ENABLE_WRAP_INCR_MASTER0 = 1 << 27;
        const ENABLE_WRAP_INCR_MASTER1 = 1 << 28;
        const ENABLE_WRAP_INCR_MASTER2 = 1 << 29;
        const ENABLE_UNSUP_TX_ERRORS = Self::UNSUPPORTED_TX_ERR_MASTER2.bits()
            | Self::UNSUPPORTED_TX_ERR_MASTER1.bits();
        const ENABLE_WRAP_TO_INCR_BURSTS = Self::ENABLE_WRAP_INCR_MASTER2.bits()
            | Self::ENABLE_WRAP_INCR_MASTER1.bits()
            | Self::ENABLE_WRAP_INCR_MASTER0.bits();
    }
}

c_enum! {
    /// Memory controller register offsets.
    pub struct McReg(u64);
    {
        /// TZDRAM carveout base.
        SECURITY_CFG0_0 = 0x70;
        /// TZDRAM carveout size in MiB.
        SECURITY_CFG1_0 = 0x74;
        SECURITY_CFG3_0 = 0x9bc;
        VIDEO_PROTECT_BASE_LO = 0x648;
        VIDEO_PROTECT_SIZE_MB = 0x64c;
        VIDEO_PROTECT_BASE_HI = 0x978;
    }
}

impl McReg {
    pub const fn addr(self) -> u64 {
        MC_BASE + self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemRegion {
    pub base: u64,
    pub size: Option<u64>,
}

impl MemRegion {
    pub const fn new(base: u64, size: u64) -> Self {
        MemRegion {
            base,
            size: Some(size),
        }
    }

    pub const fn at(base: u64) -> Self {
        MemRegion { base, size: None }
    }

    /// One past the last byte, if the size is known and the end is addressable.
    pub const fn end(&self) -> Option<u64> {
        match self.size {
            Some(size) => self.base.checked_add(size),
            None => None,
        }
    }

    pub const fn contains(&self, addr: u64) -> bool {
        match self.size {
            Some(size) => addr >= self.base && addr - self.base < size,
            None => addr == self.base,
        }
    }
}

/// Peripherals in ascending order of their base addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Peripheral {
    Gicd,
    Gicc,
    Mselect,
    Tmrus,
    #[serde(alias = "clock-reset")]
    Car,
    #[serde(alias = "flow-controller")]
    Flowctrl,
    #[serde(alias = "secure-boot")]
    Sb,
    #[serde(alias = "exception-vectors")]
    Evp,
    Misc,
    Uarta,
    Uartb,
    Uartc,
    Uartd,
    Uarte,
    Pmc,
    #[serde(alias = "memory-controller")]
    Mc,
    Tzram,
}

pub const ADDRESS_MAP: &[(Peripheral, MemRegion)] = &[
    (Peripheral::Gicd, MemRegion::at(GICD_BASE)),
    (Peripheral::Gicc, MemRegion::at(GICC_BASE)),
    (Peripheral::Mselect, MemRegion::at(MSELECT_BASE)),
    (Peripheral::Tmrus, MemRegion::new(TMRUS_BASE, TMRUS_SIZE)),
    (Peripheral::Car, MemRegion::at(CAR_RESET_BASE)),
    (Peripheral::Flowctrl, MemRegion::at(FLOWCTRL_BASE)),
    (Peripheral::Sb, MemRegion::at(SB_BASE)),
    (Peripheral::Evp, MemRegion::at(EVP_BASE)),
    (Peripheral::Misc, MemRegion::at(MISC_BASE)),
    (Peripheral::Uarta, MemRegion::at(UARTA_BASE)),
    (Peripheral::Uartb, MemRegion::at(UARTB_BASE)),
    (Peripheral::Uartc, MemRegion::at(UARTC_BASE)),
    (Peripheral::Uartd, MemRegion::at(UARTD_BASE)),
    (Peripheral::Uarte, MemRegion::at(UARTE_BASE)),
    (Peripheral::Pmc, MemRegion::at(PMC_BASE)),
    (Peripheral::Mc, MemRegion::at(MC_BASE)),
    (Peripheral::Tzram, MemRegion::new(TZRAM_BASE, TZRAM_SIZE)),
];

impl Peripheral {
    pub const ALL: [Peripheral; 17] = [
        Peripheral::Gicd,
        Peripheral::Gicc,
        Peripheral::Mselect,
        Peripheral::Tmrus,
        Peripheral::Car,
        Peripheral::Flowctrl,
        Peripheral::Sb,
        Peripheral::Evp,
        Peripheral::Misc,
        Peripheral::Uarta,
        Peripheral::Uartb,
        Peripheral::Uartc,
        Peripheral::Uartd,
        Peripheral::Uarte,
        Peripheral::Pmc,
        Peripheral::Mc,
        Peripheral::Tzram,
    ];

    pub const fn region(self) -> MemRegion {
        ADDRESS_MAP[self as usize].1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Peripheral::Gicd => "gicd",
            Peripheral::Gicc => "gicc",
            Peripheral::Mselect => "mselect",
            Peripheral::Tmrus => "tmrus",
            Peripheral::Car => "car",
            Peripheral::Flowctrl => "flowctrl",
            Peripheral::Sb => "sb",
            Peripheral::Evp => "evp",
            Peripheral::Misc => "misc",
            Peripheral::Uarta => "uarta",
            Peripheral::Uartb => "uartb",
            Peripheral::Uartc => "uartc",
            Peripheral::Uartd => "uartd",
            Peripheral::Uarte => "uarte",
            Peripheral::Pmc => "pmc",
            Peripheral::Mc => "mc",
            Peripheral::Tzram => "tzram",
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Unknown peripheral {name:?}"))]
    UnknownPeripheral {
        name: String,
        #[snafu(source)]
        error: serde::de::value::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn lookup(name: &str) -> Result<(Peripheral, MemRegion)> {
    let de: StrDeserializer<'_, serde::de::value::Error> = name.into_deserializer();
    let peripheral = Peripheral::deserialize(de).context(error::UnknownPeripheral { name })?;
    log::trace!("{name} resolved to {peripheral:?}");
    Ok((peripheral, peripheral.region()))
}

/// Finds the peripheral at `addr`. A base address match wins over a sized
/// window that covers it; the TMRUS window spans the CAR base.
pub fn find_by_addr(addr: u64) -> Option<(Peripheral, MemRegion)> {
    let found = ADDRESS_MAP
        .iter()
        .find(|(_, region)| region.base == addr)
        .or_else(|| ADDRESS_MAP.iter().find(|(_, region)| region.contains(addr)))
        .copied();
    log::trace!("{addr:#x} belongs to {found:x?}");
    found
}

const fn map_is_consistent(map: &[(Peripheral, MemRegion)]) -> bool {
    if map.len() != Peripheral::ALL.len() {
        return false;
    }
    let mut i = 0;
    while i < map.len() {
        let (peripheral, region) = map[i];
        if peripheral as usize != i {
            return false;
        }
        if let Some(0) = region.size {
            return false;
        }
        if i + 1 < map.len() {
            if region.base >= map[i + 1].1.base {
                return false;
            }
        }
        i += 1;
    }
    true
}

const_assert!(map_is_consistent(ADDRESS_MAP));

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
