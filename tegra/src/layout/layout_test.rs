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

use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

#[rstest]
#[case("gicd", Peripheral::Gicd, 0x5004_1000, None)]
#[case("tmrus", Peripheral::Tmrus, 0x6000_5010, Some(0x1000))]
#[case("clock-reset", Peripheral::Car, 0x6000_6000, None)]
#[case("secure-boot", Peripheral::Sb, 0x6000_c200, None)]
#[case("uartb", Peripheral::Uartb, 0x7000_6040, None)]
#[case("memory-controller", Peripheral::Mc, 0x7001_9000, None)]
#[case("tzram", Peripheral::Tzram, 0x7c01_0000, Some(0x1_0000))]
fn test_lookup(
    #[case] name: &str,
    #[case] peripheral: Peripheral,
    #[case] base: u64,
    #[case] size: Option<u64>,
) {
    assert_eq!(lookup(name).unwrap(), (peripheral, MemRegion { base, size }));
}

#[test]
fn test_lookup_unknown() {
    assert_matches!(
        lookup("uartf"),
        Err(Error::UnknownPeripheral { name, .. }) if name == "uartf"
    );
    assert!(lookup("GICD").is_err());
}

#[test]
fn test_name_roundtrip() {
    for peripheral in Peripheral::ALL {
        assert_eq!(lookup(peripheral.name()).unwrap().0, peripheral);
    }
}

#[test]
fn test_address_map_sorted() {
    assert_eq!(ADDRESS_MAP.len(), Peripheral::ALL.len());
    assert!(ADDRESS_MAP.windows(2).all(|w| w[0].1.base < w[1].1.base));
    for (index, (peripheral, region)) in ADDRESS_MAP.iter().enumerate() {
        assert_eq!(Peripheral::ALL[index], *peripheral);
        assert_eq!(peripheral.region(), *region);
    }
}

#[test]
fn test_mem_region() {
    let tzram = Peripheral::Tzram.region();
    assert_eq!(tzram.end(), Some(0x7c02_0000));
    assert!(tzram.contains(0x7c01_ffff));
    assert!(!tzram.contains(0x7c02_0000));
    assert!(!tzram.contains(0x7c00_ffff));

    let top = MemRegion::new(u64::MAX - 0xfff, 0x2000);
    assert_eq!(top.end(), None);
    assert!(top.contains(u64::MAX));
    assert_eq!(MemRegion::new(u64::MAX - 0xfff, 0x1000).end(), None);
    assert_eq!(MemRegion::new(0x1000, 0x1000).end(), Some(0x2000));

    let pmc = Peripheral::Pmc.region();
    assert_eq!(pmc.end(), None);
    assert!(pmc.contains(PMC_BASE));
    assert!(!pmc.contains(PMC_BASE + 4));
}

#[rstest]
#[case(CAR_RESET_BASE, Some(Peripheral::Car))]
#[case(0x6000_5800, Some(Peripheral::Tmrus))]
#[case(0x6000_6008, Some(Peripheral::Tmrus))]
#[case(TZRAM_BASE + 0x100, Some(Peripheral::Tzram))]
#[case(UARTE_BASE, Some(Peripheral::Uarte))]
#[case(0x8000_0000, None)]
fn test_find_by_addr(#[case] addr: u64, #[case] expected: Option<Peripheral>) {
    assert_eq!(find_by_addr(addr).map(|(p, _)| p), expected);
}

#[test]
fn test_mselect_config() {
    assert_eq!(MselectConfig::ENABLE_UNSUP_TX_ERRORS.bits(), 0x0300_0000);
    assert_eq!(MselectConfig::ENABLE_WRAP_TO_INCR_BURSTS.bits(), 0x3800_0000);
    let config = MselectConfig::ENABLE_WRAP_TO_INCR_BURSTS;
    assert!(config.contains(MselectConfig::ENABLE_WRAP_INCR_MASTER0));
    assert!(!config.intersects(MselectConfig::ENABLE_UNSUP_TX_ERRORS));
}

#[test]
fn test_mc_reg() {
    assert_eq!(McReg::SECURITY_CFG0_0.addr(), 0x7001_9070);
    assert_eq!(McReg::VIDEO_PROTECT_BASE_HI.addr(), 0x7001_9978);
    assert_eq!(MISC_BASE + HARDWARE_REVISION_OFFSET, 0x7000_0804);
}
