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

use rstest::rstest;

use super::*;

#[rstest]
#[case("27", 27)]
#[case("0x1b", 27)]
#[case("0X0201_001B", 0x0201_001b)]
#[case(" 16 ", 16)]
fn test_parse_num(#[case] s: &str, #[case] expected: u32) {
    assert_eq!(parse_num::<u32>(s).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("0x")]
#[case("seven")]
#[case("0x1_0000_0000")]
fn test_parse_num_error(#[case] s: &str) {
    assert!(parse_num::<u32>(s).is_err());
}

#[test]
fn test_show_state() {
    assert_eq!(
        show_state(16).unwrap(),
        "PowerStateId::CLUSTER_IDLE\n  type: PowerDown\n  level: 1 (cluster)\n"
    );
    assert_eq!(
        show_state(28).unwrap(),
        "PowerStateId(28)\n  type: Invalid\n  level: -\n"
    );
}

#[test]
fn test_show_power_state() {
    let out = show_power_state(0x0101_0011).unwrap();
    assert!(out.contains("cluster  PowerStateId::CLUSTER_POWERDOWN"));
    assert!(out.contains("system   PowerStateId::RUN"));
    assert!(out.ends_with("target level: 1\n"));
    assert!(show_power_state(0x0001_0008).is_err());
}

#[test]
fn test_show_suspend() {
    let out = show_suspend().unwrap();
    assert_eq!(out.matches("PowerStateId::SOC_POWERDOWN").count(), 3);
}

#[test]
fn test_show_map() {
    assert_eq!(show_map(None).unwrap().lines().count(), ADDRESS_MAP.len());
    assert_eq!(
        show_map(Some("tzram")).unwrap(),
        "tzram      0x007c010000 size 0x10000\n"
    );
    assert!(show_map(Some("nope")).is_err());
}

#[test]
fn test_show_addr() {
    assert!(show_addr(0x7000_6300).unwrap().starts_with("uartd"));
    assert!(show_addr(0x1000).is_err());
}
