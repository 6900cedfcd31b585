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

use crate::utils::is_strictly_ascending;

c_enum! {
    struct Color(u8);
    {
        RED = 1;
        GREEN = 2;
    }
    unlisted {
        BLACK = 0;
    }
}

#[test]
fn test_c_enum_debug() {
    assert_eq!(format!("{:?}", Color::RED), "Color::RED");
    assert_eq!(format!("{:?}", Color::from(9)), "Color(9)");
    assert_eq!(Color::GREEN.name(), Some("GREEN"));
    assert_eq!(Color::new(3).name(), None);
}

#[test]
fn test_c_enum_all() {
    assert_eq!(Color::ALL, &[Color::RED, Color::GREEN]);
    assert!(Color::RED < Color::GREEN);
    assert_eq!(u8::from(Color::GREEN), 2);
}

#[test]
fn test_c_enum_unlisted() {
    assert_eq!(format!("{:?}", Color::BLACK), "Color::BLACK");
    assert_eq!(Color::from(0), Color::BLACK);
    assert!(!Color::ALL.contains(&Color::BLACK));
}

#[rstest]
#[case(&[], true)]
#[case(&[5], true)]
#[case(&[1, 7, 16, 17, 27, 28], true)]
#[case(&[1, 7, 7], false)]
#[case(&[7, 1], false)]
fn test_is_strictly_ascending(#[case] vals: &[u32], #[case] expected: bool) {
    assert_eq!(is_strictly_ascending(vals), expected);
}
