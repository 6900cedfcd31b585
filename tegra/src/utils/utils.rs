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

#[macro_export]
macro_rules! c_enum {
    (
        $(#[$attr:meta])*
        $vs:vis struct $EnumName:ident($TyName:ty);
        {
            $( $(#[$vattr:meta])* $VARIANT:ident = $value:expr;)*
        }
        $(unlisted {
            $( $(#[$uattr:meta])* $UNLISTED:ident = $uvalue:expr;)*
        })?
    ) => {
        #[repr(transparent)]
        #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
        $(#[$attr])*
        $vs struct $EnumName($TyName);

        impl $EnumName {
            $($(#[$vattr])* pub const $VARIANT: $EnumName = $EnumName($value);)*
            $($($(#[$uattr])* pub const $UNLISTED: $EnumName = $EnumName($uvalue);)*)?

            /// Named values in declaration order, without the unlisted ones.
            pub const ALL: &'static [$EnumName] = &[$($EnumName::$VARIANT,)*];

            #[allow(dead_code)]
            pub const fn new(raw: $TyName) -> Self {
                $EnumName(raw)
            }

            #[allow(dead_code)]
            pub const fn raw(self) -> $TyName {
                self.0
            }

            pub fn name(self) -> Option<&'static str> {
                match self {
                    $($EnumName::$VARIANT => Some(stringify!($VARIANT)),)*
                    $($($EnumName::$UNLISTED => Some(stringify!($UNLISTED)),)*)?
                    _ => None,
                }
            }
        }

        impl ::core::fmt::Debug for $EnumName {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(stringify!($EnumName))?;
                match self.name() {
                    Some(name) => {
                        f.write_str("::")?;
                        f.write_str(name)
                    }
                    None => {
                        ::core::fmt::Write::write_char(f, '(')?;
                        ::core::fmt::Debug::fmt(&self.0, f)?;
                        ::core::fmt::Write::write_char(f, ')')
                    }
                }
            }
        }

        impl From<$EnumName> for $TyName {
            fn from(value: $EnumName) -> Self {
                value.0
            }
        }

        impl From<$TyName> for $EnumName {
            fn from(value: $TyName) -> Self {
                $EnumName(value)
            }
        }
    };
}

/// Returns true if `vals` is strictly ascending.
pub const fn is_strictly_ascending(vals: &[u32]) -> bool {
    let mut i = 1;
    while i < vals.len() {
        if vals[i - 1] >= vals[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
