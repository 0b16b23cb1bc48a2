//! Bitmask-backed option sets serialized as `+`-joined token strings.
//!
//! Several schema attributes (`hoverinfo`, `mode`, ...) take a set of flags
//! encoded on the wire as one delimited string, e.g. `"x+name"`. Token order
//! is fixed by the declared bit position, never by how the set was built. A
//! set that was assigned but has no flags serializes as the empty string,
//! which the renderer treats differently from an omitted attribute.

/// Joins the tokens of all set bits in ascending declared order.
pub(crate) fn join_tokens(bits: u32, tokens: &[(u32, &str)]) -> String {
    let mut joined = String::new();
    for (mask, token) in tokens {
        if bits & mask != 0 {
            if !joined.is_empty() {
                joined.push('+');
            }
            joined.push_str(token);
        }
    }
    joined
}

/// Declares an option-set type from an explicit `(bit, token)` table.
///
/// The generated type supports `|` / `|=` to combine flags, `contains` and
/// `is_empty` queries, and serializes via [`join_tokens`]. `Default` is the
/// empty set.
macro_rules! options {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$flag_meta:meta])*
                $flag:ident = $bit:literal => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name {
            bits: u32,
        }

        impl $name {
            $(
                $(#[$flag_meta])*
                $vis const $flag: Self = Self { bits: 1 << $bit };
            )+

            const TOKENS: &'static [(u32, &'static str)] = &[
                $((1 << $bit, $token)),+
            ];

            /// The set with no flags; serializes as `""`.
            $vis const fn empty() -> Self {
                Self { bits: 0 }
            }

            $vis const fn contains(self, other: Self) -> bool {
                self.bits & other.bits == other.bits
            }

            $vis const fn is_empty(self) -> bool {
                self.bits == 0
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self { bits: self.bits | rhs.bits }
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.bits |= rhs.bits;
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(&$crate::options::join_tokens(self.bits, Self::TOKENS))
            }
        }
    };
}

pub(crate) use options;

#[cfg(test)]
mod tests {
    options! {
        struct Probe {
            X = 0 => "x",
            Y = 1 => "y",
            Z = 2 => "z",
            TEXT = 3 => "text",
            NAME = 4 => "name",
        }
    }

    #[test]
    fn test_tokens_follow_bit_order_not_build_order() {
        let set = Probe::NAME | Probe::X;
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"x+name\"");
    }

    #[test]
    fn test_all_flags_join_in_declared_order() {
        let set = Probe::X | Probe::Y | Probe::Z | Probe::TEXT | Probe::NAME;
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"x+y+z+text+name\"");
    }

    #[test]
    fn test_empty_set_serializes_as_empty_string() {
        assert_eq!(serde_json::to_string(&Probe::empty()).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Probe::default()).unwrap(), "\"\"");
    }

    #[test]
    fn test_contains_and_or_assign() {
        let mut set = Probe::X;
        set |= Probe::TEXT;
        assert!(set.contains(Probe::X));
        assert!(set.contains(Probe::TEXT));
        assert!(!set.contains(Probe::NAME));
        assert!(!set.is_empty());
    }
}
