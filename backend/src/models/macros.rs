/// Defines a closed set of lower-case string literals as a fieldless enum
/// and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)
/// - one `#[serde(rename)]` per variant so the wire form is the literal itself
/// - `ALL`, `as_str()`, `Display` and `FromStr`
///
/// Deserializing any other string fails with serde's
/// "unknown variant ..., expected one of ..." message, which is what request
/// validation surfaces to the client.
///
/// Usage:
///   define_literal_enum! {
///       /// Docs.
///       HoroscopePeriod { Daily => "daily", Weekly => "weekly" }
///   }
#[macro_export]
macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    other => Err(format!(
                        "Unknown {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }
    };
}
