/// Adds conversions `from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants. Values without a variant map to `Unknown(_)`.
///
/// ```
/// # use egret_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u16)]
///     #[derive(Debug, PartialEq)]
///     pub enum Compression {
///         None = 1,
///         PackBits = 32773,
///     }
/// );
/// let int: u16 = Compression::None.into();
/// assert_eq!(int, 1);
/// assert_eq!(Compression::from(32773), Compression::PackBits);
/// assert_eq!(Compression::from(6), Compression::Unknown(6));
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $($variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::Into<$type> for $enum_name {
            fn into(self) -> $type {
                match self {
                    $(Self::$variant_name => $variant_value,)*
                    Self::Unknown(other) => other,
                }
            }
        }
    }
}

pub use convertible_enum;
