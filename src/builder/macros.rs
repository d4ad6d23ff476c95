//! Macros for ergonomic state machine construction.

/// Declare a unit-variant enum and implement [`State`](crate::core::State)
/// for it.
///
/// The generated `VARIANTS` lists every variant in declaration order, so
/// the universe can never drift from the enum definition. Values serialize
/// as their variant name through this crate's serde, so callers need no
/// direct serde dependency.
///
/// # Example
///
/// ```
/// use state_switcher::core::State;
/// use state_switcher::state_enum;
///
/// state_enum! {
///     pub enum CellState {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(CellState::VARIANTS, &[CellState::Open, CellState::Close]);
/// assert_eq!(CellState::Close.name(), "Close");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<Ser>(&self, serializer: Ser) -> ::std::result::Result<Ser::Ok, Ser::Error>
            where
                Ser: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::core::State::name(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::core::State>::from_name(&name).ok_or_else(|| {
                    <D::Error as $crate::serde::de::Error>::unknown_variant(
                        &name,
                        &[$(stringify!($variant)),*],
                    )
                })
            }
        }
    };
}
