//! Declarative builders for OCPI enumerations and composite objects.
//!
//! Each composite is declared once as a static field table. The table expands
//! into the full record, its partial-update sibling, their `Validate` impls,
//! serialization, and the merge helpers, so that the two types can never
//! drift apart.

/// Declare a closed OCPI enumeration with its exact wire spelling.
///
/// ```rust,ignore
/// ocpi_enum! {
///     pub enum PowerType {
///         Ac1Phase => "AC_1_PHASE",
///         Dc => "DC",
///     }
/// }
/// ```
macro_rules! ocpi_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every accepted wire value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire(value)
                    .ok_or_else(|| $crate::error::ValidationError::invalid_variant(value, Self::VALUES))
            }
        }

        impl $crate::validate::Validate for $name {
            fn validate(
                raw: &serde_json::Value,
                _ctx: &$crate::config::ValidationContext,
            ) -> $crate::error::ValidationResult<Self> {
                raw.as_str()
                    .ok_or_else(|| $crate::error::ValidationError::type_mismatch("string", raw))?
                    .parse()
            }
        }
    };
}

/// Declare a composite object together with its partial-update sibling.
///
/// Every field names its presence rule (`required`, `optional`, `list` or
/// `required_list`) followed by its value type. `field as "key"` maps a Rust
/// field name onto a different JSON key. Fields are validated in declaration
/// order and the first failure is returned.
macro_rules! ocpi_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $partial:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident $(as $key:literal)? : $kind:ident $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: ocpi_field_type!($kind $ty), )+
        }

        #[doc = concat!("Partial update for [`", stringify!($name), "`]; every field is optional.")]
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $partial {
            $( pub $field: ocpi_partial_type!($kind $ty), )+
        }

        impl $name {
            /// JSON keys of every declared field, in declaration order
            pub const FIELDS: &'static [&'static str] = &[$( ocpi_field_key!($field $(, $key)?) ),+];

            /// Copy of `self` with every field present in `patch` replaced
            pub fn merged(&self, patch: &$partial) -> Self {
                Self {
                    $( $field: ocpi_merge_field!($kind, &self.$field, &patch.$field), )+
                }
            }
        }

        impl $partial {
            /// True when the patch carries no changes
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }

        impl From<$name> for $partial {
            fn from(value: $name) -> Self {
                Self {
                    $( $field: ocpi_into_partial!($kind, value.$field), )+
                }
            }
        }

        impl $crate::validate::Validate for $name {
            const COMPOSITE: bool = true;

            fn validate(
                raw: &serde_json::Value,
                ctx: &$crate::config::ValidationContext,
            ) -> $crate::error::ValidationResult<Self> {
                let reader = $crate::validate::ObjectReader::new(raw, ctx)?;
                let unknown = reader.unknown_keys(Self::FIELDS);
                if !unknown.is_empty() {
                    log::trace!("{} ignores unknown keys {:?}", stringify!($name), unknown);
                }
                Ok(Self {
                    $( $field: reader.$kind(ocpi_field_key!($field $(, $key)?))?, )+
                })
            }
        }

        impl $crate::validate::Validate for $partial {
            const COMPOSITE: bool = true;

            fn validate(
                raw: &serde_json::Value,
                ctx: &$crate::config::ValidationContext,
            ) -> $crate::error::ValidationResult<Self> {
                let reader = $crate::validate::ObjectReader::new(raw, ctx)?;
                Ok(Self {
                    $( $field: reader.optional(ocpi_field_key!($field $(, $key)?))?, )+
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                $( ocpi_write_field!(map, $kind, ocpi_field_key!($field $(, $key)?), &self.$field); )+
                map.end()
            }
        }

        impl serde::Serialize for $partial {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(None)?;
                $( ocpi_write_field!(map, optional, ocpi_field_key!($field $(, $key)?), &self.$field); )+
                map.end()
            }
        }
    };
}

macro_rules! ocpi_field_type {
    (required $ty:ty) => { $ty };
    (optional $ty:ty) => { Option<$ty> };
    (list $ty:ty) => { Vec<$ty> };
    (required_list $ty:ty) => { Vec<$ty> };
}

macro_rules! ocpi_partial_type {
    (required $ty:ty) => { Option<$ty> };
    (optional $ty:ty) => { Option<$ty> };
    (list $ty:ty) => { Option<Vec<$ty>> };
    (required_list $ty:ty) => { Option<Vec<$ty>> };
}

macro_rules! ocpi_field_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}

macro_rules! ocpi_write_field {
    ($map:ident, optional, $key:expr, $value:expr) => {
        if let Some(value) = $value {
            $map.serialize_entry($key, value)?;
        }
    };
    ($map:ident, $kind:ident, $key:expr, $value:expr) => {
        $map.serialize_entry($key, $value)?;
    };
}

macro_rules! ocpi_merge_field {
    (optional, $current:expr, $patch:expr) => {
        $patch.clone().or_else(|| $current.clone())
    };
    ($kind:ident, $current:expr, $patch:expr) => {
        $patch.clone().unwrap_or_else(|| $current.clone())
    };
}

macro_rules! ocpi_into_partial {
    (optional, $value:expr) => {
        $value
    };
    ($kind:ident, $value:expr) => {
        Some($value)
    };
}
