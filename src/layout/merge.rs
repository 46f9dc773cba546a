//! Deep-partial overrides.
//!
//! Every mergeable struct has a generated `*Patch` twin whose fields are all optional. A
//! patch is applied field by field: absent fields keep the base value, nested sections
//! recurse, and leaves are replaced. Patch fields whose JSON does not match the schema are
//! read as absent instead of failing the whole document.

use serde::de::DeserializeOwned;

/// A value that can absorb a deep-partial override of itself.
pub trait Merge {
    /// Deep-partial form of `Self`.
    type Patch;

    /// Apply `patch` in place.
    fn merge(&mut self, patch: Self::Patch);

    /// Apply `patch` to a copy.
    fn merged(&self, patch: Self::Patch) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.merge(patch);
        out
    }
}

macro_rules! replace_on_merge {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                type Patch = $ty;

                fn merge(&mut self, patch: $ty) {
                    *self = patch;
                }
            }
        )*
    };
}

replace_on_merge!(f64, bool, String);

/// Deserialize an optional patch field, treating `null` and type mismatches as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(v) => Ok(Some(v)),
        Err(err) => {
            tracing::debug!(%err, "ignoring override field with unexpected shape");
            Ok(None)
        }
    }
}

/// Declare a mergeable section together with its `Patch` twin.
///
/// Field types must implement [`Merge`]; the patch field type is `Option<<T as Merge>::Patch>`.
/// Both structs use camelCase wire names.
macro_rules! mergeable {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $patch:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Deep-partial override of [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $patch {
            $(
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::layout::merge::lenient"
                )]
                pub $field: Option<<$ty as crate::layout::merge::Merge>::Patch>,
            )*
        }

        impl crate::layout::merge::Merge for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        crate::layout::merge::Merge::merge(&mut self.$field, value);
                    }
                )*
            }
        }
    };
}

pub(crate) use mergeable;
