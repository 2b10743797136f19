use model::core::value::Value;
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Selection item that stands for every alias of a table.
pub const WILDCARD: &str = "*";

/// A logical field name chosen by application code.
///
/// Closed alias sets are enums declared with [`alias_set!`](crate::alias_set);
/// `String` covers mappings that are only known at runtime.
pub trait Alias: Clone + Eq + Hash + Debug {
    fn name(&self) -> &str;
}

impl Alias for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// A row keyed by alias, as handed to and returned from application code.
pub type AliasedRow<A, V = Value> = HashMap<A, V>;

/// Byte-wise string equality usable in const context.
#[doc(hidden)]
pub const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// True when some name appears twice in `names`.
#[doc(hidden)]
pub const fn has_duplicate_name(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if same_name(names[i], names[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

/// Declares an enum of aliases, each variant bound to its alias name.
///
/// Names must be distinct within one set, since two variants sharing a name
/// would share a prefixed alias. Duplicates fail to compile:
///
/// ```compile_fail
/// naming::alias_set! {
///     enum Clash {
///         A => "x",
///         B => "x",
///     }
/// }
/// ```
///
/// ```
/// naming::alias_set! {
///     pub enum UserAlias {
///         Id => "id",
///         DisplayName => "displayName",
///     }
/// }
///
/// use naming::Alias;
/// assert_eq!(UserAlias::DisplayName.name(), "displayName");
/// assert_eq!(UserAlias::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! alias_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $alias:literal),+ $(,)?
        }
    ) => {
        const _: () = assert!(
            !$crate::alias::has_duplicate_name(&[$($alias),+]),
            "alias_set! names must be distinct"
        );

        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every alias, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::alias::Alias for $name {
            fn name(&self) -> &str {
                match self {
                    $($name::$variant => $alias),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::alias::Alias::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::NamingError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($alias => Ok($name::$variant),)+
                    other => Err($crate::error::NamingError::UnknownAlias(other.to_string())),
                }
            }
        }
    };
}
