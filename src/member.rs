//! Member descriptors
//!
//! A comparison validator can compare a candidate against another member of
//! the object being validated. Rust has no runtime reflection, so the member
//! is described explicitly: a display name plus an accessor closure.
//!
//! # Example
//!
//! ```rust
//! use likewise::{member, MemberDescriptor, MemberInfo};
//!
//! struct Person {
//!     forename: String,
//!     surname: String,
//! }
//!
//! let surname = member!(Person, surname as "Surname");
//! let person = Person { forename: "Ada".into(), surname: "Lovelace".into() };
//!
//! assert_eq!(surname.read(&person), "Lovelace");
//! assert_eq!(surname.info(), &MemberInfo::of::<Person, String>("Surname"));
//!
//! // Hand-written accessors work too
//! let initials = MemberDescriptor::new("Initials", |p: &Person| {
//!     format!("{}{}", &p.forename[..1], &p.surname[..1])
//! });
//! assert_eq!(initials.read(&person), "AL");
//! ```

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Type-erased description of a named member.
///
/// Two infos are equal when they name the same member on the same owner type
/// with the same value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    name: Cow<'static, str>,
    owner_type: &'static str,
    value_type: &'static str,
}

impl MemberInfo {
    /// Describe member `name` of type `V` declared on `T`.
    pub fn of<T: ?Sized, V: ?Sized>(name: impl Into<Cow<'static, str>>) -> Self {
        MemberInfo {
            name: name.into(),
            owner_type: type_name::<T>(),
            value_type: type_name::<V>(),
        }
    }

    /// The member's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name of the owning type.
    pub fn owner_type(&self) -> &'static str {
        self.owner_type
    }

    /// Fully qualified name of the member's value type.
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner_type, self.name)
    }
}

type Accessor<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// A resolved member of `T` whose current value is a `V`.
pub struct MemberDescriptor<T, V> {
    info: MemberInfo,
    accessor: Accessor<T, V>,
}

impl<T, V> MemberDescriptor<T, V> {
    /// Create a descriptor from a display name and an accessor.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        MemberDescriptor {
            info: MemberInfo::of::<T, V>(name),
            accessor: Arc::new(accessor),
        }
    }

    /// Type-erased description of this member.
    pub fn info(&self) -> &MemberInfo {
        &self.info
    }

    /// The member's display name.
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Read the member's current value off `instance`.
    #[inline]
    pub fn read(&self, instance: &T) -> V {
        (self.accessor)(instance)
    }
}

impl<T, V> Clone for MemberDescriptor<T, V> {
    fn clone(&self) -> Self {
        MemberDescriptor {
            info: self.info.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T, V> fmt::Debug for MemberDescriptor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl<T, V> PartialEq for MemberDescriptor<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

/// Build a [`MemberDescriptor`] for a field.
///
/// The accessor clones the field. The display name defaults to the field
/// identifier and can be overridden with `as "Name"`.
///
/// ```rust
/// use likewise::member;
///
/// struct Order {
///     quantity: u32,
/// }
///
/// let quantity = member!(Order, quantity);
/// assert_eq!(quantity.name(), "quantity");
/// assert_eq!(quantity.read(&Order { quantity: 3 }), 3);
///
/// let named = member!(Order, quantity as "Quantity");
/// assert_eq!(named.name(), "Quantity");
/// ```
#[macro_export]
macro_rules! member {
    ($owner:ty, $field:ident as $name:expr) => {
        $crate::MemberDescriptor::new($name, |owner: &$owner| {
            ::std::clone::Clone::clone(&owner.$field)
        })
    };
    ($owner:ty, $field:ident) => {
        $crate::MemberDescriptor::new(stringify!($field), |owner: &$owner| {
            ::std::clone::Clone::clone(&owner.$field)
        })
    };
}
