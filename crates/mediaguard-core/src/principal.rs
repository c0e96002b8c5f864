//! Decision-context abstraction.
//!
//! The registry never looks inside the context it is given. The reusable
//! decisions in [`crate::policy::checks`] do, and they only need the small
//! surface described by [`Principal`].

/// Identity facts a decision may consult.
pub trait Principal {
    /// Whether the caller presented a recognised identity.
    fn is_authenticated(&self) -> bool;

    /// Unique user name, if known.
    fn username(&self) -> Option<&str>;

    /// Whether the caller holds `role`.
    fn has_role(&self, role: &str) -> bool;
}

impl<P: Principal + ?Sized> Principal for &P {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }

    fn username(&self) -> Option<&str> {
        (**self).username()
    }

    fn has_role(&self, role: &str) -> bool {
        (**self).has_role(role)
    }
}
