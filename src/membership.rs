//! `In` / `NotIn` membership tests

pub trait Membership: PartialEq + Sized {
    fn is_in(&self, list: &[Self]) -> bool {
        list.contains(self)
    }

    fn is_not_in(&self, list: &[Self]) -> bool {
        !self.is_in(list)
    }
}

impl<T: PartialEq> Membership for T {}

/// An absent source is never a member.
pub fn option_in<T: PartialEq>(source: Option<&T>, list: &[T]) -> bool {
    source.is_some_and(|value| value.is_in(list))
}

/// An absent source is always outside the list.
pub fn option_not_in<T: PartialEq>(source: Option<&T>, list: &[T]) -> bool {
    source.map_or(true, |value| value.is_not_in(list))
}
