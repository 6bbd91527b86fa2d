//! A tagged holder that is either empty or carries one owned value.

/// Discriminant of an [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum OptionalTag {
    #[default]
    Empty = 0,
    Present = 1,
}

/// Either nothing or a present value.
///
/// The tag and the payload cannot disagree: the payload only exists inside the
/// `Present` variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Optional<T> {
    #[default]
    Empty,
    Present(T),
}

impl<T> Optional<T> {
    /// An optional holding nothing.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// An optional holding `value`.
    #[inline(always)]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Builds an optional from an explicit tag.
    ///
    /// A `Present` tag without a value yields `Empty`; an `Empty` tag drops any
    /// value it was given.
    pub fn new(tag: OptionalTag, value: Option<T>) -> Self {
        match (tag, value) {
            (OptionalTag::Present, Some(value)) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// Heap-allocated empty optional.
    pub fn boxed_empty() -> Box<Self> {
        Box::new(Self::Empty)
    }

    /// Heap-allocated present optional.
    pub fn boxed_present(value: T) -> Box<Self> {
        Box::new(Self::Present(value))
    }

    /// Heap-allocated counterpart of [`new`](Optional::new).
    pub fn new_boxed(tag: OptionalTag, value: Option<T>) -> Box<Self> {
        Box::new(Self::new(tag, value))
    }

    /// Which variant is active.
    #[inline(always)]
    pub fn tag(&self) -> OptionalTag {
        match self {
            Self::Empty => OptionalTag::Empty,
            Self::Present(_) => OptionalTag::Present,
        }
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Shared access to the held value, `None` if empty.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Exclusive access to the held value, `None` if empty.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Drops the payload if there is one and leaves the optional empty.
    pub fn release(&mut self) {
        *self = Self::Empty;
    }

    /// Moves the payload out, leaving the optional empty.
    pub fn take(&mut self) -> Option<T> {
        core::mem::take(self).into_option()
    }

    /// Converts into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
