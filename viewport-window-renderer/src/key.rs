#[cfg(feature = "std")]
pub trait RowKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> RowKey for T {}

#[cfg(not(feature = "std"))]
pub trait RowKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> RowKey for T {}
