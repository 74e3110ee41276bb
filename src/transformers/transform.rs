//! Transform trait.

pub trait Transform<T> {
    /// Takes ownership of `item` and returns the transformed one.
    fn transform_own(&self, item: T) -> T;
}
