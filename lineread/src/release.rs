//! Bulk release of owned buffers.

/// Drop every value held in `slots`, leaving each slot `None`.
///
/// Slots that are already empty are left alone, so releasing the same slots
/// twice is harmless. Returns the number of values released.
///
/// # Example
/// ```
/// use lineread::{release_all, OwnedBuffer};
///
/// let mut a = Some(OwnedBuffer::from("a"));
/// let mut b: Option<OwnedBuffer> = None;
/// let mut c = Some(OwnedBuffer::from("c"));
///
/// assert_eq!(release_all([&mut a, &mut b, &mut c]), 2);
/// assert!(a.is_none() && b.is_none() && c.is_none());
/// assert_eq!(release_all([&mut a, &mut b, &mut c]), 0);
/// ```
pub fn release_all<'a, T, I>(slots: I) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a mut Option<T>>,
{
    slots.into_iter().filter_map(Option::take).count()
}

/// Release slots of different types in one go, returning how many held a
/// value.
///
/// ```
/// let mut line = Some(lineread::OwnedBuffer::from("line"));
/// let mut bytes = Some(vec![1u8, 2, 3]);
/// let mut name: Option<String> = None;
///
/// assert_eq!(lineread::release!(line, bytes, name), 2);
/// assert!(line.is_none() && bytes.is_none());
/// ```
#[macro_export]
macro_rules! release {
    ($($slot:expr),* $(,)?) => {
        0usize $(+ usize::from($slot.take().is_some()))*
    };
}
