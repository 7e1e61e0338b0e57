//! The point capability clustered by this crate.

use std::borrow::Cow;

/// A value that can be placed in n-dimensional space.
///
/// All observations passed to one clustering run must report coordinate vectors of the
/// same length. Types that already store their coordinates contiguously should hand out
/// [`Cow::Borrowed`]; scalars and converted types return [`Cow::Owned`].
///
/// ```rust
/// use std::borrow::Cow;
/// use lloyd::Observation;
///
/// struct Pixel {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// impl Observation for Pixel {
///     fn coordinates(&self) -> Cow<'_, [f64]> {
///         Cow::Owned(vec![self.r.into(), self.g.into(), self.b.into()])
///     }
/// }
///
/// let px = Pixel { r: 1, g: 2, b: 3 };
/// assert_eq!(px.coordinates().as_ref(), &[1.0, 2.0, 3.0]);
/// ```
pub trait Observation {
    /// Ordered coordinate vector of this observation.
    fn coordinates(&self) -> Cow<'_, [f64]>;
}

impl<T: Observation + ?Sized> Observation for &T {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        (**self).coordinates()
    }
}

impl Observation for f64 {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(std::slice::from_ref(self))
    }
}

impl Observation for f32 {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(vec![f64::from(*self)])
    }
}

impl Observation for i32 {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(vec![f64::from(*self)])
    }
}

impl Observation for i64 {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(vec![*self as f64])
    }
}

impl Observation for [f64] {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self)
    }
}

impl Observation for Vec<f64> {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Observation for Vec<f32> {
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(self.iter().copied().map(f64::from).collect())
    }
}

impl<const N: usize> Observation for [f64; N] {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Observation for [f32; N] {
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(self.iter().copied().map(f64::from).collect())
    }
}

impl<const N: usize> Observation for [i32; N] {
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(self.iter().copied().map(f64::from).collect())
    }
}

impl Observation for (f64, f64) {
    #[inline]
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(vec![self.0, self.1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_are_one_dimensional() {
        assert_eq!(3.5f64.coordinates().as_ref(), &[3.5]);
        assert_eq!(2.0f32.coordinates().as_ref(), &[2.0]);
        assert_eq!(7i32.coordinates().as_ref(), &[7.0]);
        assert_eq!((-4i64).coordinates().as_ref(), &[-4.0]);
    }

    #[test]
    fn test_contiguous_storage_is_borrowed() {
        let v: Vec<f64> = vec![1.0, 2.0, 3.0];
        assert!(matches!(v.coordinates(), Cow::Borrowed(_)));

        let a = [4.0f64, 5.0];
        assert!(matches!(a.coordinates(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_converted_storage() {
        let v = vec![1.0f32, 2.5];
        assert_eq!(v.coordinates().as_ref(), &[1.0, 2.5]);

        let a = [11i32, 12];
        assert_eq!(a.coordinates().as_ref(), &[11.0, 12.0]);

        assert_eq!((1.0f64, -1.0f64).coordinates().as_ref(), &[1.0, -1.0]);
    }

    #[test]
    fn test_reference_forwards() {
        let v: Vec<f64> = vec![9.0, 8.0];
        let r = &v;
        assert_eq!(r.coordinates().as_ref(), &[9.0, 8.0]);
    }
}
