//! Macros for defining conversions between catalog units.

/// Generates `From` trait implementations for all pairs of units within a dimension.
///
/// Each generated impl is generic over the representation and role of the quantity and delegates to
/// [`Quantity::to`](crate::Quantity::to), so the conversion factor is the exact ratio of the unit scales.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<R: $crate::Representation, K: $crate::Kind> From<$crate::Quantity<$first, R, K>>
                for $crate::Quantity<$rest, R, K>
            {
                fn from(value: $crate::Quantity<$first, R, K>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<R: $crate::Representation, K: $crate::Kind> From<$crate::Quantity<$rest, R, K>>
                for $crate::Quantity<$first, R, K>
            {
                fn from(value: $crate::Quantity<$rest, R, K>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}
