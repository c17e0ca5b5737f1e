/// Generates the named helpers of one concrete type.
///
/// The zero value defaults to `Default::default()`; pass it explicitly for
/// types without a `Default` implementation.
macro_rules! impl_typed {
    (
        $Ty:ty => $to:ident, $from:ident, $must:ident,
        $to_vec:ident, $from_vec:ident, $to_map:ident, $from_map:ident $(,)?
    ) => {
        impl_typed!(
            $Ty, <$Ty as Default>::default() =>
            $to, $from, $must, $to_vec, $from_vec, $to_map, $from_map
        );
    };
    (
        $Ty:ty, $zero:expr => $to:ident, $from:ident, $must:ident,
        $to_vec:ident, $from_vec:ident, $to_map:ident, $from_map:ident $(,)?
    ) => {
        #[doc = concat!("Wraps a `", stringify!($Ty), "` in a non-empty optional.")]
        #[inline]
        pub fn $to(v: $Ty) -> Option<$Ty> {
            ::ptrkit_core::to(v)
        }

        #[doc = concat!("Returns the held `", stringify!($Ty), "`, or its zero value if `p` is empty.")]
        #[inline]
        pub fn $from(p: Option<$Ty>) -> $Ty {
            ::ptrkit_core::from_or_else(p, || $zero)
        }

        #[doc = concat!("Returns the held `", stringify!($Ty), "`.")]
        ///
        /// # Panics
        ///
        /// Panics if `p` is empty. Only for emptiness that is a programming error.
        #[inline]
        pub fn $must(p: Option<$Ty>) -> $Ty {
            ::ptrkit_core::must_from(p)
        }

        #[doc = concat!("Converts a sequence of `", stringify!($Ty), "` into a sequence of optionals.")]
        #[inline]
        pub fn $to_vec(vs: Option<::alloc::vec::Vec<$Ty>>) -> Option<::alloc::vec::Vec<Option<$Ty>>> {
            ::ptrkit_collections::to_vec(vs)
        }

        #[doc = concat!("Converts a sequence of optional `", stringify!($Ty), "` into a sequence of values.")]
        ///
        /// Empty elements become the zero value.
        #[inline]
        pub fn $from_vec(
            ps: Option<::alloc::vec::Vec<Option<$Ty>>>,
        ) -> Option<::alloc::vec::Vec<$Ty>> {
            ::ptrkit_collections::from_vec_or(ps, $zero)
        }

        #[doc = concat!("Converts a map of `", stringify!($Ty), "` into a map of optionals.")]
        #[inline]
        pub fn $to_map(
            vs: Option<::ptrkit_collections::HashMap<::alloc::string::String, $Ty>>,
        ) -> Option<::ptrkit_collections::HashMap<::alloc::string::String, Option<$Ty>>> {
            ::ptrkit_collections::to_map(vs)
        }

        #[doc = concat!("Converts a map of optional `", stringify!($Ty), "` into a map of values.")]
        ///
        /// Empty values become the zero value.
        #[inline]
        pub fn $from_map(
            ps: Option<::ptrkit_collections::HashMap<::alloc::string::String, Option<$Ty>>>,
        ) -> Option<::ptrkit_collections::HashMap<::alloc::string::String, $Ty>> {
            ::ptrkit_collections::from_map_or(ps, $zero)
        }
    };
}
