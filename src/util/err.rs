/// Converts errors from their error type (of the submodule) to that of
/// a waypath::Error variant, or of another enclosing error enum when a
/// target type is named.
///
/// ```rust,ignore
/// use waypath::geo::error::GeoError;
/// waypath::impl_err!(GeoError, Geo);
/// waypath::impl_err!(GeoError, SegmentError, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
        ($from:ty, $to:ty, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    <$to>::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
