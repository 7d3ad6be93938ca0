#![feature(error_generic_member_access)]
#![deny(missing_docs)]

//! Error handling for the fbmeta crates.
//!
//! Every error captures a [`Backtrace`] at construction. Use [`fbmeta_err!`] to build one and
//! [`fbmeta_bail!`] to return one early.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

/// A string type used for error messages, borrowed when static.
#[derive(Debug)]
pub struct ErrString(Cow<'static, str>);

impl<T> From<T> for ErrString
where
    T: Into<Cow<'static, str>>,
{
    fn from(msg: T) -> Self {
        Self(msg.into())
    }
}

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The top-level error type for schema metadata handling.
#[derive(thiserror::Error)]
#[non_exhaustive]
pub enum FbmetaError {
    /// A value was outside the permitted range `[start, stop)`.
    #[error("index {0} out of bounds from {1} to {2}\nBacktrace:\n{3}")]
    OutOfBounds(usize, usize, usize, Backtrace),
    /// A caller supplied an invalid argument.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidArgument(ErrString, Backtrace),
    /// Serialized metadata decoded to an invalid value.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidSerde(ErrString, Backtrace),
    /// A value of one type was expected but another was found.
    #[error("expected type: {0} but instead got {1}\nBacktrace:\n{2}")]
    MismatchedTypes(ErrString, ErrString, Backtrace),
    /// An internal assertion failed.
    #[error("{0}\nBacktrace:\n{1}")]
    AssertionFailed(ErrString, Backtrace),
    /// An error wrapped with an additional message.
    #[error("{0}: {1}")]
    Context(ErrString, Box<FbmetaError>),
    /// The flatbuffers verifier rejected a buffer.
    #[cfg(feature = "flatbuffers")]
    #[error("{0}\nBacktrace:\n{1}")]
    FlatBuffers(flatbuffers::InvalidFlatbuffer, Backtrace),
    /// An error raised by the Arrow schema crate.
    #[error("{0}\nBacktrace:\n{1}")]
    Arrow(arrow_schema::ArrowError, Backtrace),
}

impl FbmetaError {
    /// Wrap this error with an additional message.
    pub fn with_context<T: Into<ErrString>>(self, msg: T) -> Self {
        FbmetaError::Context(msg.into(), Box::new(self))
    }
}

impl Debug for FbmetaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A type alias for results that return a [`FbmetaError`].
pub type FbmetaResult<T> = Result<T, FbmetaError>;

/// Construct a new [`FbmetaError`], capturing a backtrace.
///
/// Without a variant prefix the error is an [`FbmetaError::InvalidArgument`].
#[macro_export]
macro_rules! fbmeta_err {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::FbmetaError::OutOfBounds($idx, $start, $stop, Backtrace::capture())
        )
    }};
    (MismatchedTypes: $expected:literal, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::FbmetaError::MismatchedTypes($expected.into(), $actual.to_string().into(), Backtrace::capture())
        )
    }};
    (MismatchedTypes: $expected:expr, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::FbmetaError::MismatchedTypes($expected.to_string().into(), $actual.to_string().into(), Backtrace::capture())
        )
    }};
    (Context: $msg:literal, $err:expr) => {{
        $crate::__private::must_use(
            $crate::FbmetaError::Context($msg.into(), Box::new($err))
        )
    }};
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::FbmetaError::$variant(format!($fmt, $($arg),*).into(), Backtrace::capture())
        )
    }};
    ($variant:ident: $err:expr $(,)?) => {
        $crate::__private::must_use(
            $crate::FbmetaError::$variant($err)
        )
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fbmeta_err!(InvalidArgument: $fmt, $($arg),*)
    };
}

/// Return early with an [`FbmetaError`] built by [`fbmeta_err!`].
#[macro_export]
macro_rules! fbmeta_bail {
    ($($tt:tt)+) => {
        return Err($crate::fbmeta_err!($($tt)+))
    };
}

/// Panic with an [`FbmetaError`], either given directly or built by [`fbmeta_err!`].
#[macro_export]
macro_rules! fbmeta_panic {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        $crate::fbmeta_panic!($crate::fbmeta_err!(OutOfBounds: $idx, $start, $stop))
    }};
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fbmeta_panic!($crate::fbmeta_err!($variant: $fmt, $($arg),*))
    };
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let err: $crate::FbmetaError = $err;
        panic!("{}", err.with_context(format!($fmt, $($arg),*)))
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fbmeta_panic!($crate::fbmeta_err!($fmt, $($arg),*))
    };
    ($err:expr) => {{
        let err: $crate::FbmetaError = $err;
        panic!("{}", err)
    }};
}

/// Unwrap a result or panic with the error message.
pub trait FbmetaUnwrap {
    /// The type of the unwrapped value.
    type Output;

    /// Returns the value of the result if it is Ok, otherwise panics with the error.
    fn fbmeta_unwrap(self) -> Self::Output;
}

impl<T, E> FbmetaUnwrap for Result<T, E>
where
    E: Into<FbmetaError>,
{
    type Output = T;

    #[inline(always)]
    fn fbmeta_unwrap(self) -> Self::Output {
        self.map_err(|err| err.into())
            .unwrap_or_else(|err| fbmeta_panic!(err))
    }
}

/// Unwrap a result or option, panicking with the given message on failure.
pub trait FbmetaExpect {
    /// The type of the unwrapped value.
    type Output;

    /// Returns the contained value, or panics with `msg` attached as context.
    fn fbmeta_expect(self, msg: &str) -> Self::Output;
}

impl<T, E> FbmetaExpect for Result<T, E>
where
    E: Into<FbmetaError>,
{
    type Output = T;

    #[inline(always)]
    fn fbmeta_expect(self, msg: &str) -> Self::Output {
        self.map_err(|err| err.into())
            .unwrap_or_else(|e| fbmeta_panic!(e.with_context(msg.to_string())))
    }
}

impl<T> FbmetaExpect for Option<T> {
    type Output = T;

    #[inline(always)]
    fn fbmeta_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|| {
            let err = FbmetaError::AssertionFailed(msg.to_string().into(), Backtrace::capture());
            fbmeta_panic!(err)
        })
    }
}

#[cfg(feature = "flatbuffers")]
impl From<flatbuffers::InvalidFlatbuffer> for FbmetaError {
    fn from(value: flatbuffers::InvalidFlatbuffer) -> Self {
        FbmetaError::FlatBuffers(value, Backtrace::capture())
    }
}

impl From<arrow_schema::ArrowError> for FbmetaError {
    fn from(value: arrow_schema::ArrowError) -> Self {
        FbmetaError::Arrow(value, Backtrace::capture())
    }
}

#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    pub const fn must_use(error: crate::FbmetaError) -> crate::FbmetaError {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bail_on_negative(value: i32) -> FbmetaResult<i32> {
        if value < 0 {
            fbmeta_bail!("negative value {value}");
        }
        Ok(value)
    }

    #[test]
    fn bail_formats_invalid_argument() {
        let err = bail_on_negative(-3).unwrap_err();
        assert!(matches!(err, FbmetaError::InvalidArgument(..)));
        assert!(err.to_string().starts_with("negative value -3"));
    }

    #[test]
    fn variant_prefix_selects_variant() {
        let err = fbmeta_err!(InvalidSerde: "scale {} out of range", 300);
        assert!(matches!(err, FbmetaError::InvalidSerde(..)));
        assert!(err.to_string().starts_with("scale 300 out of range"));

        let err = fbmeta_err!(OutOfBounds: 80, 0, 77);
        assert!(err.to_string().starts_with("index 80 out of bounds from 0 to 77"));
    }

    #[test]
    fn context_prefixes_message() {
        let err = fbmeta_err!("inner").with_context("reading decimal");
        assert!(err.to_string().starts_with("reading decimal: inner"));
    }

    #[test]
    fn expect_passes_through_values() {
        assert_eq!(Some(7).fbmeta_expect("present"), 7);
        assert_eq!(bail_on_negative(5).fbmeta_expect("non-negative"), 5);
        assert_eq!(bail_on_negative(6).fbmeta_unwrap(), 6);
    }

    #[test]
    #[should_panic(expected = "missing scale")]
    fn expect_on_none_panics() {
        let value: Option<i32> = None;
        value.fbmeta_expect("missing scale");
    }

    #[test]
    #[should_panic(expected = "decoding: negative value -1")]
    fn expect_on_err_panics_with_context() {
        bail_on_negative(-1).fbmeta_expect("decoding");
    }

    #[cfg(feature = "flatbuffers")]
    #[test]
    fn converts_invalid_flatbuffer() {
        let invalid = flatbuffers::root::<&str>(&[1, 2]).unwrap_err();
        let err = FbmetaError::from(invalid);
        assert!(matches!(err, FbmetaError::FlatBuffers(..)));
    }
}
