//! Structured log fields.
//!
//! A [`Field`] is an immutable key / typed value pair. The payload is a closed
//! sum type ([`FieldValue`]) whose discriminant is reported as a [`FieldType`].
//!
//! ## The Unknown type
//!
//! Two payload shapes report [`FieldType::Unknown`]:
//!
//! - [`FieldValue::Any`]: an arbitrary opaque value created with [`Field::any`].
//! - [`FieldValue::Nil`]: a typed absent value. Every nullable constructor
//!   (`Field::bool_opt`, `Field::int64_opt`, ...) produces this shape when given
//!   `None`, recording *which* type was absent. Backends can tell "explicitly
//!   absent `bool`" apart from "absent untyped value".
//!
//! ## Aliasing
//!
//! [`Field::binary`] copies its input. Stringer, error and opaque payloads are
//! held behind an `Arc` and shared by every clone of the field; they are
//! assumed immutable. Equality on those payloads is pointer identity.
//!
//! ## Stacks
//!
//! [`Field::stack`] and [`Field::stack_skip`] only record a skip count. Capturing
//! the trace is left to the backend at render time.

use core::any::{Any, TypeId};
use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Discriminant of a field payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    /// Opaque value, or a typed absent value.
    Unknown,
    /// Opaque binary blob.
    Binary,
    Bool,
    Complex128,
    Complex64,
    Duration,
    Float64,
    Float32,
    Int64,
    Int32,
    Int16,
    Int8,
    String,
    Time,
    Uint64,
    Uint32,
    Uint16,
    Uint8,
    Uintptr,
    /// A value rendered through its `Display` impl.
    Stringer,
    Error,
    /// A request to capture a stack trace.
    Stack,
}

/// Complex number payload.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Anything that can ride along in an Unknown-typed field.
pub trait Opaque: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> Opaque for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type information of an absent value.
#[derive(Debug, Copy, Clone)]
pub struct NilType {
    type_id: TypeId,
    type_name: &'static str,
}

impl NilType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Whether the absent value was of type `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for NilType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for NilType {}

/// Field payload.
#[derive(Clone)]
pub enum FieldValue {
    Any(Arc<dyn Opaque>),
    Nil(NilType),
    Binary(Vec<u8>),
    Bool(bool),
    Complex128(Complex<f64>),
    Complex64(Complex<f32>),
    Duration(Duration),
    Float64(f64),
    Float32(f32),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    String(String),
    Time(DateTime<Utc>),
    Uint64(u64),
    Uint32(u32),
    Uint16(u16),
    Uint8(u8),
    Uintptr(usize),
    Stringer(Arc<dyn fmt::Display + Send + Sync>),
    Error(Arc<dyn std::error::Error + Send + Sync>),
    /// Number of frames to skip from the top of the captured trace.
    Stack(usize),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Any(_) | FieldValue::Nil(_) => FieldType::Unknown,
            FieldValue::Binary(_) => FieldType::Binary,
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::Complex128(_) => FieldType::Complex128,
            FieldValue::Complex64(_) => FieldType::Complex64,
            FieldValue::Duration(_) => FieldType::Duration,
            FieldValue::Float64(_) => FieldType::Float64,
            FieldValue::Float32(_) => FieldType::Float32,
            FieldValue::Int64(_) => FieldType::Int64,
            FieldValue::Int32(_) => FieldType::Int32,
            FieldValue::Int16(_) => FieldType::Int16,
            FieldValue::Int8(_) => FieldType::Int8,
            FieldValue::String(_) => FieldType::String,
            FieldValue::Time(_) => FieldType::Time,
            FieldValue::Uint64(_) => FieldType::Uint64,
            FieldValue::Uint32(_) => FieldType::Uint32,
            FieldValue::Uint16(_) => FieldType::Uint16,
            FieldValue::Uint8(_) => FieldType::Uint8,
            FieldValue::Uintptr(_) => FieldType::Uintptr,
            FieldValue::Stringer(_) => FieldType::Stringer,
            FieldValue::Error(_) => FieldType::Error,
            FieldValue::Stack(_) => FieldType::Stack,
        }
    }

    /// Downcast an opaque payload. `None` for every other shape.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            FieldValue::Any(value) => (**value).as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Any(v) => f.debug_tuple("Any").field(v).finish(),
            FieldValue::Nil(t) => f.debug_tuple("Nil").field(&t.type_name()).finish(),
            FieldValue::Binary(v) => f.debug_tuple("Binary").field(v).finish(),
            FieldValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FieldValue::Complex128(v) => f.debug_tuple("Complex128").field(v).finish(),
            FieldValue::Complex64(v) => f.debug_tuple("Complex64").field(v).finish(),
            FieldValue::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            FieldValue::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            FieldValue::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            FieldValue::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            FieldValue::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            FieldValue::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            FieldValue::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            FieldValue::String(v) => f.debug_tuple("String").field(v).finish(),
            FieldValue::Time(v) => f.debug_tuple("Time").field(v).finish(),
            FieldValue::Uint64(v) => f.debug_tuple("Uint64").field(v).finish(),
            FieldValue::Uint32(v) => f.debug_tuple("Uint32").field(v).finish(),
            FieldValue::Uint16(v) => f.debug_tuple("Uint16").field(v).finish(),
            FieldValue::Uint8(v) => f.debug_tuple("Uint8").field(v).finish(),
            FieldValue::Uintptr(v) => f.debug_tuple("Uintptr").field(v).finish(),
            FieldValue::Stringer(v) => f.debug_tuple("Stringer").field(&v.to_string()).finish(),
            FieldValue::Error(v) => f.debug_tuple("Error").field(&v.to_string()).finish(),
            FieldValue::Stack(v) => f.debug_tuple("Stack").field(v).finish(),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        use FieldValue::*;
        match (self, other) {
            (Any(a), Any(b)) => Arc::ptr_eq(a, b),
            (Nil(a), Nil(b)) => a == b,
            (Binary(a), Binary(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Complex128(a), Complex128(b)) => a == b,
            (Complex64(a), Complex64(b)) => a == b,
            (Duration(a), Duration(b)) => a == b,
            (Float64(a), Float64(b)) => a == b,
            (Float32(a), Float32(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int16(a), Int16(b)) => a == b,
            (Int8(a), Int8(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Time(a), Time(b)) => a == b,
            (Uint64(a), Uint64(b)) => a == b,
            (Uint32(a), Uint32(b)) => a == b,
            (Uint16(a), Uint16(b)) => a == b,
            (Uint8(a), Uint8(b)) => a == b,
            (Uintptr(a), Uintptr(b)) => a == b,
            (Stringer(a), Stringer(b)) => Arc::ptr_eq(a, b),
            (Error(a), Error(b)) => Arc::ptr_eq(a, b),
            (Stack(a), Stack(b)) => a == b,
            _ => false,
        }
    }
}

/// A structured logging field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    fn new(key: impl Into<String>, value: FieldValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, FieldValue) {
        (self.key, self.value)
    }

    /// Unknown-typed field carrying an opaque value.
    pub fn any<T: Opaque>(key: impl Into<String>, value: T) -> Self {
        Self::new(key, FieldValue::Any(Arc::new(value)))
    }

    /// Unknown-typed field recording that a `T` was absent.
    pub fn nil<T: ?Sized + 'static>(key: impl Into<String>) -> Self {
        Self::new(key, FieldValue::Nil(NilType::of::<T>()))
    }

    /// Binary field. The bytes are copied; later changes to the caller's
    /// buffer do not affect the field.
    pub fn binary(key: impl Into<String>, value: &[u8]) -> Self {
        Self::new(key, FieldValue::Binary(value.to_vec()))
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldValue::String(value.into()))
    }

    pub fn string_opt(key: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => Self::string(key, value),
            None => Self::nil::<String>(key),
        }
    }

    /// Int64 field from a platform-sized integer.
    pub fn int(key: impl Into<String>, value: isize) -> Self {
        Self::new(key, FieldValue::Int64(value as i64))
    }

    /// Absent values are recorded as an absent `i64`, the widened type.
    pub fn int_opt(key: impl Into<String>, value: Option<isize>) -> Self {
        match value {
            Some(value) => Self::int(key, value),
            None => Self::nil::<i64>(key),
        }
    }

    /// Uint64 field from a platform-sized unsigned integer.
    pub fn uint(key: impl Into<String>, value: usize) -> Self {
        Self::new(key, FieldValue::Uint64(value as u64))
    }

    /// Absent values are recorded as an absent `u64`, the widened type.
    pub fn uint_opt(key: impl Into<String>, value: Option<usize>) -> Self {
        match value {
            Some(value) => Self::uint(key, value),
            None => Self::nil::<u64>(key),
        }
    }

    /// Stringer field. The value is shared, not copied.
    pub fn stringer<T>(key: impl Into<String>, value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::shared_stringer(key, Arc::new(value))
    }

    /// Stringer field over a value the caller already shares.
    pub fn shared_stringer(
        key: impl Into<String>,
        value: Arc<dyn fmt::Display + Send + Sync>,
    ) -> Self {
        Self::new(key, FieldValue::Stringer(value))
    }

    /// Error field under the key `"error"`.
    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::named_error("error", err)
    }

    pub fn named_error<E>(key: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::shared_error(key, Arc::new(err))
    }

    /// Error field over an error the caller already shares. Fields built from
    /// the same `Arc` compare equal.
    pub fn shared_error(
        key: impl Into<String>,
        err: Arc<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::new(key, FieldValue::Error(err))
    }

    /// Request a stack trace of the calling thread.
    pub fn stack(key: impl Into<String>) -> Self {
        Self::stack_skip(key, 0)
    }

    /// Request a stack trace, skipping `skip` frames from the top.
    pub fn stack_skip(key: impl Into<String>, skip: usize) -> Self {
        Self::new(key, FieldValue::Stack(skip))
    }
}

macro_rules! typed_constructors {
    ($($name:ident, $opt:ident, $ty:ty => $variant:ident;)*) => {
        impl Field {
            $(
                #[doc = concat!("`", stringify!($variant), "` field.")]
                pub fn $name(key: impl Into<String>, value: $ty) -> Self {
                    Self::new(key, FieldValue::$variant(value))
                }

                #[doc = concat!(
                    "`", stringify!($variant), "` field, or an Unknown field recording an absent `",
                    stringify!($ty), "` when `value` is `None`."
                )]
                pub fn $opt(key: impl Into<String>, value: Option<$ty>) -> Self {
                    match value {
                        Some(value) => Self::$name(key, value),
                        None => Self::nil::<$ty>(key),
                    }
                }
            )*
        }
    };
}

typed_constructors! {
    bool, bool_opt, bool => Bool;
    complex128, complex128_opt, Complex<f64> => Complex128;
    complex64, complex64_opt, Complex<f32> => Complex64;
    duration, duration_opt, Duration => Duration;
    float64, float64_opt, f64 => Float64;
    float32, float32_opt, f32 => Float32;
    int64, int64_opt, i64 => Int64;
    int32, int32_opt, i32 => Int32;
    int16, int16_opt, i16 => Int16;
    int8, int8_opt, i8 => Int8;
    time, time_opt, DateTime<Utc> => Time;
    uint64, uint64_opt, u64 => Uint64;
    uint32, uint32_opt, u32 => Uint32;
    uint16, uint16_opt, u16 => Uint16;
    uint8, uint8_opt, u8 => Uint8;
    uintptr, uintptr_opt, usize => Uintptr;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    struct HanBool(bool);

    impl fmt::Display for HanBool {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(if self.0 { "真" } else { "假" })
        }
    }

    fn assert_nil<T: 'static>(field: &Field) {
        assert_eq!(field.key(), "key");
        assert_eq!(field.field_type(), FieldType::Unknown);
        match field.value() {
            FieldValue::Nil(nil) => assert!(nil.is::<T>(), "recorded {}", nil.type_name()),
            other => panic!("expected a typed nil, got {other:?}"),
        }
    }

    #[test]
    fn accessors_expose_parts() {
        let f = Field::string("abc", "v");
        assert_eq!(f.key(), "abc");
        assert_eq!(f.field_type(), FieldType::String);
        assert_eq!(f.value(), &FieldValue::String("v".to_string()));
        assert_eq!(f.into_parts(), ("abc".to_string(), FieldValue::String("v".to_string())));
    }

    #[test]
    fn any_keeps_the_opaque_value() {
        let f = Field::any("key", vec![("a", 1)]);
        assert_eq!(f.field_type(), FieldType::Unknown);
        assert_eq!(f.value().downcast_ref::<Vec<(&'static str, i32)>>(), Some(&vec![("a", 1)]));
        assert_eq!(f.value().downcast_ref::<String>(), None);
        assert_eq!(f.clone(), f);
    }

    #[test]
    fn binary_copies_input() {
        let mut buf = vec![b'a', b'b', b'c'];
        let f = Field::binary("key", &buf);
        buf[0] = b'z';
        assert_eq!(f.field_type(), FieldType::Binary);
        assert_eq!(f.value(), &FieldValue::Binary(b"abc".to_vec()));
    }

    #[test]
    fn scalar_constructors_tag_their_type() {
        let now = Utc::now();
        let cases = [
            (Field::bool("key", true), FieldType::Bool),
            (Field::complex128("key", Complex::new(1.0, 2.0)), FieldType::Complex128),
            (Field::complex64("key", Complex::new(1.0, 2.0)), FieldType::Complex64),
            (Field::duration("key", Duration::from_secs(3)), FieldType::Duration),
            (Field::float64("key", 1.5), FieldType::Float64),
            (Field::float32("key", 1.5), FieldType::Float32),
            (Field::int("key", -3), FieldType::Int64),
            (Field::int64("key", -3), FieldType::Int64),
            (Field::int32("key", -3), FieldType::Int32),
            (Field::int16("key", -3), FieldType::Int16),
            (Field::int8("key", -3), FieldType::Int8),
            (Field::string("key", "v"), FieldType::String),
            (Field::time("key", now), FieldType::Time),
            (Field::uint("key", 3), FieldType::Uint64),
            (Field::uint64("key", 3), FieldType::Uint64),
            (Field::uint32("key", 3), FieldType::Uint32),
            (Field::uint16("key", 3), FieldType::Uint16),
            (Field::uint8("key", 3), FieldType::Uint8),
            (Field::uintptr("key", 3), FieldType::Uintptr),
            (Field::stack("key"), FieldType::Stack),
        ];
        for (field, want) in cases {
            assert_eq!(field.key(), "key");
            assert_eq!(field.field_type(), want, "{field:?}");
        }
    }

    #[test]
    fn int_and_uint_widen() {
        assert_eq!(Field::int("key", -7), Field::int64("key", -7));
        assert_eq!(Field::uint("key", 7), Field::uint64("key", 7));
    }

    #[test]
    fn nullable_constructors_with_none_record_the_type() {
        assert_nil::<bool>(&Field::bool_opt("key", None));
        assert_nil::<Complex<f64>>(&Field::complex128_opt("key", None));
        assert_nil::<Complex<f32>>(&Field::complex64_opt("key", None));
        assert_nil::<Duration>(&Field::duration_opt("key", None));
        assert_nil::<f64>(&Field::float64_opt("key", None));
        assert_nil::<f32>(&Field::float32_opt("key", None));
        assert_nil::<i64>(&Field::int_opt("key", None));
        assert_nil::<i64>(&Field::int64_opt("key", None));
        assert_nil::<i32>(&Field::int32_opt("key", None));
        assert_nil::<i16>(&Field::int16_opt("key", None));
        assert_nil::<i8>(&Field::int8_opt("key", None));
        assert_nil::<String>(&Field::string_opt("key", None));
        assert_nil::<DateTime<Utc>>(&Field::time_opt("key", None));
        assert_nil::<u64>(&Field::uint_opt("key", None));
        assert_nil::<u64>(&Field::uint64_opt("key", None));
        assert_nil::<u32>(&Field::uint32_opt("key", None));
        assert_nil::<u16>(&Field::uint16_opt("key", None));
        assert_nil::<u8>(&Field::uint8_opt("key", None));
        assert_nil::<usize>(&Field::uintptr_opt("key", None));
    }

    #[test]
    fn typed_nils_differ_by_type() {
        assert_ne!(Field::bool_opt("key", None), Field::int8_opt("key", None));
        assert_eq!(Field::bool_opt("key", None), Field::nil::<bool>("key"));
    }

    #[test]
    fn nullable_constructors_with_some_delegate() {
        let now = Utc::now();
        let d = Duration::from_millis(250);
        assert_eq!(Field::bool_opt("key", Some(true)), Field::bool("key", true));
        assert_eq!(
            Field::complex128_opt("key", Some(Complex::new(1.0, 2.0))),
            Field::complex128("key", Complex::new(1.0, 2.0))
        );
        assert_eq!(
            Field::complex64_opt("key", Some(Complex::new(1.0, 2.0))),
            Field::complex64("key", Complex::new(1.0, 2.0))
        );
        assert_eq!(Field::duration_opt("key", Some(d)), Field::duration("key", d));
        assert_eq!(Field::float64_opt("key", Some(0.5)), Field::float64("key", 0.5));
        assert_eq!(Field::float32_opt("key", Some(0.5)), Field::float32("key", 0.5));
        assert_eq!(Field::int_opt("key", Some(9)), Field::int("key", 9));
        assert_eq!(Field::int64_opt("key", Some(9)), Field::int64("key", 9));
        assert_eq!(Field::int32_opt("key", Some(9)), Field::int32("key", 9));
        assert_eq!(Field::int16_opt("key", Some(9)), Field::int16("key", 9));
        assert_eq!(Field::int8_opt("key", Some(9)), Field::int8("key", 9));
        assert_eq!(Field::string_opt("key", Some("v".to_string())), Field::string("key", "v"));
        assert_eq!(Field::time_opt("key", Some(now)), Field::time("key", now));
        assert_eq!(Field::uint_opt("key", Some(9)), Field::uint("key", 9));
        assert_eq!(Field::uint64_opt("key", Some(9)), Field::uint64("key", 9));
        assert_eq!(Field::uint32_opt("key", Some(9)), Field::uint32("key", 9));
        assert_eq!(Field::uint16_opt("key", Some(9)), Field::uint16("key", 9));
        assert_eq!(Field::uint8_opt("key", Some(9)), Field::uint8("key", 9));
        assert_eq!(Field::uintptr_opt("key", Some(9)), Field::uintptr("key", 9));
    }

    #[test]
    fn stringer_renders_lazily_through_display() {
        let f = Field::stringer("key", HanBool(true));
        assert_eq!(f.field_type(), FieldType::Stringer);
        match f.value() {
            FieldValue::Stringer(s) => assert_eq!(s.to_string(), "真"),
            other => panic!("expected a stringer, got {other:?}"),
        }
    }

    #[test]
    fn shared_payloads_compare_by_identity() {
        let f = Field::stringer("key", HanBool(false));
        assert_eq!(f.clone(), f);
        assert_ne!(Field::stringer("key", HanBool(false)), f);
    }

    #[test]
    fn error_uses_the_error_key() {
        let f = Field::error(Boom);
        assert_eq!(f.key(), "error");
        assert_eq!(f.field_type(), FieldType::Error);

        let named = Field::named_error("cause", Boom);
        assert_eq!(named.key(), "cause");
        assert_eq!(format!("{:?}", named.value()), "Error(\"boom\")");
    }

    #[test]
    fn shared_payloads_are_not_rewrapped() {
        let err: Arc<dyn std::error::Error + Send + Sync> = Arc::new(Boom);
        let a = Field::shared_error("error", err.clone());
        let b = Field::shared_error("error", err.clone());
        assert_eq!(a, b);
        match a.value() {
            FieldValue::Error(inner) => assert!(Arc::ptr_eq(inner, &err)),
            other => panic!("expected an error, got {other:?}"),
        }

        let text: Arc<dyn fmt::Display + Send + Sync> = Arc::new(HanBool(true));
        assert_eq!(
            Field::shared_stringer("key", text.clone()),
            Field::shared_stringer("key", text)
        );
    }

    #[test]
    fn stack_records_only_the_skip_count() {
        assert_eq!(Field::stack("trace").value(), &FieldValue::Stack(0));
        assert_eq!(Field::stack_skip("trace", 2).value(), &FieldValue::Stack(2));
    }

    #[test]
    fn different_shapes_never_compare_equal() {
        assert_ne!(Field::int64("key", 1), Field::uint64("key", 1));
        assert_ne!(Field::int64("key", 1), Field::int64("other", 1));
    }

    proptest! {
        /// Property: a binary field keeps its contents after the source buffer changes.
        #[test]
        fn binary_is_isolated_from_source(
            mut bytes in prop::collection::vec(any::<u8>(), 1..64),
            index in any::<prop::sample::Index>(),
        ) {
            let snapshot = bytes.clone();
            let f = Field::binary("key", &bytes);
            let i = index.index(bytes.len());
            bytes[i] = bytes[i].wrapping_add(1);
            prop_assert_eq!(f.value(), &FieldValue::Binary(snapshot));
        }
    }
}
