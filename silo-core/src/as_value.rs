use crate::{Error, Result, Value};
use rust_decimal::Decimal;
use std::any;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// representation backing row decoding.
///
/// Results delivered over a text protocol arrive as varchar regardless of the
/// column type, so numeric and boolean targets also accept `Value::Varchar`
/// and parse its content.
pub trait AsValue: Sized {
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn mismatch<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {:?} to {}",
        value,
        any::type_name::<T>()
    ))
}

fn parse_failure<T>(value: &str) -> Error {
    Error::msg(format!(
        "Cannot parse `{}` as {}",
        value,
        any::type_name::<T>()
    ))
}

fn out_of_range<T>(value: i64) -> Error {
    Error::msg(format!(
        "Value `{}` is out of range for {}",
        value,
        any::type_name::<T>()
    ))
}

impl AsValue for bool {
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Int16(Some(v)) => Ok(v != 0),
            Value::Int32(Some(v)) => Ok(v != 0),
            Value::Int64(Some(v)) => Ok(v != 0),
            Value::Varchar(Some(v)) => match v.trim().to_ascii_lowercase().as_str() {
                "t" | "true" | "1" | "yes" | "on" => Ok(true),
                "f" | "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(parse_failure::<Self>(&v)),
            },
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

macro_rules! as_value_integer {
    ($type:ty, $variant:ident) => {
        impl AsValue for $type {
            fn as_value(self) -> Value {
                Value::$variant(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Int16(Some(v)) => {
                        v.try_into().map_err(|_| out_of_range::<Self>(v as i64))
                    }
                    Value::Int32(Some(v)) => {
                        v.try_into().map_err(|_| out_of_range::<Self>(v as i64))
                    }
                    Value::Int64(Some(v)) => v.try_into().map_err(|_| out_of_range::<Self>(v)),
                    Value::Varchar(Some(v)) => {
                        v.trim().parse().map_err(|_| parse_failure::<Self>(&v))
                    }
                    v => Err(mismatch::<Self>(&v)),
                }
            }
        }
    };
}
as_value_integer!(i16, Int16);
as_value_integer!(i32, Int32);
as_value_integer!(i64, Int64);

impl AsValue for f32 {
    fn as_value(self) -> Value {
        Value::Float32(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float32(Some(v)) => Ok(v),
            Value::Int16(Some(v)) => Ok(v as f32),
            Value::Int32(Some(v)) => Ok(v as f32),
            Value::Varchar(Some(v)) => v.trim().parse().map_err(|_| parse_failure::<Self>(&v)),
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

impl AsValue for f64 {
    fn as_value(self) -> Value {
        Value::Float64(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float64(Some(v)) => Ok(v),
            Value::Float32(Some(v)) => Ok(v as f64),
            Value::Int16(Some(v)) => Ok(v as f64),
            Value::Int32(Some(v)) => Ok(v as f64),
            Value::Int64(Some(v)) => Ok(v as f64),
            Value::Varchar(Some(v)) => v.trim().parse().map_err(|_| parse_failure::<Self>(&v)),
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

impl AsValue for Decimal {
    fn as_value(self) -> Value {
        Value::Decimal(Some(self), 0, 0)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v), ..) => Ok(v),
            Value::Int16(Some(v)) => Ok(v.into()),
            Value::Int32(Some(v)) => Ok(v.into()),
            Value::Int64(Some(v)) => Ok(v.into()),
            Value::Varchar(Some(v)) => v.trim().parse().map_err(|_| parse_failure::<Self>(&v)),
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            Value::Char(Some(v)) => Ok(v.to_string()),
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::try_from_value(value).map(Some)
    }
}
