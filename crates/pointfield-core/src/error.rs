use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A numeric parameter arrived with a non-numeric type.
    InvalidArgument { param: &'static str },
    /// A store was asked for a logical count larger than its capacity.
    CountExceedsMax { count: usize, max: usize },
    /// A checked accessor was given an index past the allocated capacity.
    IndexOutOfBounds { index: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { param } => write!(f, "{param} value must be a number"),
            Error::CountExceedsMax { count, max } => write!(
                f,
                "count value cannot be greater than max value ({count} > {max})"
            ),
            Error::IndexOutOfBounds { index, max } => {
                write!(f, "index {index} is out of bounds for capacity {max}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Accept a dynamically typed value only if it is a number.
///
/// `value` is what a loosely typed host hands over after an `as_f64`-style
/// probe: `None` means the value was not a number at all. `NaN` is a number
/// and passes through.
pub fn number(value: Option<f64>, param: &'static str) -> Result<f32> {
    value
        .map(|v| v as f32)
        .ok_or(Error::InvalidArgument { param })
}

/// Like [`number`], for parameters used as a count or index.
pub fn index(value: Option<f64>, param: &'static str) -> Result<usize> {
    match value {
        Some(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as usize),
        _ => Err(Error::InvalidArgument { param }),
    }
}

/// Largest capacity accepted from an untyped host.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Like [`index`], for a value that sizes an allocation. Anything above
/// [`MAX_CAPACITY`] fails with `CountExceedsMax` before memory is requested.
pub fn capacity(value: Option<f64>, param: &'static str) -> Result<usize> {
    let n = index(value, param)?;
    if n > MAX_CAPACITY {
        return Err(Error::CountExceedsMax { count: n, max: MAX_CAPACITY });
    }
    Ok(n)
}

/// Reject a logical count that does not fit the allocated capacity.
#[inline]
pub(crate) fn check_count(count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(Error::CountExceedsMax { count, max });
    }
    Ok(())
}
