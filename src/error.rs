//! When constructing, growing, or parsing a big integer goes wrong.

use crate::lib::*;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when allocating,
/// parsing, or operating on a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint_core::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed text at which the error was
    /// detected.
    ///
    /// Errors that do not come from parsing, such as allocation failures,
    /// report index 0.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Allocation` - the limb buffer could not be obtained or grown
    /// - `Category::Size` - a requested capacity is beyond what can be addressed
    /// - `Category::Format` - text that is not a signed decimal integer
    /// - `Category::Null` - an operand whose buffer has been released
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::AllocationFailure(_) => Category::Allocation,
            ErrorCode::CapacityOverflow(_) => Category::Size,
            ErrorCode::EmptyInput | ErrorCode::InvalidDigit(_) | ErrorCode::MissingDigits => {
                Category::Format
            }
            ErrorCode::Released => Category::Null,
        }
    }

    /// Returns true if this error was caused by the allocator refusing to
    /// provide a limb buffer.
    ///
    /// The value the operation was writing to is left exactly as it was, so
    /// callers may retry with a smaller capacity or give up.
    pub fn is_allocation(&self) -> bool {
        self.classify() == Category::Allocation
    }

    /// Returns true if this error was caused by requesting more limbs than a
    /// buffer can address.
    pub fn is_size(&self) -> bool {
        self.classify() == Category::Size
    }

    /// Returns true if this error was caused by text that is not an optionally
    /// signed run of decimal digits.
    pub fn is_format(&self) -> bool {
        self.classify() == Category::Format
    }

    /// Returns true if this error was caused by an operand that has been
    /// released.
    pub fn is_null(&self) -> bool {
        self.classify() == Category::Null
    }
}

/// Categorizes the cause of a `bigint_core::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The limb buffer could not be allocated or grown.
    Allocation,

    /// The requested capacity does not fit in the address space.
    Size,

    /// The input text was not a valid signed decimal integer.
    Format,

    /// An operand had no backing buffer because it was released.
    Null,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible errors that can occur when operating on a
/// big integer.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The allocator could not provide the requested limb buffer.
    AllocationFailure(TryReserveError),

    /// A buffer of this many limbs cannot be addressed.
    CapacityOverflow(usize),

    /// The input text was empty.
    EmptyInput,

    /// The input text contained a character other than a decimal digit,
    /// outside of an optional leading `-`.
    InvalidDigit(char),

    /// The input text was a `-` with no digits following it.
    MissingDigits,

    /// The operand's buffer has been released.
    Released,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::AllocationFailure(_) => f.write_str("AllocationFailure"),
            ErrorCode::CapacityOverflow(limbs) => {
                f.debug_tuple("CapacityOverflow").field(limbs).finish()
            }
            ErrorCode::EmptyInput => f.write_str("EmptyInput"),
            ErrorCode::InvalidDigit(c) => f.debug_tuple("InvalidDigit").field(c).finish(),
            ErrorCode::MissingDigits => f.write_str("MissingDigits"),
            ErrorCode::Released => f.write_str("Released"),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::AllocationFailure(ref err) => Display::fmt(err, f),
            ErrorCode::CapacityOverflow(limbs) => {
                write!(f, "capacity of {} limbs exceeds the addressable size", limbs)
            }
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(c) => write!(f, "invalid digit {:?}", c),
            ErrorCode::MissingDigits => f.write_str("expected digits after `-`"),
            ErrorCode::Released => f.write_str("operand has been released"),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }

    #[cold]
    pub(crate) fn alloc(err: TryReserveError) -> Self {
        Error::syntax(ErrorCode::AllocationFailure(err), 0)
    }

    #[cold]
    pub(crate) fn capacity_overflow(limbs: usize) -> Self {
        Error::syntax(ErrorCode::CapacityOverflow(limbs), 0)
    }

    #[cold]
    pub(crate) fn released() -> Self {
        Error::syntax(ErrorCode::Released, 0)
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.err.code {
            ErrorCode::AllocationFailure(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::EmptyInput | ErrorCode::InvalidDigit(_) | ErrorCode::MissingDigits => {
                write!(f, "{} at index {}", self.code, self.index)
            }
            _ => Display::fmt(&self.code, f),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, index: {})",
            self.err.code.to_string(),
            self.err.index
        )
    }
}
