use std::str::FromStr;

/// A balanced-ternary signal value.
///
/// A trit is one of exactly three symbols: `-1`, `0`, or `+1`. The ordering
/// `Neg < Zero < Pos` is the one used by the `TAND`/`TOR` operators, which
/// are defined as `min` and `max` over this ordering.
///
/// The enum is the only representation of a trit past the lexer boundary;
/// raw integers only appear at the edges (literal scanning, seeding an
/// environment from caller-supplied values) and are checked there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trit {
    /// The negative value, written `-1`.
    Neg,
    /// The zero value, written `0`.
    Zero,
    /// The positive value, written `+1`.
    Pos,
}

impl Trit {
    /// Returns the trit as a signed integer in `{-1, 0, +1}`.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::trit::Trit;
    ///
    /// assert_eq!(Trit::Neg.as_i8(), -1);
    /// assert_eq!(Trit::Zero.as_i8(), 0);
    /// assert_eq!(Trit::Pos.as_i8(), 1);
    /// ```
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Neg => -1,
            Self::Zero => 0,
            Self::Pos => 1,
        }
    }

    /// Returns the trit's row/column index into a 3x3 operator table, with
    /// `Neg` at 0, `Zero` at 1 and `Pos` at 2.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Neg => 0,
            Self::Zero => 1,
            Self::Pos => 2,
        }
    }
}

/// Error returned when an integer or string is not a legal trit value.
///
/// Carries the offending value's textual form for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTrit(pub String);

impl std::fmt::Display for InvalidTrit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid trit value {}, expected -1, 0, or +1", self.0)
    }
}

impl std::error::Error for InvalidTrit {}

impl TryFrom<i8> for Trit {
    type Error = InvalidTrit;

    /// Converts an integer to a trit, accepting only `-1`, `0` and `+1`.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::trit::Trit;
    ///
    /// assert_eq!(Trit::try_from(-1), Ok(Trit::Neg));
    /// assert!(Trit::try_from(2).is_err());
    /// ```
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Neg),
            0 => Ok(Self::Zero),
            1 => Ok(Self::Pos),
            other => Err(InvalidTrit(other.to_string())),
        }
    }
}

impl FromStr for Trit {
    type Err = InvalidTrit;

    /// Parses the exact literal spellings `-1`, `0` and `+1`.
    ///
    /// Anything else, including `1`, `01` or `+0`, is rejected; the lexer
    /// relies on this to flag malformed trit literals.
    ///
    /// ## Example
    /// ```
    /// use trine::interpreter::trit::Trit;
    ///
    /// assert_eq!("+1".parse(), Ok(Trit::Pos));
    /// assert!("01".parse::<Trit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-1" => Ok(Self::Neg),
            "0" => Ok(Self::Zero),
            "+1" => Ok(Self::Pos),
            other => Err(InvalidTrit(other.to_string())),
        }
    }
}

impl std::fmt::Display for Trit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Neg => "-1",
            Self::Zero => "0",
            Self::Pos => "+1",
        };
        write!(f, "{symbol}")
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    /// Sign inversion: `-1` and `+1` swap, `0` is fixed. This is the `TNOT`
    /// operator.
    fn neg(self) -> Self {
        match self {
            Self::Neg => Self::Pos,
            Self::Zero => Self::Zero,
            Self::Pos => Self::Neg,
        }
    }
}
