use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::digit::Digit;
use crate::error::Error;

/// Number system a [`Bigint`](crate::Bigint) is rendered in.
///
/// Only [`OutputFormat::Binary`] is implemented; the other tags are reserved
/// and rendering with them reports [`Error::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Binary,
    Decimal,
    Hexadecimal,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Binary => "binary",
            OutputFormat::Decimal => "decimal",
            OutputFormat::Hexadecimal => "hex",
        }
    }
    pub fn is_supported(&self) -> bool {
        matches!(self, OutputFormat::Binary)
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "decimal" | "dec" => Ok(OutputFormat::Decimal),
            "hex" | "hexadecimal" => Ok(OutputFormat::Hexadecimal),
            other => Err(Error::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Renders a sign and a canonical digit sequence (least-significant first) as
/// binary digit groups: the top digit without padding, every other digit
/// zero-padded to the digit width.
pub(crate) fn to_binary_string<D: Digit>(negative: bool, digits: &[D]) -> String {
    let top = match digits.last() {
        Some(top) => *top,
        None => return String::from("0"),
    };
    if digits.len() == 1 && top.is_zero() {
        return String::from("0");
    }

    let width = D::BITS as usize;
    let mut s = String::with_capacity(digits.len() * width + 1);
    if negative {
        s.push('-');
    }
    // Writing into a String cannot fail.
    let _ = write!(s, "{:b}", top.widen());
    for digit in digits.iter().rev().skip(1) {
        let _ = write!(s, "{:0width$b}", digit.widen(), width = width);
    }
    s
}

#[test]
fn test_format_tags() {
    assert_eq!(OutputFormat::default(), OutputFormat::Binary);
    assert_eq!("binary".parse::<OutputFormat>(), Ok(OutputFormat::Binary));
    assert_eq!("dec".parse::<OutputFormat>(), Ok(OutputFormat::Decimal));
    assert_eq!("hex".parse::<OutputFormat>(), Ok(OutputFormat::Hexadecimal));
    assert_eq!(
        "octal".parse::<OutputFormat>(),
        Err(Error::InvalidOutputFormat("octal".to_string()))
    );
    assert_eq!(OutputFormat::Hexadecimal.to_string(), "hex");
    assert!(!OutputFormat::Decimal.is_supported());
}

#[test]
fn test_to_binary_string() {
    assert_eq!(to_binary_string::<u8>(false, &[0]), "0");
    assert_eq!(to_binary_string::<u8>(false, &[5]), "101");
    assert_eq!(to_binary_string::<u8>(true, &[5]), "-101");
    assert_eq!(to_binary_string::<u8>(false, &[1, 1]), "100000001");
    assert_eq!(to_binary_string::<u8>(false, &[0xff, 0x00, 0x2]), "100000000011111111");
    assert_eq!(to_binary_string::<u32>(false, &[3, 1]), format!("1{:032b}", 3));
}
