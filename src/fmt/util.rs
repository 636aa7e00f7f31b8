/// A simple formatter for converting the components of a time of day to
/// ASCII byte strings.
///
/// This avoids going through the formatting machinery for every `{:02}` in
/// the printer. Only non-negative values are supported since no component of
/// a time of day is ever negative.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_digits: u8,
}

impl DecimalFormatter {
    /// Creates a formatter without any padding.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_digits: 0 }
    }

    /// Renders `value` as ASCII decimal digits.
    pub(crate) const fn format(&self, value: u32) -> Decimal {
        Decimal::new(self, value)
    }

    /// The minimum number of digits that this number should be formatted
    /// with. If the number would have fewer digits than this, then it is
    /// padded out with zeros until the minimum is reached.
    ///
    /// Anything above ten digits, the width of `u32::MAX`, is treated as
    /// ten.
    pub(crate) const fn padding(self, mut digits: u8) -> DecimalFormatter {
        if digits > Decimal::MAX_U32_DIGITS {
            digits = Decimal::MAX_U32_DIGITS;
        }
        DecimalFormatter { minimum_digits: digits }
    }
}

/// The rendered digits of a number, right-aligned in a fixed buffer.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_U32_DIGITS as usize],
    start: u8,
}

impl Decimal {
    /// Discovered via `u32::MAX.to_string().len()`.
    const MAX_U32_DIGITS: u8 = 10;

    /// Writes the digits of `value` from the end of the buffer backwards.
    const fn new(formatter: &DecimalFormatter, mut value: u32) -> Decimal {
        let mut decimal = Decimal {
            buf: [b'0'; Self::MAX_U32_DIGITS as usize],
            start: Self::MAX_U32_DIGITS,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        // The buffer is already filled with zeros, so padding is just a
        // matter of moving the start position back.
        while decimal.len() < formatter.minimum_digits {
            decimal.start -= 1;
        }
        decimal
    }

    /// Returns the total number of ASCII bytes used to represent this
    /// decimal number.
    const fn len(&self) -> u8 {
        Self::MAX_U32_DIGITS - self.start
    }

    /// The rendered digits as a `&str`.
    pub(crate) fn as_str(&self) -> &str {
        let digits = &self.buf[usize::from(self.start)..];
        // SAFETY: `self.buf` only ever holds the bytes `b'0'..=b'9'`, so
        // every suffix of it is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(digits) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        let x = DecimalFormatter::new().format(u32::MAX);
        assert_eq!(x.as_str(), "4294967295");

        let x = DecimalFormatter::new().format(0);
        assert_eq!(x.as_str(), "0");

        let x = DecimalFormatter::new().padding(2).format(0);
        assert_eq!(x.as_str(), "00");

        let x = DecimalFormatter::new().padding(2).format(7);
        assert_eq!(x.as_str(), "07");

        let x = DecimalFormatter::new().padding(2).format(59);
        assert_eq!(x.as_str(), "59");

        let x = DecimalFormatter::new().padding(3).format(9);
        assert_eq!(x.as_str(), "009");

        // Padding never truncates.
        let x = DecimalFormatter::new().padding(2).format(123);
        assert_eq!(x.as_str(), "123");

        let x = DecimalFormatter::new().padding(255).format(1);
        assert_eq!(x.as_str(), "0000000001");
    }
}
