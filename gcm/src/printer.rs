/*++

Licensed under the Apache-2.0 license.

File Name:

    printer.rs

Abstract:

    File contains support routines and macros to print test progress

--*/
use core::convert::Infallible;
use ufmt::{uDisplay, uWrite};

#[derive(Default)]
pub struct Printer;

impl uWrite for Printer {
    type Error = Infallible;

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(not(feature = "std"))]
    #[inline(never)]
    fn write_str(&mut self, _str: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(feature = "std")]
    fn write_str(&mut self, str: &str) -> Result<(), Self::Error> {
        print!("{str}");
        Ok(())
    }
}

#[macro_export]
macro_rules! cprintln {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut $crate::printer::Printer::default(), $($tt)*);
    }}
}

#[macro_export]
macro_rules! cprint_slice {
    ($name:expr, $arr:expr) => {
        $crate::cprintln!("{}0x{}", $name, $crate::printer::HexBytes($arr));
    };
}

/// Lower case hex rendering of a byte slice.
pub struct HexBytes<'a>(pub &'a [u8]);

impl uDisplay for HexBytes<'_> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for &x in self.0.iter() {
            f.write_char(hex_digit(x >> 4))?;
            f.write_char(hex_digit(x & 0xf))?;
        }
        Ok(())
    }
}

fn hex_digit(nibble: u8) -> char {
    if nibble < 10 {
        (nibble + b'0') as char
    } else {
        (nibble - 10 + b'a') as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(String);

    impl uWrite for Collect {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_hex_bytes() {
        let mut out = Collect(String::new());
        ufmt::uwrite!(&mut out, "{}", HexBytes(&[0x00, 0x5b, 0xc9, 0xff])).unwrap();
        assert_eq!(out.0, "005bc9ff");
    }

    #[test]
    fn test_hex_bytes_empty() {
        let mut out = Collect(String::new());
        ufmt::uwrite!(&mut out, "[{}]", HexBytes(&[])).unwrap();
        assert_eq!(out.0, "[]");
    }
}
