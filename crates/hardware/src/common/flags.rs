//! LS-8 Flags Register.
//!
//! Holds the outcome bits of the last `CMP`. The register is only written by
//! the compare operation and only read by conditional jumps. In its packed
//! form the layout is `00000LGE`.

/// Bit position of the Equal flag.
pub const FLAG_E: u8 = 0b0000_0001;
/// Bit position of the Greater-than flag.
pub const FLAG_G: u8 = 0b0000_0010;
/// Bit position of the Less-than flag.
pub const FLAG_L: u8 = 0b0000_0100;

/// Comparison flags.
///
/// The three bits are independent; `CMP` sets exactly one and clears the others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Equal (E).
    pub equal: bool,
    /// Greater-than (G).
    pub greater: bool,
    /// Less-than (L).
    pub less: bool,
}

impl Flags {
    /// Builds the flags that describe the ordering of `a` relative to `b`.
    pub fn compare(a: u8, b: u8) -> Self {
        Self {
            equal: a == b,
            greater: a > b,
            less: a < b,
        }
    }

    /// Packs the flags into the `00000LGE` register layout.
    pub fn bits(self) -> u8 {
        let mut fl = 0;
        if self.equal {
            fl |= FLAG_E;
        }
        if self.greater {
            fl |= FLAG_G;
        }
        if self.less {
            fl |= FLAG_L;
        }
        fl
    }

    /// Unpacks a `00000LGE` register value. Upper bits are ignored.
    pub const fn from_bits(fl: u8) -> Self {
        Self {
            equal: fl & FLAG_E != 0,
            greater: fl & FLAG_G != 0,
            less: fl & FLAG_L != 0,
        }
    }
}
