use super::ImmediateSize;

/// Byte width of an encoded immediate, ordered narrowest first.
///
/// [`Implicit`](Self::Implicit) is the zero case: the operand is encoded by
/// the instruction form itself and takes no literal bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EncodingWidth {
    /// No literal bytes (the value is zero).
    Implicit = 0,
    /// 8-bit immediate.
    Byte = 1,
    /// 16-bit immediate.
    Word = 2,
    /// 32-bit immediate.
    Dword = 4,
    /// 64-bit immediate.
    Qword = 8,
}

impl EncodingWidth {
    /// Narrowest width that encodes `value`.
    #[inline]
    pub fn of<T: ImmediateSize>(value: T) -> Self {
        match value.min_encoding_size() {
            0 => Self::Implicit,
            1 => Self::Byte,
            2 => Self::Word,
            4 => Self::Dword,
            _ => Self::Qword,
        }
    }

    /// Converts a byte count back into a width.
    ///
    /// # Errors
    ///
    /// Returns an error unless `bytes` is 0, 1, 2, 4 or 8.
    pub const fn from_bytes(bytes: u32) -> Result<Self, &'static str> {
        match bytes {
            0 => Ok(Self::Implicit),
            1 => Ok(Self::Byte),
            2 => Ok(Self::Word),
            4 => Ok(Self::Dword),
            8 => Ok(Self::Qword),
            _ => Err("Invalid encoding width: expected 0, 1, 2, 4 or 8 bytes"),
        }
    }

    /// Number of literal bytes.
    #[inline(always)]
    pub const fn bytes(self) -> u32 {
        self as u32
    }

    /// Number of literal bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }

    /// Returns `true` for [`Implicit`](Self::Implicit).
    #[inline(always)]
    pub const fn is_implicit(self) -> bool {
        matches!(self, Self::Implicit)
    }
}

impl TryFrom<u32> for EncodingWidth {
    type Error = &'static str;

    fn try_from(bytes: u32) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<EncodingWidth> for u32 {
    fn from(width: EncodingWidth) -> u32 {
        width.bytes()
    }
}
