//! Flatbuffer accessors for columnar schema metadata.
//!
//! Each schema table is exposed as a zero-copy view borrowing the buffer it was read from,
//! alongside a builder that writes it into a [`FlatBufferBuilder`].
//!
//! See [decimal] for the decimal type parameters.

#[cfg(feature = "decimal")]
#[allow(clippy::derive_partial_eq_without_eq)]
/// The precision and scale of a decimal type.
///
/// `decimal.fbs`:
/// ```flatbuffers
#[doc = include_str!("../flatbuffers/decimal.fbs")]
/// ```
pub mod decimal;
pub mod slot;

use bytes::Bytes;
use flatbuffers::{
    FlatBufferBuilder, Follow, InvalidFlatbuffer, Verifiable, VerifierOptions, WIPOffset, root,
    root_with_opts,
};

/// Marker for types that may be written as the root of a standalone flatbuffer.
pub trait FlatBufferRoot {}

/// Decode a value from a verified flatbuffer view.
pub trait ReadFlatBuffer: Sized {
    type Source<'a>: Verifiable + Follow<'a>;
    type Error: From<InvalidFlatbuffer>;

    fn read_flatbuffer<'buf>(
        fb: &<Self::Source<'buf> as Follow<'buf>>::Inner,
    ) -> Result<Self, Self::Error>;

    fn read_flatbuffer_bytes<'buf>(bytes: &'buf [u8]) -> Result<Self, Self::Error>
    where
        <Self as ReadFlatBuffer>::Source<'buf>: 'buf,
    {
        let fb = root::<Self::Source<'buf>>(bytes)?;
        Self::read_flatbuffer(&fb)
    }

    /// Like [`ReadFlatBuffer::read_flatbuffer_bytes`], with explicit verifier limits.
    fn read_flatbuffer_bytes_with_opts<'buf>(
        bytes: &'buf [u8],
        opts: &VerifierOptions,
    ) -> Result<Self, Self::Error>
    where
        <Self as ReadFlatBuffer>::Source<'buf>: 'buf,
    {
        let fb = root_with_opts::<Self::Source<'buf>>(opts, bytes)?;
        Self::read_flatbuffer(&fb)
    }
}

/// Encode a value into a [`FlatBufferBuilder`], returning the offset of the written object.
pub trait WriteFlatBuffer {
    type Target<'a>;

    fn write_flatbuffer<'fb>(
        &self,
        fbb: &mut FlatBufferBuilder<'fb>,
    ) -> WIPOffset<Self::Target<'fb>>;
}

pub trait WriteFlatBufferExt: WriteFlatBuffer + FlatBufferRoot {
    /// Write the flatbuffer into a [`Bytes`].
    fn write_flatbuffer_bytes(&self) -> Bytes;
}

impl<F: WriteFlatBuffer + FlatBufferRoot> WriteFlatBufferExt for F {
    fn write_flatbuffer_bytes(&self) -> Bytes {
        let mut fbb = FlatBufferBuilder::new();
        let root_offset = self.write_flatbuffer(&mut fbb);
        fbb.finish_minimal(root_offset);
        let (vec, start) = fbb.collapse();
        let end = vec.len();
        log::trace!("Wrote {} byte flatbuffer", end - start);
        Bytes::from(vec).slice(start..end)
    }
}
