use core::fmt;

use flatbuffers::{
    Allocator, FlatBufferBuilder, Follow, ForwardsUOffset, InvalidFlatbuffer, Table,
    TableUnfinishedWIPOffset, VOffsetT, Verifiable, Verifier, VerifierOptions, WIPOffset,
};

use crate::slot::ScalarSlot;
use crate::{FlatBufferRoot, WriteFlatBuffer};

/// A view over a `Decimal` table inside a borrowed buffer.
///
/// Both fields are optional in the encoded table. An absent field reads as `0`, so a field
/// written as `0` cannot be told apart from one that was never written.
#[derive(Copy, Clone, PartialEq)]
pub struct Decimal<'a> {
    pub _tab: Table<'a>,
}

impl<'a> Follow<'a> for Decimal<'a> {
    type Inner = Decimal<'a>;

    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: unsafe { Table::new(buf, loc) },
        }
    }
}

impl<'a> Decimal<'a> {
    /// Total number of decimal digits.
    pub const PRECISION: ScalarSlot<i32> = ScalarSlot::new("precision", 0, 0);
    /// Number of digits after the decimal point.
    pub const SCALE: ScalarSlot<i32> = ScalarSlot::new("scale", 1, 0);

    pub const VT_PRECISION: VOffsetT = Self::PRECISION.vtable_offset();
    pub const VT_SCALE: VOffsetT = Self::SCALE.vtable_offset();

    /// Resolve the root offset stored at `offset` in `buf` and verify the table it points to.
    ///
    /// The whole of `buf` is in scope for verification, so the table's vtable may sit before
    /// `offset`. An `offset` past the end of `buf` is reported as a verification error.
    pub fn get_root(buf: &'a [u8], offset: usize) -> Result<Self, InvalidFlatbuffer> {
        let opts = VerifierOptions::default();
        let mut verifier = Verifier::new(&opts, buf);
        <ForwardsUOffset<Decimal<'a>>>::run_verifier(&mut verifier, offset).inspect_err(|err| {
            log::debug!("Rejected Decimal table rooted at offset {offset}: {err}");
        })?;
        // Safety:
        // The root offset at `offset` and the table it points to were verified above
        Ok(unsafe { Self::get_root_unchecked(buf, offset) })
    }

    /// Resolve the root offset stored at `offset` in `buf` without any verification.
    ///
    /// # Safety
    ///
    /// `buf[offset..offset + 4]` must hold a little-endian `u32` relative offset to a valid
    /// `Decimal` table within `buf`.
    #[inline]
    pub unsafe fn get_root_unchecked(buf: &'a [u8], offset: usize) -> Self {
        unsafe { <ForwardsUOffset<Decimal<'a>>>::follow(buf, offset) }
    }

    #[allow(unused_mut)]
    pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: Allocator + 'bldr>(
        _fbb: &'mut_bldr mut FlatBufferBuilder<'bldr, A>,
        args: &'args DecimalArgs,
    ) -> WIPOffset<Decimal<'bldr>> {
        let mut builder = DecimalBuilder::new(_fbb);
        builder.add_scale(args.scale);
        builder.add_precision(args.precision);
        builder.finish()
    }

    pub fn unpack(&self) -> DecimalT {
        DecimalT {
            precision: self.precision(),
            scale: self.scale(),
        }
    }

    /// Total number of decimal digits.
    #[inline]
    pub fn precision(&self) -> i32 {
        // Safety:
        // Created from valid Table for this object
        // which contains a valid value in this slot
        unsafe { Self::PRECISION.read(&self._tab) }
    }

    /// Number of digits after the decimal point "."
    #[inline]
    pub fn scale(&self) -> i32 {
        // Safety:
        // Created from valid Table for this object
        // which contains a valid value in this slot
        unsafe { Self::SCALE.read(&self._tab) }
    }
}

impl Verifiable for Decimal<'_> {
    #[inline]
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<i32>(Self::PRECISION.name(), Self::VT_PRECISION, false)?
            .visit_field::<i32>(Self::SCALE.name(), Self::VT_SCALE, false)?
            .finish();
        Ok(())
    }
}

pub struct DecimalArgs {
    pub precision: i32,
    pub scale: i32,
}

impl Default for DecimalArgs {
    #[inline]
    fn default() -> Self {
        DecimalArgs {
            precision: Decimal::PRECISION.default_value(),
            scale: Decimal::SCALE.default_value(),
        }
    }
}

/// Writes a single `Decimal` table.
///
/// Creating the builder starts the table and [`DecimalBuilder::finish`] ends it. Any nested
/// objects of the enclosing record must be written before the builder is created.
pub struct DecimalBuilder<'a: 'b, 'b, A: Allocator + 'a> {
    fbb_: &'b mut FlatBufferBuilder<'a, A>,
    start_: WIPOffset<TableUnfinishedWIPOffset>,
}

impl<'a: 'b, 'b, A: Allocator + 'a> DecimalBuilder<'a, 'b, A> {
    #[inline]
    pub fn add_precision(&mut self, precision: i32) {
        Decimal::PRECISION.push(self.fbb_, precision);
    }

    #[inline]
    pub fn add_scale(&mut self, scale: i32) {
        Decimal::SCALE.push(self.fbb_, scale);
    }

    #[inline]
    pub fn new(_fbb: &'b mut FlatBufferBuilder<'a, A>) -> DecimalBuilder<'a, 'b, A> {
        let start = _fbb.start_table();
        DecimalBuilder {
            fbb_: _fbb,
            start_: start,
        }
    }

    #[inline]
    pub fn finish(self) -> WIPOffset<Decimal<'a>> {
        let o = self.fbb_.end_table(self.start_);
        WIPOffset::new(o.value())
    }
}

impl fmt::Debug for Decimal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("Decimal");
        ds.field("precision", &self.precision());
        ds.field("scale", &self.scale());
        ds.finish()
    }
}

/// An owned `Decimal`, detached from any buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalT {
    pub precision: i32,
    pub scale: i32,
}

impl Default for DecimalT {
    fn default() -> Self {
        Self {
            precision: Decimal::PRECISION.default_value(),
            scale: Decimal::SCALE.default_value(),
        }
    }
}

impl DecimalT {
    pub fn pack<'b, A: Allocator + 'b>(
        &self,
        _fbb: &mut FlatBufferBuilder<'b, A>,
    ) -> WIPOffset<Decimal<'b>> {
        Decimal::create(
            _fbb,
            &DecimalArgs {
                precision: self.precision,
                scale: self.scale,
            },
        )
    }
}

impl FlatBufferRoot for DecimalT {}

impl WriteFlatBuffer for DecimalT {
    type Target<'a> = Decimal<'a>;

    fn write_flatbuffer<'fb>(
        &self,
        fbb: &mut FlatBufferBuilder<'fb>,
    ) -> WIPOffset<Self::Target<'fb>> {
        self.pack(fbb)
    }
}

/// Verifies that a buffer of bytes contains a `Decimal` and returns it.
#[inline]
pub fn root_as_decimal(buf: &[u8]) -> Result<Decimal<'_>, InvalidFlatbuffer> {
    flatbuffers::root::<Decimal>(buf)
}

/// Verifies that a buffer of bytes contains a size prefixed `Decimal` and returns it.
#[inline]
pub fn size_prefixed_root_as_decimal(buf: &[u8]) -> Result<Decimal<'_>, InvalidFlatbuffer> {
    flatbuffers::size_prefixed_root::<Decimal>(buf)
}

/// Verifies, with the given options, that a buffer of bytes contains a `Decimal` and returns it.
#[inline]
pub fn root_as_decimal_with_opts<'b, 'o>(
    opts: &'o VerifierOptions,
    buf: &'b [u8],
) -> Result<Decimal<'b>, InvalidFlatbuffer> {
    flatbuffers::root_with_opts::<Decimal<'b>>(opts, buf)
}

/// Assumes, without verification, that a buffer of bytes contains a `Decimal` and returns it.
///
/// # Safety
///
/// Callers must trust the given bytes do indeed contain a valid `Decimal`.
#[inline]
pub unsafe fn root_as_decimal_unchecked(buf: &[u8]) -> Decimal<'_> {
    unsafe { flatbuffers::root_unchecked::<Decimal>(buf) }
}

#[inline]
pub fn finish_decimal_buffer<'a, 'b, A: Allocator + 'a>(
    fbb: &'b mut FlatBufferBuilder<'a, A>,
    root: WIPOffset<Decimal<'a>>,
) {
    fbb.finish(root, None);
}

#[inline]
pub fn finish_size_prefixed_decimal_buffer<'a, 'b, A: Allocator + 'a>(
    fbb: &'b mut FlatBufferBuilder<'a, A>,
    root: WIPOffset<Decimal<'a>>,
) {
    fbb.finish_size_prefixed(root, None);
}
