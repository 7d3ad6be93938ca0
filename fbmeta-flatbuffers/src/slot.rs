//! Compile-time descriptors for scalar table fields.

use flatbuffers::{Allocator, FlatBufferBuilder, Follow, Push, Table, VOffsetT};

/// The number of vtable entries preceding the first field: the vtable length and the table
/// length, each a [`VOffsetT`].
const VTABLE_HEADER_ENTRIES: VOffsetT = 2;

#[allow(clippy::cast_possible_truncation)]
const VOFFSET_WIDTH: VOffsetT = size_of::<VOffsetT>() as VOffsetT;

/// Describes a scalar field stored in a table slot.
///
/// The vtable byte offset, byte width and default of each field are fixed when the schema is
/// compiled, so a table type declares one `ScalarSlot` constant per field and routes every read
/// and write through it.
#[derive(Debug)]
pub struct ScalarSlot<T> {
    name: &'static str,
    index: VOffsetT,
    default: T,
}

impl<T: Copy> ScalarSlot<T> {
    /// Describe the field `name` at logical slot `index` with the given default value.
    pub const fn new(name: &'static str, index: VOffsetT, default: T) -> Self {
        Self {
            name,
            index,
            default,
        }
    }

    /// The field name as written in the schema.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The logical slot index of the field.
    pub const fn index(&self) -> VOffsetT {
        self.index
    }

    /// The value a reader observes when the field is absent.
    pub const fn default_value(&self) -> T {
        self.default
    }

    /// The byte offset of this field's entry within the vtable.
    pub const fn vtable_offset(&self) -> VOffsetT {
        (self.index + VTABLE_HEADER_ENTRIES) * VOFFSET_WIDTH
    }

    /// The number of bytes the field occupies in the table's data region.
    pub const fn width(&self) -> usize {
        size_of::<T>()
    }

    /// Read the field from `table`, substituting the default when the slot is absent.
    ///
    /// # Safety
    ///
    /// `table` must have been verified, or otherwise be known to hold a value of type `T` in this
    /// slot if the slot is present.
    #[inline]
    pub unsafe fn read<'a>(&self, table: &Table<'a>) -> T
    where
        T: Follow<'a, Inner = T> + 'a,
    {
        unsafe { table.get::<T>(self.vtable_offset(), Some(self.default)) }.unwrap_or(self.default)
    }

    /// Write `value` into the table currently under construction.
    ///
    /// Nothing is written when `value` equals the default, unless the builder was configured with
    /// [`FlatBufferBuilder::force_defaults`].
    #[inline]
    pub fn push<'fbb, A: Allocator + 'fbb>(&self, fbb: &mut FlatBufferBuilder<'fbb, A>, value: T)
    where
        T: Push + PartialEq,
    {
        fbb.push_slot::<T>(self.vtable_offset(), value, self.default);
    }
}
