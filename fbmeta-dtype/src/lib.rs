#![cfg(target_endian = "little")]
#![deny(missing_docs)]

//! Logical decimal types for fbmeta.
//!
//! This crate contains the validated [`DecimalDType`] and the logic to read and write it as a
//! `Decimal` schema table, plus (optionally) conversions to and from Arrow.

pub use decimal::*;

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "arrow")]
mod arrow;
mod decimal;
mod serde;

pub mod flatbuffers {
    //! Flatbuffer representations for decimal types
    //!
    //! Re-exports the `Decimal` table accessor and builder that [`crate::DecimalDType`] is
    //! read from and written to.

    pub use fbmeta_flatbuffers::decimal::*;
}
