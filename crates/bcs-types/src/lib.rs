//! Move-flavoured transaction types encoded with [`bcs_codec`].
//!
//! Each type fixes its field order and variant indices once in its
//! [`Encode`](bcs_codec::Encode) and [`Decode`](bcs_codec::Decode) impls.
//! [`signing_message`] produces the bytes a sender signs.

mod address;
mod transaction;
mod type_tag;

pub use address::{AccountAddress, AddressError};
pub use transaction::{
    signing_message, signing_prefix, ChainId, EntryFunction, RawTransaction, Script,
    TransactionArgument, TransactionPayload, RAW_TRANSACTION_SALT,
};
pub use type_tag::{Identifier, ModuleId, StructTag, TypeTag, TypeTagParseError};
