//! Transaction payloads and the raw transaction that gets signed.

use bcs_codec::{CodecError, Decode, Decoder, Encode, Encoder, Result, U256};
use sha3::{Digest, Sha3_256};

use crate::address::AccountAddress;
use crate::type_tag::{Identifier, ModuleId, TypeTag};

/// Domain separator hashed into the signing prefix.
pub const RAW_TRANSACTION_SALT: &[u8] = b"APTOS::RawTransaction";

/// A call to a public entry function.
///
/// `args` are already-encoded argument values, one byte vector each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFunction {
    pub module: ModuleId,
    pub function: Identifier,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<Vec<u8>>,
}

impl EntryFunction {
    pub fn new(
        module: ModuleId,
        function: impl Into<Identifier>,
        ty_args: Vec<TypeTag>,
        args: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            module,
            function: function.into(),
            ty_args,
            args,
        }
    }
}

impl Encode for EntryFunction {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            self.module.encode(encoder)?;
            self.function.encode(encoder)?;
            encoder.write_seq(&self.ty_args)?;
            encoder.write_seq(&self.args)
        })
    }
}

impl Decode for EntryFunction {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(Self {
                module: ModuleId::decode(decoder)?,
                function: Identifier::decode(decoder)?,
                ty_args: decoder.read_seq()?,
                args: decoder.read_seq()?,
            })
        })
    }
}

/// A typed argument to a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionArgument {
    U8(u8),
    U64(u64),
    U128(u128),
    Address(AccountAddress),
    U8Vector(Vec<u8>),
    Bool(bool),
    U16(u16),
    U32(u32),
    U256(U256),
}

impl Encode for TransactionArgument {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| match self {
            TransactionArgument::U8(v) => {
                encoder.write_variant_index(0)?;
                v.encode(encoder)
            }
            TransactionArgument::U64(v) => {
                encoder.write_variant_index(1)?;
                v.encode(encoder)
            }
            TransactionArgument::U128(v) => {
                encoder.write_variant_index(2)?;
                v.encode(encoder)
            }
            TransactionArgument::Address(v) => {
                encoder.write_variant_index(3)?;
                v.encode(encoder)
            }
            TransactionArgument::U8Vector(v) => {
                encoder.write_variant_index(4)?;
                encoder.write_bytes(v)
            }
            TransactionArgument::Bool(v) => {
                encoder.write_variant_index(5)?;
                v.encode(encoder)
            }
            TransactionArgument::U16(v) => {
                encoder.write_variant_index(6)?;
                v.encode(encoder)
            }
            TransactionArgument::U32(v) => {
                encoder.write_variant_index(7)?;
                v.encode(encoder)
            }
            TransactionArgument::U256(v) => {
                encoder.write_variant_index(8)?;
                v.encode(encoder)
            }
        })
    }
}

impl Decode for TransactionArgument {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(match decoder.read_variant_index()? {
                0 => TransactionArgument::U8(Decode::decode(decoder)?),
                1 => TransactionArgument::U64(Decode::decode(decoder)?),
                2 => TransactionArgument::U128(Decode::decode(decoder)?),
                3 => TransactionArgument::Address(Decode::decode(decoder)?),
                4 => TransactionArgument::U8Vector(decoder.read_bytes()?),
                5 => TransactionArgument::Bool(Decode::decode(decoder)?),
                6 => TransactionArgument::U16(Decode::decode(decoder)?),
                7 => TransactionArgument::U32(Decode::decode(decoder)?),
                8 => TransactionArgument::U256(Decode::decode(decoder)?),
                index => {
                    return Err(CodecError::UnknownVariant {
                        name: "TransactionArgument",
                        index,
                    })
                }
            })
        })
    }
}

/// Bytecode executed once with the given arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub code: Vec<u8>,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<TransactionArgument>,
}

impl Encode for Script {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            encoder.write_bytes(&self.code)?;
            encoder.write_seq(&self.ty_args)?;
            encoder.write_seq(&self.args)
        })
    }
}

impl Decode for Script {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(Self {
                code: decoder.read_bytes()?,
                ty_args: decoder.read_seq()?,
                args: decoder.read_seq()?,
            })
        })
    }
}

/// What a transaction executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionPayload {
    Script(Script),
    /// Deprecated module publishing; still decodable.
    ModuleBundle(Vec<Vec<u8>>),
    EntryFunction(EntryFunction),
}

impl Encode for TransactionPayload {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| match self {
            TransactionPayload::Script(script) => {
                encoder.write_variant_index(0)?;
                script.encode(encoder)
            }
            TransactionPayload::ModuleBundle(modules) => {
                encoder.write_variant_index(1)?;
                encoder.write_seq(modules)
            }
            TransactionPayload::EntryFunction(function) => {
                encoder.write_variant_index(2)?;
                function.encode(encoder)
            }
        })
    }
}

impl Decode for TransactionPayload {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| match decoder.read_variant_index()? {
            0 => Script::decode(decoder).map(TransactionPayload::Script),
            1 => decoder.read_seq().map(TransactionPayload::ModuleBundle),
            2 => EntryFunction::decode(decoder).map(TransactionPayload::EntryFunction),
            index => Err(CodecError::UnknownVariant {
                name: "TransactionPayload",
                index,
            }),
        })
    }
}

/// Network identifier, guarding against cross-chain replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u8);

impl Encode for ChainId {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_u8(self.0)
    }
}

impl Decode for ChainId {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_u8().map(ChainId)
    }
}

/// An unsigned transaction. Its encoding, behind the signing prefix, is what
/// a sender signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub sender: AccountAddress,
    pub sequence_number: u64,
    pub payload: TransactionPayload,
    pub max_gas_amount: u64,
    pub gas_unit_price: u64,
    pub expiration_timestamp_secs: u64,
    pub chain_id: ChainId,
}

impl RawTransaction {
    pub fn signing_message(&self) -> Result<Vec<u8>> {
        signing_message(self)
    }
}

impl Encode for RawTransaction {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            self.sender.encode(encoder)?;
            encoder.write_u64(self.sequence_number)?;
            self.payload.encode(encoder)?;
            encoder.write_u64(self.max_gas_amount)?;
            encoder.write_u64(self.gas_unit_price)?;
            encoder.write_u64(self.expiration_timestamp_secs)?;
            self.chain_id.encode(encoder)
        })
    }
}

impl Decode for RawTransaction {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(Self {
                sender: AccountAddress::decode(decoder)?,
                sequence_number: decoder.read_u64()?,
                payload: TransactionPayload::decode(decoder)?,
                max_gas_amount: decoder.read_u64()?,
                gas_unit_price: decoder.read_u64()?,
                expiration_timestamp_secs: decoder.read_u64()?,
                chain_id: ChainId::decode(decoder)?,
            })
        })
    }
}

/// SHA3-256 of [`RAW_TRANSACTION_SALT`].
pub fn signing_prefix() -> [u8; 32] {
    Sha3_256::digest(RAW_TRANSACTION_SALT).into()
}

/// The exact bytes a wallet signs: the signing prefix followed by the
/// canonical encoding of `raw`.
pub fn signing_message(raw: &RawTransaction) -> Result<Vec<u8>> {
    let body = bcs_codec::to_bytes(raw)?;
    let mut message = Vec::with_capacity(32 + body.len());
    message.extend_from_slice(&signing_prefix());
    message.extend_from_slice(&body);
    Ok(message)
}
