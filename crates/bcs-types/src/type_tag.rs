//! Move identifiers, module ids, struct tags and type tags.

use std::fmt;
use std::str::FromStr;

use bcs_codec::{CodecError, Decode, Decoder, Encode, Encoder, Result, MAX_CONTAINER_DEPTH};

use crate::address::{AccountAddress, AddressError};

/// Errors parsing a type tag from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeTagParseError {
    #[error("unexpected end of type tag")]
    UnexpectedEnd,
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("unknown type {0:?}")]
    UnknownType(String),
    #[error("type tag nested too deeply")]
    TooDeep,
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// A module, function or struct name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters, digits and `_`, not starting with a digit.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Encode for Identifier {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.write_str(&self.0)
    }
}

impl Decode for Identifier {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.read_str().map(Self)
    }
}

/// A published module: its account and name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: Identifier,
}

impl ModuleId {
    pub fn new(address: AccountAddress, name: impl Into<Identifier>) -> Self {
        Self {
            address,
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address.to_short_string(), self.name)
    }
}

impl Encode for ModuleId {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            self.address.encode(encoder)?;
            self.name.encode(encoder)
        })
    }
}

impl Decode for ModuleId {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(Self {
                address: AccountAddress::decode(decoder)?,
                name: Identifier::decode(decoder)?,
            })
        })
    }
}

/// A fully qualified struct type, with its type arguments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: Identifier,
    pub name: Identifier,
    pub type_args: Vec<TypeTag>,
}

impl StructTag {
    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.address, self.module.clone())
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.address.to_short_string(),
            self.module,
            self.name
        )?;
        if let Some((first, rest)) = self.type_args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl Encode for StructTag {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            self.address.encode(encoder)?;
            self.module.encode(encoder)?;
            self.name.encode(encoder)?;
            encoder.write_seq(&self.type_args)
        })
    }
}

impl Decode for StructTag {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            Ok(Self {
                address: AccountAddress::decode(decoder)?,
                module: Identifier::decode(decoder)?,
                name: Identifier::decode(decoder)?,
                type_args: decoder.read_seq()?,
            })
        })
    }
}

impl FromStr for StructTag {
    type Err = TypeTagParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<TypeTag>()? {
            TypeTag::Struct(tag) => Ok(*tag),
            other => Err(TypeTagParseError::UnknownType(other.to_string())),
        }
    }
}

/// The type of a Move value. The discriminants are fixed wire indices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

impl TypeTag {
    pub fn variant_index(&self) -> u32 {
        match self {
            TypeTag::Bool => 0,
            TypeTag::U8 => 1,
            TypeTag::U64 => 2,
            TypeTag::U128 => 3,
            TypeTag::Address => 4,
            TypeTag::Signer => 5,
            TypeTag::Vector(_) => 6,
            TypeTag::Struct(_) => 7,
            TypeTag::U16 => 8,
            TypeTag::U32 => 9,
            TypeTag::U256 => 10,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::U256 => f.write_str("u256"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(tag) => write!(f, "{tag}"),
        }
    }
}

impl Encode for TypeTag {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<()> {
        encoder.container(|encoder| {
            encoder.write_variant_index(self.variant_index())?;
            match self {
                TypeTag::Vector(inner) => inner.encode(encoder),
                TypeTag::Struct(tag) => tag.encode(encoder),
                _ => Ok(()),
            }
        })
    }
}

impl Decode for TypeTag {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self> {
        decoder.container(|decoder| {
            let tag = match decoder.read_variant_index()? {
                0 => TypeTag::Bool,
                1 => TypeTag::U8,
                2 => TypeTag::U64,
                3 => TypeTag::U128,
                4 => TypeTag::Address,
                5 => TypeTag::Signer,
                6 => TypeTag::Vector(Box::decode(decoder)?),
                7 => TypeTag::Struct(Box::decode(decoder)?),
                8 => TypeTag::U16,
                9 => TypeTag::U32,
                10 => TypeTag::U256,
                index => {
                    return Err(CodecError::UnknownVariant {
                        name: "TypeTag",
                        index,
                    })
                }
            };
            Ok(tag)
        })
    }
}

impl FromStr for TypeTag {
    type Err = TypeTagParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let tag = parser.type_tag()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(tag),
            Some(found) => Err(parser.unexpected(found)),
        }
    }
}

/// Recursive-descent parser for the text form of type tags.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Each `vector<..>` and each type argument list takes one level.
    fn descend(&mut self) -> std::result::Result<(), TypeTagParseError> {
        if self.depth >= MAX_CONTAINER_DEPTH {
            return Err(TypeTagParseError::TooDeep);
        }
        self.depth += 1;
        Ok(())
    }

    fn unexpected(&self, found: char) -> TypeTagParseError {
        TypeTagParseError::Unexpected {
            found,
            offset: self.pos,
        }
    }

    fn expect(&mut self, token: &str) -> std::result::Result<(), TypeTagParseError> {
        self.skip_ws();
        if self.src[self.pos..].starts_with(token) {
            self.pos += token.len();
            return Ok(());
        }
        match self.peek() {
            Some(found) => Err(self.unexpected(found)),
            None => Err(TypeTagParseError::UnexpectedEnd),
        }
    }

    /// An identifier or a hex address literal.
    fn word(&mut self) -> std::result::Result<&'a str, TypeTagParseError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return match self.peek() {
                Some(found) => Err(self.unexpected(found)),
                None => Err(TypeTagParseError::UnexpectedEnd),
            };
        }
        Ok(&self.src[start..self.pos])
    }

    fn identifier(&mut self) -> std::result::Result<Identifier, TypeTagParseError> {
        let word = self.word()?;
        if Identifier::is_valid(word) {
            Ok(Identifier::new(word))
        } else {
            Err(TypeTagParseError::UnknownType(word.to_string()))
        }
    }

    fn type_tag(&mut self) -> std::result::Result<TypeTag, TypeTagParseError> {
        let word = self.word()?;
        let tag = match word {
            "bool" => TypeTag::Bool,
            "u8" => TypeTag::U8,
            "u16" => TypeTag::U16,
            "u32" => TypeTag::U32,
            "u64" => TypeTag::U64,
            "u128" => TypeTag::U128,
            "u256" => TypeTag::U256,
            "address" => TypeTag::Address,
            "signer" => TypeTag::Signer,
            "vector" => {
                self.expect("<")?;
                self.descend()?;
                let inner = self.type_tag()?;
                self.expect(">")?;
                self.depth -= 1;
                TypeTag::Vector(Box::new(inner))
            }
            _ if word.starts_with("0x") || word.starts_with(|c: char| c.is_ascii_digit()) => {
                let address = word.parse::<AccountAddress>()?;
                TypeTag::Struct(Box::new(self.struct_tail(address)?))
            }
            other => return Err(TypeTagParseError::UnknownType(other.to_string())),
        };
        Ok(tag)
    }

    fn struct_tail(
        &mut self,
        address: AccountAddress,
    ) -> std::result::Result<StructTag, TypeTagParseError> {
        self.expect("::")?;
        let module = self.identifier()?;
        self.expect("::")?;
        let name = self.identifier()?;
        let mut type_args = Vec::new();
        self.skip_ws();
        if self.peek() == Some('<') {
            self.pos += 1;
            self.descend()?;
            loop {
                type_args.push(self.type_tag()?);
                self.skip_ws();
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some('>') => {
                        self.pos += 1;
                        self.depth -= 1;
                        break;
                    }
                    Some(found) => return Err(self.unexpected(found)),
                    None => return Err(TypeTagParseError::UnexpectedEnd),
                }
            }
        }
        Ok(StructTag {
            address,
            module,
            name,
            type_args,
        })
    }
}
