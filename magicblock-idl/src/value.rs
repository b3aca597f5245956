use indexmap::IndexMap;
use solana_sdk::pubkey::Pubkey;

/// A dynamically typed value laid out according to an [crate::IdlType].
#[derive(Debug, Clone, PartialEq)]
pub enum IdlValue {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    F32(f32),
    U64(u64),
    I64(i64),
    F64(f64),
    U128(u128),
    I128(i128),
    Bytes(Vec<u8>),
    String(String),
    PublicKey(Pubkey),
    Option(Option<Box<IdlValue>>),
    Vec(Vec<IdlValue>),
    Array(Vec<IdlValue>),
    Struct(IndexMap<String, IdlValue>),
    Enum {
        variant: String,
        fields: Option<EnumValueFields>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumValueFields {
    Named(IndexMap<String, IdlValue>),
    Tuple(Vec<IdlValue>),
}

impl IdlValue {
    /// Short name of the value's kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        use IdlValue::*;
        match self {
            Bool(_) => "bool",
            U8(_) => "u8",
            I8(_) => "i8",
            U16(_) => "u16",
            I16(_) => "i16",
            U32(_) => "u32",
            I32(_) => "i32",
            F32(_) => "f32",
            U64(_) => "u64",
            I64(_) => "i64",
            F64(_) => "f64",
            U128(_) => "u128",
            I128(_) => "i128",
            Bytes(_) => "bytes",
            String(_) => "string",
            PublicKey(_) => "publicKey",
            Option(_) => "option",
            Vec(_) => "vec",
            Array(_) => "array",
            Struct(_) => "struct",
            Enum { .. } => "enum",
        }
    }

    pub fn unit_variant(variant: &str) -> Self {
        IdlValue::Enum {
            variant: variant.to_string(),
            fields: None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            IdlValue::U8(v) => Some(*v as u64),
            IdlValue::U16(v) => Some(*v as u64),
            IdlValue::U32(v) => Some(*v as u64),
            IdlValue::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IdlValue::I8(v) => Some(*v as i64),
            IdlValue::I16(v) => Some(*v as i64),
            IdlValue::I32(v) => Some(*v as i64),
            IdlValue::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            IdlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pubkey(&self) -> Option<&Pubkey> {
        match self {
            IdlValue::PublicKey(pubkey) => Some(pubkey),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&IndexMap<String, IdlValue>> {
        match self {
            IdlValue::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_idl_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for IdlValue {
                fn from(value: $ty) -> Self {
                    IdlValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_idl_value!(
    bool => Bool,
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f32 => F32,
    u64 => U64,
    i64 => I64,
    f64 => F64,
    u128 => U128,
    i128 => I128,
    String => String,
    Pubkey => PublicKey,
);

impl From<&str> for IdlValue {
    fn from(value: &str) -> Self {
        IdlValue::String(value.to_string())
    }
}

impl<T: Into<IdlValue>> From<Option<T>> for IdlValue {
    fn from(value: Option<T>) -> Self {
        IdlValue::Option(value.map(|v| Box::new(v.into())))
    }
}
