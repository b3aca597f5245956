use borsh::BorshDeserialize;
use indexmap::IndexMap;
use solana_sdk::pubkey::Pubkey;

use super::IdlTypes;
use crate::{
    errors::{IdlError, IdlResult},
    EnumFields, EnumValueFields, IdlField, IdlType, IdlTypeDefinitionTy,
    IdlValue,
};

pub(super) fn decode_value(
    ty: &IdlType,
    types: &IdlTypes,
    buf: &mut &[u8],
) -> IdlResult<IdlValue> {
    use IdlType as T;
    use IdlValue as V;

    let value = match ty {
        T::Bool => V::Bool(bool::deserialize(buf)?),
        T::U8 => V::U8(u8::deserialize(buf)?),
        T::I8 => V::I8(i8::deserialize(buf)?),
        T::U16 => V::U16(u16::deserialize(buf)?),
        T::I16 => V::I16(i16::deserialize(buf)?),
        T::U32 => V::U32(u32::deserialize(buf)?),
        T::I32 => V::I32(i32::deserialize(buf)?),
        T::F32 => V::F32(f32::deserialize(buf)?),
        T::U64 => V::U64(u64::deserialize(buf)?),
        T::I64 => V::I64(i64::deserialize(buf)?),
        T::F64 => V::F64(f64::deserialize(buf)?),
        T::U128 => V::U128(u128::deserialize(buf)?),
        T::I128 => V::I128(i128::deserialize(buf)?),
        T::Bytes => V::Bytes(Vec::<u8>::deserialize(buf)?),
        T::String => V::String(String::deserialize(buf)?),
        T::PublicKey => {
            V::PublicKey(Pubkey::new_from_array(<[u8; 32]>::deserialize(buf)?))
        }
        T::Option(inner) => match u8::deserialize(buf)? {
            0 => V::Option(None),
            1 => V::Option(Some(Box::new(decode_value(inner, types, buf)?))),
            tag => {
                return Err(IdlError::InvalidEnumVariant(
                    tag,
                    "Option".to_string(),
                ))
            }
        },
        T::Vec(inner) => {
            let len = u32::deserialize(buf)? as usize;
            V::Vec(decode_sequence(inner, len, types, buf)?)
        }
        T::Array(inner, len) => {
            V::Array(decode_sequence(inner, *len, types, buf)?)
        }
        T::Defined(name) => decode_defined(name, types, buf)?,
    };
    Ok(value)
}

fn decode_sequence(
    ty: &IdlType,
    len: usize,
    types: &IdlTypes,
    buf: &mut &[u8],
) -> IdlResult<Vec<IdlValue>> {
    // Elements of a field-less struct take no bytes, so the length prefix
    // can't be checked against the payload. Only the allocation is capped.
    let mut items = Vec::with_capacity(len.min(buf.len()));
    for _ in 0..len {
        items.push(decode_value(ty, types, buf)?);
    }
    Ok(items)
}

fn decode_defined(
    name: &str,
    types: &IdlTypes,
    buf: &mut &[u8],
) -> IdlResult<IdlValue> {
    match &types.get(name)?.ty {
        IdlTypeDefinitionTy::Struct { fields } => {
            Ok(IdlValue::Struct(decode_named_fields(fields, types, buf)?))
        }
        IdlTypeDefinitionTy::Enum { variants } => {
            let idx = u8::deserialize(buf)?;
            let variant = variants.get(idx as usize).ok_or_else(|| {
                IdlError::InvalidEnumVariant(idx, name.to_string())
            })?;
            let fields = match &variant.fields {
                None => None,
                Some(EnumFields::Named(defs)) => Some(EnumValueFields::Named(
                    decode_named_fields(defs, types, buf)?,
                )),
                Some(EnumFields::Tuple(tys)) => {
                    let values = tys
                        .iter()
                        .map(|ty| decode_value(ty, types, buf))
                        .collect::<IdlResult<Vec<_>>>()?;
                    Some(EnumValueFields::Tuple(values))
                }
            };
            Ok(IdlValue::Enum {
                variant: variant.name.clone(),
                fields,
            })
        }
    }
}

fn decode_named_fields(
    fields: &[IdlField],
    types: &IdlTypes,
    buf: &mut &[u8],
) -> IdlResult<IndexMap<String, IdlValue>> {
    let mut values = IndexMap::with_capacity(fields.len());
    for field in fields {
        values.insert(field.name.clone(), decode_value(&field.ty, types, buf)?);
    }
    Ok(values)
}
