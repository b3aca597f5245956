use borsh::BorshSerialize;
use indexmap::IndexMap;

use super::IdlTypes;
use crate::{
    errors::{IdlError, IdlResult},
    EnumFields, EnumValueFields, IdlField, IdlType, IdlTypeDefinitionTy,
    IdlValue,
};

pub(super) fn encode_value(
    ty: &IdlType,
    value: &IdlValue,
    types: &IdlTypes,
    out: &mut Vec<u8>,
) -> IdlResult<()> {
    use IdlType as T;
    use IdlValue as V;

    match (ty, value) {
        (T::Bool, V::Bool(v)) => v.serialize(out)?,
        (T::U8, V::U8(v)) => v.serialize(out)?,
        (T::I8, V::I8(v)) => v.serialize(out)?,
        (T::U16, V::U16(v)) => v.serialize(out)?,
        (T::I16, V::I16(v)) => v.serialize(out)?,
        (T::U32, V::U32(v)) => v.serialize(out)?,
        (T::I32, V::I32(v)) => v.serialize(out)?,
        (T::F32, V::F32(v)) => v.serialize(out)?,
        (T::U64, V::U64(v)) => v.serialize(out)?,
        (T::I64, V::I64(v)) => v.serialize(out)?,
        (T::F64, V::F64(v)) => v.serialize(out)?,
        (T::U128, V::U128(v)) => v.serialize(out)?,
        (T::I128, V::I128(v)) => v.serialize(out)?,
        (T::Bytes, V::Bytes(v)) => v.serialize(out)?,
        (T::String, V::String(v)) => v.serialize(out)?,
        (T::PublicKey, V::PublicKey(pubkey)) => {
            out.extend_from_slice(pubkey.as_ref())
        }
        (T::Option(inner), V::Option(v)) => match v {
            None => out.push(0),
            Some(v) => {
                out.push(1);
                encode_value(inner, v, types, out)?;
            }
        },
        (T::Vec(inner), V::Vec(items) | V::Array(items)) => {
            (items.len() as u32).serialize(out)?;
            for item in items {
                encode_value(inner, item, types, out)?;
            }
        }
        (T::Array(inner, len), V::Array(items) | V::Vec(items)) => {
            if items.len() != *len {
                return Err(IdlError::ArrayLengthMismatch(*len, items.len()));
            }
            for item in items {
                encode_value(inner, item, types, out)?;
            }
        }
        (T::Defined(name), value) => encode_defined(name, value, types, out)?,
        (ty, value) => return Err(mismatch(ty, value)),
    }
    Ok(())
}

fn encode_defined(
    name: &str,
    value: &IdlValue,
    types: &IdlTypes,
    out: &mut Vec<u8>,
) -> IdlResult<()> {
    match (&types.get(name)?.ty, value) {
        (IdlTypeDefinitionTy::Struct { fields }, IdlValue::Struct(values)) => {
            encode_named_fields(name, fields, values, types, out)
        }
        (
            IdlTypeDefinitionTy::Enum { variants },
            IdlValue::Enum {
                variant,
                fields: value_fields,
            },
        ) => {
            let (idx, def) = variants
                .iter()
                .enumerate()
                .find(|(_, v)| &v.name == variant)
                .ok_or_else(|| {
                    IdlError::UnknownEnumVariant(
                        variant.clone(),
                        name.to_string(),
                    )
                })?;
            out.push(idx as u8);
            match (&def.fields, value_fields) {
                (None, None) => Ok(()),
                (Some(EnumFields::Named(defs)), Some(EnumValueFields::Named(values))) => {
                    encode_named_fields(variant, defs, values, types, out)
                }
                (Some(EnumFields::Tuple(tys)), Some(EnumValueFields::Tuple(values))) => {
                    if tys.len() != values.len() {
                        return Err(IdlError::ArrayLengthMismatch(
                            tys.len(),
                            values.len(),
                        ));
                    }
                    for (ty, value) in tys.iter().zip(values) {
                        encode_value(ty, value, types, out)?;
                    }
                    Ok(())
                }
                _ => Err(IdlError::TypeMismatch {
                    expected: format!("fields of {name}::{variant}"),
                    actual: format!("{value_fields:?}"),
                }),
            }
        }
        (_, value) => Err(IdlError::TypeMismatch {
            expected: name.to_string(),
            actual: value.kind().to_string(),
        }),
    }
}

fn encode_named_fields(
    owner: &str,
    fields: &[IdlField],
    values: &IndexMap<String, IdlValue>,
    types: &IdlTypes,
    out: &mut Vec<u8>,
) -> IdlResult<()> {
    for field in fields {
        let value = values.get(&field.name).ok_or_else(|| {
            IdlError::MissingField(field.name.clone(), owner.to_string())
        })?;
        encode_value(&field.ty, value, types, out)?;
    }
    Ok(())
}

fn mismatch(ty: &IdlType, value: &IdlValue) -> IdlError {
    IdlError::TypeMismatch {
        expected: format!("{ty:?}"),
        actual: value.kind().to_string(),
    }
}
