use std::collections::HashMap;

use crate::{
    errors::{IdlError, IdlResult},
    instruction_discriminator, Idl, IdlField, IdlType, IdlTypeDefinition,
    IdlValue,
};

mod decoder;
mod encoder;

// -----------------
// IdlTypes
// -----------------
/// User defined types of an IDL (`types` and `accounts`) indexed by name so
/// `defined` references can be resolved while encoding and decoding.
#[derive(Debug, Clone, Default)]
pub struct IdlTypes {
    definitions: HashMap<String, IdlTypeDefinition>,
}

impl IdlTypes {
    pub fn new(idl: &Idl) -> Self {
        let definitions = idl
            .accounts
            .iter()
            .chain(idl.types.iter())
            .map(|def| (def.name.clone(), def.clone()))
            .collect();
        Self { definitions }
    }

    pub fn get(&self, name: &str) -> IdlResult<&IdlTypeDefinition> {
        self.definitions
            .get(name)
            .ok_or_else(|| IdlError::UnknownType(name.to_string()))
    }

    pub fn encode(
        &self,
        ty: &IdlType,
        value: &IdlValue,
        out: &mut Vec<u8>,
    ) -> IdlResult<()> {
        encoder::encode_value(ty, value, self, out)
    }

    /// Decodes one value of type `ty`, advancing `buf` past the bytes read.
    pub fn decode(&self, ty: &IdlType, buf: &mut &[u8]) -> IdlResult<IdlValue> {
        decoder::decode_value(ty, self, buf)
    }
}

// -----------------
// InstructionCoder
// -----------------
#[derive(Debug, Clone, Default)]
pub struct InstructionCoder {
    types: IdlTypes,
}

impl InstructionCoder {
    pub fn new(idl: &Idl) -> Self {
        Self {
            types: IdlTypes::new(idl),
        }
    }

    /// Instruction data: 8 byte discriminator followed by the borsh encoded
    /// arguments in declaration order.
    pub fn encode(
        &self,
        ix_name: &str,
        schema: &[IdlField],
        args: &[IdlValue],
    ) -> IdlResult<Vec<u8>> {
        if schema.len() != args.len() {
            return Err(IdlError::ArrayLengthMismatch(schema.len(), args.len()));
        }
        let mut data = instruction_discriminator(ix_name).to_vec();
        for (field, arg) in schema.iter().zip(args) {
            self.types.encode(&field.ty, arg, &mut data)?;
        }
        Ok(data)
    }
}
