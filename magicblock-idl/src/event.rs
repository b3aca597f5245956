use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use indexmap::IndexMap;

use crate::{
    errors::{IdlError, IdlResult},
    event_discriminator, Discriminator, Idl, IdlEvent, IdlTypes, IdlValue,
    DISCRIMINATOR_LEN,
};

/// A program event decoded from a simulation log line.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub name: String,
    pub data: IndexMap<String, IdlValue>,
}

impl EventRecord {
    pub fn get(&self, field: &str) -> Option<&IdlValue> {
        self.data.get(field)
    }
}

// -----------------
// EventCoder
// -----------------
#[derive(Debug, Clone, Default)]
pub struct EventCoder {
    layouts: HashMap<Discriminator, IdlEvent>,
    types: IdlTypes,
}

impl EventCoder {
    pub fn new(idl: &Idl) -> Self {
        let layouts = idl
            .events
            .iter()
            .map(|event| (event_discriminator(&event.name), event.clone()))
            .collect();
        Self {
            layouts,
            types: IdlTypes::new(idl),
        }
    }

    pub fn has_events(&self) -> bool {
        !self.layouts.is_empty()
    }

    /// Decodes the base64 payload that follows a log emission marker.
    pub fn decode(&self, payload: &str) -> IdlResult<EventRecord> {
        let bytes = STANDARD.decode(payload.trim())?;
        self.decode_bytes(&bytes)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> IdlResult<EventRecord> {
        if bytes.len() < DISCRIMINATOR_LEN {
            return Err(IdlError::PayloadTooShort(bytes.len()));
        }
        let (disc, mut body) = bytes.split_at(DISCRIMINATOR_LEN);
        let mut discriminator = [0u8; DISCRIMINATOR_LEN];
        discriminator.copy_from_slice(disc);

        let event = self
            .layouts
            .get(&discriminator)
            .ok_or(IdlError::UnknownDiscriminator(discriminator))?;

        let mut data = IndexMap::with_capacity(event.fields.len());
        for field in &event.fields {
            data.insert(
                field.name.clone(),
                self.types.decode(&field.ty, &mut body)?,
            );
        }
        Ok(EventRecord {
            name: event.name.clone(),
            data,
        })
    }

    /// Inverse of [Self::decode], mainly useful to produce emission lines
    /// for tests and local tooling.
    pub fn encode(&self, record: &EventRecord) -> IdlResult<String> {
        let discriminator = event_discriminator(&record.name);
        let event = self
            .layouts
            .get(&discriminator)
            .ok_or(IdlError::UnknownDiscriminator(discriminator))?;

        let mut bytes = discriminator.to_vec();
        for field in &event.fields {
            let value = record.data.get(&field.name).ok_or_else(|| {
                IdlError::MissingField(field.name.clone(), event.name.clone())
            })?;
            self.types.encode(&field.ty, value, &mut bytes)?;
        }
        Ok(STANDARD.encode(bytes))
    }
}
