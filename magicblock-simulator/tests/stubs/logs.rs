use indexmap::IndexMap;
use magicblock_idl::{EventCoder, EventRecord, IdlValue};
use solana_sdk::pubkey::Pubkey;

pub fn invoke(program_id: &Pubkey, depth: u8) -> String {
    format!("Program {program_id} invoke [{depth}]")
}

pub fn success(program_id: &Pubkey) -> String {
    format!("Program {program_id} success")
}

pub fn failed(program_id: &Pubkey, reason: &str) -> String {
    format!("Program {program_id} failed: {reason}")
}

pub fn consumed(program_id: &Pubkey, units: u64) -> String {
    format!("Program {program_id} consumed {units} of 200000 compute units")
}

pub fn log(msg: &str) -> String {
    format!("Program log: {msg}")
}

pub fn emit(coder: &EventCoder, record: &EventRecord) -> String {
    format!("Program data: {}", coder.encode(record).unwrap())
}

pub fn market_paused(reason: &str) -> EventRecord {
    let mut data = IndexMap::new();
    data.insert("reason".to_string(), IdlValue::from(reason));
    EventRecord {
        name: "MarketPaused".to_string(),
        data,
    }
}

pub fn order_placed(market: Pubkey, side: &str, price: u64) -> EventRecord {
    let mut data = IndexMap::new();
    data.insert("market".to_string(), IdlValue::PublicKey(market));
    data.insert("side".to_string(), IdlValue::unit_variant(side));
    data.insert("price".to_string(), IdlValue::U64(price));
    data.insert("quantity".to_string(), IdlValue::U64(1));
    EventRecord {
        name: "OrderPlaced".to_string(),
        data,
    }
}
