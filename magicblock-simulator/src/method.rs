use magicblock_idl::{IdlAccountItem, IdlField, IdlInstruction};

/// Static description of one program method, derived from the IDL once when
/// the program is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub args: Vec<IdlField>,
    pub accounts: Vec<IdlAccountItem>,
}

impl From<&IdlInstruction> for MethodDescriptor {
    fn from(ix: &IdlInstruction) -> Self {
        Self {
            name: ix.name.clone(),
            args: ix.args.clone(),
            accounts: ix.accounts.clone(),
        }
    }
}
