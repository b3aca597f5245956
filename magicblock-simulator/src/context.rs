use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use magicblock_idl::IdlValue;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signer::Signer,
};

pub type SharedSigner = Arc<dyn Signer + Send + Sync>;

// -----------------
// Context
// -----------------
/// Trailing, optional argument of a method call carrying everything that is
/// not an instruction argument.
#[derive(Clone, Default)]
pub struct Context {
    /// Accounts by their IDL name. Accounts of nested groups can be given
    /// either by their own name or as `<group>.<name>`.
    pub accounts: IndexMap<String, Pubkey>,
    pub remaining_accounts: Vec<AccountMeta>,
    pub signers: Vec<SharedSigner>,
    pub pre_instructions: Vec<Instruction>,
    pub post_instructions: Vec<Instruction>,
    pub options: SimulateOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulateOptions {
    pub commitment: Option<CommitmentConfig>,
}

impl Context {
    pub fn with_account(mut self, name: &str, pubkey: Pubkey) -> Self {
        self.accounts.insert(name.to_string(), pubkey);
        self
    }

    pub fn with_signer(mut self, signer: SharedSigner) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn with_remaining_account(mut self, meta: AccountMeta) -> Self {
        self.remaining_accounts.push(meta);
        self
    }

    pub fn with_pre_instruction(mut self, ix: Instruction) -> Self {
        self.pre_instructions.push(ix);
        self
    }

    pub fn with_post_instruction(mut self, ix: Instruction) -> Self {
        self.post_instructions.push(ix);
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.options.commitment = Some(commitment);
        self
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signers = self
            .signers
            .iter()
            .map(|signer| signer.pubkey())
            .collect::<Vec<_>>();
        f.debug_struct("Context")
            .field("accounts", &self.accounts)
            .field("remaining_accounts", &self.remaining_accounts)
            .field("signers", &signers)
            .field("pre_instructions", &self.pre_instructions.len())
            .field("post_instructions", &self.post_instructions.len())
            .field("options", &self.options)
            .finish()
    }
}

// -----------------
// MethodArg
// -----------------
#[derive(Debug, Clone)]
pub enum MethodArg {
    Value(IdlValue),
    Context(Context),
}

impl MethodArg {
    pub fn value(value: impl Into<IdlValue>) -> Self {
        MethodArg::Value(value.into())
    }
}

impl From<IdlValue> for MethodArg {
    fn from(value: IdlValue) -> Self {
        MethodArg::Value(value)
    }
}

impl From<Context> for MethodArg {
    fn from(ctx: Context) -> Self {
        MethodArg::Context(ctx)
    }
}
