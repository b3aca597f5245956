use magicblock_idl::{Idl, IdlAccountItem, IdlValue, InstructionCoder};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    message::Message,
    pubkey::Pubkey,
    transaction::Transaction,
};

use crate::{
    errors::{SimulatorError, SimulatorResult},
    split_args_and_context, Context, MethodArg, MethodDescriptor,
};

pub trait TransactionBuilder: Send + Sync {
    /// Builds the unsigned transaction invoking `method` with `args`.
    /// `args` are the raw call arguments, including the trailing context.
    fn build(
        &self,
        method: &MethodDescriptor,
        args: &[MethodArg],
    ) -> SimulatorResult<Transaction>;
}

// -----------------
// IdlTransactionBuilder
// -----------------
pub struct IdlTransactionBuilder {
    program_id: Pubkey,
    payer: Pubkey,
    coder: InstructionCoder,
}

impl IdlTransactionBuilder {
    pub fn new(program_id: Pubkey, payer: Pubkey, idl: &Idl) -> Self {
        Self {
            program_id,
            payer,
            coder: InstructionCoder::new(idl),
        }
    }

    pub fn instruction(
        &self,
        method: &MethodDescriptor,
        values: &[IdlValue],
        ctx: &Context,
    ) -> SimulatorResult<Instruction> {
        let data = self
            .coder
            .encode(&method.name, &method.args, values)
            .map_err(|err| {
                SimulatorError::MalformedArguments(format!(
                    "failed to encode arguments of '{}': {err}",
                    method.name
                ))
            })?;

        let mut accounts = vec![];
        self.resolve_accounts(&method.accounts, None, ctx, &mut accounts)?;
        accounts.extend(ctx.remaining_accounts.iter().cloned());

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data,
        })
    }

    fn resolve_accounts(
        &self,
        items: &[IdlAccountItem],
        group: Option<&str>,
        ctx: &Context,
        metas: &mut Vec<AccountMeta>,
    ) -> SimulatorResult<()> {
        for item in items {
            match item {
                IdlAccountItem::Account(account) => {
                    let qualified = group
                        .map(|group| format!("{group}.{}", account.name));
                    let pubkey = qualified
                        .as_ref()
                        .and_then(|name| ctx.accounts.get(name))
                        .or_else(|| ctx.accounts.get(&account.name))
                        .copied();
                    let meta = match pubkey {
                        Some(pubkey) if account.is_mut => {
                            AccountMeta::new(pubkey, account.is_signer)
                        }
                        Some(pubkey) => {
                            AccountMeta::new_readonly(pubkey, account.is_signer)
                        }
                        // Omitted optional accounts are passed as the
                        // program id itself.
                        None if account.is_optional => {
                            AccountMeta::new_readonly(self.program_id, false)
                        }
                        None => {
                            return Err(SimulatorError::MalformedArguments(
                                format!(
                                    "account '{}' not provided",
                                    qualified.unwrap_or(account.name.clone())
                                ),
                            ))
                        }
                    };
                    metas.push(meta);
                }
                IdlAccountItem::Accounts(nested) => {
                    let name = match group {
                        Some(group) => format!("{group}.{}", nested.name),
                        None => nested.name.clone(),
                    };
                    self.resolve_accounts(
                        &nested.accounts,
                        Some(&name),
                        ctx,
                        metas,
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl TransactionBuilder for IdlTransactionBuilder {
    fn build(
        &self,
        method: &MethodDescriptor,
        args: &[MethodArg],
    ) -> SimulatorResult<Transaction> {
        let (values, ctx) = split_args_and_context(&method.args, args)?;
        let ix = self.instruction(method, &values, &ctx)?;

        let mut ixs = ctx.pre_instructions.clone();
        ixs.push(ix);
        ixs.extend(ctx.post_instructions.iter().cloned());

        let message = Message::new(&ixs, Some(&self.payer));
        Ok(Transaction::new_unsigned(message))
    }
}
