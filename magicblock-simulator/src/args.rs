use magicblock_idl::{IdlField, IdlValue};

use crate::{
    errors::{SimulatorError, SimulatorResult},
    Context, MethodArg,
};

/// Splits a method call's arguments into the positional instruction
/// arguments and the optional trailing [Context].
///
/// The context is only recognized when exactly one argument more than the
/// schema declares was supplied.
pub fn split_args_and_context(
    schema: &[IdlField],
    args: &[MethodArg],
) -> SimulatorResult<(Vec<IdlValue>, Context)> {
    let (positional, ctx) = if args.len() < schema.len() {
        return Err(SimulatorError::MalformedArguments(format!(
            "expected {} arguments, got {}",
            schema.len(),
            args.len()
        )));
    } else if args.len() == schema.len() {
        (args, Context::default())
    } else if args.len() == schema.len() + 1 {
        match args.split_last() {
            Some((MethodArg::Context(ctx), positional)) => {
                (positional, ctx.clone())
            }
            _ => {
                return Err(SimulatorError::MalformedArguments(
                    "trailing argument must be the call context".to_string(),
                ))
            }
        }
    } else {
        return Err(SimulatorError::MalformedArguments(format!(
            "provided too many arguments: expected at most {}, got {}",
            schema.len() + 1,
            args.len()
        )));
    };

    let values = positional
        .iter()
        .zip(schema)
        .map(|(arg, field)| match arg {
            MethodArg::Value(value) => Ok(value.clone()),
            MethodArg::Context(_) => Err(SimulatorError::MalformedArguments(
                format!("expected a value for argument '{}'", field.name),
            )),
        })
        .collect::<SimulatorResult<Vec<_>>>()?;

    Ok((values, ctx))
}
