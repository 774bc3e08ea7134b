//! Demo command table with four integer operations

use core::fmt::Write;

use crate::command::{Args, Command, CommandError};

pub static COMMANDS: [Command; 4] = [
    Command::new("add", "add [parm1] [parm2]", add),
    Command::new("sub", "sub [parm1] [parm2]", sub),
    Command::new("mul", "mul [parm1] [parm2]", mul),
    Command::new("div", "div [parm1] [parm2]", div),
];

fn operand(args: &dyn Args, index: usize) -> Result<i32, CommandError> {
    args.arg(index)
        .ok_or(CommandError::InvalidArgument)?
        .parse()
        .map_err(|_| CommandError::InvalidArgument)
}

fn operands(args: &dyn Args) -> Result<(i32, i32), CommandError> {
    Ok((operand(args, 1)?, operand(args, 2)?))
}

fn add(args: &dyn Args, out: &mut dyn Write) -> Result<(), CommandError> {
    let (a, b) = operands(args)?;
    write!(out, "add = {}\r\n", a.wrapping_add(b))?;
    Ok(())
}

fn sub(args: &dyn Args, out: &mut dyn Write) -> Result<(), CommandError> {
    let (a, b) = operands(args)?;
    write!(out, "sub = {}\r\n", a.wrapping_sub(b))?;
    Ok(())
}

fn mul(args: &dyn Args, out: &mut dyn Write) -> Result<(), CommandError> {
    let (a, b) = operands(args)?;
    write!(out, "mul = {}\r\n", a.wrapping_mul(b))?;
    Ok(())
}

fn div(args: &dyn Args, out: &mut dyn Write) -> Result<(), CommandError> {
    let (a, b) = operands(args)?;

    if b == 0 {
        return Err(CommandError::DivisionByZero);
    }

    write!(out, "div = {}\r\n", a.wrapping_div(b))?;
    Ok(())
}
