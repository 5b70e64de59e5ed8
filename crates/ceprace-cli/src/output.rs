use std::io::{self, Write};

use ceprace_core::RaceOutcome;

use crate::error::CliError;

pub const TIMEOUT_MESSAGE: &str = "Erro: timeout - nenhuma API respondeu em 1 segundo";

pub fn render(outcome: &RaceOutcome) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_outcome(&mut handle, outcome)?;
    handle.flush()?;
    Ok(())
}

pub fn write_outcome<W: Write>(writer: &mut W, outcome: &RaceOutcome) -> io::Result<()> {
    match outcome {
        RaceOutcome::Won(result) => {
            writeln!(writer, "API mais rápida: {}", result.provider_name())?;
            writeln!(writer, "Endereço: {}", result.formatted_address())
        }
        RaceOutcome::TimedOut => writeln!(writer, "{TIMEOUT_MESSAGE}"),
    }
}
