use colored::Colorize;
use std::io::{self, Write};

const SEPARATOR: &str = "----------------------------------------";

fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SEPARATOR)
}

/// Prints the response body as received, with a banner in interactive mode.
pub fn write_response<W: Write>(out: &mut W, body: &str, interactive: bool) -> io::Result<()> {
    if interactive {
        write_banner(out, &"Response:".green().bold().to_string())?;
    }
    writeln!(out, "{}", body)?;
    out.flush()
}

/// Prints the error description, with a banner in interactive mode.
pub fn write_error<W: Write>(
    out: &mut W,
    err: &anyhow::Error,
    interactive: bool,
) -> io::Result<()> {
    if interactive {
        write_banner(out, &"Error:".red().bold().to_string())?;
    }
    writeln!(out, "{}", err)?;
    out.flush()
}
