use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use console::Term;

const PATH_PROMPT: &str = "Enter the path to the file containing IP addresses: ";

/// Asks for the input file on the terminal. Falls back to plain stdin when
/// nobody is sitting at the terminal, so the path can be piped in.
pub fn ask_for_path() -> anyhow::Result<PathBuf> {
    let term = Term::stdout();
    term.write_str(PATH_PROMPT)?;
    term.flush()?;

    let answer = if term.features().is_attended() {
        term.read_line()?
    } else {
        read_piped(io::stdin().lock(), &mut io::stdout())?
    };

    Ok(PathBuf::from(answer.trim()))
}

/// Reads one line from `input` and ends the prompt line on `out`, since a
/// piped answer is never echoed.
fn read_piped<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(out)?;
    out.flush()?;
    Ok(line)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
