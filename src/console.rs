use crate::error::{Error, Result};
use std::io::{self, Write};

/// Print a label and read one trimmed line from stdin
pub fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt for a 1-based selection against a list of `len` options
pub fn prompt_selection(label: &str, len: usize) -> Result<usize> {
    let input = prompt_line(label)?;
    let choice: usize = input
        .parse()
        .map_err(|_| Error::Selection(format!("'{input}' is not a number")))?;
    check_selection(choice, len)
}

/// Validate a 1-based selection, whether typed or passed as a flag
pub fn check_selection(choice: usize, len: usize) -> Result<usize> {
    if choice == 0 || choice > len {
        return Err(Error::Selection(format!(
            "{choice} is out of range (expected 1-{len})"
        )));
    }
    Ok(choice)
}
