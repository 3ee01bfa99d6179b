//! Interactive re-prompt loop.
//!
//! Generic over the reader and writer so the loop can be driven from tests.

use crate::validation::password::{InputError, PasswordRules, QUIT_CODE};
use std::io::{self, BufRead, Write};

/// Prompt until a valid password is entered.
///
/// Returns `Ok(None)` when the user quits or input reaches end of file.
pub fn prompt_for_password<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rules: &PasswordRules,
) -> io::Result<Option<String>> {
    let mut last_error: Option<InputError> = None;

    loop {
        writeln!(output, "Please Enter a Password! (Press {} to Exit)", QUIT_CODE)?;
        writeln!(output)?;
        writeln!(output, "The password must be:")?;
        for line in rules.describe() {
            writeln!(output, "{}", line)?;
        }
        if let Some(err) = &last_error {
            writeln!(output, "{}", err)?;
        }
        write!(output, "Your password is: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match rules.validate(&line) {
            Ok(password) => return Ok(Some(password.to_string())),
            Err(InputError::Quit) => {
                writeln!(output, "{}", InputError::Quit)?;
                return Ok(None);
            }
            Err(err) => last_error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(lines: &str) -> (Option<String>, String) {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        let password =
            prompt_for_password(&mut input, &mut output, &PasswordRules::default()).unwrap();
        (password, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_first_valid_line() {
        let (password, output) = drive("123456\n");
        assert_eq!(password.as_deref(), Some("123456"));
        assert_eq!(output.matches("Your password is: ").count(), 1);
    }

    #[test]
    fn test_reprompts_with_message() {
        let (password, output) = drive("\n12ab56\n654321\n");

        assert_eq!(password.as_deref(), Some("654321"));
        assert_eq!(output.matches("Your password is: ").count(), 3);
        assert!(output.contains("Password cannot be empty."));
        assert!(output.contains("Password should be made up of the symbols '0'..='9' only."));
    }

    #[test]
    fn test_quit() {
        let (password, output) = drive("123\nq\n");
        assert_eq!(password, None);
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_end_of_input() {
        let (password, _) = drive("");
        assert_eq!(password, None);
    }
}
