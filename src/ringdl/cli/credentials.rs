use console::Term;
use ringdl::error::{RingError, Result};
use std::io::{self, BufRead};

#[cfg_attr(test, derive(Debug))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Uses the flag values, prompting for whichever is missing.
///
/// On a terminal the password prompt does not echo. Without one (stderr
/// redirected, input piped) the answers are read line by line from stdin.
pub fn collect(username: Option<String>, password: Option<String>) -> Result<Credentials> {
    let term = Term::stderr();
    if !term.is_term() {
        return collect_lines(username, password, &mut io::stdin().lock());
    }

    let username = resolve(username, "username", || {
        term.write_str("Username: ")?;
        term.read_line()
    })?;
    let password = resolve(password, "password", || {
        term.write_str("Password: ")?;
        term.read_secure_line()
    })?;

    Ok(Credentials { username, password })
}

fn collect_lines<R: BufRead>(
    username: Option<String>,
    password: Option<String>,
    input: &mut R,
) -> Result<Credentials> {
    let username = resolve(username, "username", || {
        eprint!("Username: ");
        read_answer(input)
    })?;
    let password = resolve(password, "password", || {
        eprint!("Password: ");
        read_answer(input)
    })?;

    Ok(Credentials { username, password })
}

/// One line without its terminator. End of input or a blank line is an error.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.is_empty() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(answer.to_string())
}

fn resolve<F>(value: Option<String>, what: &'static str, prompt: F) -> Result<String>
where
    F: FnOnce() -> io::Result<String>,
{
    match value {
        Some(value) => Ok(value),
        None => prompt().map_err(|e| {
            tracing::debug!(error = %e, "{} prompt failed", what);
            RingError::Prompt(what)
        }),
    }
}
