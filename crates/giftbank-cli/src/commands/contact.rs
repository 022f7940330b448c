//! The `giftbank contact` command: fill in a contact card, export a vCard.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use giftbank_core::contact::{Contact, ContactForm, Step};

use crate::prompt::Prompter;

pub fn execute(output: &Path) -> Result<()> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout().lock());

    let Some(contact) = fill(&mut prompter)? else {
        anyhow::bail!("contact form interrupted, no vCard written");
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, contact.to_vcard())
        .with_context(|| format!("failed to write vCard to {}", output.display()))?;
    prompter.say(format!("vCard written to {}", output.display()))
}

/// Ask every field in turn, repeating a field until its value is valid.
/// `None` if input ends before the form is complete.
pub fn fill<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Option<Contact>> {
    let mut form = ContactForm::new();

    while let Some(field) = form.current() {
        let Some(value) = p.ask(field.prompt())? else {
            return Ok(None);
        };
        match form.submit(&value) {
            Ok(Step::Next(_)) => {}
            Ok(Step::Done) => break,
            Err(e) => p.say(format!("{e}. Please try again."))?,
        }
    }

    Ok(form.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const VALID: &str = "Doe\nJane\njane.doe@example.com\n+33123456789\n0612345678\n\
                         1 rue de la Paix;75002;Paris;France\nUniversity\nB204\n";

    #[test]
    fn fills_every_field() {
        let mut p = Prompter::new(Cursor::new(VALID), Vec::new());
        let contact = fill(&mut p).unwrap().unwrap();

        assert_eq!(contact.email, "jane.doe@example.com");
        assert!(contact.to_vcard().contains("FN:Jane Doe"));
    }

    #[test]
    fn invalid_value_is_asked_again() {
        let input = VALID.replacen("jane.doe@example.com", "not-an-email\njane.doe@example.com", 1);
        let mut p = Prompter::new(Cursor::new(input), Vec::new());
        let contact = fill(&mut p).unwrap();
        let out = String::from_utf8(p.into_output()).unwrap();

        assert!(contact.is_some());
        assert!(out.contains("Please try again."));
    }

    #[test]
    fn interrupted_form_yields_nothing() {
        let mut p = Prompter::new(Cursor::new("Doe\nJane\n"), Vec::new());
        assert!(fill(&mut p).unwrap().is_none());
    }
}
