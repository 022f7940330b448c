//! The `giftbank assemble` command: an interactive exam assembly session.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use giftbank_core::config::GiftbankConfig;
use giftbank_core::exam::exam_path;
use giftbank_core::staging::{JsonStagingFile, StagingStore};
use giftbank_core::{ExamDraft, ExamError, Question, QuestionKind};

use super::bank::{filter_by_keyword, filter_by_kind};
use super::load_bank;
use crate::prompt::Prompter;

const HELP: &str = "\
Commands:
  list            list every question of the bank
  search <word>   list questions containing a keyword
  kind <kind>     list questions of one kind
  show <n>        print question n of the last listing
  add <n>         add question n of the last listing to the exam
  remove <n>      remove question n of the selection
  selected        list the selected questions
  check           check that the exam can be saved
  save <name>     save the exam as <name>.gift
  help            show this help
  quit            leave the session";

pub fn execute(config: &GiftbankConfig, bank: Option<PathBuf>) -> Result<()> {
    let questions = load_bank(config, bank)?;
    let store = JsonStagingFile::new(&config.staging_file);

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout().lock());

    let mut session = Session::start(&questions, store, &config.exams_dir)?;
    session.run(&mut prompter)
}

/// An assembly session over a question bank.
pub struct Session<'a, S> {
    bank: &'a [Question],
    draft: ExamDraft,
    /// Bank positions shown by the last listing command.
    listing: Vec<usize>,
    store: S,
    exams_dir: PathBuf,
    /// Questions left in the staging store by an earlier session.
    discarded: usize,
}

impl<'a, S: StagingStore> Session<'a, S> {
    /// Open a session with an empty selection, clearing any stale staging.
    pub fn start(bank: &'a [Question], store: S, exams_dir: &Path) -> Result<Self> {
        let discarded = match store.load() {
            Ok(stale) => stale.len(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable staging discarded");
                0
            }
        };
        store.clear()?;
        Ok(Self {
            bank,
            draft: ExamDraft::new(),
            listing: Vec::new(),
            store,
            exams_dir: exams_dir.to_path_buf(),
            discarded,
        })
    }

    #[cfg(test)]
    pub fn draft(&self) -> &ExamDraft {
        &self.draft
    }

    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.say(format!(
            "{} question(s) in the bank. Type 'help' for the list of commands.",
            self.bank.len()
        ))?;
        if self.discarded > 0 {
            p.say(format!(
                "Discarded {} question(s) staged by a previous session.",
                self.discarded
            ))?;
        }

        while let Some(line) = p.ask("giftbank> ")? {
            let line = line.trim();
            let (command, arg) = line
                .split_once(char::is_whitespace)
                .map(|(c, a)| (c, a.trim()))
                .unwrap_or((line, ""));

            match command {
                "" => {}
                "list" => {
                    self.listing = (0..self.bank.len()).collect();
                    self.print_listing(p)?;
                }
                "search" if !arg.is_empty() => {
                    self.listing = filter_by_keyword(self.bank, arg).map(|(i, _)| i).collect();
                    self.print_listing(p)?;
                }
                "search" => p.say("Usage: search <word>")?,
                "kind" => match arg.parse::<QuestionKind>() {
                    Ok(kind) => {
                        self.listing = filter_by_kind(self.bank, kind).map(|(i, _)| i).collect();
                        self.print_listing(p)?;
                    }
                    Err(e) => p.say(e)?,
                },
                "show" => {
                    if let Some(question) = self.listed(p, arg)? {
                        p.say(&question.raw_block)?;
                    }
                }
                "add" => {
                    if let Some(question) = self.listed(p, arg)? {
                        let title = question.title.clone();
                        match self.draft.add(question.clone()) {
                            Ok(()) => {
                                self.stage(p)?;
                                p.say(format!(
                                    "Added '{title}' ({} selected).",
                                    self.draft.len()
                                ))?;
                            }
                            Err(e) => p.say(e)?,
                        }
                    }
                }
                "remove" => match parse_position(arg).and_then(|i| self.draft.remove(i)) {
                    Some(question) => {
                        self.stage(p)?;
                        p.say(format!(
                            "Removed '{}' ({} selected).",
                            question.title,
                            self.draft.len()
                        ))?;
                    }
                    None => p.say(format!("No selected question number '{arg}'."))?,
                },
                "selected" => self.print_selection(p)?,
                "check" => match self.draft.validate() {
                    Ok(()) => p.say(format!(
                        "The exam is valid ({} questions).",
                        self.draft.len()
                    ))?,
                    Err(e) => self.explain(p, &e)?,
                },
                "save" => self.save(p, arg)?,
                "help" => p.say(HELP)?,
                "quit" | "exit" => break,
                other => p.say(format!(
                    "Unknown command '{other}'. Type 'help' for the list of commands."
                ))?,
            }
        }

        Ok(())
    }

    fn save<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>, name: &str) -> Result<()> {
        let path = match exam_path(&self.exams_dir, name) {
            Ok(path) => path,
            Err(e) => return p.say(e),
        };
        if let Err(e) = self.draft.validate() {
            return self.explain(p, &e);
        }

        let overwrite = path.exists();
        if overwrite
            && p.confirm(&format!("{} already exists. Overwrite it?", path.display()))? != Some(true)
        {
            return p.say("Save cancelled.");
        }

        let saved = match self.draft.save(&path, overwrite) {
            Ok(saved) => saved,
            Err(e) => return p.say(format!("Could not save the exam: {e:#}")),
        };
        self.draft.clear();
        p.say(format!("Exam saved to {}.", saved.display()))?;
        if let Err(e) = self.store.clear() {
            p.say(format!("Could not clear the staging file: {e:#}"))?;
        }
        Ok(())
    }

    /// Write the selection to the staging store. A failed write is reported
    /// and the session goes on with the in-memory selection.
    fn stage<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        match self.store.save(self.draft.questions()) {
            Ok(()) => Ok(()),
            Err(e) => p.say(format!("Could not update the staging file: {e:#}")),
        }
    }

    fn explain<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>, e: &ExamError) -> Result<()> {
        p.say(e)?;
        if e.is_selection_problem() {
            p.say("Use 'add' and 'remove' to adjust the selection, then 'check' again.")?;
        }
        Ok(())
    }

    /// The bank question at 1-based position `arg` of the last listing.
    fn listed<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        arg: &str,
    ) -> Result<Option<&'a Question>> {
        let bank = self.bank;
        let question = parse_position(arg)
            .and_then(|i| self.listing.get(i))
            .map(|&idx| &bank[idx]);
        if question.is_none() {
            p.say(format!(
                "No question number '{arg}' in the last listing. Use 'list' first."
            ))?;
        }
        Ok(question)
    }

    fn print_listing<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        if self.listing.is_empty() {
            return p.say("No matching questions.");
        }
        for (n, &idx) in self.listing.iter().enumerate() {
            let question = &self.bank[idx];
            let mark = if self.draft.contains_title(&question.title) {
                "*"
            } else {
                " "
            };
            p.say(format!(
                "{mark}{:>3}. [{}] {}",
                n + 1,
                question.kind,
                question.title
            ))?;
        }
        Ok(())
    }

    fn print_selection<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        if self.draft.is_empty() {
            return p.say("No question selected.");
        }
        for (n, question) in self.draft.questions().iter().enumerate() {
            p.say(format!("{:>4}. [{}] {}", n + 1, question.kind, question.title))?;
        }
        p.say(format!("{} question(s) selected.", self.draft.len()))
    }
}

/// 1-based position to index.
fn parse_position(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()?.checked_sub(1)
}
