use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cli::command::{Cli, MenuCommand, RowAction};
use crate::cli::render::Renderer;
use crate::domain::{GroupedContactStore, Section, SharedContactStore, Snapshot};
use crate::errors::AppError;

enum Flow {
    Continue,
    EndOfInput,
}

/// One interactive screen session over a store.
///
/// Row numbers typed by the user refer to the last snapshot drawn, the same
/// way a list view resolves a tapped row to the item it displayed. Other
/// holders of the shared store may change it in between, so a row can point
/// at a contact that is already gone.
pub struct Session<R, W> {
    store: SharedContactStore,
    renderer: Box<dyn Renderer>,
    input: R,
    output: W,
    last: Snapshot,
}

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let store = if cli.empty {
        GroupedContactStore::new()
    } else {
        GroupedContactStore::with_demo_seed()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        SharedContactStore::new(store),
        cli.format.renderer(),
        stdin.lock(),
        stdout.lock(),
    )?;
    session.run()
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        store: SharedContactStore,
        renderer: Box<dyn Renderer>,
        input: R,
        output: W,
    ) -> Result<Self, AppError> {
        let last = store.snapshot()?;
        Ok(Self {
            store,
            renderer,
            input,
            output,
            last,
        })
    }

    pub fn store(&self) -> &SharedContactStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- Contacts ---")?;
        self.render()?;

        loop {
            self.show_menu()?;

            let Some(action) = self.read_input()? else {
                break;
            };

            let flow = match MenuCommand::parse(&action) {
                Ok(MenuCommand::AddContact) => self.add_contact()?,
                Ok(MenuCommand::ListContacts) => {
                    self.render()?;
                    Flow::Continue
                }
                Ok(MenuCommand::DeleteContact) => self.row_action(RowAction::Delete)?,
                Ok(MenuCommand::ToggleFavorite) => self.row_action(RowAction::ToggleFavorite)?,
                Ok(MenuCommand::Exit) => break,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    Flow::Continue
                }
            };

            if let Flow::EndOfInput = flow {
                break;
            }
        }

        writeln!(self.output, "\nBye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_contact(&mut self) -> Result<Flow, AppError> {
        'form: loop {
            writeln!(self.output, "\nEnter contact name \n* to go back: ")?;
            let Some(name) = self.read_input()? else {
                return Ok(Flow::EndOfInput);
            };
            if name == "*" {
                return Ok(Flow::Continue);
            }

            writeln!(
                self.output,
                "\nChoose section: 1. {}  2. {} \n* to go back: ",
                Section::Ceo.choice_label(),
                Section::Peasants.choice_label()
            )?;
            let Some(choice) = self.read_input()? else {
                return Ok(Flow::EndOfInput);
            };
            if choice == "*" {
                return Ok(Flow::Continue);
            }

            let section = match Section::from_choice(&choice) {
                Ok(section) => section,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue 'form;
                }
            };

            self.confirm_action(&format!(
                "add '{}' to {}",
                name.trim(),
                section.choice_label()
            ))?;
            let Some(consent) = self.read_input()? else {
                return Ok(Flow::EndOfInput);
            };
            if consent.to_lowercase() != "y" {
                writeln!(self.output, "Cancelled.")?;
                return Ok(Flow::Continue);
            }

            match self.store.add(&name, section) {
                Ok(_) => {
                    writeln!(self.output, "Contact added successfully!")?;
                    self.render()?;
                    return Ok(Flow::Continue);
                }
                Err(e) if e.is_invalid_input() => {
                    writeln!(self.output, "{}", e)?;
                    continue 'form;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn row_action(&mut self, action: RowAction) -> Result<Flow, AppError> {
        if self.last.is_empty() {
            writeln!(self.output, "No contact in contact list!")?;
            return Ok(Flow::Continue);
        }

        loop {
            writeln!(
                self.output,
                "\nEnter row number to {} \n* to go back: ",
                action.verb()
            )?;
            let Some(input) = self.read_input()? else {
                return Ok(Flow::EndOfInput);
            };
            if input == "*" {
                return Ok(Flow::Continue);
            }

            let Ok(row) = input.parse::<usize>() else {
                writeln!(self.output, "'{}' is not a row number", input)?;
                continue;
            };

            let Some(handle) = self.last.handle_at(row) else {
                writeln!(self.output, "No contact at row {}", row)?;
                continue;
            };

            let result = match action {
                RowAction::Delete => self.store.remove(handle),
                RowAction::ToggleFavorite => self.store.toggle_favorite(handle),
            };

            match result {
                Ok(()) => writeln!(self.output, "{}", action.done_message())?,
                // The row is already gone, nothing left to do
                Err(e) if e.is_not_found() => debug!(%handle, ?action, "ignoring stale row action"),
                Err(e) => return Err(e),
            }

            self.render()?;
            return Ok(Flow::Continue);
        }
    }

    fn render(&mut self) -> Result<(), AppError> {
        self.last = self.store.snapshot()?;
        let text = self.renderer.render(&self.last)?;
        writeln!(self.output, "\n{}", text)?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n{}", MenuCommand::MENU)?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn confirm_action(&mut self, action: &str) -> Result<(), AppError> {
        writeln!(self.output, "\nAre you sure you want to {}? (y/n)", action)?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed line, or `None` once input is exhausted.
    fn read_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}
