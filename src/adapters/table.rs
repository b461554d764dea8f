use crate::domain::model::Person;
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

pub const EMPTY_MESSAGE: &str = "List is empty";

/// Renders people as a bordered table.
pub struct TablePresenter<W: Write> {
    out: W,
    diagnostics: Box<dyn Write>,
}

impl TablePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), Box::new(std::io::stderr()))
    }
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W, diagnostics: Box<dyn Write>) -> Self {
        Self { out, diagnostics }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn show(&mut self, people: &[Person]) -> Result<()> {
        if people.is_empty() {
            writeln!(self.out, "{}", EMPTY_MESSAGE)?;
            return Ok(());
        }

        let line = format!(
            "+-{}-+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(4),
            "-".repeat(30),
            "-".repeat(30),
            "-".repeat(20),
            "-".repeat(20)
        );
        writeln!(self.out, "{}", line)?;
        writeln!(
            self.out,
            "| {:^4} | {:^30} | {:^30} | {:^20} | {:^20} |",
            "No", "Surname", "Name", "Zodiac", "Birthday"
        )?;
        writeln!(self.out, "{}", line)?;

        for (idx, person) in people.iter().enumerate() {
            writeln!(
                self.out,
                "| {:>4} | {:<30} | {:<30} | {:<20} | {:>20} |",
                idx + 1,
                person.surname,
                person.name,
                person.zodiac.as_deref().unwrap_or(""),
                person.birthday_text()
            )?;
        }
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn diagnostic(&mut self, message: &str) -> Result<()> {
        writeln!(self.diagnostics, "{}", message)?;
        Ok(())
    }
}
