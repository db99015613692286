//! # Interactive Session
//!
//! A [`Session`] owns one [`Catalogue`] and one [`Terminal`] and runs the
//! menu loop over them:
//!
//! ```text
//! menu -> add | search | update | delete | print -> menu
//!      -> exit
//! ```
//!
//! Operations run one at a time and always return to the menu. Bad input is
//! handled inside the prompt loops, lookup misses and duplicate names are
//! reported to the user, and nothing is fatal except the input stream
//! closing ([`TerminalError`]).
//!
//! ## Example
//! ```rust,no_run
//! use monster_catalogue::session::{Session, SessionOptions};
//! use monster_catalogue::utils::Terminal;
//!
//! let mut session = Session::new(Terminal::stdio(), SessionOptions::default());
//! session.run().unwrap();
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalogue::{Catalogue, Stat, StatValue, Stats, parse_stat_edit};
use crate::error::{CatalogueError, TerminalError};
use crate::formatter::{CatalogueFormatter, TableFormatter};
use crate::menu::MenuChoice;
use crate::utils::{FilterErrorNot, Sanitize, Terminal};

/// Startup settings for a [`Session`].
///
/// # Default
///
/// ```rust,ignore
/// SessionOptions {
///     seeded: true,
///     show_banner: true,
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Start from the eight starter cards instead of an empty catalogue.
    pub seeded: bool,
    /// Print the welcome line when [`Session::run`] starts.
    pub show_banner: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seeded: true,
            show_banner: true,
        }
    }
}

pub struct Session<R, W, F = TableFormatter> {
    catalogue: Catalogue,
    terminal: Terminal<R, W>,
    formatter: F,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W, TableFormatter> {
    pub fn new(terminal: Terminal<R, W>, options: SessionOptions) -> Self {
        Session::with_formatter(terminal, options, TableFormatter)
    }
}

impl<R: BufRead, W: Write, F: CatalogueFormatter> Session<R, W, F> {
    pub fn with_formatter(terminal: Terminal<R, W>, options: SessionOptions, formatter: F) -> Self {
        let catalogue = if options.seeded {
            Catalogue::seeded()
        } else {
            Catalogue::new()
        };
        Session {
            catalogue,
            terminal,
            formatter,
            options,
        }
    }

    pub fn into_parts(self) -> (Catalogue, Terminal<R, W>) {
        (self.catalogue, self.terminal)
    }

    /// Runs the menu loop until the user picks Exit.
    pub fn run(&mut self) -> Result<(), TerminalError> {
        if self.options.show_banner {
            self.terminal.say("WELCOME TO THE MONSTER CARD CATALOGUE")?;
        }

        loop {
            let choice = self.read_menu_choice()?;
            debug!(?choice, "menu dispatch");

            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Update => self.update(None)?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::PrintAll => self.print_all()?,
                MenuChoice::Exit => {
                    self.terminal.say("Exiting the Monster Card. Goodbye!")?;
                    break Ok(());
                }
            }
        }
    }

    fn read_menu_choice(&mut self) -> Result<MenuChoice, TerminalError> {
        self.terminal.say("")?;
        self.terminal.say("MONSTER CARD CATALOGUE MENU")?;
        for choice in MenuChoice::ALL {
            self.terminal.say(choice)?;
        }

        let (first, last) = (MenuChoice::FIRST, MenuChoice::LAST);
        let filters = [Sanitize::IsBetween(first.into(), last.into())];
        self.terminal.ask_with(
            &format!("Enter your choice ({}-{}): ", first, last),
            |answer: &str| -> Result<MenuChoice, FilterErrorNot> {
                let answer = Sanitize::execute(answer, &filters)?;
                answer
                    .parse::<u8>()
                    .ok()
                    .and_then(|n| MenuChoice::try_from(n).ok())
                    .ok_or(FilterErrorNot::Between(first.into(), last.into()))
            },
        )
    }

    /// Adds a card, or redirects into [`Session::update`] for a taken name.
    pub fn add(&mut self) -> Result<(), TerminalError> {
        self.terminal.say("")?;
        self.terminal.say("ADD NEW MONSTER CARD")?;

        let name = loop {
            let name = self.terminal.ask(
                "Enter monster name: ",
                &[Sanitize::NotEmpty("Monster name".to_string())],
            )?;
            if !self.catalogue.contains(&name) {
                break name;
            }

            self.terminal
                .say("This monster already exists in the catalogue.")?;
            if self
                .terminal
                .confirm("Do you want to update it instead? (y/n): ")?
            {
                return self.update(Some(&name));
            }
        };

        self.terminal.say("Enter the monster's stats:")?;
        let stats = Stats {
            strength: self.read_stat(Stat::Strength)?,
            speed: self.read_stat(Stat::Speed)?,
            stealth: self.read_stat(Stat::Stealth)?,
            cunning: self.read_stat(Stat::Cunning)?,
        };

        if let Err(e) = self.catalogue.insert(&name, stats) {
            return self.terminal.say(e);
        }

        self.terminal.say("")?;
        self.terminal.say("New monster card added:")?;
        self.show_card(&name, &stats)?;

        // Declining only reopens the stats; the name stays as entered.
        if !self.terminal.confirm("Is this correct? (y/n): ")? {
            let edited = self.edit_stats(stats)?;
            if let Err(e) = self.catalogue.replace(&name, edited) {
                self.terminal.say(e)?;
            }
        }
        Ok(())
    }

    pub fn search(&mut self) -> Result<(), TerminalError> {
        self.terminal.say("")?;
        self.terminal.say("SEARCH FOR MONSTER CARD")?;
        let name = self.terminal.read_line("Enter monster name to search: ")?;

        match self.catalogue.get(&name).copied() {
            Some(stats) => {
                self.terminal.say("")?;
                self.terminal.say("Monster found:")?;
                self.show_card(&name, &stats)
            }
            None => self.terminal.say(CatalogueError::NotFound(name)),
        }
    }

    /// Edits an existing card. `name` is supplied when redirected from add,
    /// otherwise the user is asked for one.
    pub fn update(&mut self, name: Option<&str>) -> Result<(), TerminalError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => {
                self.terminal.say("")?;
                self.terminal.say("UPDATE MONSTER CARD")?;
                self.terminal.read_line("Enter monster name to update: ")?
            }
        };

        let Some(current) = self.catalogue.get(&name).copied() else {
            return self.terminal.say(CatalogueError::NotFound(name));
        };

        self.terminal.say("")?;
        self.terminal.say("Current monster details:")?;
        self.show_card(&name, &current)?;

        let updated = self.edit_stats(current)?;
        if let Err(e) = self.catalogue.replace(&name, updated) {
            return self.terminal.say(e);
        }

        self.terminal.say("")?;
        self.terminal.say("Updated monster details:")?;
        self.show_card(&name, &updated)
    }

    /// Deletes a card after an explicit `y`. Any other answer keeps it.
    pub fn delete(&mut self) -> Result<(), TerminalError> {
        self.terminal.say("")?;
        self.terminal.say("DELETE MONSTER CARD")?;
        let name = self.terminal.read_line("Enter monster name to delete: ")?;

        let Some(stats) = self.catalogue.get(&name).copied() else {
            return self.terminal.say(CatalogueError::NotFound(name));
        };

        self.terminal.say("")?;
        self.terminal.say("Monster to be deleted:")?;
        self.show_card(&name, &stats)?;

        if self
            .terminal
            .confirm("Are you sure you want to delete this monster? (y/n): ")?
        {
            match self.catalogue.remove(&name) {
                Ok(_) => self
                    .terminal
                    .say(format!("Monster '{}' has been deleted.", name))?,
                Err(e) => self.terminal.say(e)?,
            }
        }
        Ok(())
    }

    pub fn print_all(&mut self) -> Result<(), TerminalError> {
        self.terminal.say("")?;
        self.terminal.say("MONSTER CARD CATALOGUE")?;
        let table = self.formatter.format_catalogue(&self.catalogue);
        self.terminal.say(table)
    }

    fn read_stat(&mut self, stat: Stat) -> Result<StatValue, TerminalError> {
        self.terminal.ask_with(
            &format!(
                "Enter {} ({}-{}): ",
                stat,
                StatValue::MIN,
                StatValue::MAX
            ),
            StatValue::parse,
        )
    }

    /// One keep-or-replace prompt per stat; a blank answer keeps the value.
    fn edit_stats(&mut self, mut stats: Stats) -> Result<Stats, TerminalError> {
        self.terminal.say("")?;
        self.terminal
            .say("Enter new stats (press Enter to keep current value):")?;

        for stat in Stat::ALL {
            let current = stats.get(stat);
            let value = self.terminal.ask_with(
                &format!("{} (current: {}): ", stat, current),
                |answer| parse_stat_edit(answer, current),
            )?;
            stats.set(stat, value);
        }
        Ok(stats)
    }

    fn show_card(&mut self, name: &str, stats: &Stats) -> Result<(), TerminalError> {
        let card = self.formatter.format_card(name, stats);
        self.terminal.say(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Catalogue, String, Result<(), TerminalError>) {
        run_script_with(script, SessionOptions::default())
    }

    fn run_script_with(
        script: &str,
        options: SessionOptions,
    ) -> (Catalogue, String, Result<(), TerminalError>) {
        run_bytes(script.as_bytes(), options)
    }

    fn run_bytes(
        script: &[u8],
        options: SessionOptions,
    ) -> (Catalogue, String, Result<(), TerminalError>) {
        let terminal = Terminal::new(Cursor::new(script.to_vec()), Vec::new());
        let mut session = Session::new(terminal, options);
        let result = session.run();
        let (catalogue, terminal) = session.into_parts();
        let (_, output) = terminal.into_inner();
        (catalogue, String::from_utf8(output).unwrap(), result)
    }

    fn stats(strength: i64, speed: i64, stealth: i64, cunning: i64) -> Stats {
        Stats::new(strength, speed, stealth, cunning).unwrap()
    }

    #[test]
    fn add_then_search_round_trips() {
        let (catalogue, output, result) = run_script("1\nWyrm\n10\n10\n10\n10\ny\n2\nWyrm\n6\n");
        assert!(result.is_ok());
        assert_eq!(catalogue.get("Wyrm"), Some(&stats(10, 10, 10, 10)));
        assert_eq!(catalogue.len(), 9);
        assert!(output.contains("New monster card added:"));
        assert!(output.contains("Monster found:\n"));
        assert!(output.contains("Monster: Wyrm\nStrength: 10\nSpeed:    10"));
    }

    #[test]
    fn update_keeps_blank_answers() {
        let (catalogue, output, _) = run_script("3\nHobgoblin\n\n\n20\n\n6\n");
        assert_eq!(catalogue.get("Hobgoblin"), Some(&stats(7, 1, 20, 15)));
        assert!(output.contains("Current monster details:"));
        assert!(output.contains("stealth (current: 25): "));
        assert!(output.contains("Updated monster details:"));
    }

    #[test]
    fn update_reprompts_on_bad_value() {
        let (catalogue, output, _) = run_script("3\nDracula\n30\n\nnine\n9\n\n\n6\n");
        assert_eq!(catalogue.get("Dracula"), Some(&stats(19, 9, 19, 2)));
        assert!(output.contains("Value must be between 1 and 25."));
        assert!(output.contains("Please enter a valid number."));
    }

    #[test]
    fn update_unknown_name_reports_not_found() {
        let (catalogue, output, _) = run_script("3\nNessie\n6\n");
        assert_eq!(catalogue, Catalogue::seeded());
        assert!(output.contains("Monster 'Nessie' not found in the catalogue."));
    }

    #[test]
    fn delete_confirmed_removes_card() {
        let (catalogue, output, _) = run_script("4\nGodzilla\ny\n2\nGodzilla\n6\n");
        assert_eq!(catalogue.len(), 7);
        assert!(!catalogue.contains("Godzilla"));
        assert!(output.contains("Monster 'Godzilla' has been deleted."));
        assert!(output.contains("Monster 'Godzilla' not found in the catalogue."));
    }

    #[test]
    fn delete_declined_keeps_card_silently() {
        let (catalogue, output, _) = run_script("4\nDracula\nn\n6\n");
        assert_eq!(catalogue.len(), 8);
        assert!(catalogue.contains("Dracula"));
        assert!(output.contains("Monster to be deleted:"));
        assert!(!output.contains("has been deleted"));
    }

    #[test]
    fn delete_unknown_name_leaves_size() {
        let (catalogue, output, _) = run_script("4\nKraken\n6\n");
        assert_eq!(catalogue.len(), 8);
        assert!(output.contains("Monster 'Kraken' not found in the catalogue."));
    }

    #[test]
    fn add_duplicate_redirects_to_update() {
        let (catalogue, output, _) = run_script("1\nSasquatch\ny\n5\n\n\n\n6\n");
        assert_eq!(catalogue.len(), 8);
        assert_eq!(catalogue.get("Sasquatch"), Some(&stats(5, 6, 21, 19)));
        assert!(output.contains("This monster already exists in the catalogue."));
    }

    #[test]
    fn add_duplicate_then_new_name() {
        let (catalogue, _, _) = run_script("1\nSasquatch\nn\nYeti\n1\n2\n3\n4\ny\n6\n");
        assert_eq!(catalogue.len(), 9);
        assert_eq!(catalogue.get("Sasquatch"), Some(&stats(1, 6, 21, 19)));
        assert_eq!(catalogue.get("Yeti"), Some(&stats(1, 2, 3, 4)));
    }

    #[test]
    fn add_declined_reopens_stats() {
        let (catalogue, output, _) = run_script("1\nWyrm\n10\n10\n10\n10\nn\n\n12\n\n\n6\n");
        assert_eq!(catalogue.get("Wyrm"), Some(&stats(10, 12, 10, 10)));
        assert!(output.contains("Enter new stats (press Enter to keep current value):"));
    }

    #[test]
    fn add_rejects_empty_name_and_bad_stats() {
        let (catalogue, output, _) = run_script("1\n  \nImp\n0\n26\nabc\n3\n3\n3\n3\ny\n6\n");
        assert_eq!(catalogue.get("Imp"), Some(&stats(3, 3, 3, 3)));
        assert!(output.contains("Monster name cannot be empty."));
        assert!(output.contains("Value must be between 1 and 25."));
        assert!(output.contains("Please enter a valid number."));
    }

    #[test]
    fn menu_reprompts_on_invalid_choice() {
        let (_, output, result) = run_script("0\nseven\n6\n");
        assert!(result.is_ok());
        assert!(output.contains("Value must be between 1 and 6."));
        assert!(output.contains("Please enter a valid number."));
        assert!(output.ends_with("Exiting the Monster Card. Goodbye!\n"));
    }

    #[test]
    fn invalid_utf8_does_not_end_session() {
        let (catalogue, output, result) =
            run_bytes(b"2\n\xff\xfe\n\xff\n6\n", SessionOptions::default());
        assert!(result.is_ok());
        assert_eq!(catalogue.len(), 8);
        assert!(output.contains("not found in the catalogue."));
        assert!(output.contains("Please enter a valid number."));
        assert!(output.ends_with("Exiting the Monster Card. Goodbye!\n"));
    }

    #[test]
    fn oversized_numbers_report_range() {
        let (catalogue, output, _) =
            run_script("99999999999999999999\n1\nImp\n99999999999999999999\n4\n4\n4\n4\ny\n6\n");
        assert_eq!(catalogue.get("Imp"), Some(&stats(4, 4, 4, 4)));
        assert!(output.contains("Value must be between 1 and 6."));
        assert!(output.contains("Value must be between 1 and 25."));
        assert!(!output.contains("Please enter a valid number."));
    }

    #[test]
    fn print_all_lists_sorted_with_total() {
        let (_, output, _) = run_script("5\n6\n");
        assert!(output.contains("MONSTER CARD CATALOGUE\n"));
        assert!(output.contains("Total monsters in catalogue: 8"));
        let blaze = output.find("Blazegolem").unwrap();
        let webs = output.find("Websnake").unwrap();
        assert!(blaze < webs);
    }

    #[test]
    fn banner_and_seed_follow_options() {
        let options = SessionOptions {
            seeded: false,
            show_banner: false,
        };
        let (catalogue, output, _) = run_script_with("5\n6\n", options);
        assert!(catalogue.is_empty());
        assert!(!output.contains("WELCOME"));
        assert!(output.contains("Total monsters in catalogue: 0"));

        let (_, output, _) = run_script("6\n");
        assert!(output.starts_with("WELCOME TO THE MONSTER CARD CATALOGUE\n"));
    }

    #[test]
    fn closed_input_ends_session() {
        let (catalogue, _, result) = run_script("1\nWyrm\n10\n");
        assert!(matches!(result, Err(TerminalError::Closed)));
        assert!(!catalogue.contains("Wyrm"));
    }
}
