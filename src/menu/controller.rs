//! Interactive menu loop
//!
//! Prompts for a numbered choice, collects the fields each operation needs,
//! and dispatches to the store or the bill renderer. Every store failure is
//! reported on the console and the loop carries on; only the exit choice (or
//! closed input) ends the session.
//!
//! The controller is generic over its input, output and store so a whole
//! session can be scripted:
//!
//! ```
//! use supermarket_billing::core::{MemoryStore, RecordStore};
//! use supermarket_billing::menu::MenuController;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("1\nSoap\n20\n3\n6\n");
//! let mut output: Vec<u8> = Vec::new();
//! let mut menu = MenuController::new(MemoryStore::new(), input, &mut output);
//! menu.run().unwrap();
//!
//! assert_eq!(menu.store().records().unwrap().len(), 1);
//! ```

use crate::core::report::render;
use crate::core::traits::RecordStore;
use crate::io::line_format::is_valid_item_name;
use crate::menu::choice::MenuChoice;
use crate::types::{BillingError, LineItem};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the loop should keep prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console menu driving a [`RecordStore`]
pub struct MenuController<S, R, W> {
    store: S,
    input: R,
    output: W,
}

impl<S, R, W> MenuController<S, R, W>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    /// Create a controller over a store and a console
    pub fn new(store: S, input: R, output: W) -> Self {
        MenuController {
            store,
            input,
            output,
        }
    }

    /// The store this menu operates on
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the menu until the user exits or input is closed
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned. Store errors are reported to
    /// the user and never end the session.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;

            let Some(input) = self.read_line("Enter Choice: ")? else {
                info!("Input closed, ending session");
                return Ok(());
            };

            let flow = match input.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice)?
                }
                Err(e) => {
                    debug!(error = %e, "Rejected menu input");
                    self.say("Invalid Choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::PrintBill => self.print_bill(),
            MenuChoice::SearchItem => self.search_item(),
            MenuChoice::UpdateItem => self.update_item(),
            MenuChoice::DeleteItem => self.delete_item(),
            MenuChoice::Exit => {
                self.say("Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "\tWelcome To Super Market Billing System")?;
        writeln!(self.output, "\t**************************************")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "\t{}", choice)?;
        }
        Ok(())
    }

    fn add_item(&mut self) -> io::Result<Flow> {
        let Some(item) = self.prompt_item("Enter Item Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(rate) = self.prompt_number("Enter Rate Of Item: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt_number("Enter Quantity Of Item: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.append(&LineItem::new(item, rate, quantity)) {
            Ok(()) => self.say("Item Added Successfully")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_bill(&mut self) -> io::Result<Flow> {
        match render(&self.store) {
            Ok(report) => report.write_table(&mut self.output)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> io::Result<Flow> {
        let Some(item) = self.prompt_item("Enter Item Name to Search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.find_first(&item) {
            Ok(found) => self.say(&format!(
                "Found Item - {} | Rate: {} | Quantity: {}",
                found.item, found.rate, found.quantity
            ))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> io::Result<Flow> {
        let Some(item) = self.prompt_item("Enter Item Name to Update: ")? else {
            return Ok(Flow::Exit);
        };

        // New values are only asked for once the item is known to exist
        if let Err(e) = self.store.find_first(&item) {
            self.report(&e)?;
            return Ok(Flow::Continue);
        }

        let Some(rate) = self.prompt_number("Enter New Rate: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt_number("Enter New Quantity: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.update(&item, rate, quantity) {
            Ok(_) => self.say("Item Updated Successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_item(&mut self) -> io::Result<Flow> {
        let Some(item) = self.prompt_item("Enter Item Name to Delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.delete(&item) {
            Ok(_) => self.say("Item Deleted Successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &BillingError) -> io::Result<()> {
        match error {
            BillingError::NotFound { .. } => self.say("Item Not Found!"),
            _ => {
                warn!(error = %error, "Operation failed");
                self.say(&format!("Error: {}", error))
            }
        }
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\t{}", message)
    }

    /// Print a prompt and read one trimmed line; `None` once input is closed
    ///
    /// Bytes that are not valid UTF-8 are replaced, so they reach the normal
    /// validation and re-prompting instead of failing the read.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "\t{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn prompt_item(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if is_valid_item_name(&name) {
                return Ok(Some(name));
            }
            self.say("Item name must be a single word without ':'")?;
        }
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(text) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match text.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a whole number")?,
            }
        }
    }
}
