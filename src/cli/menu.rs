//! Interactive numbered menu over a [`ProductClient`].
//!
//! The menu is generic over its input and output so a session can be scripted.
//! A malformed answer aborts only the current operation; the menu is shown again.
//! End of input ends the session as if "Exit" had been chosen.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::clients::{ProductClient, StoreClient};
use crate::domain::{Price, Product, ProductId, ProductKind, Stock};
use crate::framework::to_pretty_json;
use crate::inventory::ProductError;

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("End of input")]
    EndOfInput,
}

pub struct Menu<R, W> {
    client: ProductClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(client: ProductClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    /// Gives back the output sink, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until "Exit" is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            let outcome = match choice.trim() {
                "1" => self.add_product(),
                "2" => self.find_product(),
                "3" => self.update_price(),
                "4" => self.delete_product(),
                "5" => self.list_products(),
                "6" => break,
                other => {
                    debug!(choice = other, "Invalid menu option");
                    writeln!(self.output, "Invalid option, please try again.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::EndOfInput) => break,
                Err(MenuError::Io(e)) => return Err(e),
                Err(MenuError::Product(e)) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "========== Product Management Menu ==========")?;
        writeln!(self.output, "1. Add product")?;
        writeln!(self.output, "2. Find product by ID")?;
        writeln!(self.output, "3. Update product price")?;
        writeln!(self.output, "4. Delete product by ID")?;
        writeln!(self.output, "5. Show all products")?;
        writeln!(self.output, "6. Exit")
    }

    fn add_product(&mut self) -> Result<(), MenuError> {
        let answer =
            self.ask("Is the product original or not original? (original/no original): ")?;
        let is_original = answer.trim().to_lowercase() == "original";

        let id: ProductId = self.ask("Enter the product ID: ")?.parse()?;
        let name = self.ask("Enter the product name: ")?;
        let category = self.ask("Enter the product category: ")?;
        let price: Price = self.ask("Enter the product price: ")?.parse()?;
        let stock: Stock = self.ask("Enter the product stock: ")?.parse()?;
        let kind = if is_original {
            ProductKind::Original {
                condition: self.ask("Enter the product condition: ")?,
            }
        } else {
            ProductKind::NonOriginal {
                origin: self.ask("Enter the product origin: ")?,
            }
        };

        let product = Product::new(id, name, category, price, stock, kind);
        self.client.create(&product)?;
        writeln!(self.output, "Saved")?;
        Ok(())
    }

    fn find_product(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask("Enter the product ID: ")?.parse()?;
        match self.client.read(id)? {
            Some(record) => {
                let json = to_pretty_json(&record).map_err(io::Error::from)?;
                writeln!(self.output, "{json}")?;
            }
            None => writeln!(self.output, "Product with id {id} not found")?,
        }
        Ok(())
    }

    fn update_price(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask("Enter the product ID: ")?.parse()?;
        let raw = self.ask("Enter the new product price: ")?;
        let new_price = raw.trim().parse::<f64>().map_err(|_| {
            ProductError::InvalidArgument(format!("The price must be a valid number, got {raw:?}"))
        })?;

        self.client.update(id, new_price)?;
        writeln!(self.output, "Updated")?;
        Ok(())
    }

    fn delete_product(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask("Enter the product ID: ")?.parse()?;
        self.client.delete(id)?;
        writeln!(self.output, "Deleted")?;
        Ok(())
    }

    fn list_products(&mut self) -> Result<(), MenuError> {
        let document = self.client.load()?;
        if document.is_empty() {
            writeln!(self.output, "No products registered")?;
        } else {
            let json = to_pretty_json(&document).map_err(io::Error::from)?;
            writeln!(self.output, "{json}")?;
        }
        Ok(())
    }

    /// Writes `text` and reads one line without its line ending. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn ask(&mut self, text: &str) -> Result<String, MenuError> {
        self.prompt(text)?.ok_or(MenuError::EndOfInput)
    }
}
