//! Interactive session loop: menu in, receipts out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::debug;

use storefront_cart::{AddProduct, Cart, CartCommand, CartEvent, CartId, ClearCart};
use storefront_catalog::Catalog;
use storefront_core::AggregateId;
use storefront_events::{ListenerSet, execute};
use storefront_notify::EmailListener;
use storefront_payments::{CardGateway, PaymentGateway};
use storefront_shipping::ShippingMethod;

/// Everything one console session owns: catalog, cart, listeners, gateway.
///
/// Created once at process start and dropped at exit; there is no hidden
/// global state. Generic over the console streams so tests can script a
/// whole session.
pub struct Session<R, W> {
    catalog: Catalog,
    cart: Cart,
    listeners: ListenerSet<CartEvent>,
    gateway: Box<dyn PaymentGateway>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session over the given console streams.
    ///
    /// Notification listeners are registered here, once, independent of the
    /// add-product flow.
    pub fn new(input: R, output: W) -> Self {
        Self::with_gateway(input, output, Box::new(CardGateway::new()))
    }

    /// Build a session with a specific payment gateway.
    pub fn with_gateway(input: R, output: W, gateway: Box<dyn PaymentGateway>) -> Self {
        let mut listeners = ListenerSet::new();
        listeners.register(Box::new(EmailListener::new()));

        Self {
            catalog: Catalog::standard(),
            cart: Cart::new(CartId::new(AggregateId::new())),
            listeners,
            gateway,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits.
    ///
    /// Returns an error only for unrecoverable console failures: I/O errors,
    /// closed input, or malformed numeric input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_main_menu()?;

            let choice = self.read_integer()?;
            debug!(choice, "main menu selection");

            match choice {
                1 => self.add_product()?,
                2 => self.checkout()?,
                3 => {
                    writeln!(self.output, "Exiting the application. Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                }
            }
        }
    }

    fn write_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Select an option:")?;
        writeln!(self.output, "1. Add a product to the cart")?;
        writeln!(self.output, "2. View cart and checkout")?;
        writeln!(self.output, "3. Exit")?;
        Ok(())
    }

    fn add_product(&mut self) -> Result<()> {
        writeln!(self.output, "Select a product by entering its number:")?;
        let menu: Vec<(u32, String)> = self
            .catalog
            .iter()
            .map(|p| (p.code().id(), p.name().to_string()))
            .collect();
        for (id, name) in menu {
            writeln!(self.output, "{id}. {name}")?;
        }

        let id = self.read_integer()?;
        let Some(product) = self.catalog.lookup(id).cloned() else {
            // Abandon the flow: no payment, no notification, no cart change.
            writeln!(
                self.output,
                "Invalid product number. Please select a valid product."
            )?;
            return Ok(());
        };

        writeln!(self.output, "Selected product: {}", product.name())?;
        writeln!(self.output, "Price: {}", product.unit_price())?;

        writeln!(self.output, "Enter your email or card number for payment:")?;
        let details = self.read_line()?;

        let confirmation = self
            .gateway
            .process_payment(product.unit_price(), &details)
            .context("payment processing failed")?;
        writeln!(
            self.output,
            "Processed payment of {} (ref {})",
            confirmation.amount, confirmation.reference
        )?;

        let cmd = CartCommand::AddProduct(AddProduct {
            product,
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        self.listeners.notify_all(&events);

        Ok(())
    }

    fn checkout(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Select shipping strategy (1 for Standard, 2 for Express):"
        )?;
        let choice = self.read_integer()?;
        let method = ShippingMethod::from_menu_choice(choice);

        let receipt = self.cart.checkout(method);
        writeln!(self.output, "{receipt}")?;

        writeln!(self.output, "Enter delivery address:")?;
        let address = self.read_line()?;
        writeln!(self.output, "Your order will be delivered to: {address}")?;

        let cmd = CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        });
        let events = execute(&mut self.cart, &cmd)?;
        self.listeners.notify_all(&events);

        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read console input")?;
        if read == 0 {
            bail!("console input closed");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read one integer off the console.
    ///
    /// Malformed (non-integer) input is an unrecovered fatal condition: the
    /// error aborts the session. Out-of-range *values* are the menus'
    /// problem, not this reader's.
    fn read_integer(&mut self) -> Result<i64> {
        let line = self.read_line()?;
        line.trim()
            .parse::<i64>()
            .with_context(|| format!("expected a number, got {line:?}"))
    }
}
