//! Console entry point.

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    storefront_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = storefront_cli::Session::new(stdin.lock(), stdout.lock());
    session.run()
}
