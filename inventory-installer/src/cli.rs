use clap::Parser;

/// Build and link the SecurePenguin inventory scanner and register the
/// `scan-inventory` shell alias.
///
/// Configuration comes from the environment: INVENTORY_INSTALL_DIR,
/// INVENTORY_PROFILE, SHELL and RUST_LOG.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
