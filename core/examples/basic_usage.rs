//! Drives a session through every phase with the scoped builders, printing
//! progress as it goes.
//!
//! Set `RUST_LOG=debug` to see phase transitions.

use std::io;

use anyhow::Result;
use stateful_core::{Session, StatefulConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = StatefulConfig::load()?.unwrap_or_default();
    let mut session = Session::with_config(config.session_config());
    session.open()?;

    session.configure(|params| {
        params.boolean("foo", false)?.integer("some-number", 42)?;
        Ok(())
    })?;

    let recipe = session.recipe(|recipe| {
        recipe.add_item("first", 1)?.add_item("second", 2)?;

        for i in 0..5 {
            recipe.group(&format!("group_{i}"), |group| {
                for j in 0..i {
                    group.add_item(&format!("group_{i}_item_{j}"), i + j)?;
                }
                Ok(())
            })?;
        }

        recipe.group("another group", |group| {
            group
                .add_item("another nested item", 5)?
                .add_item("MOAR items", 6)?;
            Ok(())
        })?;
        Ok(())
    })?;

    let output = recipe.execute(|percent| println!("{percent}"))?;
    println!("Got {output:?}");

    session.close()?;
    Ok(())
}
