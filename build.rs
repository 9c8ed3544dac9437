//! Generates the man page and shell completions from the clap definition.

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[allow(dead_code)]
mod cli {
    include!("src/cli.rs");
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };

    let mut cmd = cli::Cli::command();

    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("pkgroulette.1"), buffer)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "pkgroulette", &out_dir)?;
    }

    Ok(())
}
