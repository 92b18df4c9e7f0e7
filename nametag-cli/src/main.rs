//! Interactive command line tool that prints an ASCII-art name tag.

use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use nametag::font::FontTable;
use nametag::tag::NameTag;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut fonts = cli.font_table();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let (first_name, last_name) = read_name(&mut input)?;
    let status = read_status(&mut input)?;

    let tag = NameTag::compose(&first_name, &last_name, &status, &mut fonts)?;
    for line in tag.lines() {
        println!("{line}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(about = "Render a bordered ASCII-art name tag")]
struct Cli {
    /// Load `roman.txt` and `medium.txt` from this directory instead of the
    /// bundled fonts.
    #[arg(short = 'd', long = "font-dir")]
    font_dir: Option<PathBuf>,
}

impl Cli {
    fn font_table(&self) -> FontTable {
        match &self.font_dir {
            Some(directory) => FontTable::from_dir(directory),
            None => FontTable::built_in(),
        }
    }
}

fn read_name(input: &mut impl BufRead) -> Result<(String, String)> {
    let line = prompt(input, "Enter name and surname: ")?;
    let mut tokens = line.split_whitespace();
    let (Some(first_name), Some(last_name)) = (tokens.next(), tokens.next()) else {
        bail!("expected a name and a surname separated by whitespace");
    };
    Ok((first_name.to_owned(), last_name.to_owned()))
}

fn read_status(input: &mut impl BufRead) -> Result<String> {
    prompt(input, "Enter person's status: ")
}

/// Prints `message` without a newline and reads one line, with the
/// terminator stripped but any other whitespace kept.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("could not flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("could not read input")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    if line.ends_with('\n') {
        _ = line.pop();
        if line.ends_with('\r') {
            _ = line.pop();
        }
    }
    Ok(line)
}
