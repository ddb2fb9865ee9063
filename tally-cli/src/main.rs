//! Tally CLI
//!
//! A terminal playground for list marker styles.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use tally_common::warning::clear_warnings;
use tally_counter::{
    Case, ListBlock, ListStyleType, MarkerAlignment, parse_roman, to_roman_with_case,
};

/// Items shown by `tally demo`.
const DEMO_ITEMS: [&str; 5] = [
    "Introduction",
    "Getting started",
    "Configuration",
    "Advanced usage",
    "Troubleshooting",
];

/// Length of the right-aligned demo list, long enough to reach `XII`.
const DEMO_ALIGNED_LEN: usize = 12;

/// Tally — render text lists with bullets, numbers, and Roman numerals
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Roman numerals
    tally roman 1994 2024
    tally roman --lower 14

    # Back to integers
    tally decode MCMXCIV

    # A right-aligned Roman list
    tally list --style upper-roman --align right Alpha Beta Gamma Delta

    # Every style side by side
    tally demo
")]
struct Cli {
    /// Disable colored headings
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert integers to Roman numerals
    Roman {
        /// Values in 1..=3999
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Print lowercase numerals
        #[arg(long)]
        lower: bool,

        /// Print the range message for out-of-range values instead of failing
        #[arg(long)]
        sentinel: bool,
    },

    /// Convert Roman numerals to integers
    Decode {
        /// Canonical numerals, either case
        #[arg(required = true)]
        numerals: Vec<String>,
    },

    /// Render items as a list
    List {
        /// List items, one per line of output
        items: Vec<String>,

        /// Marker style (disc, circle, square, decimal, lower-alpha,
        /// upper-alpha, lower-roman, upper-roman, none)
        #[arg(short, long, default_value_t = ListStyleType::Disc)]
        style: ListStyleType,

        /// Counter value of the first item
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        start: i64,

        /// Marker alignment (left, right)
        #[arg(short, long, default_value_t = MarkerAlignment::Left)]
        align: MarkerAlignment,

        /// Print the rendered items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every list style the playground offers
    Demo,

    /// List the style keywords with a sample marker
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Roman {
            values,
            lower,
            sentinel,
        } => {
            let case = if *lower { Case::Lower } else { Case::Upper };
            for &value in values {
                let numeral = match to_roman_with_case(value, case) {
                    Ok(numeral) => numeral,
                    Err(err) if *sentinel => err.to_string(),
                    Err(err) => {
                        return Err(err).with_context(|| format!("cannot convert {value}"));
                    }
                };
                writeln!(out, "{numeral}")?;
            }
        }
        Command::Decode { numerals } => {
            for numeral in numerals {
                let value =
                    parse_roman(numeral).with_context(|| format!("cannot decode '{numeral}'"))?;
                writeln!(out, "{value}")?;
            }
        }
        Command::List {
            items,
            style,
            start,
            align,
            json,
        } => {
            clear_warnings();
            let list = ListBlock::new(*style)
                .items(items.iter().cloned())
                .start(*start)
                .align(*align);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &list.render())
                    .context("failed to write JSON")?;
                writeln!(out)?;
            } else {
                write_lines(out, &list)?;
            }
        }
        Command::Demo => write_demo(out, !cli.no_color)?,
        Command::Styles => {
            for style in ListStyleType::iter() {
                writeln!(out, "{:<12} {}", style.as_ref(), style.marker(4))?;
            }
        }
    }
    Ok(())
}

fn write_lines(out: &mut impl Write, list: &ListBlock) -> io::Result<()> {
    for line in list.to_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Plain, bulleted, numbered, Roman, and right-aligned sections.
fn write_demo(out: &mut impl Write, color: bool) -> io::Result<()> {
    let aligned_items = (1..=DEMO_ALIGNED_LEN).map(|i| format!("Chapter {i}"));
    let sections = [
        ("Plain", ListBlock::new(ListStyleType::None).items(DEMO_ITEMS)),
        ("Bulleted", ListBlock::new(ListStyleType::Disc).items(DEMO_ITEMS)),
        (
            "Numbered",
            ListBlock::new(ListStyleType::Decimal).items(DEMO_ITEMS),
        ),
        (
            "Roman numerals",
            ListBlock::new(ListStyleType::UpperRoman).items(DEMO_ITEMS),
        ),
        (
            "Right-aligned",
            ListBlock::new(ListStyleType::UpperRoman)
                .items(aligned_items)
                .align(MarkerAlignment::Right),
        ),
    ];

    for (index, (title, list)) in sections.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        if color {
            writeln!(out, "{}", title.bold().cyan())?;
        } else {
            writeln!(out, "{title}")?;
        }
        write_lines(out, list)?;
    }
    Ok(())
}
