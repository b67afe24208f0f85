//! Command-line definitions for the news search frontend.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the news feed by keyword, newest first
    Search {
        /// Keyword to search for
        keyword: String,

        /// Earliest publication date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest publication date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// How many result pages to fetch at most
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Show a single article by the identifier printed in search results
    Show {
        /// Percent-encoded article identifier
        id: String,
    },
}
