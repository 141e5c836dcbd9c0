use crate::report::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `;`-separated subscriber export
    pub path: PathBuf,

    /// Report format, overrides `report.format` from the configuration
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Order of the price sections, overrides `report.sort_descending`
    #[arg(short, long, value_enum)]
    pub order: Option<SortOrder>,
}

impl Args {
    pub fn sort_descending(&self, configured: bool) -> bool {
        match self.order {
            Some(SortOrder::Asc) => false,
            Some(SortOrder::Desc) => true,
            None => configured,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum SortOrder {
    /// Cheapest price first
    Asc,
    /// Most expensive price first
    Desc,
}
