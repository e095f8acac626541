use colored::*;
use kata_common::config::Config;
use kata_common::{input, success};
use kata_core::stats::{Summary, analyze};

use crate::terminal::print;

pub fn stats(tokens: &[String], cfg: &Config) -> anyhow::Result<()> {
    let numbers = input::parse_number_list(tokens)?;
    if cfg.quiet == 0 {
        let unit = if numbers.len() == 1 { "number" } else { "numbers" };
        success!("{} {unit} parsed successfully", numbers.len());
    }

    let summary: Summary = analyze(&numbers)?;

    print::header("summary statistics", cfg.quiet);
    print::tree_head(&format!("{} numbers", numbers.len()));
    print::as_tree_one_level(summary_details(&summary));
    Ok(())
}

fn summary_details(summary: &Summary) -> Vec<(String, ColoredString)> {
    vec![
        ("sum".to_string(), summary.sum.to_string().normal()),
        ("average".to_string(), summary.average.to_string().normal()),
        ("maximum".to_string(), summary.maximum.to_string().normal()),
        ("minimum".to_string(), summary.minimum.to_string().normal()),
    ]
}
