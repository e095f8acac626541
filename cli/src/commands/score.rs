use colored::*;
use kata_common::config::Config;
use kata_common::{input, success};
use kata_core::scoreboard::Scoreboard;

use crate::terminal::{colors, print};

pub fn score(points: &[String], cfg: &Config) -> anyhow::Result<()> {
    print::header("scoreboard", cfg.quiet);

    let mut board = Scoreboard::new();

    for token in points {
        let points = input::parse_integer(token)?;
        let total = board.add(points);
        let delta = if points >= 0 {
            format!("+{points}")
        } else {
            points.to_string()
        };
        print::print_status(format!(
            "{} {} {}",
            delta.color(colors::ACCENT),
            "=>".color(colors::SEPARATOR),
            total.to_string().bold()
        ));
    }

    if cfg.quiet < 2 {
        success!("Final score: {}", board.total());
    }
    Ok(())
}
