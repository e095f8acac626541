use colored::*;
use kata_common::config::Config;
use kata_common::{success, warn};
use kata_core::password::{self, Verdict};

use crate::terminal::print;

pub fn password(candidate: &str, cfg: &Config) -> anyhow::Result<()> {
    let verdict: Verdict = password::check(candidate);

    print::header("password check", cfg.quiet);
    print_criteria(&verdict);

    if verdict.is_valid() {
        success!("Password meets all four criteria");
    } else {
        warn!("Password rejected, missing: {}", verdict.failures().join(", "));
    }
    Ok(())
}

fn print_criteria(verdict: &Verdict) {
    let rows = [
        ("length >= 8", verdict.long_enough),
        ("uppercase letter", verdict.has_uppercase),
        ("lowercase letter", verdict.has_lowercase),
        ("digit", verdict.has_digit),
    ];

    for (label, passed) in rows {
        let mark: ColoredString = if passed {
            "ok".green().bold()
        } else {
            "missing".red().bold()
        };
        print::aligned_line(label, 16, mark);
    }
}
