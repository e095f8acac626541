//! The fixed demonstration sequence: runs a selection of exercises with
//! canned inputs and prints their results. Any failure propagates and
//! terminates the process with a diagnostic, there is no recovery here.

use colored::*;
use kata_common::config::Config;
use kata_common::info;
use kata_core::password;
use kata_core::profile::Profile;
use kata_core::scoreboard::Scoreboard;
use kata_core::{factorial, geometry, greeting, health, stats};

use crate::kprint;
use crate::terminal::print;

const KEY_WIDTH: usize = 13;

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet == 0 {
        info!("Running every exercise against canned inputs");
    }

    print::header("greetings", cfg.quiet);
    print::print_status(greeting::hello());
    print::print_status(greeting::personalized("Alice")?);
    kprint!();

    print::header("geometry", cfg.quiet);
    let area = geometry::rectangle_area(5.0, Some(3.0))?;
    print::aligned_line("Rectangle 5x3", KEY_WIDTH, area.to_string());
    let square = geometry::rectangle_area(4.0, None)?;
    print::aligned_line("Square 4", KEY_WIDTH, square.to_string());
    let circle = geometry::circle_properties(1.0)?;
    print::aligned_line("Area r=1", KEY_WIDTH, format!("{:.2}", circle.area));
    print::aligned_line(
        "Circumference",
        KEY_WIDTH,
        format!("{:.2}", circle.circumference),
    );
    kprint!();

    print::header("health", cfg.quiet);
    let bmi = health::bmi(70.0, 1.75)?;
    print::aligned_line("BMI 70/1.75", KEY_WIDTH, format!("{bmi:.1}"));
    kprint!();

    print::header("scoreboard", cfg.quiet);
    let mut board = Scoreboard::new();
    for points in [5, 3, -2] {
        let total = board.add(points);
        print::aligned_line(&format!("Add {points}"), KEY_WIDTH, total.to_string());
    }
    kprint!();

    print::header("factorial", cfg.quiet);
    print::aligned_line("5!", KEY_WIDTH, factorial::factorial(5)?.to_string());
    print::aligned_line("10!", KEY_WIDTH, factorial::factorial(10)?.to_string());
    kprint!();

    print::header("statistics", cfg.quiet);
    let summary = stats::analyze(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
    print::tree_head("1 2 3 4 5");
    print::as_tree_one_level(vec![
        ("sum".to_string(), summary.sum.to_string().normal()),
        ("average".to_string(), summary.average.to_string().normal()),
        ("maximum".to_string(), summary.maximum.to_string().normal()),
        ("minimum".to_string(), summary.minimum.to_string().normal()),
    ]);
    kprint!();

    print::header("profile", cfg.quiet);
    let profile = Profile::new("Alice", 25, None)?;
    print::tree_head(&profile.name);
    print::as_tree_one_level(vec![
        ("name".to_string(), profile.name.clone().normal()),
        ("age".to_string(), profile.age.to_string().normal()),
        ("occupation".to_string(), profile.occupation.clone().normal()),
    ]);
    kprint!();

    print::header("passwords", cfg.quiet);
    for candidate in ["Abc12345", "abc123", "ABCDEFGH"] {
        let verdict = password::check(candidate);
        let mark: ColoredString = if verdict.is_valid() {
            "valid".green().bold()
        } else {
            "invalid".red().bold()
        };
        print::aligned_line(candidate, KEY_WIDTH, mark);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln("Demonstration complete");
    }
    Ok(())
}
