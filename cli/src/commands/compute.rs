//! Handlers for the single-result numeric exercises: rectangle area,
//! circle properties, BMI and factorial.

use kata_common::config::Config;
use kata_common::input;
use kata_core::geometry::{self, Circle};
use kata_core::{factorial as fact, health};

use crate::terminal::print;

const KEY_WIDTH: usize = 13;

pub fn area(length: &str, width: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let length = input::parse_number(length)?;
    let width = width.map(input::parse_number).transpose()?;

    let area = geometry::rectangle_area(length, width)?;

    print::header("rectangle area", cfg.quiet);
    print::aligned_line("Area", KEY_WIDTH, area.to_string());
    Ok(())
}

pub fn circle(radius: &str, cfg: &Config) -> anyhow::Result<()> {
    let radius = input::parse_number(radius)?;

    let circle: Circle = geometry::circle_properties(radius)?;

    print::header("circle properties", cfg.quiet);
    print::aligned_line("Area", KEY_WIDTH, format!("{:.6}", circle.area));
    print::aligned_line(
        "Circumference",
        KEY_WIDTH,
        format!("{:.6}", circle.circumference),
    );
    Ok(())
}

pub fn bmi(weight: &str, height: &str, cfg: &Config) -> anyhow::Result<()> {
    let weight = input::parse_number(weight)?;
    let height = input::parse_number(height)?;

    let bmi = health::bmi(weight, height)?;

    print::header("body mass index", cfg.quiet);
    print::aligned_line("BMI", KEY_WIDTH, format!("{bmi:.1}"));
    Ok(())
}

pub fn factorial(n: &str, cfg: &Config) -> anyhow::Result<()> {
    let n = input::parse_integer(n)?;

    let product = fact::factorial(n)?;

    print::header("factorial", cfg.quiet);
    print::aligned_line(&format!("{n}!"), KEY_WIDTH, product.to_string());
    Ok(())
}
