use kata_common::config::Config;
use kata_core::greeting;

use crate::terminal::print;

pub fn greet(name: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    print::header("greeting", cfg.quiet);

    let message = match name {
        Some(name) => greeting::personalized(name)?,
        None => greeting::hello().to_string(),
    };

    print::print_status(&message);
    Ok(())
}
