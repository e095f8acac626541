use colored::*;
use kata_common::config::Config;
use kata_common::input;
use kata_core::profile::Profile;

use crate::terminal::print;

pub fn profile(
    name: &str,
    age: &str,
    occupation: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let age = input::parse_integer(age)?;

    let profile = Profile::new(name, age, occupation)?;

    print::header("profile", cfg.quiet);
    print::tree_head(&profile.name);
    print::as_tree_one_level(vec![
        ("name".to_string(), profile.name.clone().normal()),
        ("age".to_string(), profile.age.to_string().normal()),
        ("occupation".to_string(), profile.occupation.clone().normal()),
    ]);
    Ok(())
}
