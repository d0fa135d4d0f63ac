use super::{parse_color, Config};
use mosaic_core::models::{MAIN_SPLIT_MAX, MAIN_SPLIT_MIN, TAG_COUNT};
use tracing_subscriber::EnvFilter;

impl Config {
    /// Runs every check, printing what is wrong. Returns the number of
    /// problems found.
    pub fn check(&self, verbose: bool) -> usize {
        self.check_split(verbose)
            + self.check_colors(verbose)
            + self.check_window_rules(verbose)
            + self.check_log_level(verbose)
    }

    pub fn check_split(&self, verbose: bool) -> usize {
        if verbose {
            println!("Checking split.");
        }
        if (MAIN_SPLIT_MIN..=MAIN_SPLIT_MAX).contains(&self.split) {
            return 0;
        }
        println!(
            "Split {} is outside of [{MAIN_SPLIT_MIN}, {MAIN_SPLIT_MAX}], it will be clamped.",
            self.split
        );
        1
    }

    pub fn check_colors(&self, verbose: bool) -> usize {
        if verbose {
            println!("Trying to parse colors.");
        }
        [&self.normal_color, &self.focused_color, &self.urgent_color]
            .into_iter()
            .filter_map(|color| parse_color(color).err())
            .inspect(|err| println!("{err}"))
            .count()
    }

    pub fn check_window_rules(&self, verbose: bool) -> usize {
        let mut problems = 0;
        for rule in &self.window_rules {
            if verbose {
                println!("Window rule: {rule:?}");
            }
            if rule.class.is_none() && rule.instance.is_none() {
                println!("Window rule {rule:?} has neither class nor instance, it matches nothing.");
                problems += 1;
            }
            if let Some(tag) = rule.tag.filter(|tag| !(1..=TAG_COUNT).contains(tag)) {
                println!("Window rule {rule:?} uses tag {tag}, tags go from 1 to {TAG_COUNT}.");
                problems += 1;
            }
        }
        problems
    }

    pub fn check_log_level(&self, verbose: bool) -> usize {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                0
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                1
            }
        }
    }
}
