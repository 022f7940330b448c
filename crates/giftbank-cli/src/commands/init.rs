//! The `giftbank init` command.

use std::path::Path;

use anyhow::Result;

use giftbank_core::config::CONFIG_FILE;

pub fn execute() -> Result<()> {
    // Create giftbank.toml
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    // Create sample question bank
    std::fs::create_dir_all("questions")?;
    std::fs::create_dir_all("exams")?;
    let sample_path = Path::new("questions/sample.gift");
    if sample_path.exists() {
        println!("questions/sample.gift already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_BANK)?;
        println!("Created questions/sample.gift");
    }

    println!("\nNext steps:");
    println!("  1. Add your own .gift files to questions/");
    println!("  2. Run: giftbank validate questions");
    println!("  3. Run: giftbank assemble");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# giftbank configuration

questions_dir = "./questions"
exams_dir = "./exams"
staging_file = "./temp_exam.json"
chart_file = "./profile_comparison.html"
max_references = 3
"#;

const SAMPLE_BANK: &str = r#"// Sample question bank, one question of each kind.

::Capital of France::What is the capital of France? {
=Paris
~Lyon
~Marseille
}

::Boiling point::Water boils at 100 degrees Celsius at sea level. {TRUE}

::Animal sounds::Match each animal with its sound. {
=Dog -> barks
=Cat -> meows
=Cow -> moos
}

::Solar system::The [Sun] is at the centre of the solar [system].

::Legs of a spider::How many legs does a spider have? {#8}

::Favourite book::Describe a book you enjoyed and explain why.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use giftbank_core::config::GiftbankConfig;
    use giftbank_core::{parse_document, profile::analyze};

    #[test]
    fn sample_config_parses() {
        let config: GiftbankConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, GiftbankConfig::default());
    }

    #[test]
    fn sample_bank_covers_every_kind() {
        let profile = analyze(&parse_document(SAMPLE_BANK));
        assert!(profile.iter().all(|(_, count)| count == 1));
    }
}
