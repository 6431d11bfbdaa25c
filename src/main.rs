#![forbid(unsafe_code)]

use anyhow::Context;
use bip39_converter::{converter, count_words, Conversion, Dictionary};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bip39-converter")]
#[command(about = "Custom seed phrase to BIP-39 mnemonic converter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {

    Convert {

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        passphrase: Option<String>,

        #[arg(short, long)]
        export: Option<String>,
    },

    Count {

        #[arg(short, long)]
        text: Option<String>,
    },

    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => Dictionary::from_csv_path(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display()))?,
        None => Dictionary::bundled()?.clone(),
    };

    match cli.command {
        Commands::Convert { text, passphrase, export } => {
            convert_phrase(&dictionary, text, passphrase, export)?;
        }
        Commands::Count { text } => {
            count_phrase(text)?;
        }
        Commands::Check => {
            check_dictionary(&dictionary);
        }
    }

    Ok(())
}

fn convert_phrase(
    dictionary: &Dictionary,
    text: Option<String>,
    passphrase: Option<String>,
    export: Option<String>,
) -> anyhow::Result<()> {
    println!("\n{}", "BIP-39 Seed Phrase Converter".cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    let text = match text {
        Some(t) => t,
        None => {
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter custom seed words")
                .interact_text()?
        }
    };

    let (enabled, raw_passphrase) = match passphrase {
        Some(p) => (true, p),
        None => {
            if Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Enable additional password?")
                .default(false)
                .interact()?
            {
                let secret = Password::with_theme(&ColorfulTheme::default())
                    .with_prompt("Enter optional passphrase")
                    .allow_empty_password(true)
                    .interact()?;
                (true, secret)
            } else {
                (false, String::new())
            }
        }
    };

    println!("Word count: {}", count_words(&text).to_string().yellow());

    let conversion = match converter::convert(dictionary, &text, enabled, &raw_passphrase) {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("\n❌ {} {}", "ERROR:".red().bold(), e.to_string().red());
            std::process::exit(1);
        }
    };

    println!("\n{}", "📝 ORIGINAL / CUSTOM SEED PHRASE".yellow().bold());
    println!("{}", "─".repeat(50).yellow());
    println!("{}", conversion.original_phrase());

    println!("\n{}", "🔐 MAPPED BIP-39-COMPLIANT SEED PHRASE".green().bold());
    println!("{}", "─".repeat(50).green());

    for (i, word) in conversion.mapped().iter().enumerate() {
        print!("{:2}. {:12} ", i + 1, word.green().bold());
        if (i + 1) % 4 == 0 {
            println!();
        }
    }

    if let Some(path) = export {
        export_json(&conversion, &path)?;
        println!("\n✅ Conversion exported to: {}", path.green());
    }

    println!("\n{}", "⚠️  SECURITY WARNINGS".red().bold());
    println!("{}", "─".repeat(50).red());
    println!("• The mapping is deterministic: anyone with your custom words");
    println!("  (and passphrase, if any) can reproduce the mnemonic");
    println!("• Never share your seed phrase or passphrase");
    println!("• Write the mapped phrase down on paper, not in a file");

    Ok(())
}

fn count_phrase(text: Option<String>) -> anyhow::Result<()> {
    let text = match text {
        Some(t) => t,
        None => {
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter custom seed words")
                .interact_text()?
        }
    };

    println!("Word count: {}", count_words(&text));
    Ok(())
}

fn check_dictionary(dictionary: &Dictionary) {
    println!(
        "\n✅ {} Dictionary is well-formed ({} words)",
        "SUCCESS:".green().bold(),
        dictionary.len()
    );
}

fn export_json(conversion: &Conversion, path: &str) -> anyhow::Result<()> {
    use serde_json::json;
    use std::fs;

    let export_data = json!({
        "version": bip39_converter::VERSION,
        "wordCount": conversion.word_count(),
        "original": conversion.original(),
        "mapped": conversion.mapped(),
        "warning": "KEEP THIS FILE SECURE! It contains your seed phrase."
    });

    fs::write(path, serde_json::to_string_pretty(&export_data)?)?;
    Ok(())
}
