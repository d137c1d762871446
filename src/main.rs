use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use heart_predict::insights::{self, OUTCOMES, Topic};
use heart_predict::{
    Attribute, EncodingRegistry, FeatureAssembler, ModelArtifact, PatientInput, PredictorConfig,
    Sex,
};
use log::info;

#[derive(Debug, Parser)]
#[command(
    name = "heart-predict",
    version,
    about = "Heart disease prediction from a patient form",
    after_help = "Environment:\n  \
        HEART_MODEL_PATH  Model artifact path (default: Heart.json)\n  \
        HEART_LOG         Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict from a patient JSON file
    Predict {
        /// Patient form as JSON (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Model artifact, overriding HEART_MODEL_PATH
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,

        /// Print the feature vector and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the accepted labels for the categorical fields
    Labels {
        /// Only this field (cp, restecg, slope, thal or sex)
        attribute: Option<String>,
    },

    /// Print the illustrative series shown beside the form
    Insights,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PredictorConfig::from_env();

    // Setup logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    match cli.command {
        Command::Predict { input, model, json } => {
            let config = match model {
                Some(path) => config.with_model_path(path),
                None => config,
            };
            predict(&config, input, json)
        }
        Command::Labels { attribute } => print_labels(attribute.as_deref()),
        Command::Insights => {
            print_insights();
            Ok(())
        }
    }
}

fn predict(config: &PredictorConfig, input: Option<PathBuf>, as_json: bool) -> anyhow::Result<()> {
    // The model is loaded once; a failure here is fatal
    let artifact = ModelArtifact::load(&config.model_path).with_context(|| {
        format!(
            "Failed to load model artifact {}",
            config.model_path.display()
        )
    })?;
    let registry = Arc::new(EncodingRegistry::standard()?);
    let assembler = FeatureAssembler::new(registry, artifact);

    let json = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read patient input from stdin")?;
            buffer
        }
    };
    let input = PatientInput::from_json(&json).context("Invalid patient input")?;

    let (vector, result) = assembler.predict_with_vector(&input.to_bundle())?;
    info!("Predicted {} for {}", result.outcome, vector);

    if as_json {
        let output = serde_json::json!({
            "features": vector,
            "prediction": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn print_labels(filter: Option<&str>) -> anyhow::Result<()> {
    let registry = EncodingRegistry::standard()?;

    let show_sex = filter.is_none_or(|name| name.trim().eq_ignore_ascii_case(Sex::ATTRIBUTE));
    let attributes: Vec<Attribute> = match filter {
        None => Attribute::ALL.to_vec(),
        Some(_) if show_sex => Vec::new(),
        Some(name) => match Attribute::from_name(name) {
            Some(attribute) => vec![attribute],
            None => bail!("Unknown categorical field '{name}'"),
        },
    };

    if show_sex {
        println!("{} (Gender):", Sex::ATTRIBUTE);
        for sex in Sex::ALL {
            println!("  {:>2}  {}", sex.code(), sex.label());
        }
    }
    for attribute in attributes {
        println!("{} ({}):", attribute.name(), attribute.display_name());
        for entry in registry.attribute(attribute).entries() {
            println!("  {:>2}  {}", entry.code, entry.label);
        }
    }
    Ok(())
}

fn print_insights() {
    println!("Probability of Heart Disease vs Age:");
    for (age, probability) in insights::age_curve().iter().step_by(10) {
        println!("  {age:>3}  {probability:.3}");
    }

    for topic in Topic::ALL {
        let split = insights::outcome_split(topic);
        println!("{topic} and Heart Disease:");
        for (outcome, value) in OUTCOMES.iter().zip(split.values) {
            println!("  {:<22} {value:.1}", outcome.message());
        }
    }
}
