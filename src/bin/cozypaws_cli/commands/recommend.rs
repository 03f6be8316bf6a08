// ABOUTME: The recommend command: builds a dog profile from flags and presets
// ABOUTME: Prints a text summary with notes or the JSON report, optionally saving it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use anyhow::{Context, Result};
use clap::Args;
use cozypaws::config::AppConfig;
use cozypaws::formatters::{format_notes, format_summary, OutputFormat, RecommendationReport};
use cozypaws::models::{
    parse_puppy_months, AgeStage, Climate, DogProfile, EnergyLevel, HealthFlags, Lifestyle,
    Locale, WeightClass,
};
use cozypaws::presets::{breeds::BreedPreset, cities::CityPreset};
use cozypaws::RecommendationEngine;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Flags of the recommend command
#[derive(Args)]
pub struct RecommendArgs {
    /// Life stage: puppy, adult, senior
    #[arg(long, default_value = "adult", value_parser = AgeStage::from_str)]
    age: AgeStage,

    /// Puppy age in months (1-18, default 6)
    #[arg(long, value_parser = parse_puppy_months)]
    months: Option<u32>,

    /// Energy level: low, moderate, high
    #[arg(long, value_parser = EnergyLevel::from_str)]
    energy: Option<EnergyLevel>,

    /// Size class: toy, small, medium, large, giant
    #[arg(long, default_value = "medium", value_parser = WeightClass::from_str)]
    weight: WeightClass,

    /// Lifestyle: home, yard, working, street
    #[arg(long, value_parser = Lifestyle::from_str)]
    lifestyle: Option<Lifestyle>,

    /// Climate: temperate, hot, altitude, cold
    #[arg(long, value_parser = Climate::from_str)]
    climate: Option<Climate>,

    /// Brachycephalic (short-nosed) breed
    #[arg(long)]
    brachy: bool,

    /// Sensitive joints
    #[arg(long)]
    joints: bool,

    /// Overweight
    #[arg(long)]
    obese: bool,

    /// Cardiac or respiratory condition
    #[arg(long)]
    cardio_resp: bool,

    /// Dog's name for the summary title
    #[arg(long)]
    name: Option<String>,

    /// Breed preset key (see `cozypaws-cli breeds`)
    #[arg(long)]
    breed: Option<String>,

    /// City preset key (see `cozypaws-cli cities`)
    #[arg(long)]
    city: Option<String>,

    /// Output format: text, json (default from COZYPAWS_OUTPUT)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Language: en, es (default from COZYPAWS_LOCALE)
    #[arg(long, value_parser = Locale::from_str)]
    locale: Option<Locale>,

    /// Directory to save the JSON report in
    #[arg(long)]
    save: Option<PathBuf>,
}

impl RecommendArgs {
    /// Build the profile: presets first, explicit flags on top
    fn profile(&self) -> Result<DogProfile> {
        let mut profile = DogProfile::new(self.age, self.weight);
        profile.puppy_months = self.months;

        if let Some(key) = &self.breed {
            profile = BreedPreset::find(key)?.apply(profile);
        }
        if let Some(key) = &self.city {
            profile = profile.with_climate(CityPreset::find(key)?.climate);
        }

        if let Some(energy) = self.energy {
            profile = profile.with_energy(energy);
        }
        if let Some(lifestyle) = self.lifestyle {
            profile = profile.with_lifestyle(lifestyle);
        }
        if let Some(climate) = self.climate {
            profile = profile.with_climate(climate);
        }

        let preset = profile.health;
        profile = profile.with_health(HealthFlags {
            brachy: preset.brachy || self.brachy,
            joints: preset.joints || self.joints,
            obese: preset.obese || self.obese,
            cardio_resp: preset.cardio_resp || self.cardio_resp,
        });

        if let Some(name) = &self.name {
            profile = profile.with_name(name.as_str());
        }
        Ok(profile)
    }
}

/// Run the recommend command
pub fn run(args: &RecommendArgs, app_config: &AppConfig) -> Result<()> {
    let locale = args.locale.unwrap_or(app_config.locale);
    let format = args.format.unwrap_or(app_config.output);
    let profile = args.profile()?;

    let engine = RecommendationEngine::from_global(locale);
    let recommendation = engine.recommend(&profile);
    let report = RecommendationReport::new(profile, &recommendation);

    match format {
        OutputFormat::Text => {
            println!("{}", format_summary(&report, locale));
            println!();
            println!("{}", format_notes(&report.notes));
        }
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    if let Some(dir) = &args.save {
        let path = report
            .write_to_dir(dir)
            .with_context(|| format!("Could not save report in {}", dir.display()))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}
