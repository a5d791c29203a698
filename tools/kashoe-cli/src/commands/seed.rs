//! Seed the backend with a sample catalog.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Duration, Utc};
use dialoguer::Confirm;
use kashoe_commerce::catalog::{NewEvent, NewProduct};
use serde::{Deserialize, Serialize};

use super::SeedArgs;
use crate::context::Context;

/// Sample catalog compiled into the binary.
pub const BUILTIN_SEED: &str = include_str!("../../fixtures/seed.toml");

/// Contents of a seed fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<NewProduct>,
    #[serde(default)]
    pub events: Vec<SeedEvent>,
}

/// An event whose date is relative to the seeding run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedEvent {
    pub title: String,
    pub description: String,
    pub days_from_now: i64,
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub max_participants: Option<u32>,
}

impl SeedEvent {
    pub fn to_new_event(&self, now: DateTime<Utc>) -> NewEvent {
        NewEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            event_date: now + Duration::days(self.days_from_now),
            location: self.location.clone(),
            image_url: self.image_url.clone(),
            max_participants: self.max_participants,
        }
    }
}

impl SeedData {
    /// Parse fixture text; `.json` names are read as JSON, anything else as TOML.
    pub fn parse(name: &str, content: &str) -> Result<Self> {
        if name.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON seed file: {}", name))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML seed file: {}", name))
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        Self::parse(&path.to_string_lossy(), &content)
    }

    pub fn builtin() -> Result<Self> {
        Self::parse("seed.toml", BUILTIN_SEED)
    }

    /// Drop the half of the catalog the flags exclude.
    pub fn select(mut self, products_only: bool, events_only: bool) -> Self {
        if products_only {
            self.events.clear();
        }
        if events_only {
            self.products.clear();
        }
        self
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub products_created: usize,
    pub events_created: usize,
    pub failures: Vec<SeedFailure>,
}

#[derive(Debug, Serialize)]
pub struct SeedFailure {
    pub kind: &'static str,
    pub name: String,
    pub error: String,
}

/// Run the seed command.
pub async fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    let data = match args.file.as_deref().or(ctx.config.seed.file.as_deref()) {
        Some(path) => SeedData::load(&ctx.resolve_path(path))?,
        None => SeedData::builtin()?,
    }
    .select(args.products_only, args.events_only);

    if data.is_empty() {
        ctx.output.warn("Nothing to seed");
        return Ok(());
    }

    let api = ctx.api();

    ctx.output.header("Seeding Kashoe Chess Club");
    ctx.output.kv("backend", api.base_url());
    ctx.output.kv("products", &data.products.len().to_string());
    ctx.output.kv("events", &data.events.len().to_string());

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Post {} products and {} events to {}?",
                data.products.len(),
                data.events.len(),
                api.base_url()
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.info("Seeding cancelled");
            return Ok(());
        }
    }

    let phases = usize::from(!data.products.is_empty()) + usize::from(!data.events.is_empty());
    let mut phase = 0;
    let mut report = SeedReport::default();

    if !data.products.is_empty() {
        phase += 1;
        ctx.output.step(phase, phases, "Seeding products...");

        let pb = ctx.output.progress(data.products.len() as u64, "products");
        for product in &data.products {
            pb.set_message(product.name.clone());
            match api.create_product(product).await {
                Ok(created) => {
                    tracing::debug!(id = %created.id, name = %created.name, "product created");
                    report.products_created += 1;
                    pb.suspend(|| ctx.output.success(&format!("Added: {}", product.name)));
                }
                Err(e) => {
                    tracing::warn!(name = %product.name, error = %e, "product rejected");
                    pb.suspend(|| {
                        ctx.output.error(&format!("Failed to add: {} ({})", product.name, e))
                    });
                    report.failures.push(SeedFailure {
                        kind: "product",
                        name: product.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    if !data.events.is_empty() {
        phase += 1;
        ctx.output.step(phase, phases, "Seeding events...");

        let now = Utc::now();
        let pb = ctx.output.progress(data.events.len() as u64, "events");
        for event in &data.events {
            pb.set_message(event.title.clone());
            let payload = event.to_new_event(now);
            ctx.output.debug(&format!("{} on {}", event.title, payload.event_date.to_rfc3339()));

            match api.create_event(&payload).await {
                Ok(created) => {
                    tracing::debug!(id = %created.id, title = %created.title, "event created");
                    report.events_created += 1;
                    pb.suspend(|| ctx.output.success(&format!("Added: {}", event.title)));
                }
                Err(e) => {
                    tracing::warn!(title = %event.title, error = %e, "event rejected");
                    pb.suspend(|| {
                        ctx.output.error(&format!("Failed to add: {} ({})", event.title, e))
                    });
                    report.failures.push(SeedFailure {
                        kind: "event",
                        name: event.title.clone(),
                        error: e.to_string(),
                    });
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.success(&format!(
            "Seeding complete: {} products, {} events",
            report.products_created, report.events_created
        ));
    }

    if !report.failures.is_empty() {
        bail!("{} of {} item(s) failed to seed", report.failures.len(), data.len());
    }

    Ok(())
}
