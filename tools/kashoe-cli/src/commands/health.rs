//! Backend health check.

use anyhow::{bail, Context as _, Result};

use crate::context::Context;

/// Run the health command.
pub async fn run(ctx: &Context) -> Result<()> {
    let api = ctx.api();

    let spinner = ctx.output.spinner(&format!("Contacting {}...", api.base_url()));
    let health = api.health().await;
    spinner.finish_and_clear();
    let health = health.with_context(|| format!("Backend unreachable at {}", api.base_url()))?;

    if ctx.output.is_json() {
        ctx.output.json(&health);
    } else {
        ctx.output.header("Backend Health");
        ctx.output.kv("url", api.base_url());
        ctx.output.kv("status", &health.status);
        ctx.output.kv("message", &health.message);
    }

    if !health.is_active() {
        bail!("Backend reported status '{}'", health.status);
    }

    ctx.output.success("Backend is up");
    Ok(())
}
