use category_core::core::config::{Config, SeedCategory};
use category_core::Category;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load configuration first so RUST_LOG from .env reaches the filter
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.logging.ansi))
        .init();

    tracing::info!(
        "Configuration loaded: {} seed categories",
        config.seed.categories.len()
    );

    let categories: Vec<Category> = config
        .seed
        .categories
        .iter()
        .filter_map(build_seed)
        .collect();

    for mut category in categories {
        walk_lifecycle(&mut category);
    }

    Ok(())
}

fn build_seed(seed: &SeedCategory) -> Option<Category> {
    match Category::builder()
        .name(seed.name.as_str())
        .description(seed.description.as_str())
        .build()
    {
        Ok(category) => {
            tracing::info!(
                "Created category '{}' (id={}, active={})",
                category,
                category.id(),
                category.is_active()
            );
            Some(category)
        }
        Err(e) => {
            tracing::warn!("Skipping seed category '{}': {}", seed.name, e);
            None
        }
    }
}

/// Exercise every operation once and log the resulting state
fn walk_lifecycle(category: &mut Category) {
    category.deactivate();
    tracing::info!("'{}' deactivated: active={}", category, category.is_active());

    category.activate();
    tracing::info!("'{}' activated: active={}", category, category.is_active());

    let renamed = format!("{} (archive)", category.name());
    let description = format!("Archived: {}", category.description());
    match category.update_name_and_description(renamed, description) {
        Ok(()) => tracing::info!(
            "Renamed category {} to '{}': {}",
            category.id(),
            category,
            category.description()
        ),
        Err(e) => tracing::warn!("Could not rename '{}': {}", category, e),
    }

    let description = category.description().to_string();
    if let Err(e) = category.update_name_and_description("", description) {
        tracing::info!(
            "Empty rename rejected as expected ({}); name is still '{}'",
            e.message(),
            category
        );
    }
}
