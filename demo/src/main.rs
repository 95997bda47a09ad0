use anyhow::Result;
use kernel_domain::category::{Category, CategoryProps};
use kernel_domain::error::DomainError;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    // 新建并校验
    let mut movie = Category::create(
        CategoryProps::builder()
            .name("Movie")
            .description("feature films")
            .build(),
    )?;
    info!(category_id = %movie.category_id(), "category created");

    movie.change_name("Movies")?;
    movie.change_description("feature films and shorts")?;
    movie.deactivate();
    info!(snapshot = %serde_json::to_string(&movie)?, "category updated");

    // 从存储快照可信重建
    let restored = Category::try_from(movie.to_json())?;
    info!(name = restored.name(), is_active = restored.is_active(), "category restored");

    // 未类型化输入：报告包含全部字段的违规
    match Category::create_from_value(json!({ "name": 5, "is_active": "yes" })) {
        Ok(category) => info!(name = category.name(), "unexpectedly valid"),
        Err(DomainError::Validation(err)) => {
            warn!(errors = %serde_json::to_string(err.errors())?, "rejected category input");
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
