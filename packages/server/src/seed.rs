use sea_orm::*;
use tracing::info;

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support functional indexes, so these are
/// created manually on startup with raw statements.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Case-insensitive uniqueness for category names:
    // SELECT ... WHERE LOWER(name) = LOWER(?)
    // A concurrent duplicate create that slips past the handler's existence
    // check fails here with a unique violation instead.
    let statements = [
        (
            "idx_category_name_lower",
            r#"CREATE UNIQUE INDEX IF NOT EXISTS "idx_category_name_lower" ON "category" (LOWER("name"))"#,
        ),
        // Plants are filtered by category id and matched by lowercased name.
        (
            "idx_plant_category",
            r#"CREATE INDEX IF NOT EXISTS "idx_plant_category" ON "plant" ("category_id")"#,
        ),
        (
            "idx_plant_name_lower",
            r#"CREATE INDEX IF NOT EXISTS "idx_plant_name_lower" ON "plant" (LOWER("name"))"#,
        ),
    ];

    for (name, stmt) in statements {
        match db.execute_unprepared(stmt).await {
            Ok(_) => {
                info!("Ensured index {} exists", name);
            }
            Err(e) => {
                tracing::warn!("Failed to create index {}: {}", name, e);
            }
        }
    }

    Ok(())
}
