//! Schema 명령어

use dg_core::api::HttpGateApi;
use dg_core::SchemaCatalog;

pub async fn show(backend: &str) -> anyhow::Result<()> {
    let api = HttpGateApi::new(backend);

    let mut catalog = SchemaCatalog::new();
    catalog.load(&api).await?;

    if catalog.is_empty() {
        println!("No tables.");
        return Ok(());
    }

    for table in catalog.tables() {
        println!("{} ({} columns)", table.table_name, table.columns.len());
        for col in &table.columns {
            println!(
                "  - {} {}{}",
                col.name,
                col.column_type,
                if col.is_nullable { " (nullable)" } else { "" }
            );
        }
    }

    Ok(())
}
