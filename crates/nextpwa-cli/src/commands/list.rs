use anyhow::Result;

use nextpwa_core::catalog;

use crate::output;

/// List every file the scaffolder generates, in emission order.
pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::CATALOG)?);
        return Ok(());
    }

    output::print_header("nextpwa catalog");
    for entry in catalog::CATALOG {
        output::print_catalog_path(entry.path, entry.templated);
    }
    println!();
    output::print_key_value("total", &catalog::CATALOG.len().to_string());

    Ok(())
}
