use nspire_core::catalog::builtin;
use nspire_core::model::Program;
use nspire_core::policy;
use std::path::Path;

pub fn list() -> Result<(), nspire_core::error::NspireError> {
    let catalog = builtin::load_builtin()?;

    println!("{} (v{})\n", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{desc}\n");
    }

    for cat in &catalog.categories {
        let count = catalog.in_category(cat).count();
        print!("  {:<18} {} deficiencies", cat, count);
        if let Some(desc) = catalog.category_descriptions.get(cat) {
            print!("  -- {desc}");
        }
        println!();
    }
    println!();

    Ok(())
}

pub fn explain(category: Option<&str>) -> Result<(), nspire_core::error::NspireError> {
    let catalog = builtin::load_builtin()?;

    let categories: Vec<&String> = match category {
        Some(key) => {
            let found = catalog.categories.iter().find(|c| c.as_str() == key);
            match found {
                Some(c) => vec![c],
                None => {
                    return Err(nspire_core::error::NspireError::CatalogInvalid(format!(
                        "unknown category '{}'. Available: {}",
                        key,
                        catalog.categories.join(", ")
                    )));
                }
            }
        }
        None => catalog.categories.iter().collect(),
    };

    for cat in categories {
        println!("=== {cat} ===");
        if let Some(desc) = catalog.category_descriptions.get(cat) {
            println!("{desc}");
        }
        println!();

        let max_id = catalog
            .in_category(cat)
            .map(|d| d.id.len())
            .max()
            .unwrap_or(8);

        for def in catalog.in_category(cat) {
            println!(
                "  {:<width$}  {:<16}  {:>5}h  {:<4}  {}",
                def.id,
                def.severity.to_string(),
                def.repair_due_hours,
                def.voucher_rating.to_string(),
                def.description,
                width = max_id
            );
            if let Some(ref note) = def.note {
                println!("  {:<width$}  note: {}", "", note, width = max_id);
            }
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), nspire_core::error::NspireError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file defines the static deficiency reference table: for each
deficiency, its category, default severity, repair timeframe and
voucher-program rating. Findings link into it via `deficiency_id`.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog covers
  version       (string, required)  Version identifier (e.g., "2025.1")
  categories    (array, required)   Declared category keys. Every
                                    deficiency must use one of these.
  category_descriptions
                (object, optional)  Map of category key to human-readable
                                    description. Used by `nspire catalog list`.
  deficiencies  (array, required)   List of deficiency records (see below)

Each record in the "deficiencies" array:
  id            (string, required)  Unique identifier (e.g., "fls-001")
  category      (string, required)  One of the declared category keys
  description   (string, required)  What the deficiency is
  severity      (string, required)  One of: "lifeThreatening", "severe",
                                    "moderate", "low". Strict: anything
                                    else is a load error.
  repair_due_hours
                (number, required)  Hours allowed for repair under the
                                    standard program (24, 720 or 1440
                                    for the built-in severities)
  voucher_rating
                (string, required)  "pass" or "fail"
  note          (string, optional)  Regulatory reference or caveat

Example:
{{
  "name": "Site-specific catalog",
  "version": "1.0",
  "categories": ["electrical"],
  "deficiencies": [
    {{
      "id": "elec-001",
      "category": "electrical",
      "description": "Exposed energized conductors",
      "severity": "lifeThreatening",
      "repair_due_hours": 24,
      "voucher_rating": "fail"
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), nspire_core::error::NspireError> {
    let catalog = nspire_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Categories: {}", catalog.categories.join(", "));
    println!("  Deficiencies: {}", catalog.deficiencies.len());

    // Consistency checks against the severity policy (warnings, not errors)
    let mut warnings = Vec::new();
    for def in &catalog.deficiencies {
        let window_hours = policy::repair_window(def.severity, Program::Standard).num_hours();
        if def.repair_due_hours != window_hours {
            warnings.push(format!(
                "deficiency '{}' allows {}h for repair but the {} default is {}h",
                def.id, def.repair_due_hours, def.severity, window_hours
            ));
        }

        let default_rating = policy::voucher_rating(def.severity);
        if def.voucher_rating != default_rating {
            warnings.push(format!(
                "deficiency '{}' is rated '{}' but {} findings default to '{}'",
                def.id, def.voucher_rating, def.severity, default_rating
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
