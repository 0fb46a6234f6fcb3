use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use std::collections::HashMap;

#[allow(dead_code, unused_imports)]
#[path = "src/models/mod.rs"]
mod models;

#[path = "build/price_table.rs"]
mod price_table;

use models::{Course, PriceTable};
use price_table::PriceTableReader;

const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const CATALOG_SOURCE: &str = "data/catalog.toml";

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    catalog_source_file: PathBuf,
    catalog_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = PathBuf::from(
            std::env::var("OUT_DIR").context("OUT_DIR is not set")?
        );

        Ok(Self {
            catalog_source_file: root.join(CATALOG_SOURCE),
            catalog_file: output_dir.join("catalog.rs"),
        })
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    title: String,
    site_url: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let metadata = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?
            .get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let title = Self::extract_string(metadata, "title")?;
        let site_url = Self::extract_string(metadata, "site_url")?;

        if site_url.ends_with('/') {
            bail!("[package.metadata] site_url must not end with a slash: {site_url}");
        }

        Ok(Self {
            name,
            description,
            version,
            title,
            site_url,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== CATALOG SOURCE =====

struct CatalogSource;

impl CatalogSource {
    fn read_courses(path: &Path) -> Result<Vec<Course>> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        let document: toml::Value = toml::from_str(&text)
            .context(format!("Failed to parse {}", path.display()))?;

        let courses = document.get("courses")
            .and_then(|value| value.as_table())
            .context("Missing [courses] table in catalog")?;

        if courses.is_empty() {
            bail!("Catalog defines no courses");
        }

        courses.iter()
            .map(|(slug, value)| {
                Self::parse_course(slug, value)
                    .context(format!("Invalid course '{slug}'"))
            })
            .collect()
    }

    fn parse_course(slug: &str, value: &toml::Value) -> Result<Course> {
        let kebab_slug = heck::AsKebabCase(slug).to_string();
        if kebab_slug != slug {
            bail!("Course key must be kebab-case, expected '{kebab_slug}'");
        }

        let name = Self::extract_string(value, "name")?;
        let description = Self::extract_string(value, "description")?;
        let is_new = value.get("is_new")
            .map(|flag| flag.as_bool().context("Key 'is_new' is not a boolean"))
            .transpose()?
            .unwrap_or(false);

        let prices = value.get("prices")
            .and_then(|prices| prices.as_table())
            .context("Missing prices table")?;

        Ok(Course {
            slug: slug.to_string(),
            name,
            description,
            is_new,
            prices: PriceTableReader::read(prices)?,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        let text = value.get(key)
            .and_then(|v| v.as_str())
            .context(format!("Key '{key}' is missing or not a string"))?;

        if text.trim().is_empty() {
            bail!("Key '{key}' is empty");
        }

        Ok(text.to_string())
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_phf_hash_map<K: AsRef<str>>(map: &HashMap<K, usize>) -> String {
        let mut phf_builder = Map::new();
        for (key, value) in map {
            phf_builder.entry(key.as_ref(), value.to_string());
        }

        phf_builder.build().to_string()
    }

    fn format_price_table(table: &PriceTable) -> String {
        let rows = table.rows
            .iter()
            .map(|row| {
                let cells = row.iter()
                    .map(|price| format!("Yen({})", price.amount()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{cells}]")
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("PriceTable {{ rows: [{rows}] }}")
    }

    fn format_course_struct(course: &Course) -> String {
        format!(
            "Course {{
                slug: {slug:?},
                name: {name:?},
                description: {description:?},
                is_new: {is_new},
                prices: {prices}
            }}",
            slug = course.slug,
            name = course.name,
            description = course.description,
            is_new = course.is_new,
            prices = Self::format_price_table(&course.prices)
        )
    }

    fn build_catalog_struct_code(courses: &[Course]) -> String {
        let slug_to_index: HashMap<&str, usize> = courses
            .iter()
            .enumerate()
            .map(|(index, course)| (course.slug.as_str(), index))
            .collect();

        let courses_map = Self::format_phf_hash_map(&slug_to_index);
        let courses_array = courses.iter()
            .map(Self::format_course_struct)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Catalog {{
                courses: &[{courses_array}],
                courses_map: {courses_map}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let courses = CatalogSource::read_courses(&self.config.catalog_source_file)?;
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(&courses);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rustc-cfg=runtime");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=build");
        println!("cargo:rerun-if-changed={CATALOG_SOURCE}");
        println!("cargo:rerun-if-changed=src/models");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_SITE_URL={}", metadata.site_url);
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        CargoEnvironmentVariables::emit_build_configuration_flags();
        CatalogProcessor::new(&self.config).process_catalog_data()?;
        CargoEnvironmentVariables::emit_application_metadata(&self.app_metadata);
        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
