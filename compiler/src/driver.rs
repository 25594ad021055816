use crate::{
    compiler::compile_document,
    error::SchemaError,
    gen_model::write_model,
    gen_request::write_request,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use walkdir::WalkDir;

/// Configuration the surrounding build supplies: where schema documents
/// live, where generated source goes, and the dotted namespace the generated
/// code is rooted at.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input_dir:      PathBuf,
    pub output_root:    PathBuf,
    pub base_namespace: String,
}

/// What one generation pass produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub entities: usize,
    pub written:  Vec<PathBuf>,
}

/// Runs one generation pass: walks the input directory, compiles every file,
/// and emits a model and a request source file per entity. A missing input
/// directory is a documented no-op. Any parse, verify, or filesystem error
/// aborts the whole pass; there is no partial-success mode.
pub fn generate_all(config: &GenerateConfig) -> Result<GenerateReport, SchemaError> {
    let mut report = GenerateReport::default();

    if !config.input_dir.exists() {
        info!(
            dir = %config.input_dir.display(),
            "no schema directory, skipping generation"
        );
        return Ok(report);
    }

    for entry in WalkDir::new(&config.input_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SchemaError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let text = fs::read_to_string(entry.path())?;
        let entities = compile_document(&text)?;
        info!(
            file = %entry.path().display(),
            entities = entities.len(),
            "generating models"
        );

        for entity in &entities {
            report
                .written
                .push(write_model(entity, &config.output_root, &config.base_namespace)?);
            report
                .written
                .push(write_request(entity, &config.output_root, &config.base_namespace)?);
            report.entities += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &std::path::Path, output: &std::path::Path) -> GenerateConfig {
        GenerateConfig {
            input_dir:      input.to_path_buf(),
            output_root:    output.to_path_buf(),
            base_namespace: "app.generated".to_string(),
        }
    }

    #[test]
    fn test_missing_input_dir_is_a_noop() {
        let out = tempfile::tempdir().unwrap();
        let report = generate_all(&config(
            &out.path().join("does-not-exist"),
            &out.path().join("out"),
        ))
        .unwrap();
        assert_eq!(report.entities, 0);
        assert!(report.written.is_empty());
        assert!(!out.path().join("out").exists());
    }

    #[test]
    fn test_end_to_end_vendor() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schemas");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("budget.schema"), "[budget.Vendor]\nname = String\nlink = String?\n")
            .unwrap();

        let out = dir.path().join("out");
        let report = generate_all(&config(&input, &out)).unwrap();
        assert_eq!(report.entities, 1);
        assert_eq!(report.written.len(), 2);

        let model = out.join("budget").join("model").join("Vendor.rs");
        let text = fs::read_to_string(&model).unwrap();
        let id = text.find("pub id: i64").unwrap();
        let name = text.find("pub name: String").unwrap();
        let link = text.find("pub link: Option<String>").unwrap();
        let created = text.find("pub created_at: Option<DateTime<Utc>>").unwrap();
        let updated = text.find("pub updated_at: Option<DateTime<Utc>>").unwrap();
        assert!(id < name && name < link && link < created && created < updated);

        assert!(out
            .join("budget")
            .join("model")
            .join("requests")
            .join("VendorRequest.rs")
            .exists());
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schemas");
        fs::create_dir_all(&input).unwrap();
        fs::write(
            input.join("budget.schema"),
            "[budget.Transaction]\ndate = Date\ntype = {EXPENSE|INCOME}\ntags = *budget.Tag[]\n",
        )
        .unwrap();

        let out = dir.path().join("out");
        let first = generate_all(&config(&input, &out)).unwrap();
        let snapshot: Vec<Vec<u8>> = first
            .written
            .iter()
            .map(|p| fs::read(p).unwrap())
            .collect();

        let second = generate_all(&config(&input, &out)).unwrap();
        assert_eq!(first.written, second.written);
        for (path, bytes) in second.written.iter().zip(&snapshot) {
            assert_eq!(&fs::read(path).unwrap(), bytes);
        }
    }

    #[test]
    fn test_malformed_file_aborts_pass() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schemas");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("bad.schema"), "no header here\nname = String\n").unwrap();

        let err = generate_all(&config(&input, &dir.path().join("out"))).unwrap_err();
        assert!(matches!(err, SchemaError::Format(_)));
    }
}
