//! Augmented-CSV side-file writer
//!
//! CSV mode persists the full input table plus the predictions to a
//! fixed filename under the uploads directory, creating it if absent.
//! The envelope reports a relative path; the write itself resolves to
//! an absolute one.

use crate::input::CsvBatch;
use sentibatch_core::Result;
use sentibatch_eval::EvaluationOutput;
use std::path::Path;
use tracing::info;

/// Fixed side-file name under the uploads directory
pub const OUTPUT_FILENAME: &str = "output_sentiment.csv";

/// Write the input table augmented with `predicted_sentiment` (and
/// `mapped_label` when the input carried a label column).
///
/// Returns the relative path reported in the result envelope, e.g.
/// `uploads/output_sentiment.csv` for an output directory of
/// `backend/uploads`.
pub fn write_augmented_csv(
    batch: &CsvBatch,
    output: &EvaluationOutput,
    output_dir: &Path,
) -> Result<String> {
    std::fs::create_dir_all(output_dir)?;
    let absolute_dir = output_dir.canonicalize()?;
    let path = absolute_dir.join(OUTPUT_FILENAME);

    let mut writer = csv::Writer::from_path(&path)?;

    let mut headers = batch.headers.clone();
    headers.push_field("predicted_sentiment");
    if batch.label_column.is_some() {
        headers.push_field("mapped_label");
    }
    writer.write_record(&headers)?;

    for ((row, prediction), mapped) in batch
        .rows
        .iter()
        .zip(&output.predictions)
        .zip(&output.mapped_labels)
    {
        let mut augmented = row.clone();
        augmented.push_field(prediction.predicted.as_str());
        if batch.label_column.is_some() {
            augmented.push_field(mapped.map(|class| class.as_str()).unwrap_or(""));
        }
        writer.write_record(&augmented)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = batch.rows.len(), "wrote augmented csv");
    Ok(reported_path(output_dir))
}

/// Envelope-facing relative path: last component of the uploads
/// directory plus the fixed filename
fn reported_path(output_dir: &Path) -> String {
    match output_dir.file_name().and_then(|name| name.to_str()) {
        Some(name) => format!("{name}/{OUTPUT_FILENAME}"),
        None => OUTPUT_FILENAME.to_string(),
    }
}
