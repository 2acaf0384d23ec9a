use std::path::{Path, PathBuf};

use crate::data::model::Dataset;
use crate::data::summarize::{self, FilterPredicate, Summary, SummarizeError};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One (column, value) pair of text fields in the collector form.
#[derive(Debug, Clone, Default)]
pub struct FilterRow {
    pub column: String,
    pub value: String,
}

/// Local state of the input-collector window.
#[derive(Debug, Clone, Default)]
pub struct CollectorForm {
    /// Comma-separated dedup key columns (optional).
    pub dedup_input: String,
    /// Column whose distinct values get counted.
    pub group_input: String,
    /// Growable list of equality filter pairs.
    pub filters: Vec<FilterRow>,
}

/// One rendered summary window.
#[derive(Debug, Clone)]
pub struct SummaryView {
    /// Header of the value column, the group column's name.
    pub group_label: String,
    pub summary: Summary,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is dropped or opened).
    pub dataset: Option<Dataset>,

    /// Where the dataset came from, for the status line.
    pub source_path: Option<PathBuf>,

    /// Input-collector window; open while Some.
    pub collector: Option<CollectorForm>,

    /// Summary window; open while Some.
    pub summary: Option<SummaryView>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and open a fresh collector form.
    pub fn set_dataset(&mut self, dataset: Dataset, path: &Path) {
        self.dataset = Some(dataset);
        self.source_path = Some(path.to_path_buf());
        self.collector = Some(CollectorForm::default());
        self.summary = None;
        self.status_message = None;
    }

    /// Reopen the collector for the current dataset.
    pub fn open_collector(&mut self) {
        if self.dataset.is_some() && self.collector.is_none() {
            self.collector = Some(CollectorForm::default());
        }
    }

    /// Run the transformer on the collector's current inputs.
    ///
    /// On success the summary window replaces the collector; on error the
    /// collector stays open so the user can correct the form and resubmit.
    pub fn submit_collector(&mut self) -> Result<(), SummarizeError> {
        let (Some(dataset), Some(form)) = (&self.dataset, &self.collector) else {
            return Ok(());
        };

        let dedup_keys: Vec<String> = form
            .dedup_input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        // Blank pairs are dropped by the transformer itself.
        let filters: Vec<FilterPredicate> = form
            .filters
            .iter()
            .map(|f| FilterPredicate {
                column: f.column.trim().to_string(),
                value: f.value.trim().to_string(),
            })
            .collect();

        let group_column = form.group_input.trim().to_string();

        let summary = summarize::summarize(dataset, &filters, &dedup_keys, &group_column)?;
        self.summary = Some(SummaryView {
            group_label: group_column,
            summary,
        });
        self.collector = None;
        self.status_message = None;
        Ok(())
    }
}
