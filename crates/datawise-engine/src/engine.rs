//! The question engine: classify, extract, aggregate.

use tracing::debug;

use datawise_core::Answer;
use datawise_store::SalesStore;

use crate::aggregate;
use crate::templates::{ParsedQuestion, QuestionKind, TemplateSet};

/// Answers questions against a store passed in at call time.
///
/// Holds only the compiled templates, so one engine can be shared across
/// request handlers and used with any number of stores.
#[derive(Default)]
pub struct QuestionEngine {
    templates: TemplateSet,
}

impl QuestionEngine {
    pub fn new() -> Self {
        Self {
            templates: TemplateSet::new(),
        }
    }

    /// Template kinds in priority order.
    pub fn kinds(&self) -> Vec<QuestionKind> {
        self.templates.kinds()
    }

    /// Answer a free-text question.
    ///
    /// An empty store short-circuits to [`Answer::DatasetUnavailable`] before
    /// any template is tried. A question no template recognizes yields
    /// [`Answer::NotUnderstood`].
    pub fn answer(&self, question: &str, store: &SalesStore) -> Answer {
        if store.is_empty() {
            debug!("Dataset is empty, skipping template matching");
            return Answer::DatasetUnavailable;
        }

        let Some(parsed) = self.templates.parse(question) else {
            debug!(question, "No template matched");
            return Answer::NotUnderstood;
        };

        debug!(kind = ?parsed.kind(), "Question matched template");
        evaluate(&parsed, store)
    }
}

fn evaluate(parsed: &ParsedQuestion, store: &SalesStore) -> Answer {
    match parsed {
        ParsedQuestion::TotalSales { product, city } => {
            aggregate::total_sales(store, product, city)
        }
        ParsedQuestion::RepCount { region } => aggregate::rep_count(store, region),
        ParsedQuestion::AverageSales { product, region } => {
            aggregate::average_sales(store, product, region)
        }
        ParsedQuestion::TopSaleDate { rep, city } => aggregate::top_sale_date(store, rep, city),
    }
}
