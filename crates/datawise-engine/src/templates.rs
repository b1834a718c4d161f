//! Question templates and capture extraction.
//!
//! Templates are tried in the order of [`QuestionKind::ALL`]. A question can
//! satisfy more than one template, so the order decides which one answers.

use regex::{Captures, Regex};

/// The closed set of questions the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// "What is the total sales of <product> in <city>?"
    TotalSales,
    /// "How many sales reps are there in <region>?"
    RepCount,
    /// "What is the average sales for <product> in <region>?"
    AverageSales,
    /// "On what date did <rep> make the highest sale in <city>?"
    TopSaleDate,
}

impl QuestionKind {
    /// Priority order, highest first.
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::TotalSales,
        QuestionKind::RepCount,
        QuestionKind::AverageSales,
        QuestionKind::TopSaleDate,
    ];

    /// Case-insensitive search pattern with one group per capture slot.
    pub fn pattern(self) -> &'static str {
        match self {
            QuestionKind::TotalSales => r"(?i)What is the total sales of (\w+) in (\w+)\?",
            QuestionKind::RepCount => r"(?i)How many sales reps are there in ([\w\s]+)\?",
            QuestionKind::AverageSales => {
                r"(?i)What is the average sales for (\w+) in ([\w\s]+)\?"
            }
            QuestionKind::TopSaleDate => {
                r"(?i)On what date did ([\w\s.'-]+) make the highest sale in (\w+)\?"
            }
        }
    }

    fn extract(self, caps: &Captures<'_>) -> Option<ParsedQuestion> {
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

        Some(match self {
            QuestionKind::TotalSales => ParsedQuestion::TotalSales {
                product: group(1)?,
                city: group(2)?,
            },
            QuestionKind::RepCount => ParsedQuestion::RepCount { region: group(1)? },
            QuestionKind::AverageSales => ParsedQuestion::AverageSales {
                product: group(1)?,
                region: group(2)?,
            },
            QuestionKind::TopSaleDate => ParsedQuestion::TopSaleDate {
                rep: group(1)?,
                city: group(2)?,
            },
        })
    }
}

/// A recognized question with its captured filter values, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuestion {
    TotalSales { product: String, city: String },
    RepCount { region: String },
    AverageSales { product: String, region: String },
    TopSaleDate { rep: String, city: String },
}

impl ParsedQuestion {
    pub fn kind(&self) -> QuestionKind {
        match self {
            ParsedQuestion::TotalSales { .. } => QuestionKind::TotalSales,
            ParsedQuestion::RepCount { .. } => QuestionKind::RepCount,
            ParsedQuestion::AverageSales { .. } => QuestionKind::AverageSales,
            ParsedQuestion::TopSaleDate { .. } => QuestionKind::TopSaleDate,
        }
    }
}

/// A single compiled template.
pub struct QuestionTemplate {
    pub kind: QuestionKind,
    pub regex: Regex,
}

/// All templates, compiled once and tried in priority order.
pub struct TemplateSet {
    templates: Vec<QuestionTemplate>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSet {
    pub fn new() -> Self {
        let templates = QuestionKind::ALL
            .iter()
            .map(|&kind| QuestionTemplate {
                kind,
                regex: Regex::new(kind.pattern()).expect("Invalid question template regex"),
            })
            .collect();

        Self { templates }
    }

    /// Template kinds in the order they are tried.
    pub fn kinds(&self) -> Vec<QuestionKind> {
        self.templates.iter().map(|t| t.kind).collect()
    }

    /// Match the question against each template in order; the first hit wins.
    pub fn parse(&self, question: &str) -> Option<ParsedQuestion> {
        self.templates.iter().find_map(|template| {
            template
                .regex
                .captures(question)
                .and_then(|caps| template.kind.extract(&caps))
        })
    }
}
