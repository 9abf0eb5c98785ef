use std::time::Duration;

use crate::debounce::{DebounceTicket, Debouncer};

/// Placeholder option of the job-type select.
pub const ALL_JOB_TYPES: &str = "All Job Types";
/// Placeholder option of the year select.
pub const ALL_YEARS: &str = "All Years";

/// Text captured from one `.experience-card`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExperienceCard {
    pub company: String,
    pub role: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub job_type: Option<String>,
    pub year: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw widget values. Empty values and the "All"
    /// placeholders mean "no constraint".
    pub fn from_inputs(search: &str, job_type: &str, year: &str) -> Self {
        Self {
            search_term: search.trim().to_lowercase(),
            job_type: select_value(job_type, ALL_JOB_TYPES),
            year: select_value(year, ALL_YEARS),
        }
    }

    pub fn matches(&self, card: &ExperienceCard) -> bool {
        let matches_search = self.search_term.is_empty()
            || card.company.to_lowercase().contains(&self.search_term)
            || card.role.to_lowercase().contains(&self.search_term);
        let matches_job_type = self
            .job_type
            .as_deref()
            .map_or(true, |job_type| card.details.contains(job_type));
        let matches_year = self
            .year
            .as_deref()
            .map_or(true, |year| card.details.contains(year));
        matches_search && matches_job_type && matches_year
    }
}

fn select_value(raw: &str, sentinel: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value == sentinel {
        None
    } else {
        Some(value.to_string())
    }
}

/// Visibility of each card, in card order.
pub fn filter_experiences(criteria: &FilterCriteria, cards: &[ExperienceCard]) -> Vec<bool> {
    cards.iter().map(|card| criteria.matches(card)).collect()
}

/// Live filter inputs plus the card list they apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    job_type: String,
    year: String,
    cards: Vec<ExperienceCard>,
    visible: Vec<bool>,
    debouncer: Debouncer,
}

impl FilterState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            search: String::new(),
            job_type: String::new(),
            year: String::new(),
            cards: Vec::new(),
            visible: Vec::new(),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn set_cards(&mut self, cards: Vec<ExperienceCard>) {
        self.cards = cards;
        self.apply();
    }

    /// Stores the text and starts a new debounce window.
    pub fn set_search(&mut self, value: String) -> DebounceTicket {
        self.search = value;
        self.debouncer.trigger()
    }

    pub fn set_job_type(&mut self, value: String) {
        self.job_type = value;
        self.apply();
    }

    pub fn set_year(&mut self, value: String) {
        self.year = value;
        self.apply();
    }

    /// Applies the filter if `generation` is the latest pending search.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.debouncer.settle(generation) {
            self.apply();
            true
        } else {
            false
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(&self.search, &self.job_type, &self.year)
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn cards(&self) -> &[ExperienceCard] {
        &self.cards
    }

    fn apply(&mut self) {
        self.visible = filter_experiences(&self.criteria(), &self.cards);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
