use std::collections::{BTreeMap, BTreeSet};

/// Required fields of one wizard step, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSpec {
    pub required: Vec<String>,
}

impl StepSpec {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    /// Bound reached; nothing to do.
    Stayed,
    /// The active step has empty required fields.
    Invalid { missing: Vec<String> },
}

/// Multi-step form state. `current_step` is 1-based and always within
/// `1..=total_steps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current_step: usize,
    steps: Vec<StepSpec>,
    values: BTreeMap<String, String>,
    invalid: BTreeSet<String>,
}

impl WizardState {
    /// Returns `None` when the page has no steps.
    pub fn new(steps: Vec<StepSpec>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self {
            current_step: 1,
            steps,
            values: BTreeMap::new(),
            invalid: BTreeSet::new(),
        })
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    /// Records an edit. Editing a field clears its invalid mark.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.invalid.remove(&name);
        self.values.insert(name, value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn invalid_fields(&self) -> &BTreeSet<String> {
        &self.invalid
    }

    /// Checks the active step's required fields, marking empty ones invalid
    /// and unmarking filled ones. Returns the empty field names on failure.
    pub fn validate_current_step(&mut self) -> Result<(), Vec<String>> {
        let step = &self.steps[self.current_step - 1];
        let mut missing = Vec::new();
        for name in &step.required {
            let filled = self
                .values
                .get(name)
                .is_some_and(|value| !value.trim().is_empty());
            if filled {
                self.invalid.remove(name);
            } else {
                self.invalid.insert(name.clone());
                missing.push(name.clone());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn advance(&mut self) -> StepOutcome {
        if let Err(missing) = self.validate_current_step() {
            return StepOutcome::Invalid { missing };
        }
        if self.current_step >= self.total_steps() {
            return StepOutcome::Stayed;
        }
        let from = self.current_step;
        self.current_step += 1;
        StepOutcome::Moved {
            from,
            to: self.current_step,
        }
    }

    /// Going back never validates.
    pub fn retreat(&mut self) -> StepOutcome {
        if self.current_step <= 1 {
            return StepOutcome::Stayed;
        }
        let from = self.current_step;
        self.current_step -= 1;
        StepOutcome::Moved {
            from,
            to: self.current_step,
        }
    }
}
