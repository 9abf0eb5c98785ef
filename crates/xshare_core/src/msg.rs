#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page clock advanced.
    Tick { now_ms: u64 },
    /// Wizard steps and their initial field values were found on the page.
    WizardMounted {
        steps: Vec<crate::StepSpec>,
        values: Vec<(String, String)>,
    },
    /// User edited a wizard field.
    FieldEdited { name: String, value: String },
    /// User clicked Next.
    NextClicked,
    /// User clicked Previous.
    PrevClicked,
    /// User clicked Submit on the final step.
    SubmitClicked,
    /// Something asked for a toast.
    Notify(crate::NotificationRequest),
    /// User clicked a toast or its close button.
    ToastClicked { id: crate::ToastId },
    /// A toast's auto-dismiss timer fired.
    ToastExpired { id: crate::ToastId },
    /// Experience cards were read from the page.
    CardsMounted(Vec<crate::ExperienceCard>),
    /// Keystroke in the search box (debounced).
    SearchInputChanged(String),
    /// Job-type select changed.
    JobTypeSelected(String),
    /// Year select changed.
    YearSelected(String),
    /// A search debounce timer fired.
    FilterTimerFired { generation: u64 },
    /// Theme read back from storage at load.
    ThemeRestored(crate::Theme),
    /// User toggled the theme.
    ThemeToggled,
    /// Browser went online or offline.
    ConnectivityChanged { online: bool },
    /// Fallback for unrouted events.
    NoOp,
}
