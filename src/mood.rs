#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: i64,
}

pub const MOOD_OPTIONS: [MoodOption; 5] = [
    MoodOption { emoji: "😭", label: "Crying", value: 10 },
    MoodOption { emoji: "😡", label: "Angry", value: 30 },
    MoodOption { emoji: "😐", label: "Neutral", value: 60 },
    MoodOption { emoji: "😮", label: "Surprised", value: 75 },
    MoodOption { emoji: "🥰", label: "Loved", value: 95 },
];

pub const DEFAULT_MOOD: i64 = 60;

/// Mutually exclusive emoji picker. Holds the index of the selected option,
/// so there is always exactly one.
#[derive(Debug, Clone)]
pub struct EmojiSelector {
    options: &'static [MoodOption],
    selected: usize,
}

impl EmojiSelector {
    pub fn new() -> Self {
        Self::with_options(&MOOD_OPTIONS)
    }

    /// `options` must not be empty.
    pub fn with_options(options: &'static [MoodOption]) -> Self {
        let selected = options
            .iter()
            .position(|option| option.value == DEFAULT_MOOD)
            .unwrap_or(0);
        Self { options, selected }
    }

    /// Selects the option at `index` and returns it. Unknown indices leave
    /// the selection untouched.
    pub fn activate(&mut self, index: usize) -> Option<MoodOption> {
        let option = *self.options.get(index)?;
        self.selected = index;
        Some(option)
    }

    pub fn position_of(&self, value: i64) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    pub fn selected(&self) -> MoodOption {
        self.options[self.selected]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn options(&self) -> &'static [MoodOption] {
        self.options
    }
}

impl Default for EmojiSelector {
    fn default() -> Self {
        Self::new()
    }
}
