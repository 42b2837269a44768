use crate::gauge::{format_score, marker_left, StressBand};
use crate::models::{CheckInFields, FormView, MoodOptionView, ScoreResult, SubmissionPayload};
use crate::mood::EmojiSelector;
use crate::scoring::ScoringBackend;
use tracing::{error, info};

pub const BACKEND_DOWN_MESSAGE: &str = "Backend not responding!";
pub const DEFAULT_SCREEN_TIME: &str = "4";
pub const DEFAULT_TYPING_SPEED: &str = "40";

/// Slider whose value is echoed into a label on every input event.
#[derive(Debug, Clone, Default)]
pub struct RangeMirror {
    value: String,
    label: String,
}

impl RangeMirror {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    pub fn input(&mut self, value: &str) {
        self.value = value.to_string();
        self.label = value.to_string();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Default)]
struct ResultRegions {
    score_text: String,
    intervention_text: String,
    marker_left: String,
    category_text: String,
    result_visible: bool,
    error_text: String,
    error_visible: bool,
}

/// Transient state of one check-in page and its event handlers.
#[derive(Debug, Clone)]
pub struct FormController {
    selector: EmojiSelector,
    mood_field: String,
    screen_time: RangeMirror,
    typing_speed: String,
    regions: ResultRegions,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_selector(EmojiSelector::new())
    }

    pub fn with_selector(selector: EmojiSelector) -> Self {
        let mood_field = selector.selected().value.to_string();
        Self {
            selector,
            mood_field,
            screen_time: RangeMirror::new(DEFAULT_SCREEN_TIME),
            typing_speed: DEFAULT_TYPING_SPEED.to_string(),
            regions: ResultRegions::default(),
        }
    }

    /// Rebuilds page state from posted field values. A mood matching an
    /// option selects it; anything else is written into the hidden field
    /// as is.
    pub fn from_fields(fields: &CheckInFields) -> Self {
        let mut form = Self::new();
        let option = parse_int(&fields.mood).and_then(|mood| form.selector.position_of(mood));
        match option {
            Some(index) => form.click_emoji(index),
            None => form.mood_field = fields.mood.clone(),
        }
        form.input_screen_time(&fields.screen_time);
        form.set_typing_speed(&fields.typing_speed);
        form
    }

    pub fn click_emoji(&mut self, index: usize) {
        if let Some(option) = self.selector.activate(index) {
            self.mood_field = option.value.to_string();
        }
    }

    pub fn input_screen_time(&mut self, value: &str) {
        self.screen_time.input(value);
    }

    pub fn set_typing_speed(&mut self, value: &str) {
        self.typing_speed = value.to_string();
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            mood: parse_int(&self.mood_field),
            screen_time: parse_float(self.screen_time.value()),
            typing_speed: parse_int(&self.typing_speed),
        }
    }

    pub async fn submit<B: ScoringBackend>(&mut self, backend: &B) {
        self.regions.error_visible = false;
        self.regions.result_visible = false;

        let payload = self.payload();
        info!(
            mood = ?payload.mood,
            screen_time = ?payload.screen_time,
            typing_speed = ?payload.typing_speed,
            "submitting check-in"
        );

        match backend.score(&payload).await {
            Ok(result) => self.show_result(&result),
            Err(err) => {
                error!("{err}");
                self.regions.error_text = BACKEND_DOWN_MESSAGE.to_string();
                self.regions.error_visible = true;
            }
        }
    }

    fn show_result(&mut self, result: &ScoreResult) {
        let score = result.stress_score;
        self.regions.score_text = format_score(score);
        self.regions.intervention_text = result.intervention.clone();
        self.regions.marker_left = marker_left(score);
        self.regions.category_text = StressBand::classify(score).message().to_string();
        self.regions.result_visible = true;
    }

    pub fn mood_field(&self) -> &str {
        &self.mood_field
    }

    pub fn selector(&self) -> &EmojiSelector {
        &self.selector
    }

    pub fn screen_time(&self) -> &RangeMirror {
        &self.screen_time
    }

    pub fn view(&self) -> FormView {
        let options = self
            .selector
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| MoodOptionView {
                emoji: option.emoji.to_string(),
                label: option.label.to_string(),
                value: option.value,
                selected: self.selector.is_selected(index),
            })
            .collect();

        FormView {
            options,
            mood: self.mood_field.clone(),
            screen_time: self.screen_time.value().to_string(),
            screen_time_label: self.screen_time.label().to_string(),
            typing_speed: self.typing_speed.clone(),
            score_text: self.regions.score_text.clone(),
            intervention_text: self.regions.intervention_text.clone(),
            marker_left: self.regions.marker_left.clone(),
            category_text: self.regions.category_text.clone(),
            result_visible: self.regions.result_visible,
            error_visible: self.regions.error_visible,
            error_text: self.regions.error_text.clone(),
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-integer parse: skips leading whitespace, accepts a sign and
/// stops at the first non-digit. A `0x` prefix switches to hex. `None`
/// when no digits were read or the value overflows `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let negative = text.starts_with('-');
    let body = &text[sign_len..];

    let (digits, radix) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    let len = digits
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading-decimal parse with optional fraction and exponent. Non-finite
/// results count as unparsed.
pub fn parse_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(text.starts_with(['+', '-']));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
