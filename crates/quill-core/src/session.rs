use crate::params::{GenerationParams, ParamChange};
use crate::result::GenerationResult;
use crate::validate::{ValidationErrors, validate};

/// Which of the three main views is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Gallery,
    Result,
    Comparison,
}

/// The complete interactive state of the app: the live parameter record,
/// per-field validation errors, the single current result, and the
/// loading/error flags of the in-flight request. All mutation goes through
/// the named operations below so the state machine can be exercised
/// without a UI harness.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub params: GenerationParams,
    pub errors: ValidationErrors,
    pub current: Option<GenerationResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one field of the parameter record. If that field carried
    /// a validation error it is cleared; other fields are not re-validated.
    pub fn apply(&mut self, change: ParamChange) {
        if let Some(field) = change.field() {
            self.errors.clear_field(field);
        }
        match change {
            ParamChange::Type(piece_type) => self.params.piece_type = Some(piece_type),
            ParamChange::Genre(genre) => self.params.genre = Some(genre),
            ParamChange::Tone(tone) => self.params.tone = Some(tone),
            ParamChange::Length(length) => self.params.length = Some(length),
            ParamChange::Title(title) => self.params.custom_title = title,
            ParamChange::Prompt(prompt) => self.params.custom_prompt = prompt,
        }
    }

    /// Validates the record and, if submittable, enters the loading
    /// sub-state of the result view. Returns whether the caller should
    /// start a generation request. A submit while one is already in
    /// flight is rejected.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }

        let errors = validate(&self.params);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        self.error = None;
        self.current = None;
        self.loading = true;
        self.view = View::Result;
        true
    }

    /// Lands the outcome of a generation request: the result clears any
    /// error, an error message clears the result. Whatever lands last
    /// wins; there is no cancellation.
    pub fn finish_submit(&mut self, outcome: Result<GenerationResult, String>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.error = None;
                self.current = Some(result);
            }
            Err(message) => {
                self.current = None;
                self.error = Some(message);
            }
        }
    }

    /// Stores the sample as the current result, loads its originating
    /// params into the form, clears all errors, and shows the result view
    /// without issuing a request.
    pub fn select_sample(&mut self, sample: GenerationResult) {
        self.params = sample.metadata.params.clone();
        self.errors.clear();
        self.error = None;
        self.current = Some(sample);
        self.view = View::Result;
    }

    /// Explicit user navigation; no side effects on the rest of the state.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// True exactly when the live parameter record equals the displayed
    /// result's originating params, i.e. a resubmit would be a variation
    /// of the same base. Only relabels the submit control.
    pub fn is_variation(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|result| result.metadata.params == self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Field, Genre, Length, PieceType, Tone};
    use crate::result::ResultMetadata;

    fn complete_params() -> GenerationParams {
        GenerationParams {
            piece_type: Some(PieceType::Story),
            genre: Some(Genre::Fantasy),
            tone: Some(Tone::Humorous),
            length: Some(Length::Short),
            ..Default::default()
        }
    }

    fn result_for(params: GenerationParams) -> GenerationResult {
        GenerationResult {
            id: "gen-42".into(),
            title: "The Goblin's Tea Party".into(),
            content: "Grizelda peered from her mushroom cottage.".into(),
            summary: "A goblin learns what friendship means.".into(),
            metadata: ResultMetadata {
                piece_type: params.piece_type.unwrap(),
                genre: params.genre.unwrap(),
                tone: params.tone.unwrap(),
                word_count: params.length.unwrap(),
                token_usage: None,
                generation_time: 2.17,
                params,
            },
        }
    }

    #[test]
    fn test_apply_clears_only_that_fields_error() {
        let mut session = Session::new();
        assert!(!session.begin_submit());
        assert_eq!(session.errors.len(), 4);

        session.apply(ParamChange::Type(PieceType::Story));
        assert!(session.errors.get(Field::Type).is_none());
        assert!(session.errors.get(Field::Genre).is_some());
        assert!(session.errors.get(Field::Tone).is_some());
        assert!(session.errors.get(Field::Length).is_some());
    }

    #[test]
    fn test_text_changes_do_not_touch_errors() {
        let mut session = Session::new();
        session.begin_submit();
        session.apply(ParamChange::Title("The Last Dragon's Secret".into()));
        assert_eq!(session.errors.len(), 4);
    }

    #[test]
    fn test_invalid_submit_keeps_view_and_stays_idle() {
        let mut session = Session::new();
        session.apply(ParamChange::Genre(Genre::Mystery));

        assert!(!session.begin_submit());
        assert_eq!(session.view, View::Gallery);
        assert!(!session.loading);
        assert!(session.current.is_none());
        assert_eq!(
            session.errors.get(Field::Type),
            Some("Please select a type.")
        );
    }

    #[test]
    fn test_valid_submit_enters_loading_result_view() {
        let mut session = Session::new();
        session.params = complete_params();

        assert!(session.begin_submit());
        assert_eq!(session.view, View::Result);
        assert!(session.loading);
        assert!(session.errors.is_empty());
        assert!(session.current.is_none());
        assert!(session.error.is_none());
    }

    #[test]
    fn test_second_submit_rejected_while_loading() {
        let mut session = Session::new();
        session.params = complete_params();
        assert!(session.begin_submit());
        assert!(!session.begin_submit());
    }

    #[test]
    fn test_success_replaces_result_and_clears_error() {
        let mut session = Session::new();
        session.params = complete_params();
        session.begin_submit();
        session.finish_submit(Ok(result_for(complete_params())));

        assert!(!session.loading);
        assert!(session.error.is_none());
        let result = session.current.as_ref().unwrap();
        assert_eq!(result.metadata.word_count, Length::Short);
    }

    #[test]
    fn test_failure_stores_message_and_clears_result() {
        let mut session = Session::new();
        session.params = complete_params();
        session.begin_submit();
        session.finish_submit(Err("API quota exceeded. Please try again later.".into()));

        assert!(!session.loading);
        assert!(session.current.is_none());
        assert_eq!(
            session.error.as_deref(),
            Some("API quota exceeded. Please try again later.")
        );
    }

    #[test]
    fn test_select_sample_overwrites_params_and_errors() {
        let mut session = Session::new();
        session.begin_submit();
        assert!(!session.errors.is_empty());

        let sample = result_for(complete_params());
        session.select_sample(sample.clone());

        assert_eq!(session.params, complete_params());
        assert!(session.errors.is_empty());
        assert!(session.error.is_none());
        assert_eq!(session.view, View::Result);
        assert_eq!(session.current, Some(sample));
    }

    #[test]
    fn test_navigation_has_no_side_effects() {
        let mut session = Session::new();
        session.select_sample(result_for(complete_params()));

        session.navigate(View::Comparison);
        assert_eq!(session.view, View::Comparison);
        assert!(session.current.is_some());

        session.navigate(View::Gallery);
        assert_eq!(session.view, View::Gallery);
        assert!(session.current.is_some());
    }

    #[test]
    fn test_is_variation_tracks_field_wise_equality() {
        let mut session = Session::new();
        session.select_sample(result_for(complete_params()));
        assert!(session.is_variation());

        session.apply(ParamChange::Tone(Tone::Dark));
        assert!(!session.is_variation());

        session.apply(ParamChange::Tone(Tone::Humorous));
        assert!(session.is_variation());
    }

    #[test]
    fn test_is_variation_false_without_result() {
        let mut session = Session::new();
        session.params = complete_params();
        assert!(!session.is_variation());
    }
}
