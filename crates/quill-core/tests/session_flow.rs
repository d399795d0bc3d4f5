//! End-to-end state scenarios: the session is driven exactly the way the
//! app drives it (apply changes, begin submit, land the outcome) with the
//! generation client stubbed out.

use quill_core::{
    Field, GenerationParams, GenerationResult, Genre, Length, ParamChange, PieceType,
    ResultMetadata, Session, Tone, View, samples,
};

fn generated(params: GenerationParams) -> GenerationResult {
    GenerationResult {
        id: "gen-1700000000000".into(),
        title: "The Baker of Emberfall".into(),
        content: "The dragon's sourdough never needed an oven.".into(),
        summary: "A dragon finds her calling in a village bakery.".into(),
        metadata: ResultMetadata {
            piece_type: params.piece_type.unwrap(),
            genre: params.genre.unwrap(),
            tone: params.tone.unwrap(),
            word_count: params.length.unwrap(),
            token_usage: Some(812),
            generation_time: 4.51,
            params,
        },
    }
}

#[test]
fn scenario_a_successful_generation() {
    let mut session = Session::new();
    assert_eq!(session.view, View::Gallery);

    session.apply(ParamChange::Type(PieceType::Story));
    session.apply(ParamChange::Genre(Genre::Fantasy));
    session.apply(ParamChange::Tone(Tone::Humorous));
    session.apply(ParamChange::Length(Length::Short));

    assert!(session.begin_submit());
    assert_eq!(session.view, View::Result);
    assert!(session.loading);

    let result = generated(session.params.clone());
    session.finish_submit(Ok(result));
    assert!(!session.loading);

    let current = session.current.as_ref().expect("result stored");
    assert!(!current.title.is_empty());
    assert!(!current.content.is_empty());
    assert!(!current.summary.is_empty());
    assert_eq!(current.metadata.word_count, Length::Short);
    assert!(session.is_variation());
}

#[test]
fn scenario_b_submit_with_missing_type() {
    let mut session = Session::new();
    session.apply(ParamChange::Genre(Genre::Fantasy));
    session.apply(ParamChange::Tone(Tone::Humorous));
    session.apply(ParamChange::Length(Length::Short));

    assert!(!session.begin_submit());
    assert_eq!(session.errors.len(), 1);
    assert_eq!(
        session.errors.get(Field::Type),
        Some("Please select a type.")
    );
    assert_eq!(session.view, View::Gallery);
    assert!(!session.loading);
}

#[test]
fn scenario_c_quota_failure_surfaces_literal_message() {
    let mut session = Session::new();
    session.apply(ParamChange::Type(PieceType::Poem));
    session.apply(ParamChange::Genre(Genre::Motivational));
    session.apply(ParamChange::Tone(Tone::Inspirational));
    session.apply(ParamChange::Length(Length::Medium));

    assert!(session.begin_submit());
    session.finish_submit(Err("API quota exceeded. Please try again later.".into()));

    assert_eq!(
        session.error.as_deref(),
        Some("API quota exceeded. Please try again later.")
    );
    assert!(session.current.is_none());
    assert!(!session.loading);
}

#[test]
fn gallery_sample_loads_settings_without_a_request() {
    let mut session = Session::new();
    let sample = samples::gallery().into_iter().next().unwrap();
    let expected_params = sample.metadata.params.clone();

    session.select_sample(sample);

    assert_eq!(session.view, View::Result);
    assert_eq!(session.params, expected_params);
    assert!(!session.loading);
    assert!(session.is_variation());

    // Editing any single field makes the next submit a fresh generation.
    session.apply(ParamChange::Tone(Tone::Suspenseful));
    assert!(!session.is_variation());
}
