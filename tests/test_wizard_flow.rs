//! Wizard sessions driven through the public API.

use draftwizard::config::ConfigLoader;
use draftwizard::document::GenerateOptions;
use draftwizard::error::WizardError;
use draftwizard::form::FormState;
use draftwizard::wizard::{Page, RequiredFields, WizardPosition, WizardSession, replay};

mod common;

use common::DraftWizard;

fn session(form: FormState) -> WizardSession {
    WizardSession::new(form, RequiredFields::default(), GenerateOptions::for_year(2024))
}

fn missing_field(err: WizardError) -> String {
    match err {
        WizardError::MissingRequired { field, .. } => field,
        other => panic!("expected MissingRequired, got {other:?}"),
    }
}

#[test]
fn fill_in_page_by_page() {
    let mut s = session(FormState::new());
    assert_eq!(s.document(), "");

    assert_eq!(s.advance(), Ok(Page::Title));
    assert!(s.document().contains(r#"docName="unknown""#));

    assert_eq!(missing_field(s.advance().unwrap_err()), "idtitle");
    s.set_field("idtitle", "Stepwise");
    assert_eq!(missing_field(s.advance().unwrap_err()), "filename");
    s.set_field("filename", "stepwise");
    assert_eq!(s.advance(), Ok(Page::Author));
    assert!(s.document().contains("<title>Stepwise</title>"));

    assert_eq!(missing_field(s.advance().unwrap_err()), "author1_fullname");
    s.set_field("author1_fullname", "Joe Nobody");
    assert_eq!(missing_field(s.advance().unwrap_err()), "author1_initials");
    s.set_field("author1_initials", "J.");
    s.set_field("author1_surname", "Nobody");
    assert_eq!(s.advance(), Ok(Page::KeywordsAbstract));

    assert_eq!(missing_field(s.advance().unwrap_err()), "abstract");
    s.set_field("abstract", "Short.");
    assert_eq!(s.advance(), Ok(Page::References));
    assert_eq!(s.advance(), Ok(Page::Options));
    assert_eq!(s.advance(), Ok(Page::Final));
    assert_eq!(s.advance(), Err(WizardError::NoNextPage(Page::Final)));

    assert!(s.document().contains("<back>"));
    assert_eq!(s.doc_name(), "draft-stepwise-00");
}

#[test]
fn second_author_must_be_complete() {
    let form = FormState::sample()
        .with("author2_fullname", "Second Person")
        .with("author2_initials", "S.");
    let mut s = WizardSession::resume(
        form,
        WizardPosition::reached(Page::Author),
        RequiredFields::default(),
        GenerateOptions::for_year(2024),
    );
    assert_eq!(missing_field(s.advance().unwrap_err()), "author2_surname");
    assert_eq!(s.position().current_page(), Page::Author);
}

#[test]
fn long_title_needs_short_title() {
    let form = FormState::new()
        .with("idtitle", "A Title That Is Definitely Longer Than Thirty-Five Characters")
        .with("filename", "long");
    let mut s = WizardSession::resume(
        form,
        WizardPosition::reached(Page::Title),
        RequiredFields::default(),
        GenerateOptions::for_year(2024),
    );
    assert_eq!(missing_field(s.advance().unwrap_err()), "idshorttitle");
    s.set_field("idshorttitle", "Long Title");
    assert_eq!(s.advance(), Ok(Page::Author));
    assert!(s.document().contains(r#"<title abbrev="Long Title">"#));
}

#[test]
fn menu_navigation_never_validates() {
    let mut s = session(FormState::new());
    s.advance().unwrap();
    assert_eq!(s.jump_to(Page::Intro), Page::Intro);
    assert_eq!(s.preview(), "");
    assert_eq!(s.jump_to(Page::Title), Page::Title);
    assert_eq!(s.retreat(), Page::Intro);
    assert_eq!(s.retreat(), Page::Intro);
    assert_eq!(s.position().max_page_reached(), Page::Title);
}

#[test]
fn jump_cannot_skip_ahead() {
    let mut s = session(FormState::sample());
    s.advance().unwrap();
    assert_eq!(s.jump_to(Page::Final), Page::Title);
    assert!(!s.document().contains("<back>"));
}

#[test]
fn document_keeps_high_water_mark_after_going_back() {
    let mut s = session(FormState::sample());
    for _ in 0..5 {
        s.advance().unwrap();
    }
    let at_options = s.document().to_string();
    s.jump_to(Page::Title);
    assert_eq!(s.document(), at_options);
}

#[test]
fn relaxed_policy_allows_empty_form() {
    let mut s = WizardSession::new(
        FormState::new(),
        RequiredFields::none(),
        GenerateOptions::for_year(2024),
    );
    assert_eq!(s.advance(), Ok(Page::Title));
    assert_eq!(s.advance(), Ok(Page::Author));
    assert_eq!(missing_field(s.advance().unwrap_err()), "author1_fullname");
}

#[test]
fn replayed_script_matches_manual_session() {
    let script = ConfigLoader::with_defaults()
        .load_script(&DraftWizard::fixture_path("scripts/walk.yaml"))
        .unwrap();

    let mut scripted = session(FormState::new());
    let notices = replay(&mut scripted, &script);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].step, 1);
    assert_eq!(notices[0].field.as_deref(), Some("idtitle"));

    let mut manual = session(FormState::new());
    manual.advance().unwrap();
    let _ = manual.advance();
    manual.set_field("idtitle", "Scripted Draft");
    manual.set_field("filename", "scripted");
    manual.advance().unwrap();
    manual.set_field("author1_fullname", "Joe Nobody");
    manual.set_field("author1_initials", "J.");
    manual.set_field("author1_surname", "Nobody");
    manual.advance().unwrap();
    manual.jump_to(Page::Title);

    assert_eq!(scripted.position(), manual.position());
    assert_eq!(scripted.document(), manual.document());
    assert_eq!(scripted.position().max_page_reached(), Page::KeywordsAbstract);
}
