use stable_core::constants::{
    ACH_DETAILED_EXAMINER, ACH_HEALTH_GUARDIAN, ACH_NUTRITION_EXPERT, ACH_PERFECT_CARETAKER,
    ACH_STABLE_MANAGER_NOVICE, ACH_TRAINING_MASTER,
};
use stable_core::{
    ActivityPatch, Area, AreaStatus, Field, FieldKind, FieldValue, ProfileUpdate, Question,
    StableSession,
};

fn answer_for(question: &Question) -> FieldValue {
    match question.field.kind() {
        FieldKind::Text => FieldValue::text(format!("{} answer", question.field.key())),
        FieldKind::Number => FieldValue::Number(question.validation.max.unwrap_or(1).max(1)),
        FieldKind::Choice => FieldValue::text(question.options()[0]),
        FieldKind::Flag => FieldValue::Flag(false),
        FieldKind::Tags => FieldValue::tags([question.options()[0]]),
    }
}

/// Answer every active question of `area` while walking the cursor forward.
fn walk(session: &mut StableSession, area: Area) {
    assert!(session.request_area(area), "{area} locked");
    loop {
        let question = session.current_question().unwrap();
        session.answer(question.field, answer_for(question)).unwrap();
        if !session.next_question() {
            break;
        }
    }
}

#[test]
fn office_scenario_scores_200_and_opens_four_areas() {
    let mut session = StableSession::new();
    let script = [
        (Field::OwnerName, FieldValue::text("Anna Nowak")),
        (Field::OwnerPhone, FieldValue::text("501 502 503")),
        (Field::OwnerEmail, FieldValue::text("anna@stajnia.pl")),
        (Field::HorseName, FieldValue::text("Kasztan")),
        (Field::HorseHeight, FieldValue::Number(165)),
        (Field::HorseBreed, FieldValue::text("Wielkopolska")),
        (Field::HorseAge, FieldValue::Number(12)),
        (Field::HorseWeight, FieldValue::Number(540)),
        (Field::HorseLocation, FieldValue::text("Wielkopolskie")),
        (Field::HorseGender, FieldValue::text("ogier")),
    ];
    let mut newly_unlocked = Vec::new();
    for (field, value) in script {
        let outcome = session.answer(field, value).unwrap();
        newly_unlocked.extend(outcome.newly_unlocked_areas);
    }
    assert_eq!(session.progress().expertise_points(), 200);
    assert_eq!(
        newly_unlocked,
        vec![Area::Examination, Area::Feed, Area::Training, Area::Veterinary]
    );
    assert_eq!(session.area_status(Area::Office), AreaStatus::Completed);
}

#[test]
fn competition_participation_toggles_frequency_question() {
    let mut session = StableSession::new();
    let has_frequency = |session: &StableSession| {
        session
            .active_questions(Area::Training)
            .iter()
            .any(|q| q.field == Field::CompetitionFrequency)
    };
    assert!(!has_frequency(&session));
    session
        .answer(Field::CompetitionParticipation, FieldValue::Flag(true))
        .unwrap();
    assert!(has_frequency(&session));
    session.update_profile(ProfileUpdate::Activity(ActivityPatch {
        competition_participation: Some(false),
        ..ActivityPatch::default()
    }));
    assert!(!has_frequency(&session));
}

#[test]
fn training_request_before_office_is_ignored() {
    let mut session = StableSession::new();
    assert!(!session.request_area(Area::Training));
    assert_eq!(session.progress().current_area(), Area::Office);
    assert_eq!(session.unlocked_areas(), vec![Area::Office]);
}

#[test]
fn full_questionnaire_unlocks_every_achievement() {
    let mut session = StableSession::new();
    let mut answers = 0;
    for area in Area::ALL {
        let before = session.progress().expertise_points();
        walk(&mut session, area);
        answers += session.active_questions(area).len();
        assert!(session.progress().is_area_complete(area), "{area}");
        assert!(session.progress().expertise_points() > before);
    }

    let unlocked: Vec<&str> = session
        .achievements()
        .unlocked()
        .iter()
        .map(|u| u.achievement.id.as_str())
        .collect();
    assert_eq!(
        unlocked,
        vec![
            ACH_STABLE_MANAGER_NOVICE,
            ACH_DETAILED_EXAMINER,
            ACH_NUTRITION_EXPERT,
            ACH_TRAINING_MASTER,
            ACH_HEALTH_GUARDIAN,
            ACH_PERFECT_CARETAKER,
        ]
    );
    assert!((session.achievements().progress_percentage() - 100.0).abs() < 1e-9);
    assert_eq!(
        session.progress().expertise_points(),
        u32::try_from(answers).unwrap() * 10 + 500
    );
    assert_eq!(
        session.achievements().recent(2)[1].achievement.id,
        ACH_PERFECT_CARETAKER
    );
}

#[test]
fn answers_after_completion_still_score_without_bonus() {
    let mut session = StableSession::new();
    walk(&mut session, Area::Office);
    let before = session.progress().expertise_points();
    let outcome = session
        .answer(Field::OwnerPhone, FieldValue::text("700 800 900"))
        .unwrap();
    assert_eq!(outcome.points_awarded, 10);
    assert_eq!(outcome.section_completed, None);
    assert_eq!(session.progress().expertise_points(), before + 10);
    assert_eq!(session.progress().completed_sections(), &[Area::Office]);
}

#[test]
fn reset_restores_office_empty_zero_one() {
    let mut session = StableSession::new();
    walk(&mut session, Area::Office);
    walk(&mut session, Area::Veterinary);
    session.reset_all();

    let progress = session.progress();
    assert_eq!(progress.current_area(), Area::Office);
    assert!(progress.completed_sections().is_empty());
    assert_eq!(progress.expertise_points(), 0);
    assert_eq!(progress.current_step(), 1);
    assert_eq!(session.achievements().unlocked_count(), 0);
    assert_eq!(session.cursor(Area::Veterinary).index(), 0);
}
