use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};

use super::ScenarioCtx;
use super::answers::fill_area;
use stable_core::constants::{ACH_DETAILED_EXAMINER, FIRST_STEP, TOTAL_STEPS};
use stable_core::{
    Achievement, AchievementCategory, Area, Field, FieldValue, Progress, StableSession,
};

fn training_fields(session: &StableSession) -> Vec<Field> {
    session
        .active_questions(Area::Training)
        .iter()
        .map(|question| question.field)
        .collect()
}

pub fn competition_toggle(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    anyhow::ensure!(
        !training_fields(&session).contains(&Field::CompetitionFrequency),
        "Frequency should be hidden by default"
    );

    session.answer(Field::CompetitionParticipation, FieldValue::text("Tak"))?;
    let fields = training_fields(&session);
    let participation = fields
        .iter()
        .position(|field| *field == Field::CompetitionParticipation)
        .context("participation question missing")?;
    anyhow::ensure!(
        fields.get(participation + 1) == Some(&Field::CompetitionFrequency),
        "Frequency should follow participation, got {fields:?}"
    );
    anyhow::ensure!(
        !session.profile().is_section_complete(Area::Training),
        "Training cannot be complete without the frequency"
    );

    session.answer(Field::CompetitionParticipation, FieldValue::Flag(false))?;
    anyhow::ensure!(
        !training_fields(&session).contains(&Field::CompetitionFrequency),
        "Frequency should hide again"
    );
    Ok(())
}

pub fn locked_areas(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    for area in [Area::Examination, Area::Feed, Area::Training, Area::Veterinary] {
        anyhow::ensure!(!session.request_area(area), "{area} should be locked");
        anyhow::ensure!(
            session.progress().current_area() == Area::Office,
            "Locked request for {area} should keep the office"
        );
    }
    fill_area(&mut session, Area::Office)?;
    anyhow::ensure!(session.request_area(Area::Training), "Training should open");
    anyhow::ensure!(
        session.progress().current_area() == Area::Training,
        "Session should now be in training"
    );
    Ok(())
}

pub fn step_bounds(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut progress = Progress::new();
    for i in 0..200_u32 {
        if i % 5 < 2 {
            progress.decrement_step();
        } else {
            progress.increment_step();
        }
        let step = progress.current_step();
        anyhow::ensure!(
            (FIRST_STEP..=TOTAL_STEPS).contains(&step),
            "Step {step} left the range after {i} moves"
        );
    }
    progress.set_step(TOTAL_STEPS + 1);
    progress.set_step(0);
    anyhow::ensure!(
        (FIRST_STEP..=TOTAL_STEPS).contains(&progress.current_step()),
        "Out-of-range jumps must be ignored"
    );

    let mut session = ctx.session();
    anyhow::ensure!(!session.previous_question(), "Cannot go back from the first question");
    anyhow::ensure!(
        session.progress().current_step() == FIRST_STEP,
        "Blocked move must not change the step"
    );
    Ok(())
}

pub fn achievement_idempotence(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    let first = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .context("valid timestamp")?;
    let later = Utc
        .timestamp_opt(1_800_000_000, 0)
        .single()
        .context("valid timestamp")?;

    let registry = session.achievements_mut();
    anyhow::ensure!(registry.unlock_at(ACH_DETAILED_EXAMINER, first), "First unlock should count");
    anyhow::ensure!(!registry.unlock_at(ACH_DETAILED_EXAMINER, later), "Second unlock should not");
    anyhow::ensure!(!registry.unlock("no_such_badge"), "Unknown ids should be ignored");

    let unlocked = session.achievements().unlocked();
    anyhow::ensure!(unlocked.len() == 1, "Exactly one entry expected, got {}", unlocked.len());
    anyhow::ensure!(unlocked[0].unlocked_at == first, "First timestamp should win");
    Ok(())
}

pub fn custom_catalog(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    let before = session.achievements().total_count();
    let custom = Achievement::new(
        "tester_badge",
        "Odznaka Testera",
        "Dodana przez stable-tester",
        "badge",
        AchievementCategory::General,
    );
    anyhow::ensure!(session.achievements_mut().add_custom(custom.clone()), "New id should be added");
    anyhow::ensure!(!session.achievements_mut().add_custom(custom), "Duplicate id should be ignored");
    anyhow::ensure!(
        session.achievements().total_count() == before + 1,
        "Catalog should grow by one"
    );
    anyhow::ensure!(session.unlock_achievement("tester_badge"), "Custom badge should unlock");

    if let Some(extra) = &ctx.assets.extra_catalog {
        for achievement in extra {
            anyhow::ensure!(
                session
                    .achievements()
                    .available()
                    .get_by_id(&achievement.id)
                    .is_some(),
                "Loaded definition {} missing from the session",
                achievement.id
            );
        }
        ctx.note(&format!("{} loaded definitions present", extra.len()));
    }
    Ok(())
}

pub fn reset(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    fill_area(&mut session, Area::Office)?;
    fill_area(&mut session, Area::Feed)?;
    session.reset_all();

    let progress = session.progress();
    anyhow::ensure!(progress.current_area() == Area::Office, "Reset should return to the office");
    anyhow::ensure!(progress.completed_sections().is_empty(), "Reset should clear completions");
    anyhow::ensure!(progress.expertise_points() == 0, "Reset should clear points");
    anyhow::ensure!(progress.current_step() == FIRST_STEP, "Reset should rewind the step");
    anyhow::ensure!(
        session.achievements().unlocked_count() == 0,
        "Reset should clear unlocks"
    );
    anyhow::ensure!(
        session.profile().owner().name.is_empty(),
        "Reset should clear the profile"
    );
    Ok(())
}
