use anyhow::{Context, Result};

use super::ScenarioCtx;
use super::answers::fill_area;
use stable_core::constants::{
    ACH_PERFECT_CARETAKER, POINTS_PER_ANSWER, SECTION_COMPLETION_BONUS, TOTAL_STEPS,
};
use stable_core::{Area, AreaStatus, Field};

pub fn smoke(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let session = ctx.session();
    let progress = session.progress();

    anyhow::ensure!(progress.current_area() == Area::Office, "Session should start in the office");
    anyhow::ensure!(progress.current_step() == 1, "Global step should start at 1");
    anyhow::ensure!(progress.total_steps() == TOTAL_STEPS, "Step budget should be {TOTAL_STEPS}");
    anyhow::ensure!(progress.expertise_points() == 0, "No points before the first answer");

    let first = session
        .current_question()
        .context("Office should have a first question")?;
    anyhow::ensure!(
        first.field == Field::OwnerName,
        "First question should ask for the owner's name, got {}",
        first.field
    );
    anyhow::ensure!(
        session.achievements().total_count() == ctx.assets.expected_catalog_size(),
        "Catalog size mismatch"
    );
    ctx.note("fresh session looks sane");
    Ok(())
}

pub fn office_walkthrough(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    let outcomes = fill_area(&mut session, Area::Office)?;

    let completions: Vec<_> = outcomes
        .iter()
        .filter(|outcome| outcome.section_completed.is_some())
        .collect();
    anyhow::ensure!(
        completions.len() == 1,
        "Office should complete exactly once, completed {} times",
        completions.len()
    );
    anyhow::ensure!(
        completions[0].newly_unlocked_areas.len() == 4,
        "Office completion should unlock four areas, unlocked {:?}",
        completions[0].newly_unlocked_areas
    );

    let points = session.progress().expertise_points();
    anyhow::ensure!(points == 200, "Office walkthrough should score 200, scored {points}");
    anyhow::ensure!(
        session.progress().current_step() == 10,
        "Global step should be 10 after nine forward moves"
    );
    for area in [Area::Examination, Area::Feed, Area::Training, Area::Veterinary] {
        anyhow::ensure!(
            session.area_status(area) == AreaStatus::Unlocked,
            "{area} should be unlocked"
        );
    }
    ctx.note(&format!("office complete with {points} points"));
    Ok(())
}

pub fn full_questionnaire(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ctx.session();
    let mut answers = 0_u32;
    for area in Area::ALL {
        let outcomes = fill_area(&mut session, area)?;
        answers += u32::try_from(outcomes.len()).unwrap_or(u32::MAX);
        anyhow::ensure!(
            session.progress().is_area_complete(area),
            "{area} should be complete after answering every active question"
        );
        ctx.note(&format!("{area}: {} answers", outcomes.len()));
    }

    let progress = session.progress();
    anyhow::ensure!(progress.all_sections_complete(), "Every section should be complete");
    anyhow::ensure!(
        progress.completed_sections() == Area::ALL.as_slice(),
        "Sections should complete in map order, got {:?}",
        progress.completed_sections()
    );

    let expected = answers * POINTS_PER_ANSWER + 5 * SECTION_COMPLETION_BONUS;
    anyhow::ensure!(
        progress.expertise_points() == expected,
        "Expected {expected} points, got {}",
        progress.expertise_points()
    );
    anyhow::ensure!(progress.expertise_level() >= 1, "Full run should reach level 1");
    anyhow::ensure!(
        session.achievements().is_unlocked(ACH_PERFECT_CARETAKER),
        "Perfect caretaker should unlock after the last section"
    );
    anyhow::ensure!(
        session.achievements().unlocked_count() == 6,
        "All six built-in achievements should be unlocked, got {}",
        session.achievements().unlocked_count()
    );
    Ok(())
}
