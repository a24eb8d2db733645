use anyhow::{Context, Result};

use stable_core::{AnswerOutcome, Area, FieldKind, FieldValue, Question, StableSession};

/// A plausible answer for `question`: first option for choices, the middle of
/// the range for numbers, a label for free text.
pub fn sample_answer(question: &Question) -> FieldValue {
    let field = question.field;
    match field.kind() {
        FieldKind::Text => FieldValue::text(format!("test {}", field.key())),
        FieldKind::Number => {
            let min = question.validation.min.unwrap_or(0);
            let max = question.validation.max.unwrap_or(min + 2);
            FieldValue::Number((min + (max - min) / 2).max(1))
        }
        FieldKind::Choice => FieldValue::text(question.options().first().copied().unwrap_or("")),
        FieldKind::Flag => FieldValue::Flag(false),
        FieldKind::Tags => FieldValue::tags(question.options().into_iter().take(1)),
    }
}

/// Enter `area`, answer every active question in order and advance the
/// cursor after each one. Returns the outcome of every answer.
pub fn fill_area(session: &mut StableSession, area: Area) -> Result<Vec<AnswerOutcome>> {
    anyhow::ensure!(session.request_area(area), "area {area} is still locked");
    let mut outcomes = Vec::new();
    loop {
        let question = session
            .current_question()
            .with_context(|| format!("{area} has no active question"))?;
        let outcome = session
            .answer(question.field, sample_answer(question))
            .with_context(|| format!("answering {}", question.field))?;
        outcomes.push(outcome);
        if !session.next_question() {
            break;
        }
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stable_core::questions;

    #[test]
    fn samples_fit_their_fields() {
        for area in Area::ALL {
            for question in questions(area) {
                let value = sample_answer(question);
                assert!(value.is_answered(), "{}", question.field);
                assert!(question.field.to_update(value.clone()).is_ok(), "{}", question.field);
                assert!(question.validation.check(&value).is_empty(), "{}", question.field);
            }
        }
    }

    #[test]
    fn fill_area_completes_office() {
        let mut session = StableSession::new();
        let outcomes = fill_area(&mut session, Area::Office).unwrap();
        assert_eq!(outcomes.len(), 10);
        assert!(session.progress().is_area_complete(Area::Office));
    }
}
