use anyhow::Result;

use crate::logic::TesterAssets;
use stable_core::StableSession;

pub mod answers;
pub mod rules;
pub mod walkthrough;

#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx<'a> {
    pub assets: &'a TesterAssets,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    pub fn session(&self) -> StableSession {
        self.assets.new_session()
    }

    pub fn note(&self, message: &str) {
        if self.verbose {
            println!("  {message}");
        }
    }
}

/// A scripted questionnaire run with its expectations.
#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: fn(&ScenarioCtx<'_>) -> Result<()>,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "smoke",
        name: "Smoke Test",
        check: walkthrough::smoke,
    },
    TestScenario {
        key: "office",
        name: "Office Walkthrough",
        check: walkthrough::office_walkthrough,
    },
    TestScenario {
        key: "full-questionnaire",
        name: "Full Questionnaire",
        check: walkthrough::full_questionnaire,
    },
    TestScenario {
        key: "competition-toggle",
        name: "Competition Follow-up Toggle",
        check: rules::competition_toggle,
    },
    TestScenario {
        key: "locked-areas",
        name: "Locked Area Requests",
        check: rules::locked_areas,
    },
    TestScenario {
        key: "step-bounds",
        name: "Global Step Bounds",
        check: rules::step_bounds,
    },
    TestScenario {
        key: "achievement-idempotence",
        name: "Achievement Idempotence",
        check: rules::achievement_idempotence,
    },
    TestScenario {
        key: "custom-catalog",
        name: "Custom Achievement Catalog",
        check: rules::custom_catalog,
    },
    TestScenario {
        key: "reset",
        name: "Session Reset",
        check: rules::reset,
    },
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    let key = match key.as_str() {
        "full" => "full-questionnaire",
        "competition" => "competition-toggle",
        "locked" => "locked-areas",
        "steps" => "step-bounds",
        "achievements" => "achievement-idempotence",
        "catalog" => "custom-catalog",
        other => other,
    };
    SCENARIOS.iter().find(|scenario| scenario.key == key).copied()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}

pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS
        .iter()
        .map(|scenario| scenario.key.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, name) in list_scenarios() {
            let scenario = get_scenario(key).unwrap();
            assert_eq!(scenario.name, name);
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(get_scenario("FULL").unwrap().key, "full-questionnaire");
        assert_eq!(get_scenario("locked").unwrap().key, "locked-areas");
        assert!(get_scenario("boss-fight").is_none());
    }

    #[test]
    fn every_scenario_passes_with_default_assets() {
        let assets = TesterAssets::default();
        let ctx = ScenarioCtx {
            assets: &assets,
            verbose: false,
        };
        for scenario in SCENARIOS {
            if let Err(err) = (scenario.check)(&ctx) {
                panic!("{} failed: {err:#}", scenario.key);
            }
        }
    }
}
