//! Executive ↔ startup matching. The score is continuous in [0, 1];
//! interpreting it is left to the caller.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{MATCH_PERSONA, MATCH_TEMPLATE};
use crate::flows::schema::{FieldKind, FieldSpec, OutputSchema};
use crate::flows::{require_text, template, with_schema, Flow, Validate};
use crate::llm_client::prompts::system_prompt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInput {
    pub executive_profile: String,
    pub startup_needs: String,
}

impl Validate for MatchInput {
    fn validate(&self) -> Result<(), AppError> {
        require_text("executiveProfile", &self.executive_profile)?;
        require_text("startupNeeds", &self.startup_needs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: f64,
    pub rationale: String,
    pub recommendation: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("matchScore", FieldKind::Score { min: 0.0, max: 1.0 }),
    FieldSpec::required("rationale", FieldKind::Text),
    FieldSpec::required("recommendation", FieldKind::Text),
];

static SCHEMA: OutputSchema = OutputSchema::new(FIELDS);

pub struct MatchExecutive;

impl Flow for MatchExecutive {
    const NAME: &'static str = "match_executive";

    type Input = MatchInput;
    type Output = MatchResult;

    fn system() -> String {
        system_prompt(MATCH_PERSONA)
    }

    fn render(input: &MatchInput) -> String {
        let prompt = template::render(
            MATCH_TEMPLATE,
            &[
                ("executive_profile", input.executive_profile.trim()),
                ("startup_needs", input.startup_needs.trim()),
            ],
        );
        with_schema(prompt, &SCHEMA)
    }

    fn output_schema() -> &'static OutputSchema {
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::run_flow;
    use crate::llm_client::stub::StubModel;
    use serde_json::json;

    fn input() -> MatchInput {
        MatchInput {
            executive_profile: "Fractional CMO, 15 years in B2B SaaS demand generation.".into(),
            startup_needs: "Seed-stage dev-tools company needs a go-to-market plan.".into(),
        }
    }

    #[tokio::test]
    async fn test_valid_reply_passes_through_unchanged() {
        let model = StubModel::replying_json(json!({
            "matchScore": 0.73,
            "rationale": "Strong B2B SaaS demand-gen background; no dev-tools experience.",
            "recommendation": "Engage for a 3-month GTM sprint."
        }));

        let result = run_flow::<MatchExecutive>(&model, &input()).await.unwrap();
        assert_eq!(
            result,
            MatchResult {
                match_score: 0.73,
                rationale: "Strong B2B SaaS demand-gen background; no dev-tools experience."
                    .into(),
                recommendation: "Engage for a 3-month GTM sprint.".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_integer_boundary_scores_are_accepted() {
        let model = StubModel::replying_json(json!({
            "matchScore": 1,
            "rationale": "Ideal.",
            "recommendation": "Hire."
        }));
        let result = run_flow::<MatchExecutive>(&model, &input()).await.unwrap();
        assert_eq!(result.match_score, 1.0);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_a_generation_error() {
        let model = StubModel::replying_json(json!({
            "matchScore": 87,
            "rationale": "Good fit.",
            "recommendation": "Proceed."
        }));
        let err = run_flow::<MatchExecutive>(&model, &input()).await.unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_missing_recommendation_is_a_generation_error() {
        let model = StubModel::replying_json(json!({
            "matchScore": 0.4,
            "rationale": "Partial fit."
        }));
        let err = run_flow::<MatchExecutive>(&model, &input()).await.unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_blank_needs_fail_validation() {
        let model = StubModel::replying("{}");
        let bad = MatchInput {
            startup_needs: " ".into(),
            ..input()
        };
        let err = run_flow::<MatchExecutive>(&model, &bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("startupNeeds")));
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_prompt_contains_both_sides() {
        let prompt = MatchExecutive::render(&input());
        assert!(prompt.contains("Fractional CMO"));
        assert!(prompt.contains("dev-tools company"));
        assert!(prompt.contains("0 and 1 inclusive"));
    }
}
