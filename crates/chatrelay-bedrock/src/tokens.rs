use chatrelay_core::models::cost::ModelPricing;
use chatrelay_core::models::token_count::TokenCount;

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        // Claude 3 Haiku
        id if id.contains("claude-3-haiku") => Some(ModelPricing {
            input_per_million: 0.25,
            output_per_million: 1.25,
        }),
        // Claude 3.5 Haiku and later
        id if id.contains("haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        id if id.contains("sonnet") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("opus") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        _ => None,
    }
}

/// Estimated USD cost of a call, if the model family is known.
pub fn estimate_cost(model_id: &str, tokens: TokenCount) -> Option<f64> {
    get_pricing(model_id).map(|p| p.estimate_cost(tokens))
}
