//! WASM bindings for a browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{rules_text, run_match, validate, MatchConfig, SeededRng};

/// Validate a single raw move
///
/// # Returns
/// JSON serialized Validation
#[wasm_bindgen]
pub fn validate_move(raw: &str, bomb_used: bool) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&validate(raw, bomb_used))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay a match with full round-by-round details
///
/// # Arguments
/// * `inputs_json` - JSON array of raw user inputs, one per round
/// * `max_rounds` - Match length
/// * `seed` - Opponent seed
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn replay_match(inputs_json: &str, max_rounds: u32, seed: u64) -> Result<JsValue, JsError> {
    let inputs: Vec<String> = serde_json::from_str(inputs_json)
        .map_err(|e| JsError::new(&format!("Invalid inputs: {}", e)))?;
    let config = MatchConfig::new(max_rounds).map_err(|e| JsError::new(&e.to_string()))?;

    let result = run_match(&inputs, &config, &mut SeededRng::new(seed));

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Fresh opponent seed from the browser's Math.random
#[wasm_bindgen]
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen]
pub fn get_rules(max_rounds: u32) -> Result<String, JsError> {
    let config = MatchConfig::new(max_rounds).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(rules_text(&config))
}
