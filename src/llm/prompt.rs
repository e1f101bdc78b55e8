// * Prompt Construction
// * One system instruction and one user instruction carrying the template and the context.

use crate::config::DestinationConfig;
use crate::llm::types::ChatMessage;

/// Keys the `details` object must always contain
pub const DETAIL_KEYS: [&str; 14] = [
    "history",
    "bestTime",
    "weather",
    "attractions",
    "forFamily",
    "forCouples",
    "forSolo",
    "forAdventure",
    "forVloggers",
    "culture",
    "food",
    "safety",
    "cost",
    "crowd",
];

/// System instruction: extract only, never invent
pub fn system_prompt(destination: &DestinationConfig) -> String {
    format!(
        "You are a helpful data extraction assistant. Your task is to extract travel information \
         about {} from the provided text and format it into a specific JSON structure. \
         Do NOT invent information. If information is missing, output null or a generic sensible \
         description based on the context.",
        destination.name
    )
}

/// User instruction embedding the serialized template and the context text
pub fn user_prompt(destination: &DestinationConfig, template: &str, context: &str) -> String {
    format!(
        r#"
Please generate a valid JSON object for "{name}" ({state}, {country}) based on the text provided below.
The output JSON MUST have the EXACT same structure and fields as this example:

{template}

TEXT TO EXTRACT FROM:
{context}

IMPORTANT RULES:
1. Output ONLY valid JSON. No markdown formatting (like ```json), no explanations.
2. Ensure all fields from the example are present.
3. For "images", use placeholder URLs or extract if available in text.
4. "details" object must have all the keys: {keys}.
"#,
        name = destination.name,
        state = destination.state,
        country = destination.country,
        keys = DETAIL_KEYS.join(", "),
    )
}

/// The full message list for one formatting request
pub fn build_messages(destination: &DestinationConfig, template: &str, context: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(destination)),
        ChatMessage::user(user_prompt(destination, template, context)),
    ]
}
