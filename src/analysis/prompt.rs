/// Renders the instruction block sent to the model.
///
/// `symptoms` is interpolated verbatim. Nothing is escaped or delimited, so a
/// crafted input can rewrite the instructions around it.
pub fn render_prompt(symptoms: &str) -> String {
    format!(
        "You are a helpful medical assistant AI. A user has provided the following symptoms: '{symptoms}'.
Based on these symptoms, please provide:
1. A list of possible medical conditions, ranked from most likely to least likely.
2. Recommended next steps for the user, grouped by urgency: self-care at home, a visit to a primary care physician, or emergency care.
3. A clear disclaimer that you are an AI, that this is not a medical diagnosis, and that this information is for educational purposes only and is not a substitute for professional medical advice.
Structure your response clearly for readability."
    )
}
