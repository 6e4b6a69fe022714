//! Prompt templates for diagnosis queries

use std::collections::HashMap;

use super::ChatMessage;

/// Template for generating prompts
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    variables: Vec<String>,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let variables = extract_variables(&template);
        Self {
            template,
            variables,
        }
    }

    /// Fill in the template with variables
    ///
    /// Substituted values are never rescanned, so user text containing
    /// `{{...}}` is inserted verbatim. Unknown variables are left as-is.
    #[must_use]
    pub fn render(&self, values: &HashMap<&str, &str>) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            match after_open.find("}}") {
                Some(end) => {
                    let name = &after_open[..end];
                    match values.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push_str("{{");
                            result.push_str(name);
                            result.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    result.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Get required variables
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}

/// Extract variable names from template
fn extract_variables(template: &str) -> Vec<String> {
    let mut variables = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };
        let name = after_open[..end].to_string();
        if !name.is_empty() && !variables.contains(&name) {
            variables.push(name);
        }
        rest = &after_open[end + 2..];
    }

    variables
}

/// System prompt that fixes the assistant persona and output format
pub const SYSTEM_PROMPT: &str = r"
You are MedAssist AI, an advanced AI medical assistant. Your persona is professional, knowledgeable, and empathetic. Your primary function is to analyze a user's symptoms based on a provided context of medical documents and suggest potential conditions.

**Your Core Directives:**
1.  **Analyze and Filter:** Internally analyze the user's symptoms and the retrieved documents. Your most critical task is to identify which of the provided documents are **directly relevant** to the user's specific symptoms. **Silently and internally disregard all irrelevant documents.**
2.  **Synthesize Relevant Information:** Base your response **only** on the documents you have determined to be relevant. Do not mention the filtering process or the irrelevant documents in your final output.
3.  **Adopt a Clinical Tone:** Formulate your response in a clear, concise, and professional tone, as a doctor would.
4.  **Strict Output Format:** The user-facing response **must** adhere to the following structure precisely. Do not add any introductory text or explanation of your thought process. Begin your response *immediately* with the specified header.

---
**Possible Conditions Based on Your Symptoms:**

Based on the information provided, here are some potential conditions that could be related to your symptoms:

- **[Name of the Most Likely Condition]:** A brief, clinical explanation of why this condition is a potential match, directly referencing the user's symptoms.
- **[Name of the Second Most Likely Condition]:** A brief, clinical explanation of why this condition is a potential match.
- (Continue for all relevant conditions)

**Important Disclaimer:**

This information is for educational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. It is essential to consult with a qualified healthcare provider for an accurate diagnosis and personalized treatment plan.
---
";

/// Standard diagnosis prompt templates
pub struct DiagnosisPrompts;

impl DiagnosisPrompts {
    /// User turn carrying the retrieved context and the symptoms
    #[must_use]
    pub fn user_message() -> PromptTemplate {
        PromptTemplate::new(
            "Here is the context retrieved based on the user's symptoms:\n---CONTEXT---\n{{context}}\n\n---END CONTEXT---\n\n\
             Based on this context, please analyze the following user query: '{{query}}'",
        )
    }
}

/// Build the system and user messages for a diagnosis request
#[must_use]
pub fn build_diagnosis_messages(query: &str, context: &str) -> Vec<ChatMessage> {
    let values: HashMap<&str, &str> = [("context", context), ("query", query)]
        .into_iter()
        .collect();

    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(DiagnosisPrompts::user_message().render(&values)),
    ]
}
