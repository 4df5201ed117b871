//! Prompt templates for both pipelines

use serde_json::Value;

/// Prompt for document-grounded answers.
pub fn rag_prompt(context: &str, question: &str) -> String {
    format!(
        "You are Travel.AI, a helpful travel assistant that answers questions based only on the following context:\n\n\
         {context}\n\n\
         Question: {question}\n\
         Answer as helpfully as possible:"
    )
}

/// Persona prompt for the open chat pipeline: fixed instructions, the
/// caller's history verbatim, then the new question.
pub fn chat_prompt(history: &[Value], question: &str) -> String {
    let mut prompt = String::from(
        "You are Travel.AI, a helpful travel assistant. You help users with:\n\
         1. Flight booking\n\
         2. Hotel booking\n\
         3. Car rental booking\n\
         4. Destination information\n\
         5. Travel tips\n\
         6. Weather updates\n\
         7. Local attractions\n\
         8. Customer service\n\n\
         Chat history:\n",
    );

    for turn in history {
        // String turns render bare; anything else renders as compact JSON.
        // The caller owns the history shape; the service does not interpret it.
        match turn {
            Value::String(text) => prompt.push_str(text),
            other => prompt.push_str(&other.to_string()),
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!("\nUser: {question}\nTravel.AI:"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rag_prompt_contains_context_and_question() {
        let prompt = rag_prompt("Paris is the capital of France.", "What is the capital?");
        assert!(prompt.starts_with("You are Travel.AI"));
        assert!(prompt.contains("Paris is the capital of France."));
        assert!(prompt.contains("Question: What is the capital?"));
        assert!(prompt.ends_with("Answer as helpfully as possible:"));
    }

    #[test]
    fn test_chat_prompt_lists_all_topics() {
        let prompt = chat_prompt(&[], "Book me a flight to Tokyo");
        for topic in [
            "Flight booking",
            "Hotel booking",
            "Car rental booking",
            "Destination information",
            "Travel tips",
            "Weather updates",
            "Local attractions",
            "Customer service",
        ] {
            assert!(prompt.contains(topic), "missing topic: {}", topic);
        }
        assert!(prompt.ends_with("User: Book me a flight to Tokyo\nTravel.AI:"));
    }

    #[test]
    fn test_chat_prompt_renders_history_in_order() {
        let history = vec![
            json!("User: Hi"),
            json!({"role": "assistant", "text": "Hello, I am Travel.AI."}),
        ];
        let prompt = chat_prompt(&history, "Any hotels in Rome?");

        let first = prompt.find("User: Hi").unwrap();
        let second = prompt.find(r#"{"role":"assistant","text":"Hello, I am Travel.AI."}"#).unwrap();
        let question = prompt.find("Any hotels in Rome?").unwrap();
        assert!(first < second);
        assert!(second < question);
    }
}
