//! Prompt construction for the post-generation pipeline.
//!
//! The instruction text and the response schema are fixed; only the topic
//! and skill list vary per request.

/// Instruction template for the structured post draft.
///
/// Embeds the topic and the skill list; the response shape itself is
/// enforced by [`post_response_schema`], not by the prose.
pub fn post_prompt(topic: &str, skills: &[String]) -> String {
    let skill_list = skills.join(", ");
    format!(
        "You are writing for a software engineer's personal portfolio blog. \
         Write an original blog post about the following topic: {topic}. \
         Where it fits naturally, draw on the author's experience with: {skill_list}. \
         Respond with a JSON object containing: \
         \"title\" (an engaging post title), \
         \"slug\" (a URL-safe slug for the title, lowercase words separated by hyphens), \
         \"description\" (a summary of at most two sentences), \
         \"content\" (the full post in markdown, using headings for structure), and \
         \"image_prompt\" (a short visual description for a cover illustration, \
         no text or logos in the image)."
    )
}

/// Response schema constraining the text model's output to the five draft
/// fields. All fields are required.
pub fn post_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "slug": { "type": "STRING" },
            "description": { "type": "STRING" },
            "content": { "type": "STRING" },
            "image_prompt": { "type": "STRING" },
        },
        "required": ["title", "slug", "description", "content", "image_prompt"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_topic_and_skills() {
        let skills = vec!["Node.js".to_string(), "OWASP".to_string()];
        let prompt = post_prompt("API security basics", &skills);

        assert!(prompt.contains("API security basics"));
        assert!(prompt.contains("Node.js, OWASP"));
    }

    #[test]
    fn schema_requires_all_five_fields() {
        let schema = post_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            ["title", "slug", "description", "content", "image_prompt"]
        );
        for field in required {
            assert!(
                schema["properties"][field].is_object(),
                "missing property: {field}"
            );
        }
    }
}
