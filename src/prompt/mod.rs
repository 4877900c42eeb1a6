use serde_json::{json, Value};

use crate::wire::CopyCategory;

fn copy_guidelines() -> &'static str {
r#"Generate the following three types of copy:
1. A social media post (SOCIAL_MEDIA_POST): Engaging, includes hashtags, and is around 280 characters.
2. An ad headline (AD_HEADLINE): Short, punchy, and attention-grabbing.
3. An email subject line (EMAIL_SUBJECT): Intriguing and designed to maximize open rates."#
}

/// Prompt sent as the single user turn. Both inputs are embedded verbatim.
pub fn user_prompt_copy(product_name: &str, product_description: &str) -> String {
    format!(
"You are an expert marketing copywriter.
Your task is to generate three pieces of marketing copy for a product based on its name and description.

Product Name: {name}
Product Description: {description}

{guidelines}

Return the result as a JSON array. Do not include any markdown formatting like ```json.",
name = product_name,
description = product_description,
guidelines = copy_guidelines()
)
}

/// Structured output schema in the Gemini OpenAPI subset.
pub fn response_schema() -> Value {
    let tags: Vec<&str> = CopyCategory::ALL.iter().map(|c| c.as_wire()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": {
                    "type": "STRING",
                    "enum": tags,
                    "description": "The type of marketing copy."
                },
                "content": {
                    "type": "STRING",
                    "description": "The generated marketing copy text."
                }
            },
            "required": ["type", "content"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let p = user_prompt_copy("Quantum Sneakers", "Lightweight running shoes with adaptive cushioning");
        assert!(p.contains("Product Name: Quantum Sneakers"));
        assert!(p.contains("Product Description: Lightweight running shoes with adaptive cushioning"));
        assert!(p.contains("JSON array"));
        for c in CopyCategory::ALL {
            assert!(p.contains(c.as_wire()));
        }
    }

    #[test]
    fn test_prompt_keeps_braces_and_whitespace() {
        let p = user_prompt_copy("  {name}  ", "line one\nline two");
        assert!(p.contains("  {name}  "));
        assert!(p.contains("line one\nline two"));
    }

    #[test]
    fn test_schema_constrains_categories() {
        let s = response_schema();
        assert_eq!(s["type"], "ARRAY");
        assert_eq!(
            s["items"]["properties"]["type"]["enum"],
            json!(["SOCIAL_MEDIA_POST", "AD_HEADLINE", "EMAIL_SUBJECT"])
        );
        assert_eq!(s["items"]["required"], json!(["type", "content"]));
    }
}
