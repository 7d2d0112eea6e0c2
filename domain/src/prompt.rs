//! The fixed system instruction for the survey parsing model.
//!
//! The instruction pins down the exact JSON shape the validator enforces:
//! title from the first line, description from the intro text, numbered
//! questions, lettered options with the fixed score mapping a=0, b=1, c=2,
//! d=3, a scoring guide, and an optional trailing note. Changing this text
//! changes what the model emits — keep it in sync with
//! [`validation`](crate::survey::validation).

/// System turn sent with every parse request.
pub const SURVEY_PARSER_PROMPT: &str = r#"You are a survey text parser. Parse the survey text and return a JSON object with the following structure:
{
  "title": "string",
  "description": "string",
  "questions": [
    {
      "id": number,
      "text": "string",
      "options": [
        {
          "id": "a"|"b"|"c"|"d",
          "text": "string",
          "score": 0|1|2|3
        }
      ]
    }
  ],
  "scoringGuide": {
    "pointValues": "string",
    "totalPossible": number,
    "ranges": [
      {
        "min": number,
        "max": number,
        "title": "string",
        "description": "string"
      }
    ]
  },
  "note": "string (optional)"
}

Rules:
- Extract the title from the first line
- Extract description from the text after title before questions
- Parse numbered questions (1., 2., etc.)
- Parse lettered options (a), b), c), d) with scores a=0, b=1, c=2, d=3
- Extract scoring guide with point values and score ranges
- Extract any notes at the end
- Return only valid JSON, no explanations"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_wire_fields() {
        for field in ["scoringGuide", "pointValues", "totalPossible", "ranges"] {
            assert!(SURVEY_PARSER_PROMPT.contains(field), "missing {field}");
        }
    }

    #[test]
    fn prompt_pins_the_score_mapping() {
        assert!(SURVEY_PARSER_PROMPT.contains("a=0, b=1, c=2, d=3"));
    }
}
