//! Model value object naming the inference model to query.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The inference model used for survey parsing (Value Object).
///
/// DeepSeek chat is the default; any other identifier is carried through
/// verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    DeepseekChat,
    DeepseekReasoner,
    Custom(String),
}

impl Model {
    /// The wire identifier sent to the chat-completions endpoint.
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepseekChat => "deepseek-chat",
            Model::DeepseekReasoner => "deepseek-reasoner",
            Model::Custom(s) => s,
        }
    }

    /// Build a model from its wire identifier. Unknown identifiers are
    /// carried through as [`Model::Custom`]; this never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "deepseek-chat" => Model::DeepseekChat,
            "deepseek-reasoner" => Model::DeepseekReasoner,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::DeepseekChat
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_round_trip() {
        assert_eq!("deepseek-chat".parse::<Model>().unwrap(), Model::DeepseekChat);
        assert_eq!(Model::DeepseekChat.as_str(), "deepseek-chat");
        assert_eq!(Model::default(), Model::DeepseekChat);
    }

    #[test]
    fn unknown_id_becomes_custom() {
        let model: Model = "gpt-4.1".parse().unwrap();
        assert_eq!(model, Model::Custom("gpt-4.1".to_string()));
        assert_eq!(model.as_str(), "gpt-4.1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::DeepseekChat).unwrap();
        assert_eq!(json, "\"deepseek-chat\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::DeepseekChat);
    }
}
