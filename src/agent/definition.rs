/// System instructions for the translator persona.
pub const TRANSLATOR_INSTRUCTIONS: &str = "You are an expert translator for \
     Pakistani local languages. Translate text accurately into the requested \
     language.";

/// Name, persona, and model binding for an agent.
#[derive(Debug, Clone)]
pub struct AgentDefinition {
    /// Display name, used in logs.
    pub name: String,
    /// Persona text sent as the system message with every request.
    pub instructions: String,
    /// Model identifier for the remote endpoint.
    pub model: String,
}

impl AgentDefinition {
    /// Creates the translation agent bound to the given model.
    pub fn translator(model: impl Into<String>) -> Self {
        Self {
            name: "Pakistani Language Translation Agent".to_string(),
            instructions: TRANSLATOR_INSTRUCTIONS.to_string(),
            model: model.into(),
        }
    }
}
