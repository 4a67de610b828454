use anyhow::{Result, bail};
use inquire::Text;

use crate::agent::{AgentDefinition, AgentRunner, ChatCompletionRunner};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::build_prompt;
use crate::ui::{Spinner, Style, is_prompt_cancelled};

pub struct TranslateOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint,
            model: options.model,
            ..ResolveOptions::default()
        },
        &config_file,
    )?;

    println!("{}", Style::header("Pakistani Language Translator"));
    println!(
        "{}",
        Style::secondary(format!("model: {}", resolved.model))
    );

    let Some(text) = prompt_line(Text::new("Enter text to translate:"))? else {
        return Ok(());
    };
    let Some(language) = prompt_line(
        Text::new("Target language:").with_help_message("e.g., Urdu, Pashto, Sindhi, Balochi"),
    )?
    else {
        return Ok(());
    };

    if text.is_empty() || language.is_empty() {
        bail!("Text and language are required.");
    }

    let agent = AgentDefinition::translator(resolved.model.clone());
    let runner = ChatCompletionRunner::new(resolved.endpoint.clone(), resolved.api_key, agent);

    let prompt = build_prompt(&text, &language);

    let spinner = Spinner::new("Translating...");
    let result = runner.run(&prompt).await;
    spinner.stop();

    let translation = result?;
    println!(
        "{} Translation into {}: {}",
        Style::success("✓"),
        Style::value(&language),
        translation
    );

    Ok(())
}

/// Runs a prompt, mapping user cancellation (Ctrl+C / Esc) to `None`.
fn prompt_line(prompt: Text<'_, '_>) -> Result<Option<String>> {
    match prompt.prompt() {
        Ok(line) => Ok(Some(line)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
