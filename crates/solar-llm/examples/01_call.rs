use anyhow::Result;
use solar_llm::{LanguageModel, ReasoningEffort, SolarLlm};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let llm = SolarLlm::with_reasoning_effort(ReasoningEffort::Medium)?;

    let response = llm.call("What are the strengths of Python?").await?;
    println!("Response: {}", response);

    // Simple questions don't need much reasoning
    let quick = SolarLlm::with_reasoning_effort(ReasoningEffort::Low)?;
    println!("Quick: {}", quick.call("Hello!").await?);

    Ok(())
}
