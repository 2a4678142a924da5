use anyhow::Result;
use futures::StreamExt;
use solar_llm::{ChatModel, Message, ReasoningEffort, SolarChatModel};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let chat = SolarChatModel::with_reasoning_effort(ReasoningEffort::High)?;

    let messages = vec![
        Message::system("You are a friendly AI assistant."),
        Message::human("Hello!"),
    ];
    let result = chat.generate(&messages).await?;
    println!("{}", result.text());
    println!("(reasoning effort: {})\n", result.metadata.reasoning_effort);

    println!("Streaming response:\n---");
    let mut stream = chat
        .stream(&[Message::human("Tell me a short story.")])
        .await?;

    while let Some(chunk) = stream.next().await {
        print!("{}", chunk?.content);
        std::io::Write::flush(&mut std::io::stdout())?;
    }
    println!("\n---");

    Ok(())
}
