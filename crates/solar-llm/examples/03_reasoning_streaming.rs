use anyhow::Result;
use futures::StreamExt;
use solar_llm::{Message, ReasoningEffort, SolarClient, SolarConfig, StreamEvent};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = SolarClient::new(
        SolarConfig::new()
            .with_reasoning_effort(ReasoningEffort::High)
            .with_timeout_secs(300.0),
    )?;

    let payload = client.build_payload(&[Message::human(
        "Explain Heisenberg's uncertainty principle.",
    )]);
    let mut stream = client.stream_events(&payload).await?;

    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::Reasoning { content } => {
                print!("\x1b[2m{}\x1b[0m", content);
            }
            StreamEvent::Message { content } => {
                print!("{}", content);
            }
            StreamEvent::Done => {
                println!("\n\nStream complete!");
            }
        }
        std::io::Write::flush(&mut std::io::stdout())?;
    }

    Ok(())
}
