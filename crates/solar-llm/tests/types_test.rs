use serde_json::json;
use solar_llm::{decode_line, ChatPayload, Content, Message, ReasoningEffort, Role};

#[test]
fn test_content_text_creation() {
    let content = Content::text("Hello, world!");
    assert_eq!(content.as_text(), Some("Hello, world!"));
}

#[test]
fn test_content_from_string() {
    let content: Content = "Test".into();
    assert_eq!(content.to_text(), "Test");
}

#[test]
fn test_message_roles() {
    assert_eq!(Message::system("You are helpful").role(), Role::System);
    assert_eq!(Message::human("Hello").role(), Role::User);
    assert_eq!(Message::ai("Hi there!").role(), Role::Assistant);
    assert_eq!(Message::new("narrator", "Once upon a time").role(), Role::User);
}

#[test]
fn test_message_serialization() {
    let json = serde_json::to_string(&Message::ai("Response")).unwrap();
    assert_eq!(json, r#"{"role":"assistant","content":"Response"}"#);
}

#[test]
fn test_message_deserialization() {
    let msg: Message = serde_json::from_str(r#"{"role":"user","content":"Test"}"#).unwrap();
    assert_eq!(msg.role(), Role::User);
    assert_eq!(msg.text(), "Test");

    let msg: Message =
        serde_json::from_str(r#"{"role":"tool","content":[{"text":"a"},"b"]}"#).unwrap();
    assert_eq!(msg.role(), Role::User);
    assert_eq!(msg.text(), "ab");
}

#[test]
fn test_payload_from_template_messages() {
    let messages: Vec<Message> = vec![
        ("system", "You are a cooking expert.").into(),
        ("human", "How do I make kimchi stew?").into(),
    ];
    let payload = ChatPayload::from_messages(&messages, ReasoningEffort::Medium);
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["reasoning_effort"], json!("medium"));
    assert_eq!(value["messages"][0]["role"], json!("system"));
    assert_eq!(value["messages"][1]["role"], json!("user"));
    assert_eq!(
        value["messages"][1]["parts"],
        json!([{"type": "text", "text": "How do I make kimchi stew?"}])
    );
}

#[test]
fn test_decode_line_examples() {
    assert_eq!(decode_line("data: [DONE]").content, None);
    assert_eq!(decode_line("data: [DONE]").reasoning, None);
    assert_eq!(
        decode_line(r#"data: {"choices":[{"delta":{"content":"hi"}}]}"#)
            .content
            .as_deref(),
        Some("hi")
    );
    assert_eq!(decode_line("not an sse line").content, None);
    assert_eq!(decode_line("data: {not json").content, None);
}
