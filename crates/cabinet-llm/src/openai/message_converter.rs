//! Conversion between unified messages and the Chat Completions wire format.

use serde_json::{Map, Value};

use cabinet_core::messages::{Message, ToolCall};
use cabinet_core::tools::Tool;

use crate::openai::types::{
    ChatChoice, ChatFunctionCall, ChatFunctionDef, ChatMessage, ChatTool, ChatToolCall,
};
use crate::provider::{Completion, LlmError};
use crate::stop_reason::map_openai_stop_reason;

/// Convert the system prompt and conversation into wire messages.
#[must_use]
pub fn to_chat_messages(system: &str, messages: &[Message]) -> Vec<ChatMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(ChatMessage::text("system", system));

    for message in messages {
        match message {
            Message::User { content } => out.push(ChatMessage::text("user", content)),
            Message::Assistant {
                content,
                tool_calls,
            } => {
                out.push(ChatMessage {
                    role: "assistant".to_owned(),
                    content: if content.is_empty() {
                        None
                    } else {
                        Some(content.clone())
                    },
                    tool_calls: if tool_calls.is_empty() {
                        None
                    } else {
                        Some(tool_calls.iter().map(to_chat_tool_call).collect())
                    },
                    tool_call_id: None,
                });
            }
            Message::ToolResult {
                tool_call_id,
                content,
                ..
            } => {
                out.push(ChatMessage {
                    role: "tool".to_owned(),
                    content: Some(content.clone()),
                    tool_calls: None,
                    tool_call_id: Some(tool_call_id.clone()),
                });
            }
        }
    }

    out
}

/// Convert unified tool definitions into wire tool definitions.
#[must_use]
pub fn to_chat_tools(tools: &[Tool]) -> Vec<ChatTool> {
    tools
        .iter()
        .map(|tool| ChatTool {
            tool_type: "function".to_owned(),
            function: ChatFunctionDef {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: serde_json::to_value(&tool.parameters)
                    .unwrap_or_else(|_| Value::Object(Map::new())),
            },
        })
        .collect()
}

fn to_chat_tool_call(call: &ToolCall) -> ChatToolCall {
    ChatToolCall {
        id: call.id.clone(),
        call_type: "function".to_owned(),
        function: ChatFunctionCall {
            name: call.name.clone(),
            arguments: Value::Object(call.arguments.clone()).to_string(),
        },
    }
}

/// Convert a response choice into a unified [`Completion`].
///
/// Tool call arguments arrive as a JSON-encoded string; anything that does
/// not decode to an object is a malformed response.
pub fn from_chat_choice(choice: ChatChoice) -> Result<Completion, LlmError> {
    let mut tool_calls = Vec::new();
    for call in choice.message.tool_calls.unwrap_or_default() {
        let arguments: Map<String, Value> = serde_json::from_str(&call.function.arguments)
            .map_err(|e| {
                LlmError::MalformedResponse(format!(
                    "tool call '{}' has non-object arguments: {e}",
                    call.function.name
                ))
            })?;
        tool_calls.push(ToolCall::new(call.id, call.function.name, arguments));
    }

    Ok(Completion {
        text: choice.message.content.unwrap_or_default(),
        tool_calls,
        stop_reason: map_openai_stop_reason(choice.finish_reason.as_deref()),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::types::ChatResponseMessage;
    use crate::stop_reason::StopReason;
    use serde_json::json;

    #[test]
    fn system_prompt_leads_the_transcript() {
        let msgs = to_chat_messages("be helpful", &[Message::user("hi")]);
        assert_eq!(msgs[0].role, "system");
        assert_eq!(msgs[0].content.as_deref(), Some("be helpful"));
        assert_eq!(msgs[1].role, "user");
    }

    #[test]
    fn assistant_tool_calls_are_encoded_as_strings() {
        let mut args = Map::new();
        args.insert("filename".into(), json!("notes.txt"));
        let message = Message::Assistant {
            content: String::new(),
            tool_calls: vec![ToolCall::new("call_1", "read_file", args)],
        };

        let msgs = to_chat_messages("sys", &[message]);
        let assistant = &msgs[1];
        assert!(assistant.content.is_none());
        let calls = assistant.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "read_file");
        let decoded: Value = serde_json::from_str(&calls[0].function.arguments).unwrap();
        assert_eq!(decoded["filename"], "notes.txt");
    }

    #[test]
    fn tool_result_maps_to_tool_role() {
        let message = Message::tool_result("call_1", "read_file", "contents", false);
        let msgs = to_chat_messages("sys", &[message]);
        assert_eq!(msgs[1].role, "tool");
        assert_eq!(msgs[1].tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn choice_with_text_only() {
        let choice = ChatChoice {
            message: ChatResponseMessage {
                content: Some("done".into()),
                tool_calls: None,
            },
            finish_reason: Some("stop".into()),
        };
        let completion = from_chat_choice(choice).unwrap();
        assert_eq!(completion.text, "done");
        assert!(!completion.has_tool_calls());
        assert_eq!(completion.stop_reason, StopReason::EndTurn);
    }

    #[test]
    fn choice_with_tool_calls_decodes_arguments() {
        let choice = ChatChoice {
            message: ChatResponseMessage {
                content: None,
                tool_calls: Some(vec![ChatToolCall {
                    id: "call_9".into(),
                    call_type: "function".into(),
                    function: ChatFunctionCall {
                        name: "write_file".into(),
                        arguments: r#"{"filename":"a.txt","content":"x"}"#.into(),
                    },
                }]),
            },
            finish_reason: Some("tool_calls".into()),
        };
        let completion = from_chat_choice(choice).unwrap();
        assert_eq!(completion.stop_reason, StopReason::ToolUse);
        assert_eq!(completion.tool_calls[0].name, "write_file");
        assert_eq!(completion.tool_calls[0].arguments["filename"], "a.txt");
    }

    #[test]
    fn non_object_arguments_are_malformed() {
        let choice = ChatChoice {
            message: ChatResponseMessage {
                content: None,
                tool_calls: Some(vec![ChatToolCall {
                    id: "call_9".into(),
                    call_type: "function".into(),
                    function: ChatFunctionCall {
                        name: "write_file".into(),
                        arguments: "not json".into(),
                    },
                }]),
            },
            finish_reason: Some("tool_calls".into()),
        };
        assert!(matches!(
            from_chat_choice(choice),
            Err(LlmError::MalformedResponse(_))
        ));
    }
}
