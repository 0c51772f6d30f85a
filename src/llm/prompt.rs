//! 各请求类型的固定提示词与采样温度

use crate::store::Mode;

use super::types::{ChatMessage, ChatRequest};

const TITLE_SYSTEM_PROMPT: &str = "Provide a concise title.";
const SUMMARY_SYSTEM_PROMPT: &str = "Summarize the following text.";
const KEYWORDS_SYSTEM_PROMPT: &str = "Extract distinct keywords from the text. \
    Respond with a JSON array of strings and nothing else.";

/// 采样温度
pub fn temperature(mode: Mode) -> f64 {
    match mode {
        Mode::Generate | Mode::Summarize => 0.2,
        Mode::Title => 0.1,
        Mode::Keywords => 0.0,
    }
}

/// 系统提示词，generate 直接透传用户输入，不带 system 消息
pub fn system_prompt(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Generate => None,
        Mode::Title => Some(TITLE_SYSTEM_PROMPT),
        Mode::Summarize => Some(SUMMARY_SYSTEM_PROMPT),
        Mode::Keywords => Some(KEYWORDS_SYSTEM_PROMPT),
    }
}

/// 构造一次上游调用的请求体
pub fn build_request(model: &str, mode: Mode, input: &str) -> ChatRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_prompt(mode) {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(input));

    ChatRequest {
        model: model.to_string(),
        messages,
        temperature: temperature(mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_no_system_message() {
        let req = build_request("gpt-4o-mini", Mode::Generate, "hello");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "hello");
        assert_eq!(req.temperature, 0.2);
    }

    #[test]
    fn test_persona_modes() {
        for (mode, temp) in [
            (Mode::Title, 0.1),
            (Mode::Summarize, 0.2),
            (Mode::Keywords, 0.0),
        ] {
            let req = build_request("m", mode, "text");
            assert_eq!(req.messages.len(), 2);
            assert_eq!(req.messages[0].role, "system");
            assert_eq!(req.messages[1].content, "text");
            assert_eq!(req.temperature, temp);
        }
    }
}
