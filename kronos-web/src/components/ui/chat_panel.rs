//! RakeAssist chat panel.
//!
//! The answer itself comes from the external relay; this panel only guards
//! obviously unanswerable questions locally, shows the log-derived context for
//! the mentioned trains, and forwards the question with the selected day.

use kronos_fleet::{LogIndex, context_for_question, mentioned_train_ids};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const GREETING: &str = "Hello! I'm RakeAssist. Ask me about the fleet plan for any day.";
const MENTION_GUARD: &str =
    "Please mention a specific train ID (e.g. TS-05) in your question.";
const CONNECT_TROUBLE: &str = "Sorry, I'm having trouble connecting to my brain right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    Supervisor,
    Assist,
    Context,
}

#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    speaker: Speaker,
    text: String,
}

impl ChatMessage {
    fn assist(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assist,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: Rc<LogIndex>,
    /// Logical day the dashboard is currently showing.
    pub day: u32,
    pub on_close: Callback<()>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(p: &Props) -> Html {
    let messages = use_state(|| vec![ChatMessage::assist(GREETING)]);
    let draft = use_state(String::new);
    let busy = use_state(|| false);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                draft.set(input.value());
            }
        })
    };

    let send = {
        let messages = messages.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        let index = p.index.clone();
        let day = p.day;
        Callback::from(move |()| {
            if *busy {
                return;
            }
            let question = draft.trim().to_string();
            if question.is_empty() {
                return;
            }
            draft.set(String::new());

            let mut thread = (*messages).clone();
            thread.push(ChatMessage {
                speaker: Speaker::Supervisor,
                text: question.clone(),
            });

            if mentioned_train_ids(&question).is_empty() {
                thread.push(ChatMessage::assist(MENTION_GUARD));
                messages.set(thread);
                return;
            }

            for line in context_for_question(&index, day, &question).summary_lines() {
                thread.push(ChatMessage {
                    speaker: Speaker::Context,
                    text: line,
                });
            }
            messages.set(thread.clone());
            busy.set(true);

            #[cfg(target_arch = "wasm32")]
            {
                let messages = messages.clone();
                let busy = busy.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let answer = request_answer(&question, day).await;
                    thread.push(ChatMessage::assist(answer));
                    messages.set(thread);
                    busy.set(false);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                thread.push(ChatMessage::assist(CONNECT_TROUBLE));
                messages.set(thread);
                busy.set(false);
            }
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_| send.emit(()))
    };
    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <aside class="chat-panel" aria-label="RakeAssist">
            <div class="chat-panel__header">
                <h3>{"RakeAssist"}</h3>
                <button type="button" class="icon-button" aria-label="Close chat" onclick={close}>
                    {"X"}
                </button>
            </div>
            <div class="chat-panel__messages" role="list">
                { for messages.iter().map(|msg| {
                    let class = match msg.speaker {
                        Speaker::Supervisor => "chat-msg chat-msg--supervisor",
                        Speaker::Assist => "chat-msg chat-msg--assist",
                        Speaker::Context => "chat-msg chat-msg--context",
                    };
                    html! { <div {class} role="listitem">{ msg.text.clone() }</div> }
                }) }
                { if *busy {
                    html! { <div class="chat-msg chat-msg--assist">{"Thinking..."}</div> }
                } else {
                    Html::default()
                } }
            </div>
            <div class="chat-panel__input">
                <label for="chat-input" class="sr-only">{"Ask RakeAssist"}</label>
                <input
                    id="chat-input"
                    type="text"
                    placeholder={format!("Ask about TS-05 and TS-12 on Day {}...", p.day)}
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    disabled={*busy}
                />
                <button type="button" onclick={on_send_click} disabled={*busy}>{"Send"}</button>
            </div>
        </aside>
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize)]
struct AskPayload<'a> {
    question: &'a str,
    day: u32,
}

#[cfg(target_arch = "wasm32")]
#[derive(serde::Deserialize)]
struct AskReply {
    #[serde(default)]
    answer: Option<String>,
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on browser types that are not `Send`.
async fn request_answer(question: &str, day: u32) -> String {
    let payload = AskPayload { question, day };
    let Ok(request) = gloo_net::http::Request::post(crate::paths::assist_endpoint()).json(&payload)
    else {
        return CONNECT_TROUBLE.to_string();
    };
    match request.send().await {
        Ok(response) if response.ok() => match response.json::<AskReply>().await {
            Ok(reply) => reply
                .answer
                .unwrap_or_else(|| "Sorry, I couldn't get a response.".to_string()),
            Err(_) => CONNECT_TROUBLE.to_string(),
        },
        _ => CONNECT_TROUBLE.to_string(),
    }
}
