//! Prompt analyzer: submit a prompt and show the backend's verdict.

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod analyzer_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{SecurePromptRequest, SecurePromptResponse};

/// Backend limit on prompt length.
pub const MAX_PROMPT_CHARS: usize = 16_000;

pub const MODELS: [&str; 4] = ["gpt-4", "gpt-3.5-turbo", "claude-3-opus", "claude-3-sonnet"];
pub const POLICIES: [&str; 3] = ["strict", "moderate", "permissive"];
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_POLICY: &str = "moderate";

pub(crate) fn validate_prompt(raw: &str) -> Result<String, &'static str> {
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err("Enter a prompt to analyze.");
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err("Prompt must not exceed 16000 characters.");
    }
    Ok(prompt.to_owned())
}

pub(crate) fn verdict_label(result: &SecurePromptResponse) -> &'static str {
    if result.blocked { "Blocked" } else { "Allowed" }
}

#[component]
pub fn AnalyzerPage(api: ApiClient) -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let model = RwSignal::new(DEFAULT_MODEL.to_owned());
    let policy = RwSignal::new(DEFAULT_POLICY.to_owned());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<SecurePromptResponse>);

    let on_analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let prompt_value = match validate_prompt(&prompt.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        result.set(None);

        let request = SecurePromptRequest {
            prompt: prompt_value,
            model: model.get(),
            policy: policy.get(),
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.analyze_prompt(&request).await {
                Ok(verdict) => result.set(Some(verdict)),
                Err(e) => error.set(Some(e.display_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page page--analyzer">
            <header class="page__header">
                <h1>"Prompt Analyzer"</h1>
                <p>"Check a prompt for injection, data leakage and policy violations."</p>
            </header>
            <form class="card analyzer-form" on:submit=on_analyze>
                <textarea
                    class="analyzer-form__prompt"
                    rows="8"
                    placeholder="Paste a prompt..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                ></textarea>
                <div class="analyzer-form__options">
                    <label>
                        "Model"
                        <select on:change=move |ev| model.set(event_target_value(&ev)) prop:value=move || model.get()>
                            {MODELS.into_iter().map(|m| view! { <option value=m>{m}</option> }).collect_view()}
                        </select>
                    </label>
                    <label>
                        "Policy"
                        <select on:change=move |ev| policy.set(event_target_value(&ev)) prop:value=move || policy.get()>
                            {POLICIES.into_iter().map(|p| view! { <option value=p>{p}</option> }).collect_view()}
                        </select>
                    </label>
                </div>
                <button class="btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="page__error">{message}</p> })}
            {move || result.get().map(|verdict| view! { <AnalysisResult verdict=verdict/> })}
        </div>
    }
}

#[component]
fn AnalysisResult(verdict: SecurePromptResponse) -> impl IntoView {
    let label = verdict_label(&verdict);
    let level = verdict.risk_level;
    view! {
        <section class="card analysis-result">
            <div class="analysis-result__summary">
                <span class={level.css_class()}>{level.as_str()}</span>
                <span class="analysis-result__score">{format!("Risk score {}", verdict.risk_score)}</span>
                <span class="analysis-result__verdict">{label}</span>
            </div>
            {verdict.block_reason.map(|reason| view! { <p class="analysis-result__reason">{reason}</p> })}
            {verdict.sanitized_prompt.map(|text| view! {
                <div class="analysis-result__sanitized">
                    <h3>"Sanitized prompt"</h3>
                    <pre>{text}</pre>
                </div>
            })}
            <div class="analysis-result__patterns">
                <h3>"Detected patterns"</h3>
                {if verdict.detected_patterns.is_empty() {
                    view! { <p>"None"</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {verdict.detected_patterns.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
