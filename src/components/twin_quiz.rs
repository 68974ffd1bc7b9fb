//! Twin Quiz Component
//!
//! Multiple-choice questions with per-option feedback and a final score.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SiteConfig;
use crate::models::QuizQuestion;
use crate::quiz::QuizState;

/// How long feedback stays up before the next question
const FEEDBACK_MS: u32 = 1500;

fn option_class(question: &QuizQuestion, selected: Option<usize>, option: usize) -> &'static str {
    match selected {
        Some(_) if option == question.correct => "quiz-option correct",
        Some(picked) if picked == option => "quiz-option wrong",
        Some(_) => "quiz-option dimmed",
        None => "quiz-option",
    }
}

#[component]
pub fn TwinQuiz() -> impl IntoView {
    let questions = StoredValue::new(expect_context::<SiteConfig>().quiz);
    let state = RwSignal::new(QuizState::default());
    let total = questions.with_value(Vec::len);

    if total == 0 {
        return ().into_any();
    }

    let answer = move |option: usize| {
        let answered = questions.with_value(|qs| state.try_update(|s| s.answer(qs, option))).flatten();
        if answered.is_none() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(FEEDBACK_MS).await;
            questions.with_value(|qs| state.try_update(|s| s.advance(qs)));
        });
    };

    let current = move || {
        let s = state.get();
        questions.with_value(|qs| {
            let question = qs[s.current].clone();
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let class = option_class(&question, s.selected, i);
                    view! {
                        <button class=class disabled=s.selected.is_some() on:click=move |_| answer(i)>
                            {text.clone()}
                        </button>
                    }
                })
                .collect_view();
            let feedback = s.selected.map(|i| question.feedback_for(i).to_string());
            view! {
                <p class="quiz-counter">{format!("Question {} of {}", s.current + 1, total)}</p>
                <h3 class="quiz-question">{question.question.clone()}</h3>
                <div class="quiz-options">{options}</div>
                {feedback.map(|text| view! { <p class="quiz-feedback">{text}</p> })}
            }
        })
    };

    view! {
        <section class="section quiz">
            <h2 class="section-title">"Are We Really Twins? 👯‍♀️"</h2>
            <Show
                when=move || state.with(|s| s.complete)
                fallback=current
            >
                <div class="quiz-result">
                    <p class="quiz-score">{move || format!("You scored: {}/{}", state.with(|s| s.score), total)}</p>
                    <p>{move || if state.with(|s| s.score) == total {
                        "Twinning confirmed! 💕"
                    } else {
                        "We need more twin time! 💕"
                    }}</p>
                    <p class="quiz-note">
                        "No matter the score, we should spend more time together nonetheless... Miss you! 🥺✨"
                    </p>
                    <button on:click=move |_| state.update(QuizState::reset)>"Take Quiz Again"</button>
                </div>
            </Show>
        </section>
    }
    .into_any()
}
