use dioxus::prelude::*;

use deepdive_core::model::{ExportMode, Session, Step};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{WizardIntent, WizardVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Saved(String),
    Failed(ViewError),
}

/// The whole wizard. Owns the session; every mutation goes through the
/// intent callback, so the screens below stay stateless.
#[component]
pub fn WizardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(Session::new);
    let reference_draft = use_signal(String::new);
    let export_status = use_signal(|| ExportStatus::Idle);

    let dispatch = {
        let export_service = ctx.export_service();
        use_callback(move |intent: WizardIntent| {
            let mut session = session;
            let mut reference_draft = reference_draft;
            let mut export_status = export_status;

            match intent {
                WizardIntent::EditReference(value) => reference_draft.set(value),
                WizardIntent::Begin(reference) => session.write().begin(&reference),
                WizardIntent::EditAnswer(value) => {
                    let mut session = session.write();
                    if let Step::Question(index) = session.step() {
                        session.set_answer(index, &value);
                    }
                }
                WizardIntent::Advance => session.write().advance(),
                WizardIntent::Retreat => session.write().retreat(),
                WizardIntent::StartOver => {
                    session.write().reset();
                    reference_draft.set(String::new());
                    export_status.set(ExportStatus::Idle);
                }
                WizardIntent::Export(mode) => {
                    let request = session.read().export_request();
                    match export_service.export(&request, mode) {
                        Ok(file) => export_status.set(ExportStatus::Saved(file.filename)),
                        Err(err) => {
                            log::warn!("{mode} export failed: {err}");
                            export_status.set(ExportStatus::Failed(ViewError::Unknown));
                        }
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WizardTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let session_read = session.read();
    let vm = WizardVm::new(&session_read);
    let status = export_status.read().clone();
    let full_filename_preview = ctx
        .export_service()
        .filename(vm.reference(), ExportMode::Full);

    rsx! {
        div { class: "page wizard-page",
            div { class: "card",
                match vm.step() {
                    Step::Intro => rsx! {
                        IntroScreen {
                            reference_draft: reference_draft(),
                            on_intent: dispatch,
                        }
                    },
                    Step::Question(_) => rsx! {
                        QuestionScreen {
                            title: vm.question_title(),
                            prompt: vm.question_prompt(),
                            answer: vm.answer().to_string(),
                            progress: vm.progress_label(),
                            next_label: vm.next_label(),
                            on_intent: dispatch,
                        }
                    },
                    Step::Complete => rsx! {
                        CompleteScreen {
                            reference: vm.reference().to_string(),
                            filename_preview: full_filename_preview.clone(),
                            status: status.clone(),
                            on_intent: dispatch,
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn IntroScreen(reference_draft: String, on_intent: EventHandler<WizardIntent>) -> Element {
    let can_begin = !reference_draft.trim().is_empty();
    let draft = reference_draft.clone();

    rsx! {
        p { class: "invitation",
            "Let’s invite the Holy Spirit to guide us through this Deep Dive into His Word."
        }

        div { class: "question-block",
            label { class: "question",
                "What passage of Scripture will you be studying today?"
            }
            input {
                r#type: "text",
                placeholder: "Example: Isaiah 6, Joshua 1:9, Ephesians 5:25–33",
                value: "{reference_draft}",
                oninput: move |evt| on_intent.call(WizardIntent::EditReference(evt.value())),
            }
        }

        button {
            class: "primary-button",
            r#type: "button",
            disabled: !can_begin,
            onclick: move |_| on_intent.call(WizardIntent::Begin(draft.clone())),
            "Begin"
        }
    }
}

#[component]
fn QuestionScreen(
    title: &'static str,
    prompt: &'static str,
    answer: String,
    progress: String,
    next_label: &'static str,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        div { class: "step-header",
            div { class: "step-title", "{title}" }
            div { class: "step-count", "{progress}" }
        }

        div { class: "question-block",
            label { class: "question", "{prompt}" }
            textarea {
                placeholder: "Type your response here...",
                value: "{answer}",
                oninput: move |evt| on_intent.call(WizardIntent::EditAnswer(evt.value())),
            }
        }

        div { class: "buttons",
            button {
                class: "secondary-button",
                r#type: "button",
                onclick: move |_| on_intent.call(WizardIntent::Retreat),
                "Back"
            }
            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| on_intent.call(WizardIntent::Advance),
                "{next_label}"
            }
        }
    }
}

#[component]
fn CompleteScreen(
    reference: String,
    filename_preview: String,
    status: ExportStatus,
    on_intent: EventHandler<WizardIntent>,
) -> Element {
    rsx! {
        h2 { class: "complete-title", "Deep Dive Complete" }
        p { class: "complete-subtitle",
            "Passage: "
            span { class: "complete-scripture", "{reference}" }
        }

        div { class: "save-grid",
            div { class: "save-card",
                h3 { "Save Summary PDF" }
                p { "Passage + Lesson + Obedience + Identity statement." }
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(WizardIntent::Export(ExportMode::Summary)),
                    "Download Summary PDF"
                }
            }

            div { class: "save-card",
                h3 { "Save Full Deep Dive PDF" }
                p { "Every question + everything you wrote." }
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| on_intent.call(WizardIntent::Export(ExportMode::Full)),
                    "Download Full PDF"
                }
                p { class: "tiny-note",
                    "File name preview: "
                    strong { "{filename_preview}" }
                }
            }
        }

        match status {
            ExportStatus::Idle => rsx! {},
            ExportStatus::Saved(filename) => rsx! {
                p { class: "export-status", "Saved {filename}" }
            },
            ExportStatus::Failed(err) => rsx! {
                p { class: "export-status export-status--error", "{err.message()}" }
            },
        }

        div { class: "buttons",
            button {
                class: "secondary-button",
                r#type: "button",
                onclick: move |_| on_intent.call(WizardIntent::Retreat),
                "Back"
            }
            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| on_intent.call(WizardIntent::StartOver),
                "Start a New Deep Dive"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WizardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WizardIntent>>>>,
}

#[cfg(test)]
impl WizardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<WizardIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<WizardIntent> {
        (*self.dispatch.borrow()).expect("wizard dispatch registered")
    }
}
