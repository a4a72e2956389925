use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use deepdive_core::time::fixed_now;
use services::{Clock, ExportService};

use crate::context::{UiApp, build_app_context};
use crate::views::WizardView;
use crate::views::wizard::WizardTestHandles;
use crate::vm::WizardIntent;

struct TestApp {
    export_service: Arc<ExportService>,
}

impl UiApp for TestApp {
    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

#[derive(Props, Clone)]
struct WizardHarnessProps {
    app: Arc<TestApp>,
    handles: WizardTestHandles,
}

impl PartialEq for WizardHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for WizardHarnessProps {}

#[component]
fn WizardHarness(props: WizardHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { WizardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub out_dir: tempfile::TempDir,
    handles: WizardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Fire an intent through the registered dispatch callback, then settle
    /// the dom.
    pub fn dispatch(&mut self, intent: WizardIntent) {
        let handles = self.handles.clone();
        self.dom.in_runtime(move || handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Wizard over a fixed clock, exporting into a temp dir the harness owns.
pub fn setup_wizard_harness() -> ViewHarness {
    let out_dir = tempfile::tempdir().expect("create export dir");
    let export_service = Arc::new(ExportService::new(
        Clock::fixed(fixed_now()),
        out_dir.path().to_path_buf(),
    ));
    let handles = WizardTestHandles::default();

    let dom = VirtualDom::new_with_props(
        WizardHarness,
        WizardHarnessProps {
            app: Arc::new(TestApp { export_service }),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        out_dir,
        handles,
    }
}
