mod wizard_vm;

pub use wizard_vm::{WizardIntent, WizardVm};
