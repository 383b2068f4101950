//! Tabla declarativa (tipo de disparador, objetivo) -> manejador.
//!
//! La UI sólo produce `UiEvent`s y los entrega a `Academy::dispatch`.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    Click,
    Input,
    KeyPress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    NavItem,
    RunButton,
    ClearButton,
    ClearConfirm,
    ClearCancel,
    ThemeButton,
    Editor,
    Window,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Token "modulo-leccion" del elemento pulsado
    NavItem(String),
    Run,
    Clear,
    ClearConfirmed,
    ClearDeclined,
    ToggleTheme,
    EditorInput(String),
    /// Ctrl + Enter
    RunShortcut,
}

impl UiEvent {
    pub fn trigger(&self) -> (TriggerKind, Target) {
        match self {
            UiEvent::NavItem(_) => (TriggerKind::Click, Target::NavItem),
            UiEvent::Run => (TriggerKind::Click, Target::RunButton),
            UiEvent::Clear => (TriggerKind::Click, Target::ClearButton),
            UiEvent::ClearConfirmed => (TriggerKind::Click, Target::ClearConfirm),
            UiEvent::ClearDeclined => (TriggerKind::Click, Target::ClearCancel),
            UiEvent::ToggleTheme => (TriggerKind::Click, Target::ThemeButton),
            UiEvent::EditorInput(_) => (TriggerKind::Input, Target::Editor),
            UiEvent::RunShortcut => (TriggerKind::KeyPress, Target::Window),
        }
    }
}

pub type Handler = fn(&mut Academy, UiEvent);

pub struct Binding {
    pub kind: TriggerKind,
    pub target: Target,
    pub handler: Handler,
}

pub const BINDINGS: &[Binding] = &[
    Binding { kind: TriggerKind::Click, target: Target::NavItem, handler: on_nav_item },
    Binding { kind: TriggerKind::Click, target: Target::RunButton, handler: on_run },
    Binding { kind: TriggerKind::Click, target: Target::ClearButton, handler: on_clear },
    Binding { kind: TriggerKind::Click, target: Target::ClearConfirm, handler: on_clear_confirmed },
    Binding { kind: TriggerKind::Click, target: Target::ClearCancel, handler: on_clear_declined },
    Binding { kind: TriggerKind::Click, target: Target::ThemeButton, handler: on_theme },
    Binding { kind: TriggerKind::Input, target: Target::Editor, handler: on_editor_input },
    Binding { kind: TriggerKind::KeyPress, target: Target::Window, handler: on_run },
];

fn on_nav_item(app: &mut Academy, event: UiEvent) {
    let UiEvent::NavItem(token) = event else {
        return;
    };
    if let Err(e) = app.navigate_to(&token) {
        log::warn!("Navegación ignorada: {e}");
    }
}

fn on_run(app: &mut Academy, _event: UiEvent) {
    app.run_preview();
}

fn on_clear(app: &mut Academy, _event: UiEvent) {
    app.request_clear();
}

fn on_clear_confirmed(app: &mut Academy, _event: UiEvent) {
    app.confirm_clear_editor();
}

fn on_clear_declined(app: &mut Academy, _event: UiEvent) {
    app.decline_clear();
}

fn on_theme(app: &mut Academy, _event: UiEvent) {
    app.toggle_theme();
}

fn on_editor_input(app: &mut Academy, event: UiEvent) {
    if let UiEvent::EditorInput(text) = event {
        app.edit_draft(text);
    }
}

impl Academy {
    pub fn dispatch(&mut self, event: UiEvent) {
        let (kind, target) = event.trigger();
        match BINDINGS
            .iter()
            .find(|b| b.kind == kind && b.target == target)
        {
            Some(binding) => (binding.handler)(self, event),
            None => log::warn!("Sin manejador para {kind:?} en {target:?}"),
        }
    }
}
