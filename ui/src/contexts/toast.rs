use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub severity: ToastSeverity,
    pub title: String,
    pub message: String,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(
        severity: ToastSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            title: title.into(),
            message: message.into(),
            duration: Some(5000), // 5 seconds default
        }
    }

    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ToastSeverity::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Error, title, message)
    }

    #[allow(dead_code)]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Info, title, message)
    }

    #[allow(dead_code)]
    pub fn no_auto_dismiss(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// Oldest toast first, so the container renders them in arrival order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
    #[allow(dead_code)]
    Clear,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                toasts.push(toast);
            }
            ToastAction::Remove(id) => {
                toasts.retain(|toast| toast.id != id);
            }
            ToastAction::Clear => {
                toasts.clear();
            }
        }

        std::rc::Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        // Set up auto-dismiss if duration is specified
        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.add(Toast::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.add(Toast::error(title, message));
    }

    #[allow(dead_code)]
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.add(Toast::info(title, message));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        self.context.dispatch(ToastAction::Clear);
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn constructors_set_severity_and_default_duration() {
        let toast = Toast::error("Save failed", "The service said no.");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert_eq!(toast.title, "Save failed");
        assert_eq!(toast.message, "The service said no.");
        assert_eq!(toast.duration, Some(5000));

        let toast = Toast::success("Saved", "").no_auto_dismiss();
        assert_eq!(toast.severity, ToastSeverity::Success);
        assert_eq!(toast.duration, None);
    }

    #[test]
    fn reducer_keeps_arrival_order() {
        let first = Toast::info("one", "");
        let second = Toast::info("two", "");
        let first_id = first.id;

        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Add(first));
        let state = state.reduce(ToastAction::Add(second));
        let titles: Vec<_> =
            state.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["one", "two"]);

        let state = state.reduce(ToastAction::Remove(first_id));
        let titles: Vec<_> =
            state.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["two"]);

        let state = state.reduce(ToastAction::Clear);
        assert!(state.toasts.is_empty());
    }
}
