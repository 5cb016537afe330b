use yew::prelude::*;

use crate::settings;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Success => "alert-success",
            ToastKind::Warning => "alert-warning",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Warning => "fas fa-exclamation-triangle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<(String, ToastKind)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    /// The notification capability handed to components as an explicit
    /// prop instead of having them reach into the context themselves.
    pub fn reporter(&self) -> Callback<(String, ToastKind)> {
        self.add_toast.clone()
    }

    pub fn show_info(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Info));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(|| Vec::<Toast>::new());
    let next_id = use_state(|| 0usize);

    let add_toast = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();

        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = *next_id;
            next_id.set(id + 1);
            log::debug!("Showing {:?} toast #{}: {}", kind, id, message);

            let mut new_toasts = (*toasts).clone();
            new_toasts.push(Toast { id, message, kind });
            toasts.set(new_toasts);

            // Auto-dismiss after the configured duration
            let duration_ms = settings::get_settings().toast_duration_ms;
            let toasts_clone = toasts.clone();
            let timeout_handle = gloo_timers::callback::Timeout::new(duration_ms, move || {
                let mut new_toasts = (*toasts_clone).clone();
                new_toasts.retain(|t| t.id != id);
                toasts_clone.set(new_toasts);
            });
            timeout_handle.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();

        Callback::from(move |id: usize| {
            let mut new_toasts = (*toasts).clone();
            new_toasts.retain(|t| t.id != id);
            toasts.set(new_toasts);
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for (*toasts).iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
