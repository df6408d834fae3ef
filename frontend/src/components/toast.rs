use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-500 border-green-600",
            ToastKind::Error => "bg-red-500 border-red-600",
            ToastKind::Info => "bg-blue-500 border-blue-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    /// Milliseconds before auto-dismiss.
    pub duration: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToastQueue {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    push: Callback<(String, ToastKind)>,
    pub dismiss: Callback<u32>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Error));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Info));
    }
}

const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let push = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            dispatcher.dispatch(ToastAction::Push(Toast {
                id,
                message,
                kind,
                duration: DEFAULT_DURATION_MS,
            }));

            // Auto-remove once the duration elapses
            let dispatcher = dispatcher.clone();
            Timeout::new(DEFAULT_DURATION_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id))
            })
            .forget();
        })
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        push,
        dismiss,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2">
                {for context.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = context.dismiss.reform(move |_: MouseEvent| id);
                    html! {
                        <div key={toast.id.to_string()} class={classes!(
                            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
                            "text-white", "min-w-80", "max-w-md", toast.kind.classes()
                        )}>
                            <span class="mr-3 text-lg font-bold">{toast.kind.icon()}</span>
                            <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200">
                                {"×"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

/// Toast handle of the surrounding provider, if one is mounted.
#[hook]
pub fn use_toast() -> Option<ToastContext> {
    use_context::<ToastContext>()
}
