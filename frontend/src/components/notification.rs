use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

const ENTER_DELAY_MS: u32 = 100;
const DISPLAY_MS: u32 = 5000;
const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#333",
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#ff4444",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, about to slide in.
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

pub enum ToastAction {
    Show { id: u32, message: String, kind: NotificationKind },
    Settle(u32),
    Leave(u32),
    Remove(u32),
}

/// At most one toast is on screen; a new one replaces it. Actions carry the
/// id they were issued for, so timers left over from a replaced toast do
/// nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub current: Option<Toast>,
}

impl ToastState {
    fn with_phase(&self, id: u32, phase: ToastPhase) -> Self {
        match &self.current {
            Some(toast) if toast.id == id => Self {
                current: Some(Toast { phase, ..toast.clone() }),
            },
            _ => self.clone(),
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ToastAction::Show { id, message, kind } => ToastState {
                current: Some(Toast {
                    id,
                    message,
                    kind,
                    phase: ToastPhase::Entering,
                }),
            },
            ToastAction::Settle(id) => self.with_phase(id, ToastPhase::Shown),
            ToastAction::Leave(id) => self.with_phase(id, ToastPhase::Leaving),
            ToastAction::Remove(id) => {
                if self.current.as_ref().map(|toast| toast.id) != Some(id) {
                    return self;
                }
                ToastState { current: None }
            }
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Handle for raising toasts, available to every component under
/// [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<(String, NotificationKind)>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self { show: Callback::noop() }
    }
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show.emit((message.into(), kind));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);
    let next_id = use_mut_ref(|| 0u32);

    let notifier = {
        let dispatcher = toasts.dispatcher();
        let next_id = next_id.clone();
        use_state(move || Notifier {
            show: Callback::from(move |(message, kind): (String, NotificationKind)| {
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    *next_id += 1;
                    *next_id
                };
                debug!("Notification {:?}: {}", kind, message);
                dispatcher.dispatch(ToastAction::Show { id, message, kind });

                let settle = dispatcher.clone();
                Timeout::new(ENTER_DELAY_MS, move || settle.dispatch(ToastAction::Settle(id)))
                    .forget();
                let leave = dispatcher.clone();
                Timeout::new(DISPLAY_MS, move || {
                    leave.dispatch(ToastAction::Leave(id));
                    Timeout::new(EXIT_MS, move || leave.dispatch(ToastAction::Remove(id)))
                        .forget();
                })
                .forget();
            }),
        })
    };

    let toast = toasts.current.clone().map(|toast| {
        let close = {
            let dispatcher = toasts.dispatcher();
            let id = toast.id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                dispatcher.dispatch(ToastAction::Remove(id));
            })
        };
        let offset = if toast.phase == ToastPhase::Shown { "0" } else { "100%" };
        let style = format!(
            "position: fixed; top: 20px; right: 20px; z-index: 10001; background: {}; \
             color: white; padding: 15px 20px; border-radius: 5px; \
             box-shadow: 0 4px 15px rgba(0, 0, 0, 0.3); transform: translateX({}); \
             transition: transform 0.3s ease; max-width: 300px; font-size: 14px;",
            toast.kind.background(),
            offset
        );
        html! {
            <div key={toast.id} class={classes!("notification", toast.kind.class())} style={style}>
                <div class="notification-content">
                    <span class="notification-message">{ &toast.message }</span>
                    <button class="notification-close" onclick={close}>{"×"}</button>
                </div>
            </div>
        }
    });

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            { toast.unwrap_or_default() }
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: Rc<ToastState>, id: u32, message: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Show {
            id,
            message: message.to_string(),
            kind: NotificationKind::Info,
        })
    }

    #[test]
    fn toast_walks_through_its_lifecycle() {
        let state = show(Rc::new(ToastState::default()), 1, "hello");
        assert_eq!(state.current.as_ref().map(|t| t.phase), Some(ToastPhase::Entering));

        let state = state.reduce(ToastAction::Settle(1));
        assert_eq!(state.current.as_ref().map(|t| t.phase), Some(ToastPhase::Shown));

        let state = state.reduce(ToastAction::Leave(1));
        assert_eq!(state.current.as_ref().map(|t| t.phase), Some(ToastPhase::Leaving));

        let state = state.reduce(ToastAction::Remove(1));
        assert_eq!(state.current, None);
    }

    #[test]
    fn new_toast_replaces_existing() {
        let state = show(Rc::new(ToastState::default()), 1, "first");
        let state = show(state, 2, "second");
        let current = state.current.clone().unwrap();
        assert_eq!(current.id, 2);
        assert_eq!(current.message, "second");
    }

    #[test]
    fn timers_from_replaced_toasts_are_ignored() {
        let state = show(Rc::new(ToastState::default()), 1, "first");
        let state = show(state, 2, "second");
        let state = state.reduce(ToastAction::Leave(1));
        let state = state.reduce(ToastAction::Remove(1));
        assert_eq!(state.current.as_ref().map(|t| (t.id, t.phase)), Some((2, ToastPhase::Entering)));
    }

    #[test]
    fn kinds_have_distinct_styling() {
        assert_eq!(NotificationKind::Error.background(), "#ff4444");
        assert_eq!(NotificationKind::Success.class(), "notification-success");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn kinds_parse_from_console_names() {
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Info);
    }
}
