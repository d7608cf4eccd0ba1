use log::info;

use crate::components::notification::{NotificationKind, Notifier};
use crate::utils::dom::Listener;

pub fn connectivity_notice(online: bool) -> (&'static str, NotificationKind) {
    if online {
        ("Соединение восстановлено", NotificationKind::Success)
    } else {
        ("Нет соединения с интернетом", NotificationKind::Error)
    }
}

pub fn listen(notifier: Notifier) -> Vec<Listener> {
    let announce = move |online: bool| {
        let notifier = notifier.clone();
        move |_: web_sys::Event| {
            info!("Connection {}", if online { "restored" } else { "lost" });
            let (message, kind) = connectivity_notice(online);
            notifier.show(message, kind);
        }
    };
    let online = Listener::on_window("online", announce(true));
    let offline = Listener::on_window("offline", announce(false));
    online.into_iter().chain(offline).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_match_connection_state() {
        assert_eq!(connectivity_notice(true).1, NotificationKind::Success);
        assert_eq!(connectivity_notice(false).1, NotificationKind::Error);
    }
}
