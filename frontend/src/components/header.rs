use std::rc::Rc;

use web_sys::{EventTarget, MouseEvent};
use yew::prelude::*;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::navigation::controller::{HeaderVisibility, NavSnapshot};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "О нас"),
    ("what-we-offer", "Что мы предлагаем"),
    ("investors", "Инвесторам"),
    ("team", "Команда"),
    ("faq", "FAQ"),
    ("contacts", "Контакты"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    Close,
    /// Window resized to this width.
    Resize(f64),
}

pub fn menu_after(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::Close => false,
        MenuAction::Resize(width) if width > MOBILE_BREAKPOINT_PX => false,
        MenuAction::Resize(_) => open,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let open = menu_after(self.open, action);
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub snapshot: NavSnapshot,
    pub menu_open: bool,
    pub on_menu: Callback<MenuAction>,
    /// Section id to scroll to.
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { snapshot, menu_open, on_menu, on_navigate } = props;

    let toggle = {
        let on_menu = on_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_menu.emit(MenuAction::Toggle);
        })
    };

    // Only a click on the backdrop itself closes the menu, not on its links.
    let backdrop_click = {
        let on_menu = on_menu.clone();
        Callback::from(move |e: MouseEvent| {
            let current: Option<EventTarget> = e.current_target();
            let target: Option<EventTarget> = e.target();
            if target.is_some() && target == current {
                on_menu.emit(MenuAction::Close);
            }
        })
    };

    let link = |id: &'static str, label: &'static str, closes_menu: bool| {
        let on_navigate = on_navigate.clone();
        let on_menu = on_menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if closes_menu {
                on_menu.emit(MenuAction::Close);
            }
            on_navigate.emit(id);
        });
        html! {
            <a href={format!("#{}", id)} class="nav-link" {onclick}>{label}</a>
        }
    };

    let visibility = match snapshot.header {
        HeaderVisibility::Visible => "visible",
        HeaderVisibility::Hidden => "hidden",
    };

    html! {
        <>
            <header class={classes!("header", visibility, snapshot.scrolled.then(|| "scrolled"))}>
                <div class="header-content">
                    <a href="#hero" class="logo" onclick={
                        let on_navigate = on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit("hero");
                        })
                    }>{"EMIL PRODUCTION"}</a>
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|&(id, label)| link(id, label, false)) }
                    </nav>
                    <button
                        id="burger"
                        class={classes!("burger", menu_open.then(|| "active"))}
                        aria-label="Меню"
                        onclick={toggle}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div
                id="mobile-nav"
                class={classes!("mobile-nav", menu_open.then(|| "active"))}
                onclick={backdrop_click}
            >
                <nav class="mobile-nav-links">
                    { for NAV_LINKS.iter().map(|&(id, label)| link(id, label, true)) }
                </nav>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_closes() {
        assert!(menu_after(false, MenuAction::Toggle));
        assert!(!menu_after(true, MenuAction::Toggle));
        assert!(!menu_after(true, MenuAction::Close));
        assert!(!menu_after(false, MenuAction::Close));
    }

    #[test]
    fn only_desktop_widths_close_on_resize() {
        assert!(!menu_after(true, MenuAction::Resize(1024.0)));
        assert!(menu_after(true, MenuAction::Resize(768.0)));
        assert!(menu_after(true, MenuAction::Resize(375.0)));
        assert!(!menu_after(false, MenuAction::Resize(375.0)));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let closed = Rc::new(MenuState::default());
        let still_closed = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));
        let opened = closed.reduce(MenuAction::Toggle);
        assert!(opened.open);
    }
}
