use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::analytics::{self, SectionViews};
use crate::behaviors::parallax::{self, Parallax};
use crate::behaviors::{connectivity, keyboard, lazy_load, page_visibility, reveal, touch};
use crate::components::contact_form::{ContactFormView, Role, RolePreset};
use crate::components::faq::Faq;
use crate::components::header::{Header, MenuAction, MenuState};
use crate::components::hero_video::HeroVideo;
use crate::components::notification::use_notifier;
use crate::components::preloader::Preloader;
use crate::components::scroll_dots::ScrollDots;
use crate::config::{
    Environment, CTA_FOLLOW_UP_MS, PARALLAX_BREAKPOINT_PX, PRELOAD_DEBOUNCE_MS,
    RESIZE_DEBOUNCE_MS, SCROLL_THROTTLE_MS,
};
use crate::debug::{DebugHandle, DebugTargets};
use crate::navigation::controller::NavSnapshot;
use crate::navigation::sections::SectionMap;
use crate::navigation::PageController;
use crate::utils::dom::{self, Listener};
use crate::utils::timing::{debounce, throttle, BrowserScheduler};

const LOAD_SETTLE_MS: u32 = 200;

fn smooth_scroll(container: &Element, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Scroll, preload and resize handling on the snap container.
fn bind_scrolling(
    container: &Element,
    controller: &PageController,
    scheduler: &BrowserScheduler,
    environment: Environment,
    menu: UseReducerDispatcher<MenuState>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let on_scroll = {
        let controller = controller.clone();
        let container = container.clone();
        throttle(scheduler.clone(), SCROLL_THROTTLE_MS, move |()| {
            controller.on_scroll(f64::from(container.scroll_top()))
        })
    };
    let preload = {
        let controller = controller.clone();
        debounce(scheduler.clone(), PRELOAD_DEBOUNCE_MS, move |()| {
            lazy_load::preload_nearby(&controller.sections(), controller.current_section())
        })
    };
    listeners.extend(
        Listener::new(container, "scroll", move |_: Event| {
            on_scroll.call(());
            preload.call(());
        })
        .ok(),
    );

    let on_resize = {
        let controller = controller.clone();
        let container = container.clone();
        debounce(scheduler.clone(), RESIZE_DEBOUNCE_MS, move |()| {
            let (width, height) = dom::viewport_size();
            controller.set_viewport_height(height);
            controller.set_sections(SectionMap::discover(&container));
            controller.update_active_section();
            menu.dispatch(MenuAction::Resize(width));
            if width > PARALLAX_BREAKPOINT_PX && !environment.mobile {
                parallax::reset();
            }
        })
    };
    listeners.extend(Listener::on_window("resize", move |_: Event| on_resize.call(())));

    listeners
}

fn on_page_loaded(controller: &PageController) {
    info!("Page fully loaded");
    if let Some(body) = dom::document().and_then(|doc| doc.body()) {
        dom::log_failure("mark page loaded", body.class_list().add_1("loaded"));
    }
    lazy_load::load_remaining();
    let controller = controller.clone();
    Timeout::new(LOAD_SETTLE_MS, move || {
        controller.update_active_section();
    })
    .forget();
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let controller = (*use_state(|| PageController::new(BrowserScheduler::new()))).clone();
    let scheduler = (*use_state(BrowserScheduler::new)).clone();
    let section_views = (*use_state(|| {
        SectionViews::new(BrowserScheduler::new(), analytics::track_section_view)
    }))
    .clone();
    let environment = *use_state(Environment::detect);
    let snapshot = use_state(NavSnapshot::default);
    let section_ids = use_state(Vec::<String>::new);
    let menu = use_reducer(MenuState::default);
    let faq_open = use_state(|| None::<usize>);
    let preset = use_state(|| None::<RolePreset>);
    let preset_requests = use_mut_ref(|| 0u32);
    let container_ref = use_node_ref();
    let notifier = use_notifier();

    let navigate = {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |index: usize| {
            let Some(top) = controller.scroll_to_section(index) else {
                return;
            };
            if let Some(container) = container_ref.cast::<Element>() {
                smooth_scroll(&container, top);
            }
        })
    };

    let go_to = {
        let controller = controller.clone();
        let navigate = navigate.clone();
        Callback::from(move |id: &'static str| match controller.sections().index_of(id) {
            Some(index) => navigate.emit(index),
            None => debug!("Section #{} not found, skipping navigation", id),
        })
    };

    let open_partner_form = {
        let go_to = go_to.clone();
        let preset = preset.setter();
        let preset_requests = preset_requests.clone();
        Callback::from(move |()| {
            go_to.emit("contacts");
            let preset = preset.clone();
            let preset_requests = preset_requests.clone();
            Timeout::new(CTA_FOLLOW_UP_MS, move || {
                let mut requests = preset_requests.borrow_mut();
                *requests += 1;
                preset.set(Some(RolePreset {
                    role: Role::Partner,
                    request: *requests,
                }));
            })
            .forget();
        })
    };

    {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let scheduler = scheduler.clone();
        let snapshot = snapshot.setter();
        let section_ids = section_ids.setter();
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                controller.subscribe(move |next| snapshot.set(next));
                let listeners = match container_ref.cast::<Element>() {
                    Some(container) => {
                        let sections = SectionMap::discover(&container);
                        info!("Sections discovered: {}", sections.len());
                        section_ids.set(sections.iter().map(|s| s.id.clone()).collect());
                        controller.set_viewport_height(dom::viewport_size().1);
                        controller.set_sections(sections);
                        bind_scrolling(&container, &controller, &scheduler, environment, menu)
                    }
                    None => {
                        debug!("Snap container not rendered");
                        Vec::new()
                    }
                };
                move || drop(listeners)
            },
            (),
        );
    }

    // Keyboard everywhere, swipes on touch devices only.
    {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let navigate = navigate.clone();
        let dismiss = {
            let menu = menu.dispatcher();
            let faq_open = faq_open.setter();
            Callback::from(move |()| {
                menu.dispatch(MenuAction::Close);
                faq_open.set(None);
            })
        };
        use_effect_with_deps(
            move |_| {
                let mut listeners: Vec<Listener> =
                    keyboard::listen(controller.clone(), navigate.clone(), dismiss)
                        .into_iter()
                        .collect();
                if environment.mobile {
                    if let Some(container) = container_ref.cast::<Element>() {
                        listeners.extend(touch::listen(&container, controller, navigate));
                    }
                }
                move || drop(listeners)
            },
            (),
        );
    }

    {
        let container_ref = container_ref.clone();
        let scheduler = scheduler.clone();
        use_effect_with_deps(
            move |_| {
                let parallax = if environment.parallax_enabled() {
                    container_ref
                        .cast::<Element>()
                        .map(|container| Parallax::install(&container, &scheduler))
                } else {
                    None
                };
                let reveal = if environment.reduced_motion {
                    None
                } else {
                    reveal::observe()
                };
                let lazy = lazy_load::observe();
                lazy_load::preload_critical_images();
                move || {
                    drop(parallax);
                    drop(reveal);
                    drop(lazy);
                }
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        let notifier = notifier.clone();
        let navigate = navigate.clone();
        let open_partner_form = open_partner_form.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = connectivity::listen(notifier.clone());
                listeners.extend(page_visibility::listen());
                let complete = dom::document()
                    .map(|doc| doc.ready_state() == "complete")
                    .unwrap_or(false);
                if complete {
                    on_page_loaded(&controller);
                } else {
                    let controller = controller.clone();
                    listeners.extend(Listener::on_window("load", move |_: Event| {
                        on_page_loaded(&controller)
                    }));
                }
                let debug_handle = DebugHandle::expose(DebugTargets {
                    controller,
                    navigate,
                    notifier,
                    open_partner_form,
                });
                move || {
                    drop(listeners);
                    drop(debug_handle);
                }
            },
            (),
        );
    }

    // The open menu freezes the page and pins the header.
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |open| {
                let open = *open;
                if open {
                    dom::lock_body_scroll();
                    controller.reveal();
                }
                move || {
                    if open {
                        dom::unlock_body_scroll();
                    }
                }
            },
            menu.open,
        );
    }

    use_effect_with_deps(
        move |(active, ids)| {
            if let Some(id) = ids.get(*active) {
                section_views.record(id);
            }
            || ()
        },
        (snapshot.active_section, (*section_ids).clone()),
    );

    let cta = |button: &'static str, section: &'static str, action: Callback<()>| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            analytics::track_button_click(button, section);
            action.emit(());
        })
    };
    let to_section = |id: &'static str| {
        let go_to = go_to.clone();
        Callback::from(move |()| go_to.emit(id))
    };
    let download_presentation = {
        let go_to = go_to.clone();
        let notifier = notifier.clone();
        Callback::from(move |()| {
            notifier.info("Презентация будет отправлена после заполнения формы");
            let go_to = go_to.clone();
            Timeout::new(CTA_FOLLOW_UP_MS, move || go_to.emit("contacts")).forget();
        })
    };

    let on_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |action: MenuAction| menu.dispatch(action))
    };
    let on_faq_change = {
        let faq_open = faq_open.setter();
        Callback::from(move |open: Option<usize>| faq_open.set(open))
    };

    html! {
        <>
            <Preloader />
            <Header
                snapshot={*snapshot}
                menu_open={menu.open}
                {on_menu}
                on_navigate={go_to.clone()}
            />
            <ScrollDots
                section_ids={(*section_ids).clone()}
                active={snapshot.active_section}
                on_select={navigate.clone()}
            />
            <main class="snap-container" ref={container_ref}>
                <section id="hero" class="hero">
                    <div class="section-bg" data-bg="/assets/hero-bg.jpg"></div>
                    <HeroVideo />
                    <div class="hero-content">
                        <h1 class="hero-title">{"EMIL PRODUCTION"}</h1>
                        <p class="hero-subtitle">
                            {"Музыкальный лейбл нового поколения: от первой демки до больших сцен"}
                        </p>
                        <div class="hero-buttons">
                            <button
                                class="btn btn-primary"
                                onclick={cta("hero_join", "hero", to_section("contacts"))}
                            >
                                {"Стать артистом"}
                            </button>
                            <button
                                class="btn btn-secondary"
                                onclick={cta("hero_invest", "hero", to_section("investors"))}
                            >
                                {"Инвесторам"}
                            </button>
                        </div>
                    </div>
                    <div class="scroll-indicator running-animation"></div>
                </section>

                <section id="about" class="about">
                    <div class="section-bg" data-bg="/assets/about-bg.webp"></div>
                    <div class="container">
                        <h2 class="section-title">{"О нас"}</h2>
                        <p class="section-text">
                            {"Мы продюсируем, записываем и продвигаем независимых артистов. \
                              Собственная студия, команда звукорежиссеров и маркетологов \
                              работают на каждый релиз."}
                        </p>
                    </div>
                </section>

                <section id="target-audience" class="target-audience">
                    <div class="section-bg" data-bg="/assets/target-bg.jpeg"></div>
                    <div class="container">
                        <h2 class="section-title">{"Для кого"}</h2>
                        <div class="cards-grid">
                            <div class="audience-card">
                                <h3>{"Начинающие артисты"}</h3>
                                <p>{"У вас есть треки, но нет команды и бюджета на продвижение."}</p>
                            </div>
                            <div class="audience-card">
                                <h3>{"Авторы и битмейкеры"}</h3>
                                <p>{"Ищете площадку для своих работ и сильных исполнителей."}</p>
                            </div>
                            <div class="audience-card">
                                <h3>{"Состоявшиеся музыканты"}</h3>
                                <p>{"Хотите выйти на новый уровень без потери творческой свободы."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="what-we-offer" class="what-we-offer">
                    <div class="container">
                        <h2 class="section-title">{"Что мы предлагаем"}</h2>
                        <div class="cards-grid">
                            <div class="offer-item">
                                <h3>{"Запись и сведение"}</h3>
                                <p>{"Студия полного цикла и опытные звукорежиссеры."}</p>
                            </div>
                            <div class="offer-item">
                                <h3>{"Дистрибуция"}</h3>
                                <p>{"Релизы на всех стриминговых площадках."}</p>
                            </div>
                            <div class="offer-item">
                                <h3>{"Продвижение"}</h3>
                                <p>{"Плейлисты, клипы, соцсети и пресса."}</p>
                            </div>
                            <div class="offer-item">
                                <h3>{"Концерты"}</h3>
                                <p>{"Организация выступлений и туров."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="how-to-join" class="how-to-join">
                    <div class="container">
                        <h2 class="section-title">{"Как попасть на лейбл"}</h2>
                        <div class="steps">
                            <div class="step-item">
                                <span class="step-number">{"1"}</span>
                                <p>{"Оставьте заявку и ссылку на свои треки."}</p>
                            </div>
                            <div class="step-item">
                                <span class="step-number">{"2"}</span>
                                <p>{"Мы слушаем материал и отвечаем в течение пяти дней."}</p>
                            </div>
                            <div class="step-item">
                                <span class="step-number">{"3"}</span>
                                <p>{"Встречаемся, обсуждаем план релизов и подписываем договор."}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="investors" class="investors">
                    <div class="container">
                        <h2 class="section-title">{"Инвесторам"}</h2>
                        <div class="cards-grid">
                            <div class="advantage-item">
                                <h3>{"Растущий рынок"}</h3>
                                <p>{"Доходы от стриминга растут из года в год."}</p>
                            </div>
                            <div class="advantage-item">
                                <h3>{"Прозрачность"}</h3>
                                <p>{"Ежеквартальная отчетность по каждому релизу."}</p>
                            </div>
                            <div class="advantage-item">
                                <h3>{"Каталог"}</h3>
                                <p>{"Права на записи остаются активом лейбла."}</p>
                            </div>
                        </div>
                        <div class="investors-buttons">
                            <button
                                class="btn btn-primary"
                                onclick={cta("download_presentation", "investors", download_presentation)}
                            >
                                {"Скачать презентацию"}
                            </button>
                            <button
                                class="btn btn-secondary"
                                onclick={cta("investor_contact", "investors", to_section("contacts"))}
                            >
                                {"Связаться"}
                            </button>
                        </div>
                    </div>
                </section>

                <section id="team" class="team">
                    <div class="container">
                        <h2 class="section-title">{"Команда"}</h2>
                        <div class="cards-grid">
                            <div class="team-member">
                                <img data-src="/assets/team-emil.webp" alt="Эмиль" />
                                <h3>{"Эмиль"}</h3>
                                <p>{"Основатель и продюсер"}</p>
                            </div>
                            <div class="team-member">
                                <img data-src="/assets/team-sound.webp" alt="Звукорежиссер" />
                                <h3>{"Артур"}</h3>
                                <p>{"Звукорежиссер"}</p>
                            </div>
                            <div class="team-member">
                                <img data-src="/assets/team-marketing.webp" alt="Маркетолог" />
                                <h3>{"Алина"}</h3>
                                <p>{"Маркетинг и PR"}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="partners" class="partners">
                    <div class="container">
                        <h2 class="section-title">{"Партнерам"}</h2>
                        <p class="section-text">
                            {"Студии, площадки, бренды и медиа: давайте делать проекты вместе."}
                        </p>
                        <button
                            class="btn btn-primary"
                            onclick={cta("partner_form", "partners", open_partner_form)}
                        >
                            {"Стать партнером"}
                        </button>
                    </div>
                </section>

                <section id="contacts" class="contacts">
                    <div class="container">
                        <h2 class="section-title">{"Оставить заявку"}</h2>
                        <ContactFormView preset={*preset} />
                    </div>
                </section>

                <section id="faq" class="faq">
                    <div class="container">
                        <h2 class="section-title">{"Вопросы и ответы"}</h2>
                        <Faq open={*faq_open} on_change={on_faq_change} />
                    </div>
                </section>
            </main>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #fff;
                    font-family: 'Inter', sans-serif;
                }

                .snap-container {
                    position: relative;
                    height: 100vh;
                    overflow-y: scroll;
                    scroll-snap-type: y mandatory;
                }

                .snap-container > section {
                    position: relative;
                    min-height: 100vh;
                    scroll-snap-align: start;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .section-bg {
                    position: absolute;
                    inset: -20px;
                    background-size: cover;
                    background-position: center;
                    transform: translate(var(--mouse-x, 0px), var(--mouse-y, 0px));
                    opacity: 0.35;
                    z-index: 0;
                }

                .container {
                    position: relative;
                    z-index: 1;
                    max-width: 1100px;
                    padding: 6rem 2rem;
                    width: 100%;
                }

                .section-title {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #c9a86a);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-text {
                    color: #bbb;
                    font-size: 1.2rem;
                    line-height: 1.7;
                    max-width: 700px;
                }

                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .header.hidden {
                    transform: translateY(-100%);
                }

                .header.scrolled {
                    background: rgba(10, 10, 10, 0.9);
                    backdrop-filter: blur(10px);
                }

                .header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 2rem;
                }

                .logo {
                    color: #fff;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }

                .desktop-nav {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #ddd;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #c9a86a;
                }

                .burger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                    transition: transform 0.3s ease;
                }

                .mobile-nav {
                    position: fixed;
                    inset: 0;
                    z-index: 999;
                    background: rgba(0, 0, 0, 0.9);
                    display: none;
                    align-items: center;
                    justify-content: center;
                }

                .mobile-nav.active {
                    display: flex;
                }

                .mobile-nav-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    font-size: 1.5rem;
                }

                .scroll-dots {
                    position: fixed;
                    right: 1.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 900;
                }

                .scroll-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: 1px solid #fff;
                    background: transparent;
                    cursor: pointer;
                    padding: 0;
                }

                .scroll-dot.active {
                    background: #c9a86a;
                    border-color: #c9a86a;
                }

                .video-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .video-background video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: opacity 1s ease;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 0 1rem;
                }

                .hero-title {
                    font-size: 4rem;
                    letter-spacing: 0.15em;
                    margin: 0 0 1rem;
                }

                .hero-subtitle {
                    color: #ccc;
                    font-size: 1.3rem;
                    margin-bottom: 2rem;
                }

                .hero-buttons, .investors-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    width: 2px;
                    height: 40px;
                    background: #fff;
                    animation: scroll-hint 2s infinite;
                }

                @keyframes scroll-hint {
                    0% { opacity: 0; transform: translateY(-10px); }
                    50% { opacity: 1; }
                    100% { opacity: 0; transform: translateY(10px); }
                }

                .btn {
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    border: 1px solid #c9a86a;
                    transition: all 0.3s ease;
                }

                .btn-primary {
                    background: #c9a86a;
                    color: #0a0a0a;
                }

                .btn-primary.success {
                    background: #4CAF50;
                    border-color: #4CAF50;
                    color: #fff;
                }

                .btn-secondary {
                    background: transparent;
                    color: #c9a86a;
                }

                .btn:disabled {
                    opacity: 0.7;
                    cursor: default;
                }

                .cards-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .audience-card, .offer-item, .advantage-item, .team-member, .step-item {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(201, 168, 106, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .team-member img {
                    width: 100%;
                    aspect-ratio: 1;
                    object-fit: cover;
                    border-radius: 12px;
                }

                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .step-number {
                    font-size: 2rem;
                    color: #c9a86a;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 600px;
                }

                .contact-form input[type="text"], .contact-form select, .contact-form textarea {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 8px;
                    border: 1px solid #333;
                    background: #141414;
                    color: #fff;
                    font-size: 1rem;
                    box-sizing: border-box;
                }

                .contact-form select {
                    color: #777;
                }

                .contact-form select.has-value {
                    color: #fff;
                }

                .checkbox-label {
                    display: flex;
                    gap: 0.5rem;
                    color: #999;
                }

                .checkbox-label a {
                    color: #c9a86a;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: rgba(30, 30, 30, 0.7);
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    padding: 1.25rem;
                    cursor: pointer;
                    border-radius: 12px;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: #aaa;
                    padding: 0 1.25rem;
                }

                .faq-item.active .faq-answer {
                    max-height: 300px;
                }

                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 10000;
                    background: #0a0a0a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: opacity 0.5s ease;
                }

                .preloader.hidden {
                    opacity: 0;
                    pointer-events: none;
                }

                .preloader-logo {
                    font-size: 2rem;
                    letter-spacing: 0.2em;
                    margin-bottom: 1.5rem;
                }

                .progress-bar {
                    width: 240px;
                    height: 2px;
                    background: #222;
                }

                .progress-fill {
                    height: 100%;
                    background: #c9a86a;
                    transition: width 0.2s ease;
                }

                .progress-text {
                    margin-top: 0.75rem;
                    color: #888;
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .desktop-nav {
                        display: none;
                    }

                    .burger {
                        display: block;
                    }

                    .hero-title {
                        font-size: 2.5rem;
                    }

                    .scroll-dots {
                        display: none;
                    }

                    .container {
                        padding: 5rem 1.25rem;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .scroll-indicator {
                        animation: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
