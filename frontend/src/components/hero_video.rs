use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::errors::{describe_js, LandingError};
use crate::utils::dom::{log_failure, VisibilityObserver};

pub const HERO_VIDEO_SELECTOR: &str = ".video-background video";
const FALLBACK_BACKGROUND: &str = "background: linear-gradient(45deg, #111, #222);";

/// Starts playback; a rejected promise (autoplay policy, missing media) is
/// only logged.
pub fn play(video: &HtmlVideoElement, context: &'static str) {
    let report = move |e: wasm_bindgen::JsValue| {
        warn!("{}: {}", context, LandingError::Media(describe_js(&e)));
    };
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                report(e);
            }
        }),
        Err(e) => report(e),
    }
}

/// Moves `data-src` onto the video's `<source>` children, once.
fn load_sources(element: &Element) {
    let Some(video) = element.dyn_ref::<HtmlVideoElement>() else {
        return;
    };
    let children = video.children();
    if !video.src().is_empty() || children.length() == 0 {
        return;
    }
    for index in 0..children.length() {
        let Some(source) = children.item(index) else {
            continue;
        };
        if let Some(src) = source.get_attribute("data-src") {
            log_failure("attach video source", source.set_attribute("src", &src));
        }
    }
    debug!("Video sources attached");
    video.load();
}

#[function_component(HeroVideo)]
pub fn hero_video() -> Html {
    let video_ref = use_node_ref();
    let ready = use_state(|| false);
    let failed = use_state(|| false);

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let observer = video_ref.cast::<HtmlVideoElement>().and_then(|video| {
                    video.set_loop(true);
                    let observer = VisibilityObserver::once(0.1, "0px", load_sources)
                        .map_err(|e| warn!("Video lazy loading unavailable: {}", e))
                        .ok()?;
                    observer.observe(&video);
                    Some(observer)
                });
                move || drop(observer)
            },
            (),
        );
    }

    let onloadstart = Callback::from(|_: ProgressEvent| debug!("Video loading started"));
    let oncanplay = {
        let ready = ready.clone();
        Callback::from(move |_: Event| {
            debug!("Video can start playing");
            ready.set(true);
        })
    };
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            warn!("Video loading error, falling back to gradient");
            failed.set(true);
        })
    };
    let onclick = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if video.paused() {
                    play(&video, "Video play failed");
                }
            }
        })
    };

    html! {
        <div class="video-background" style={failed.then(|| FALLBACK_BACKGROUND)}>
            <video
                ref={video_ref}
                autoplay=true
                muted=true
                playsinline=true
                style={if *ready { "opacity: 1;" } else { "opacity: 0;" }}
                {onloadstart}
                {oncanplay}
                {onerror}
                {onclick}
            >
                <source data-src="/assets/hero.webm" type="video/webm" />
                <source data-src="/assets/hero.mp4" type="video/mp4" />
            </video>
        </div>
    }
}
