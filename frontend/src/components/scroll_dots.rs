use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollDotsProps {
    pub section_ids: Vec<String>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

/// Side indicator with one dot per section.
#[function_component(ScrollDots)]
pub fn scroll_dots(props: &ScrollDotsProps) -> Html {
    html! {
        <div class="scroll-dots">
            { for props.section_ids.iter().enumerate().map(|(index, id)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(index);
                    })
                };
                html! {
                    <button
                        key={id.clone()}
                        class={classes!("scroll-dot", (index == props.active).then(|| "active"))}
                        aria-label={format!("Перейти к разделу {}", id)}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}
