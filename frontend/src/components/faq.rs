use web_sys::MouseEvent;
use yew::prelude::*;

pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Кто может стать артистом лейбла?",
        "Любой исполнитель или автор с готовым материалом. Мы слушаем каждую заявку и отвечаем в течение пяти дней.",
    ),
    (
        "Сколько стоит сотрудничество?",
        "Для артистов участие бесплатное: мы зарабатываем вместе с вами на доходах от релизов.",
    ),
    (
        "Какие права остаются у артиста?",
        "Авторские права остаются у вас. Условия по мастер-записям обсуждаются индивидуально и фиксируются в договоре.",
    ),
    (
        "Как инвестору получить презентацию?",
        "Оставьте заявку в форме ниже с ролью «Инвестор», и мы отправим презентацию на ваш email.",
    ),
];

/// Next open item after a click on `clicked`: one answer open at a time,
/// clicking the open one closes it.
pub fn toggle_item(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub open: Option<usize>,
    pub on_change: Callback<Option<usize>>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <div class="faq-list">
            { for FAQ_ITEMS.iter().enumerate().map(|(index, &(question, answer))| {
                let on_toggle = {
                    let on_change = props.on_change.clone();
                    let open = props.open;
                    Callback::from(move |_: ()| on_change.emit(toggle_item(open, index)))
                };
                html! {
                    <FaqItem
                        {question}
                        {answer}
                        open={props.open == Some(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        assert_eq!(toggle_item(None, 2), Some(2));
        assert_eq!(toggle_item(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_item(Some(1), 1), None);
    }
}
