use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::{LAST_SUBMISSION_KEY, ROLE_COOKIE};
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Политика конфиденциальности"}</h1>

                <section>
                    <h2>{"1. Какие данные мы получаем"}</h2>
                    <p>{"Через форму заявки вы передаете нам:"}</p>
                    <ul>
                        <li>{"имя;"}</li>
                        <li>{"Telegram или номер телефона для обратной связи;"}</li>
                        <li>{"роль (артист, инвестор, партнер или другое);"}</li>
                        <li>{"текст сообщения, если вы его оставили."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Для чего"}</h2>
                    <p>{"Данные используются только для ответа на вашу заявку и не передаются третьим лицам."}</p>
                </section>

                <section>
                    <h2>{"3. Что хранится в браузере"}</h2>
                    <ul>
                        <li>{format!("cookie «{}» на 30 дней, чтобы запомнить выбранную роль;", ROLE_COOKIE)}</li>
                        <li>{format!("запись «{}» в localStorage с последней отправленной заявкой.", LAST_SUBMISSION_KEY)}</li>
                    </ul>
                    <p>{"Вы можете удалить их в настройках браузера в любой момент."}</p>
                </section>

                <section>
                    <h2>{"4. Аналитика"}</h2>
                    <p>{"Если на странице подключены Google Analytics или Яндекс Метрика, \
                        они получают обезличенные события: просмотр раздела, нажатие кнопки, отправку формы."}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Вернуться на главную"}</Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #0a0a0a;
                    padding: 4rem 2rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(201, 168, 106, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    backdrop-filter: blur(10px);
                }

                .legal-content h1 {
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }

                .legal-content h2 {
                    color: #c9a86a;
                    font-size: 1.3rem;
                }

                .legal-content p, .legal-content li {
                    color: #999;
                    line-height: 1.6;
                }

                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }

                .legal-links a {
                    color: #c9a86a;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
