use crate::i18n::t;
use crate::paths::asset_path;
use yew::prelude::*;

const CONTACT_EMAIL: &str = "info@digitalstore.com";
const CONTACT_PHONE: &str = "+966 50 123 4567";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="store-footer" role="contentinfo">
            <div class="footer-columns">
                <section id="about" class="footer-column">
                    <h4>{ t("footer.about_title") }</h4>
                    <p>{ t("footer.about") }</p>
                </section>
                <section class="footer-column">
                    <h4>{ t("footer.links_title") }</h4>
                    <ul>
                        <li><a href={asset_path("")}>{ t("footer.links.home") }</a></li>
                        <li><a href="#main">{ t("footer.links.products") }</a></li>
                        <li><a href="#about">{ t("footer.links.about") }</a></li>
                        <li><a href="#contact">{ t("footer.links.contact") }</a></li>
                    </ul>
                </section>
                <section id="contact" class="footer-column">
                    <h4>{ t("footer.contact_title") }</h4>
                    <ul>
                        <li>{ "📧 " }<a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a></li>
                        <li dir="ltr">{ format!("📱 {CONTACT_PHONE}") }</li>
                        <li>{ format!("📍 {}", t("footer.location")) }</li>
                    </ul>
                </section>
            </div>
            <p class="footer-copy">{ t("footer.copyright") }</p>
        </footer>
    }
}
